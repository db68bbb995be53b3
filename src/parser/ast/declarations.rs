use smol_str::SmolStr;

use super::*;

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    first_child_method!(module_decl, ModuleDecl);
    children_method!(imports, ImportDecl);
    children_method!(paragraphs, Paragraph);

    /// Text after `#lang`, if the file starts with a language line
    pub fn language(&self) -> Option<SmolStr> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .take_while(|t| t.kind().is_trivia())
            .find(|t| t.kind() == SyntaxKind::LANG_DECL)
            .map(|t| SmolStr::new(t.text().trim_start_matches("#lang").trim()))
    }
}

// ============================================================================
// Paragraphs
// ============================================================================

/// Any top-level paragraph (and the constructs of a test suite)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Paragraph {
    Sig(SigDecl),
    Pred(PredDecl),
    Fun(FunDecl),
    Fact(FactDecl),
    Assert(AssertDecl),
    Cmd(CmdDecl),
    TestExpect(TestExpectDecl),
    TestSuite(TestSuiteDecl),
    Example(ExampleDecl),
    Property(PropertyDecl),
    QuantifiedProperty(QuantifiedPropertyDecl),
    Satisfiability(SatisfiabilityDecl),
    Consistency(ConsistencyDecl),
    Inst(InstDecl),
    Option(OptionDecl),
    SExpr(SExprDecl),
    Eval(EvalDecl),
}

impl AstNode for Paragraph {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::SIG_DECL
                | SyntaxKind::PRED_DECL
                | SyntaxKind::FUN_DECL
                | SyntaxKind::FACT_DECL
                | SyntaxKind::ASSERT_DECL
                | SyntaxKind::CMD_DECL
                | SyntaxKind::TEST_EXPECT_DECL
                | SyntaxKind::TEST_SUITE_DECL
                | SyntaxKind::EXAMPLE_DECL
                | SyntaxKind::PROPERTY_DECL
                | SyntaxKind::QUANTIFIED_PROPERTY_DECL
                | SyntaxKind::SATISFIABILITY_DECL
                | SyntaxKind::CONSISTENCY_DECL
                | SyntaxKind::INST_DECL
                | SyntaxKind::OPTION_DECL
                | SyntaxKind::SEXPR_DECL
                | SyntaxKind::EVAL_DECL
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SIG_DECL => Some(Self::Sig(SigDecl(node))),
            SyntaxKind::PRED_DECL => Some(Self::Pred(PredDecl(node))),
            SyntaxKind::FUN_DECL => Some(Self::Fun(FunDecl(node))),
            SyntaxKind::FACT_DECL => Some(Self::Fact(FactDecl(node))),
            SyntaxKind::ASSERT_DECL => Some(Self::Assert(AssertDecl(node))),
            SyntaxKind::CMD_DECL => Some(Self::Cmd(CmdDecl(node))),
            SyntaxKind::TEST_EXPECT_DECL => Some(Self::TestExpect(TestExpectDecl(node))),
            SyntaxKind::TEST_SUITE_DECL => Some(Self::TestSuite(TestSuiteDecl(node))),
            SyntaxKind::EXAMPLE_DECL => Some(Self::Example(ExampleDecl(node))),
            SyntaxKind::PROPERTY_DECL => Some(Self::Property(PropertyDecl(node))),
            SyntaxKind::QUANTIFIED_PROPERTY_DECL => {
                Some(Self::QuantifiedProperty(QuantifiedPropertyDecl(node)))
            }
            SyntaxKind::SATISFIABILITY_DECL => Some(Self::Satisfiability(SatisfiabilityDecl(node))),
            SyntaxKind::CONSISTENCY_DECL => Some(Self::Consistency(ConsistencyDecl(node))),
            SyntaxKind::INST_DECL => Some(Self::Inst(InstDecl(node))),
            SyntaxKind::OPTION_DECL => Some(Self::Option(OptionDecl(node))),
            SyntaxKind::SEXPR_DECL => Some(Self::SExpr(SExprDecl(node))),
            SyntaxKind::EVAL_DECL => Some(Self::Eval(EvalDecl(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Sig(n) => n.syntax(),
            Self::Pred(n) => n.syntax(),
            Self::Fun(n) => n.syntax(),
            Self::Fact(n) => n.syntax(),
            Self::Assert(n) => n.syntax(),
            Self::Cmd(n) => n.syntax(),
            Self::TestExpect(n) => n.syntax(),
            Self::TestSuite(n) => n.syntax(),
            Self::Example(n) => n.syntax(),
            Self::Property(n) => n.syntax(),
            Self::QuantifiedProperty(n) => n.syntax(),
            Self::Satisfiability(n) => n.syntax(),
            Self::Consistency(n) => n.syntax(),
            Self::Inst(n) => n.syntax(),
            Self::Option(n) => n.syntax(),
            Self::SExpr(n) => n.syntax(),
            Self::Eval(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Module header
// ============================================================================

ast_node!(ModuleDecl, MODULE_DECL);

impl ModuleDecl {
    first_child_method!(name, QualName);

    /// Parameters of `module m[A, B]`
    pub fn params(&self) -> Vec<SmolStr> {
        self.0
            .children()
            .find_map(NameList::cast)
            .map(|l| l.texts())
            .unwrap_or_default()
    }
}

ast_node!(ImportDecl, IMPORT_DECL);

impl ImportDecl {
    first_child_method!(target, QualName);
    first_child_method!(alias, Name);

    /// Quoted path of `open "lib/util.frg"`, quotes included
    pub fn file_path(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::FILE_PATH).map(|t| SmolStr::new(t.text()))
    }

    /// Arguments of `open util/ordering[State]`
    pub fn args(&self) -> Vec<QualName> {
        self.0
            .children()
            .find_map(QualNameList::cast)
            .map(|l| l.names().collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Signatures
// ============================================================================

ast_node!(SigDecl, SIG_DECL);

impl SigDecl {
    has_token_method!(is_abstract, ABSTRACT_KW, "abstract sig A {}");
    has_token_method!(is_var, VAR_KW, "var sig A {}");
    first_child_method!(name_list, NameList);
    first_child_method!(extension, SigExt);
    first_child_method!(field_list, FieldList);
    first_child_method!(block, Block);

    pub fn names(&self) -> Vec<SmolStr> {
        self.name_list().map(|l| l.texts()).unwrap_or_default()
    }

    pub fn mult(&self) -> Option<Multiplicity> {
        self.0.children().find_map(Mult::cast).and_then(|m| m.kind())
    }

    pub fn fields(&self) -> Vec<FieldDecl> {
        self.field_list()
            .map(|l| l.fields().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigExtKind {
    /// `extends Parent`
    Extends,
    /// `in A + B`
    In,
}

ast_node!(SigExt, SIG_EXT);

impl SigExt {
    token_to_enum_method!(kind, SigExtKind, [
        EXTENDS_KW => Extends,
        IN_KW => In,
    ]);

    children_method!(parents, QualName);
}

ast_node!(FieldList, FIELD_LIST);

impl FieldList {
    children_method!(fields, FieldDecl);
}

ast_node!(FieldDecl, FIELD_DECL);

impl FieldDecl {
    has_token_method!(is_var, VAR_KW, "var f: set A");
    first_child_method!(name_list, NameList);
    first_child_method!(ty, Expr);

    pub fn names(&self) -> Vec<SmolStr> {
        self.name_list().map(|l| l.texts()).unwrap_or_default()
    }

    pub fn mult(&self) -> Option<Multiplicity> {
        self.0.children().find_map(Mult::cast).and_then(|m| m.kind())
    }
}

// ============================================================================
// Predicates and functions
// ============================================================================

ast_node!(PredDecl, PRED_DECL);

impl PredDecl {
    first_child_method!(name, Name);
    first_child_method!(params, ParaDecls);
    first_child_method!(body, Block);

    /// `pred wheat p { ... }`; the marker is kept opaque
    pub fn is_wheat(&self) -> bool {
        self.0.children().any(|n| n.kind() == SyntaxKind::PRED_TYPE)
    }

    /// `A` in `pred A.p { ... }`
    pub fn receiver(&self) -> Option<QualName> {
        receiver(&self.0)
    }
}

ast_node!(FunDecl, FUN_DECL);

impl FunDecl {
    first_child_method!(name, Name);
    first_child_method!(params, ParaDecls);
    first_child_method!(body, Block);

    pub fn receiver(&self) -> Option<QualName> {
        receiver(&self.0)
    }

    pub fn result_mult(&self) -> Option<Multiplicity> {
        self.0.children().find_map(Mult::cast).and_then(|m| m.kind())
    }

    /// Declared result type; the body block is not part of it
    pub fn result(&self) -> Option<Expr> {
        self.0
            .children()
            .filter(|n| n.kind() != SyntaxKind::BLOCK)
            .find_map(Expr::cast)
    }
}

fn receiver(node: &SyntaxNode) -> Option<QualName> {
    node.children()
        .find(|n| n.kind() == SyntaxKind::RECEIVER)
        .and_then(|r| r.children().find_map(QualName::cast))
}

ast_node!(ParaDecls, PARA_DECLS);

impl ParaDecls {
    children_method!(decls, ParaDecl);

    /// `pred p(x: A)` rather than `pred p[x: A]`
    pub fn is_parenthesized(&self) -> bool {
        has_token(&self.0, SyntaxKind::L_PAREN)
    }
}

ast_node!(ParaDecl, PARA_DECL);

impl ParaDecl {
    has_token_method!(is_disj, DISJ_KW);
    first_child_method!(name_list, NameList);
    first_child_method!(ty, Expr);

    pub fn names(&self) -> Vec<SmolStr> {
        self.name_list().map(|l| l.texts()).unwrap_or_default()
    }

    pub fn mult(&self) -> Option<Multiplicity> {
        self.0.children().find_map(Mult::cast).and_then(|m| m.kind())
    }
}

ast_node!(FactDecl, FACT_DECL);

impl FactDecl {
    first_child_method!(name, Name);
    first_child_method!(body, Block);
}

ast_node!(AssertDecl, ASSERT_DECL);

impl AssertDecl {
    first_child_method!(name, Name);
    first_child_method!(body, Block);
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Run,
    Check,
}

ast_node!(CmdDecl, CMD_DECL);

impl CmdDecl {
    token_to_enum_method!(kind, CommandKind, [
        RUN_KW => Run,
        CHECK_KW => Check,
    ]);

    first_child_method!(name, Name, "Label of `name: run ...`");
    first_child_method!(target, QualName);
    first_child_method!(block, Block);
    first_child_method!(scope, Scope);
    first_child_method!(bounds, Bounds);
}

ast_node!(Scope, SCOPE);

impl Scope {
    children_method!(typescopes, Typescope);

    /// The `5` of `for 5 but 3 Node`
    pub fn default_scope(&self) -> Option<i64> {
        number_value(&self.0)
    }
}

ast_node!(Typescope, TYPESCOPE);

impl Typescope {
    has_token_method!(is_exact, EXACTLY_KW, "for exactly 3 Node");
    first_child_method!(sig, QualName);

    pub fn count(&self) -> Option<i64> {
        number_value(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

/// Expected outcome of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestResult {
    Sat,
    Unsat,
    Theorem,
    ForgeError,
}

ast_node!(TestDecl, TEST_DECL);

impl TestDecl {
    first_child_method!(name, Name);
    first_child_method!(target, QualName);
    first_child_method!(block, Block);
    first_child_method!(scope, Scope);
    first_child_method!(bounds, Bounds);

    token_to_enum_method!(expected, TestResult, [
        SAT_KW => Sat,
        UNSAT_KW => Unsat,
        THEOREM_KW => Theorem,
        FORGE_ERROR_KW => ForgeError,
    ]);

    /// Expected error message file of `is forge_error "msg"`
    pub fn error_path(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::FILE_PATH).map(|t| SmolStr::new(t.text()))
    }
}

ast_node!(TestExpectDecl, TEST_EXPECT_DECL);

impl TestExpectDecl {
    first_child_method!(name, Name);

    pub fn tests(&self) -> Vec<TestDecl> {
        test_block_children(&self.0)
    }
}

ast_node!(TestSuiteDecl, TEST_SUITE_DECL);

impl TestSuiteDecl {
    first_child_method!(pred, Name, "Predicate under test");

    pub fn constructs(&self) -> Vec<Paragraph> {
        test_block_children(&self.0)
    }
}

fn test_block_children<T: AstNode>(node: &SyntaxNode) -> Vec<T> {
    node.children()
        .find(|n| n.kind() == SyntaxKind::TEST_BLOCK)
        .map(|block| block.children().filter_map(T::cast).collect())
        .unwrap_or_default()
}

ast_node!(ExampleDecl, EXAMPLE_DECL);

impl ExampleDecl {
    first_child_method!(name, Name);
    first_child_method!(expr, Expr);
    first_child_method!(bounds, Bounds);
}

// ============================================================================
// Property assertions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Sufficient,
    Necessary,
}

ast_node!(PropertyDecl, PROPERTY_DECL);

impl PropertyDecl {
    first_child_method!(expr, Expr);
    first_child_method!(pred, Name, "Predicate the property is checked against");
    first_child_method!(scope, Scope);
    first_child_method!(bounds, Bounds);

    token_to_enum_method!(kind, PropertyKind, [
        SUFFICIENT_KW => Sufficient,
        NECESSARY_KW => Necessary,
    ]);
}

ast_node!(QuantifiedPropertyDecl, QUANTIFIED_PROPERTY_DECL);

impl QuantifiedPropertyDecl {
    children_method!(decls, QuantDecl);
    first_child_method!(body, Expr);
    first_child_method!(pred, Name);
    first_child_method!(scope, Scope);
    first_child_method!(bounds, Bounds);

    token_to_enum_method!(kind, PropertyKind, [
        SUFFICIENT_KW => Sufficient,
        NECESSARY_KW => Necessary,
    ]);

    pub fn is_disj(&self) -> bool {
        self.decls().next().is_some_and(|d| d.is_disj())
    }

    /// Arguments passed to the predicate: `for p[x, y]`
    pub fn args(&self) -> Vec<Expr> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::EXPR_LIST)
            .map(|list| list.children().filter_map(Expr::cast).collect())
            .unwrap_or_default()
    }
}

ast_node!(SatisfiabilityDecl, SATISFIABILITY_DECL);

impl SatisfiabilityDecl {
    first_child_method!(expr, Expr);
    first_child_method!(scope, Scope);
    first_child_method!(bounds, Bounds);

    token_to_enum_method!(expected, TestResult, [
        SAT_KW => Sat,
        UNSAT_KW => Unsat,
        THEOREM_KW => Theorem,
        FORGE_ERROR_KW => ForgeError,
    ]);
}

ast_node!(ConsistencyDecl, CONSISTENCY_DECL);

impl ConsistencyDecl {
    has_token_method!(is_inconsistent, INCONSISTENT_KW);
    first_child_method!(expr, Expr);
    first_child_method!(pred, Name);
    first_child_method!(scope, Scope);
    first_child_method!(bounds, Bounds);
}

// ============================================================================
// Instances, options, evaluation
// ============================================================================

ast_node!(InstDecl, INST_DECL);

impl InstDecl {
    first_child_method!(name, Name);
    first_child_method!(bounds, Bounds);
    first_child_method!(scope, Scope);
}

ast_node!(OptionDecl, OPTION_DECL);

impl OptionDecl {
    first_child_method!(key, QualName);

    /// Value as written: a name, a quoted path or a number
    pub fn value(&self) -> Option<String> {
        if let Some(name) = self.0.children().filter_map(QualName::cast).nth(1) {
            return Some(name.text());
        }
        if let Some(path) = find_token(&self.0, SyntaxKind::FILE_PATH) {
            return Some(path.text().to_string());
        }
        number_value(&self.0).map(|n| n.to_string())
    }
}

ast_node!(EvalDecl, EVAL_DECL);

impl EvalDecl {
    first_child_method!(expr, Expr);
}

ast_node!(SExprDecl, SEXPR_DECL);

impl SExprDecl {
    pub fn text(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::SEXPR).map(|t| SmolStr::new(t.text()))
    }
}
