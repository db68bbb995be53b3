use smol_str::SmolStr;

use super::*;

// ============================================================================
// Expression
// ============================================================================

/// Any expression or formula
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Quant(QuantExpr),
    Let(LetExpr),
    BoxJoin(BoxJoinExpr),
    Prime(PrimeExpr),
    Const(ConstExpr),
    NameRef(NameRef),
    AtName(AtNameExpr),
    Atom(AtomExpr),
    This(ThisExpr),
    Comprehension(ComprehensionExpr),
    Paren(ParenExpr),
    Block(Block),
    SExpr(SExprExpr),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        BinaryExpr::can_cast(kind)
            || UnaryExpr::can_cast(kind)
            || LetExpr::can_cast(kind)
            || matches!(
                kind,
                SyntaxKind::QUANT_EXPR
                    | SyntaxKind::BOX_JOIN_EXPR
                    | SyntaxKind::PRIME_EXPR
                    | SyntaxKind::CONST_EXPR
                    | SyntaxKind::NAME_REF
                    | SyntaxKind::AT_NAME_EXPR
                    | SyntaxKind::ATOM_EXPR
                    | SyntaxKind::THIS_EXPR
                    | SyntaxKind::COMPREHENSION_EXPR
                    | SyntaxKind::PAREN_EXPR
                    | SyntaxKind::BLOCK
                    | SyntaxKind::SEXPR_EXPR
            )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        let kind = node.kind();
        if BinaryExpr::can_cast(kind) {
            return Some(Self::Binary(BinaryExpr(node)));
        }
        if UnaryExpr::can_cast(kind) {
            return Some(Self::Unary(UnaryExpr(node)));
        }
        if LetExpr::can_cast(kind) {
            return Some(Self::Let(LetExpr(node)));
        }
        match kind {
            SyntaxKind::QUANT_EXPR => Some(Self::Quant(QuantExpr(node))),
            SyntaxKind::BOX_JOIN_EXPR => Some(Self::BoxJoin(BoxJoinExpr(node))),
            SyntaxKind::PRIME_EXPR => Some(Self::Prime(PrimeExpr(node))),
            SyntaxKind::CONST_EXPR => Some(Self::Const(ConstExpr(node))),
            SyntaxKind::NAME_REF => Some(Self::NameRef(NameRef(node))),
            SyntaxKind::AT_NAME_EXPR => Some(Self::AtName(AtNameExpr(node))),
            SyntaxKind::ATOM_EXPR => Some(Self::Atom(AtomExpr(node))),
            SyntaxKind::THIS_EXPR => Some(Self::This(ThisExpr(node))),
            SyntaxKind::COMPREHENSION_EXPR => Some(Self::Comprehension(ComprehensionExpr(node))),
            SyntaxKind::PAREN_EXPR => Some(Self::Paren(ParenExpr(node))),
            SyntaxKind::BLOCK => Some(Self::Block(Block(node))),
            SyntaxKind::SEXPR_EXPR => Some(Self::SExpr(SExprExpr(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Binary(n) => n.syntax(),
            Self::Unary(n) => n.syntax(),
            Self::Quant(n) => n.syntax(),
            Self::Let(n) => n.syntax(),
            Self::BoxJoin(n) => n.syntax(),
            Self::Prime(n) => n.syntax(),
            Self::Const(n) => n.syntax(),
            Self::NameRef(n) => n.syntax(),
            Self::AtName(n) => n.syntax(),
            Self::Atom(n) => n.syntax(),
            Self::This(n) => n.syntax(),
            Self::Comprehension(n) => n.syntax(),
            Self::Paren(n) => n.syntax(),
            Self::Block(n) => n.syntax(),
            Self::SExpr(n) => n.syntax(),
        }
    }
}

impl Expr {
    /// Strip any number of enclosing parentheses
    pub fn unparenthesized(self) -> Option<Expr> {
        let mut expr = self;
        while let Expr::Paren(paren) = &expr {
            expr = paren.inner()?;
        }
        Some(expr)
    }
}

ast_node!(ExprRoot, EXPR_ROOT);

impl ExprRoot {
    first_child_method!(expr, Expr);
}

// ============================================================================
// Operators
// ============================================================================

/// Infix operator application; the node kind gives the precedence level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryExpr(pub(crate) SyntaxNode);

impl AstNode for BinaryExpr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::OR_EXPR
                | SyntaxKind::XOR_EXPR
                | SyntaxKind::IFF_EXPR
                | SyntaxKind::IMPLIES_EXPR
                | SyntaxKind::AND_EXPR
                | SyntaxKind::TEMPORAL_BINARY_EXPR
                | SyntaxKind::COMPARE_EXPR
                | SyntaxKind::UNION_EXPR
                | SyntaxKind::OVERRIDE_EXPR
                | SyntaxKind::INTERSECT_EXPR
                | SyntaxKind::ARROW_EXPR
                | SyntaxKind::RESTRICT_EXPR
                | SyntaxKind::DOT_JOIN_EXPR
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl BinaryExpr {
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    /// The `else` branch of `a => b else c`
    pub fn else_branch(&self) -> Option<Expr> {
        if has_token(&self.0, SyntaxKind::ELSE_KW) {
            self.0.children().filter_map(Expr::cast).nth(2)
        } else {
            None
        }
    }

    /// Operator token kind; for comparisons the compared relation (`in`, `=`...)
    pub fn op(&self) -> Option<SyntaxKind> {
        if let Some(compare) = self.compare_op() {
            return compare.op();
        }
        if let Some(arrow) = self.arrow_op() {
            return arrow.op();
        }
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
            .map(|t| t.kind())
    }

    /// `a !in b`, `a not = b`
    pub fn is_negated(&self) -> bool {
        self.compare_op().is_some_and(|op| op.is_negated())
    }

    first_child_method!(compare_op, CompareOp);
    first_child_method!(arrow_op, ArrowOp);
}

ast_node!(CompareOp, COMPARE_OP);

impl CompareOp {
    pub fn is_negated(&self) -> bool {
        has_token(&self.0, SyntaxKind::BANG) || has_token(&self.0, SyntaxKind::NOT_KW)
    }

    pub fn op(&self) -> Option<SyntaxKind> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .map(|t| t.kind())
            .find(|k| !k.is_trivia() && !matches!(k, SyntaxKind::BANG | SyntaxKind::NOT_KW))
    }
}

ast_node!(ArrowOp, ARROW_OP);

impl ArrowOp {
    pub fn op(&self) -> Option<SyntaxKind> {
        find_token(&self.0, SyntaxKind::ARROW).map(|t| t.kind())
    }

    /// Multiplicities on the left and right of `->`
    pub fn multiplicities(&self) -> (Option<Multiplicity>, Option<Multiplicity>) {
        let mut left = None;
        let mut right = None;
        let mut seen_arrow = false;
        for token in self.0.children_with_tokens().filter_map(|e| e.into_token()) {
            let mult = match token.kind() {
                SyntaxKind::ARROW => {
                    seen_arrow = true;
                    continue;
                }
                SyntaxKind::LONE_KW => Multiplicity::Lone,
                SyntaxKind::SOME_KW => Multiplicity::Some,
                SyntaxKind::ONE_KW => Multiplicity::One,
                SyntaxKind::TWO_KW => Multiplicity::Two,
                SyntaxKind::SET_KW => Multiplicity::Set,
                _ => continue,
            };
            if seen_arrow {
                right = Some(mult);
            } else {
                left = Some(mult);
            }
        }
        (left, right)
    }
}

/// Prefix operator application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnaryExpr(pub(crate) SyntaxNode);

impl AstNode for UnaryExpr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::UNARY_EXPR
                | SyntaxKind::MULT_EXPR
                | SyntaxKind::CARD_EXPR
                | SyntaxKind::CLOSURE_EXPR
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl UnaryExpr {
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn op(&self) -> Option<SyntaxKind> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
            .map(|t| t.kind())
    }

    first_child_method!(operand, Expr);
}

// ============================================================================
// Binders
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    All,
    No,
    Sum,
    Lone,
    Some,
    One,
    Two,
}

ast_node!(QuantExpr, QUANT_EXPR);

impl QuantExpr {
    token_to_enum_method!(quantifier, Quantifier, [
        ALL_KW => All,
        NO_KW => No,
        SUM_KW => Sum,
        LONE_KW => Lone,
        SOME_KW => Some,
        ONE_KW => One,
        TWO_KW => Two,
    ]);

    children_method!(decls, QuantDecl);
    first_child_method!(body, Expr);

    /// Whether the first declaration group is `disj`
    pub fn is_disj(&self) -> bool {
        self.decls().next().is_some_and(|d| d.is_disj())
    }
}

ast_node!(QuantDecl, QUANT_DECL);

impl QuantDecl {
    has_token_method!(is_disj, DISJ_KW, "all disj a, b: A | ...");
    first_child_method!(name_list, NameList);
    first_child_method!(mult, Mult);
    first_child_method!(ty, Expr);

    pub fn names(&self) -> Vec<SmolStr> {
        self.name_list().map(|l| l.texts()).unwrap_or_default()
    }
}

/// `let` or `bind`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetExpr(pub(crate) SyntaxNode);

impl AstNode for LetExpr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, SyntaxKind::LET_EXPR | SyntaxKind::BIND_EXPR)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl LetExpr {
    pub fn is_bind(&self) -> bool {
        self.0.kind() == SyntaxKind::BIND_EXPR
    }

    children_method!(bindings, LetDecl);
    first_child_method!(body, Expr);
}

ast_node!(LetDecl, LET_DECL);

impl LetDecl {
    first_child_method!(name, Name);
    first_child_method!(value, Expr);
}

ast_node!(ComprehensionExpr, COMPREHENSION_EXPR);

impl ComprehensionExpr {
    children_method!(decls, QuantDecl);
    first_child_method!(body, Expr);
}

// ============================================================================
// Postfix
// ============================================================================

ast_node!(BoxJoinExpr, BOX_JOIN_EXPR);

impl BoxJoinExpr {
    first_child_method!(target, Expr, "Expression before `[`");

    pub fn args(&self) -> Vec<Expr> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::EXPR_LIST)
            .map(|list| list.children().filter_map(Expr::cast).collect())
            .unwrap_or_default()
    }
}

ast_node!(PrimeExpr, PRIME_EXPR);

impl PrimeExpr {
    first_child_method!(operand, Expr);
}

// ============================================================================
// Atoms
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    None,
    Univ,
    Iden,
    Number(i64),
}

ast_node!(ConstExpr, CONST_EXPR);

impl ConstExpr {
    pub fn value(&self) -> Option<Constant> {
        if has_token(&self.0, SyntaxKind::NONE_KW) {
            Some(Constant::None)
        } else if has_token(&self.0, SyntaxKind::UNIV_KW) {
            Some(Constant::Univ)
        } else if has_token(&self.0, SyntaxKind::IDEN_KW) {
            Some(Constant::Iden)
        } else {
            number_value(&self.0).map(Constant::Number)
        }
    }
}

ast_node!(NameRef, NAME_REF);

impl NameRef {
    first_child_method!(qual_name, QualName);

    pub fn text(&self) -> Option<String> {
        self.qual_name().map(|q| q.text())
    }
}

ast_node!(AtNameExpr, AT_NAME_EXPR);

impl AtNameExpr {
    first_child_method!(name, Name);
}

ast_node!(AtomExpr, ATOM_EXPR);

impl AtomExpr {
    /// Atom name without the backtick
    pub fn name(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::ATOM_NAME)
            .map(|t| SmolStr::new(t.text().trim_start_matches('`')))
    }
}

ast_node!(ThisExpr, THIS_EXPR);

ast_node!(ParenExpr, PAREN_EXPR);

impl ParenExpr {
    first_child_method!(inner, Expr);
}

ast_node!(Block, BLOCK);

impl Block {
    children_method!(exprs, Expr);
}

ast_node!(SExprExpr, SEXPR_EXPR);

impl SExprExpr {
    pub fn text(&self) -> Option<SmolStr> {
        find_token(&self.0, SyntaxKind::SEXPR).map(|t| SmolStr::new(t.text()))
    }
}
