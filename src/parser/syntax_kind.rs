//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Tokens come first (trivia, literals, punctuation, keywords), then one node
//! kind per grammar rule.

/// All syntax kinds (tokens and nodes) of the Forge language
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (sigs, predicates, expressions, bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,       // // ... or -- ...
    BLOCK_COMMENT,      // /* ... */
    LANG_DECL,          // #lang forge/temporal

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier
    NUMBER,             // 42
    FILE_PATH,          // "lib/util.frg"
    ATOM_NAME,          // `Node0
    SEXPR,              // $(+ 1 2)

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    COMMA,              // ,
    COLON,              // :
    SLASH,              // /
    DOT,                // .
    AT,                 // @
    PRIME,              // '
    BAR,                // |
    HASH,               // #
    PLUS,               // +
    MINUS,              // -
    PLUS_PLUS,          // ++
    AMP,                // &
    ARROW,              // ->
    SUBT,               // <:
    SUPT,               // :>
    TILDE,              // ~
    CARET,              // ^
    STAR,               // *
    EQ,                 // =
    LT,                 // <
    GT,                 // >
    LT_EQ,              // <= or =<
    GT_EQ,              // >=
    BANG,               // !
    FAT_ARROW,          // =>
    IFF_ARROW,          // <=>
    AMP_AMP,            // &&
    PIPE_PIPE,          // ||

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ABSTRACT_KW,
    AFTER_KW,
    ALL_KW,
    ALWAYS_KW,
    AND_KW,
    AS_KW,
    ASSERT_KW,
    BEFORE_KW,
    BIND_KW,
    BUT_KW,
    CHECK_KW,
    CONSISTENT_KW,
    DISJ_KW,
    ELSE_KW,
    EVAL_KW,
    EVENTUALLY_KW,
    EXACTLY_KW,
    EXAMPLE_KW,
    EXPECT_KW,
    EXTENDS_KW,
    FACT_KW,
    FOR_KW,
    FORGE_ERROR_KW,
    FUN_KW,
    FUNC_KW,
    HISTORICALLY_KW,
    IDEN_KW,
    IFF_KW,
    IMPLIES_KW,
    IN_KW,
    INCONSISTENT_KW,
    INST_KW,
    INT_KW,
    IS_KW,
    LET_KW,
    LONE_KW,
    MODULE_KW,
    NECESSARY_KW,
    NI_KW,
    NO_KW,
    NONE_KW,
    NOT_KW,
    ONCE_KW,
    ONE_KW,
    OPEN_KW,
    OPTION_KW,
    OR_KW,
    PFUNC_KW,
    PRED_KW,
    RELEASE_KW,
    RUN_KW,
    SAT_KW,
    SEQ_KW,
    SET_KW,
    SIG_KW,
    SINCE_KW,
    SOME_KW,
    SUFFICIENT_KW,
    SUITE_KW,
    SUM_KW,
    TEST_KW,
    THEOREM_KW,
    THIS_KW,
    TRIGGERED_KW,
    TWO_KW,
    UNIV_KW,
    UNSAT_KW,
    UNTIL_KW,
    VAR_KW,
    WHEAT_KW,
    WITH_KW,
    XOR_KW,

    // =========================================================================
    // NODES - module structure
    // =========================================================================
    SOURCE_FILE,
    EXPR_ROOT,
    MODULE_DECL,
    IMPORT_DECL,

    // Names
    NAME,
    NAME_LIST,
    QUAL_NAME,
    QUAL_NAME_LIST,

    // Signatures
    SIG_DECL,
    SIG_EXT,
    FIELD_LIST,
    FIELD_DECL,
    MULT,

    // Predicates, functions, facts, assertions
    PRED_DECL,
    PRED_TYPE,
    RECEIVER,
    FUN_DECL,
    PARA_DECLS,
    PARA_DECL,
    FACT_DECL,
    ASSERT_DECL,

    // Commands and scopes
    CMD_DECL,
    SCOPE,
    TYPESCOPE,

    // Test constructs
    TEST_DECL,
    TEST_EXPECT_DECL,
    TEST_BLOCK,
    TEST_SUITE_DECL,
    EXAMPLE_DECL,
    PROPERTY_DECL,
    QUANTIFIED_PROPERTY_DECL,
    SATISFIABILITY_DECL,
    CONSISTENCY_DECL,

    // Instances and bounds
    INST_DECL,
    BOUNDS,
    BOUND,
    BOUND_LHS,
    BIND_RHS_UNION,
    BIND_RHS_PRODUCT,
    BIND_RHS_ATOM,

    // Misc paragraphs
    OPTION_DECL,
    EVAL_DECL,
    SEXPR_DECL,

    // =========================================================================
    // NODES - expressions (loosest binding first)
    // =========================================================================
    LET_EXPR,
    LET_DECL,
    BIND_EXPR,
    QUANT_EXPR,
    QUANT_DECL,
    OR_EXPR,
    XOR_EXPR,
    IFF_EXPR,
    IMPLIES_EXPR,
    AND_EXPR,
    TEMPORAL_BINARY_EXPR,
    UNARY_EXPR,
    COMPARE_EXPR,
    COMPARE_OP,
    MULT_EXPR,
    UNION_EXPR,
    CARD_EXPR,
    OVERRIDE_EXPR,
    INTERSECT_EXPR,
    ARROW_EXPR,
    ARROW_OP,
    RESTRICT_EXPR,
    BOX_JOIN_EXPR,
    EXPR_LIST,
    DOT_JOIN_EXPR,
    PRIME_EXPR,
    CLOSURE_EXPR,
    CONST_EXPR,
    NAME_REF,
    AT_NAME_EXPR,
    ATOM_EXPR,
    THIS_EXPR,
    COMPREHENSION_EXPR,
    PAREN_EXPR,
    BLOCK,
    SEXPR_EXPR,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, comment or `#lang` line)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::LANG_DECL
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::XOR_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::PIPE_PIPE as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::NUMBER | Self::FILE_PATH | Self::ATOM_NAME | Self::SEXPR
        )
    }

    /// Check if this is a token kind (as opposed to a node kind)
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::XOR_KW as u16)
    }

    /// Check if this is one of the expression node kinds
    pub fn is_expr(self) -> bool {
        (self as u16) >= (Self::LET_EXPR as u16) && (self as u16) <= (Self::SEXPR_EXPR as u16)
            && !matches!(
                self,
                Self::LET_DECL | Self::QUANT_DECL | Self::COMPARE_OP | Self::ARROW_OP | Self::EXPR_LIST
            )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ForgeLanguage {}

impl rowan::Language for ForgeLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ForgeLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ForgeLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ForgeLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<ForgeLanguage>;

/// Human-readable name of a kind, used in diagnostics (`expected '}'`)
pub fn kind_to_name(kind: SyntaxKind) -> &'static str {
    use SyntaxKind::*;
    match kind {
        WHITESPACE => "whitespace",
        LINE_COMMENT | BLOCK_COMMENT => "comment",
        LANG_DECL => "language declaration",
        IDENT => "identifier",
        NUMBER => "number",
        FILE_PATH => "file path",
        ATOM_NAME => "atom name",
        SEXPR => "s-expression",

        L_BRACE => "'{'",
        R_BRACE => "'}'",
        L_BRACKET => "'['",
        R_BRACKET => "']'",
        L_PAREN => "'('",
        R_PAREN => "')'",
        COMMA => "','",
        COLON => "':'",
        SLASH => "'/'",
        DOT => "'.'",
        AT => "'@'",
        PRIME => "'''",
        BAR => "'|'",
        HASH => "'#'",
        PLUS => "'+'",
        MINUS => "'-'",
        PLUS_PLUS => "'++'",
        AMP => "'&'",
        ARROW => "'->'",
        SUBT => "'<:'",
        SUPT => "':>'",
        TILDE => "'~'",
        CARET => "'^'",
        STAR => "'*'",
        EQ => "'='",
        LT => "'<'",
        GT => "'>'",
        LT_EQ => "'<='",
        GT_EQ => "'>='",
        BANG => "'!'",
        FAT_ARROW => "'=>'",
        IFF_ARROW => "'<=>'",
        AMP_AMP => "'&&'",
        PIPE_PIPE => "'||'",

        ABSTRACT_KW => "'abstract'",
        AFTER_KW => "'after'",
        ALL_KW => "'all'",
        ALWAYS_KW => "'always'",
        AND_KW => "'and'",
        AS_KW => "'as'",
        ASSERT_KW => "'assert'",
        BEFORE_KW => "'before'",
        BIND_KW => "'bind'",
        BUT_KW => "'but'",
        CHECK_KW => "'check'",
        CONSISTENT_KW => "'consistent'",
        DISJ_KW => "'disj'",
        ELSE_KW => "'else'",
        EVAL_KW => "'eval'",
        EVENTUALLY_KW => "'eventually'",
        EXACTLY_KW => "'exactly'",
        EXAMPLE_KW => "'example'",
        EXPECT_KW => "'expect'",
        EXTENDS_KW => "'extends'",
        FACT_KW => "'fact'",
        FOR_KW => "'for'",
        FORGE_ERROR_KW => "'forge_error'",
        FUN_KW => "'fun'",
        FUNC_KW => "'func'",
        HISTORICALLY_KW => "'historically'",
        IDEN_KW => "'iden'",
        IFF_KW => "'iff'",
        IMPLIES_KW => "'implies'",
        IN_KW => "'in'",
        INCONSISTENT_KW => "'inconsistent'",
        INST_KW => "'inst'",
        INT_KW => "'Int'",
        IS_KW => "'is'",
        LET_KW => "'let'",
        LONE_KW => "'lone'",
        MODULE_KW => "'module'",
        NECESSARY_KW => "'necessary'",
        NI_KW => "'ni'",
        NO_KW => "'no'",
        NONE_KW => "'none'",
        NOT_KW => "'not'",
        ONCE_KW => "'once'",
        ONE_KW => "'one'",
        OPEN_KW => "'open'",
        OPTION_KW => "'option'",
        OR_KW => "'or'",
        PFUNC_KW => "'pfunc'",
        PRED_KW => "'pred'",
        RELEASE_KW => "'release'",
        RUN_KW => "'run'",
        SAT_KW => "'sat'",
        SEQ_KW => "'seq'",
        SET_KW => "'set'",
        SIG_KW => "'sig'",
        SINCE_KW => "'since'",
        SOME_KW => "'some'",
        SUFFICIENT_KW => "'sufficient'",
        SUITE_KW => "'suite'",
        SUM_KW => "'sum'",
        TEST_KW => "'test'",
        THEOREM_KW => "'theorem'",
        THIS_KW => "'this'",
        TRIGGERED_KW => "'triggered'",
        TWO_KW => "'two'",
        UNIV_KW => "'univ'",
        UNSAT_KW => "'unsat'",
        UNTIL_KW => "'until'",
        VAR_KW => "'var'",
        WHEAT_KW => "'wheat'",
        WITH_KW => "'with'",
        XOR_KW => "'xor'",

        NAME | NAME_LIST => "name",
        QUAL_NAME | QUAL_NAME_LIST => "qualified name",
        SCOPE | TYPESCOPE => "scope",
        BOUNDS | BOUND => "bounds",
        BLOCK => "block",
        ERROR => "error",
        kind if kind.is_expr() => "expression",
        _ => "syntax node",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_disjoint() {
        assert!(SyntaxKind::SIG_KW.is_keyword());
        assert!(!SyntaxKind::SIG_KW.is_punct());
        assert!(SyntaxKind::ARROW.is_punct());
        assert!(SyntaxKind::LANG_DECL.is_trivia());
        assert!(SyntaxKind::XOR_KW.is_token());
        assert!(!SyntaxKind::SOURCE_FILE.is_token());
    }

    #[test]
    fn test_expr_kinds() {
        assert!(SyntaxKind::ARROW_EXPR.is_expr());
        assert!(SyntaxKind::BLOCK.is_expr());
        assert!(!SyntaxKind::ARROW_OP.is_expr());
        assert!(!SyntaxKind::QUANT_DECL.is_expr());
        assert!(!SyntaxKind::SIG_DECL.is_expr());
    }

    #[test]
    fn test_raw_roundtrip() {
        let raw: rowan::SyntaxKind = SyntaxKind::QUANT_EXPR.into();
        assert_eq!(SyntaxKind::from(raw), SyntaxKind::QUANT_EXPR);
    }

    #[test]
    fn test_kind_to_name() {
        assert_eq!(kind_to_name(SyntaxKind::R_BRACE), "'}'");
        assert_eq!(kind_to_name(SyntaxKind::SIG_KW), "'sig'");
        assert_eq!(kind_to_name(SyntaxKind::DOT_JOIN_EXPR), "expression");
    }
}
