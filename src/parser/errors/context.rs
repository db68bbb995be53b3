//! Parse context tracking for context-aware error messages
//!
//! The parser keeps a stack of contexts. The top of the stack names where an
//! error happened ("in sig body"); the union of the stack's recovery tokens is
//! the follow set used to resynchronise after a rule-level error.

use crate::parser::SyntaxKind;

/// Tokens that can begin a top-level paragraph
pub const PARAGRAPH_START: &[SyntaxKind] = &[
    SyntaxKind::MODULE_KW,
    SyntaxKind::OPEN_KW,
    SyntaxKind::SIG_KW,
    SyntaxKind::ABSTRACT_KW,
    SyntaxKind::VAR_KW,
    SyntaxKind::PRED_KW,
    SyntaxKind::FUN_KW,
    SyntaxKind::FACT_KW,
    SyntaxKind::ASSERT_KW,
    SyntaxKind::RUN_KW,
    SyntaxKind::CHECK_KW,
    SyntaxKind::TEST_KW,
    SyntaxKind::EXPECT_KW,
    SyntaxKind::EXAMPLE_KW,
    SyntaxKind::INST_KW,
    SyntaxKind::OPTION_KW,
    SyntaxKind::EVAL_KW,
    SyntaxKind::SEXPR,
];

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// At the top level of a file
    #[default]
    TopLevel,
    /// Inside the field list of a sig
    SigBody,
    /// Inside a `{ ... }` formula block
    Block,
    /// Inside a predicate or function parameter list
    ParameterList,
    /// Inside `e[ ... ]` arguments
    ArgumentList,
    /// Inside `( ... )`
    Parenthesized,
    /// Parsing an expression
    Expression,
    /// Parsing an `open` statement
    Import,
    /// Parsing a command scope
    Scope,
    /// Inside a `{ ... }` bounds block
    Bounds,
    /// Inside a `test expect { ... }` body
    TestExpectBody,
    /// Inside a `test suite for p { ... }` body
    TestSuiteBody,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::SigBody => "in sig body",
            Self::Block => "in block",
            Self::ParameterList => "in parameter list",
            Self::ArgumentList => "in argument list",
            Self::Parenthesized => "in parentheses",
            Self::Expression => "in expression",
            Self::Import => "in open statement",
            Self::Scope => "in scope",
            Self::Bounds => "in bounds",
            Self::TestExpectBody => "in test expect block",
            Self::TestSuiteBody => "in test suite",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a sig, pred, fun, fact, assert, command, or test",
            Self::SigBody => "a field declaration (name: type)",
            Self::Block | Self::Parenthesized | Self::Expression => "an expression",
            Self::ParameterList => "a parameter (name: type)",
            Self::ArgumentList => "an argument",
            Self::Import => "a module name or file path",
            Self::Scope => "a number or typescope (e.g., 'exactly 3 Node')",
            Self::Bounds => "a bound (e.g., 'Node = `N0 + `N1')",
            Self::TestExpectBody => "a test (e.g., 'name: pred is sat')",
            Self::TestSuiteBody => "an example, assertion, or test expect block",
        }
    }

    /// Get the recovery tokens appropriate for this context
    pub fn recovery_tokens(&self) -> &'static [SyntaxKind] {
        match self {
            Self::TopLevel => PARAGRAPH_START,
            Self::SigBody => &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
            Self::Block | Self::Bounds | Self::TestExpectBody | Self::TestSuiteBody => {
                &[SyntaxKind::R_BRACE]
            }
            Self::ParameterList => &[SyntaxKind::COMMA, SyntaxKind::R_PAREN, SyntaxKind::R_BRACKET],
            Self::ArgumentList => &[SyntaxKind::COMMA, SyntaxKind::R_BRACKET],
            Self::Parenthesized => &[SyntaxKind::R_PAREN],
            Self::Expression | Self::Import | Self::Scope => &[],
        }
    }

    /// Check if this context is inside a `{ ... }` body
    pub fn is_in_body(&self) -> bool {
        matches!(
            self,
            Self::SigBody | Self::Block | Self::Bounds | Self::TestExpectBody | Self::TestSuiteBody
        )
    }
}
