//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (delimiters, stray tokens)
//! - E03xx: Declaration errors (sigs, preds, funs)
//! - E04xx: Expression errors
//! - E05xx: Module, import and option errors
//! - E06xx: Scope and bounds errors
//! - E07xx: Test construct errors
//! - E08xx: Context predicate failures
//! - E09xx: Generic/fallback errors

use std::fmt;

use super::error::DiagnosticKind;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated file path literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Unterminated s-expression literal
    E0104,
    /// Backtick without an atom name
    E0105,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Missing `}`
    E0201,
    /// Missing `)`
    E0202,
    /// Missing `]`
    E0203,
    /// Unexpected closing delimiter
    E0204,
    /// Expected a specific token
    E0205,
    /// Stray token removed by single-token deletion
    E0206,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing name
    E0301,
    /// Expected `sig` after sig qualifiers
    E0302,
    /// Malformed field declaration
    E0303,
    /// Token cannot start a paragraph
    E0304,
    /// Missing `:` in a declaration
    E0305,
    /// Missing `{ ... }` block
    E0306,
    /// Invalid multiplicity keyword
    E0307,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Expected an expression
    E0401,
    /// Binary operator without a right operand
    E0402,
    /// Operator not valid in this position
    E0403,
    /// Unclosed box join `e[...]`
    E0404,
    /// Leading tokens did not select an alternative
    E0405,
    /// Input left over after a standalone expression
    E0406,

    // =========================================================================
    // E05xx: Module, import and option errors
    // =========================================================================
    /// Malformed `open`
    E0501,
    /// Missing module name
    E0502,
    /// Invalid option value
    E0503,

    // =========================================================================
    // E06xx: Scope and bounds errors
    // =========================================================================
    /// Malformed scope
    E0601,
    /// Malformed typescope
    E0602,
    /// Malformed bound
    E0603,
    /// Malformed bound right-hand side
    E0604,

    // =========================================================================
    // E07xx: Test construct errors
    // =========================================================================
    /// Invalid test result after `is`
    E0701,
    /// Assertion does not match any assertion form
    E0702,
    /// Token cannot start a test construct
    E0703,

    // =========================================================================
    // E08xx: Context predicate failures
    // =========================================================================
    /// Temporal construct while temporal mode is off
    E0801,
    /// Import after the first paragraph
    E0802,
    /// `eval` mixed with ordinary paragraphs
    E0803,
    /// Expression nested past the parser's depth limit
    E0804,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Input ended inside an unfinished rule
    E0902,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0307 => "E0307",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            Self::E0405 => "E0405",
            Self::E0406 => "E0406",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
            Self::E0601 => "E0601",
            Self::E0602 => "E0602",
            Self::E0603 => "E0603",
            Self::E0604 => "E0604",
            Self::E0701 => "E0701",
            Self::E0702 => "E0702",
            Self::E0703 => "E0703",
            Self::E0801 => "E0801",
            Self::E0802 => "E0802",
            Self::E0803 => "E0803",
            Self::E0804 => "E0804",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match &self.as_str()[..3] {
            "E01" => "lexical error",
            "E02" => "structural error",
            "E03" => "declaration error",
            "E04" => "expression error",
            "E05" => "module error",
            "E06" => "scope error",
            "E07" => "test error",
            "E08" => "context error",
            _ => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated file path",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "unterminated s-expression",
            Self::E0105 => "expected atom name after '`'",
            Self::E0201 => "expected '}'",
            Self::E0202 => "expected ')'",
            Self::E0203 => "expected ']'",
            Self::E0204 => "unexpected closing delimiter",
            Self::E0205 => "expected token",
            Self::E0206 => "unexpected token",
            Self::E0301 => "expected name",
            Self::E0302 => "expected 'sig'",
            Self::E0303 => "invalid field declaration",
            Self::E0304 => "expected a paragraph",
            Self::E0305 => "expected ':'",
            Self::E0306 => "expected block",
            Self::E0307 => "invalid multiplicity",
            Self::E0401 => "expected expression",
            Self::E0402 => "missing operand",
            Self::E0403 => "invalid operator",
            Self::E0404 => "unclosed box join",
            Self::E0405 => "ambiguous input",
            Self::E0406 => "unexpected input after expression",
            Self::E0501 => "invalid import",
            Self::E0502 => "expected module name",
            Self::E0503 => "invalid option value",
            Self::E0601 => "invalid scope",
            Self::E0602 => "invalid typescope",
            Self::E0603 => "invalid bound",
            Self::E0604 => "invalid bound value",
            Self::E0701 => "invalid test result",
            Self::E0702 => "invalid assertion",
            Self::E0703 => "expected a test construct",
            Self::E0801 => "temporal operators are not enabled",
            Self::E0802 => "imports must come before paragraphs",
            Self::E0803 => "eval cannot be mixed with other paragraphs",
            Self::E0804 => "expression nested too deeply",
            Self::E0901 => "unexpected token",
            Self::E0902 => "unexpected end of input",
        }
    }

    /// Diagnostic class this code belongs to
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 => {
                DiagnosticKind::Lexical
            }
            Self::E0304 | Self::E0405 | Self::E0702 => DiagnosticKind::Ambiguity,
            Self::E0801 | Self::E0802 | Self::E0803 | Self::E0804 => {
                DiagnosticKind::FailedPredicate
            }
            _ => DiagnosticKind::Syntax,
        }
    }

    /// Check if this error relates to delimiters or stray tokens
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 | Self::E0206
        )
    }

    /// Check if this is a recoverable error (parsing can continue)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::E0902)
    }

    /// Code for a missing closing delimiter, falling back to E0205
    pub fn for_missing(kind: crate::parser::SyntaxKind) -> Self {
        use crate::parser::SyntaxKind;
        match kind {
            SyntaxKind::R_BRACE => Self::E0201,
            SyntaxKind::R_PAREN => Self::E0202,
            SyntaxKind::R_BRACKET => Self::E0203,
            SyntaxKind::COLON => Self::E0305,
            SyntaxKind::IDENT => Self::E0301,
            _ => Self::E0205,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SyntaxKind;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E0201.as_str(), "E0201");
        assert_eq!(ErrorCode::E0803.as_str(), "E0803");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0201), "E0201");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::E0103.category_description(), "lexical error");
        assert_eq!(ErrorCode::E0201.category_description(), "structural error");
        assert_eq!(ErrorCode::E0603.category_description(), "scope error");
        assert_eq!(ErrorCode::E0902.category_description(), "syntax error");
    }

    #[test]
    fn test_error_code_kind() {
        assert_eq!(ErrorCode::E0101.kind(), DiagnosticKind::Lexical);
        assert_eq!(ErrorCode::E0201.kind(), DiagnosticKind::Syntax);
        assert_eq!(ErrorCode::E0405.kind(), DiagnosticKind::Ambiguity);
        assert_eq!(ErrorCode::E0802.kind(), DiagnosticKind::FailedPredicate);
    }

    #[test]
    fn test_missing_delimiter_codes() {
        assert_eq!(ErrorCode::for_missing(SyntaxKind::R_BRACE), ErrorCode::E0201);
        assert_eq!(ErrorCode::for_missing(SyntaxKind::R_BRACKET), ErrorCode::E0203);
        assert_eq!(ErrorCode::for_missing(SyntaxKind::FOR_KW), ErrorCode::E0205);
    }

    #[test]
    fn test_is_recoverable() {
        assert!(ErrorCode::E0201.is_recoverable());
        assert!(!ErrorCode::E0902.is_recoverable());
        assert!(ErrorCode::E0206.is_structural());
        assert!(!ErrorCode::E0301.is_structural());
    }
}
