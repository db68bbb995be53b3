//! Diagnostics produced by the lexer and parser
//!
//! Every diagnostic carries an [`ErrorCode`] and the [`DiagnosticKind`] it
//! belongs to. Unclosed delimiters point back at the opener through
//! [`RelatedInfo`]. A diagnostic is `fatal` when input ended inside a rule
//! with nothing left to resynchronise on.

use rowan::{TextRange, TextSize};

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::base::{LineCol, LineIndex};

/// What went wrong, independent of where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    /// The lexer could not classify a character sequence
    Lexical,
    /// A token was not in the expected set
    Syntax,
    /// Bounded lookahead did not select an alternative
    Ambiguity,
    /// A context-sensitive guard rejected a construct
    FailedPredicate,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical error",
            Self::Syntax => "syntax error",
            Self::Ambiguity => "ambiguity",
            Self::FailedPredicate => "failed predicate",
        }
    }
}

/// A second location attached to a diagnostic, e.g. the `{` an unclosed
/// block was opened at
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A single diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub code: ErrorCode,
    /// Derived from the code unless overridden
    pub kind: DiagnosticKind,
    /// Suggested fix
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
    /// Input ran out inside a rule that could not be resynchronised
    pub fatal: bool,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            kind: code.kind(),
            hint: None,
            related: Vec::new(),
            fatal: false,
        }
    }

    /// Zero-width diagnostic at `offset`
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn with_kind(mut self, kind: DiagnosticKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn into_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    pub fn line_col(&self, index: &LineIndex) -> LineCol {
        index.line_col(self.range.start())
    }

    /// Multi-line rendering with hint and notes
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if self.fatal {
            result.push_str(" (fatal)");
        }
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {hint}"));
        }
        for related in &self.related {
            result.push_str(&format!("\n  note: {}", related.message));
        }
        result
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// "unexpected X in Y, expected Z"
pub fn format_context_error(
    found: &str,
    context: ParseContext,
    code: ErrorCode,
    range: TextRange,
) -> SyntaxError {
    let message = format!(
        "unexpected {} {}, expected {}",
        found,
        context.description(),
        context.expected_description()
    );
    SyntaxError::new(message, range, code)
}

/// The one failure `Parse::into_result` propagates: parsing stopped inside a
/// rule at end of input. The partial parse is kept for inspection.
#[derive(Debug, thiserror::Error)]
#[error("parse failed: {error}")]
pub struct ParseFailure {
    /// The fatal diagnostic
    pub error: SyntaxError,
    /// Everything that was parsed, including all other diagnostics
    pub partial: crate::parser::Parse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_kind_from_code() {
        let err = SyntaxError::new(
            "expected '}'",
            TextRange::new(TextSize::new(10), TextSize::new(11)),
            ErrorCode::E0201,
        );
        assert_eq!(err.kind, DiagnosticKind::Syntax);
        assert!(!err.fatal);
        assert!(err.hint.is_none());
        assert!(err.related.is_empty());

        let err = SyntaxError::at_offset("eval mixed in", TextSize::new(0), ErrorCode::E0803);
        assert_eq!(err.kind, DiagnosticKind::FailedPredicate);
        assert!(err.range.is_empty());
    }

    #[test]
    fn test_with_related() {
        let err = SyntaxError::at_offset("expected '}'", TextSize::new(50), ErrorCode::E0201)
            .with_related(RelatedInfo::new(
                "opened here",
                TextRange::new(TextSize::new(10), TextSize::new(11)),
            ));
        assert_eq!(err.related[0].message, "opened here");
        assert_eq!(err.related[0].range.start(), TextSize::new(10));
    }

    #[test]
    fn test_format_error() {
        let err = SyntaxError::at_offset("expected expression", TextSize::new(10), ErrorCode::E0401)
            .with_hint("add an operand")
            .into_fatal();

        let formatted = err.format();
        assert!(formatted.starts_with("E0401: expected expression"));
        assert!(formatted.contains("(fatal)"));
        assert!(formatted.contains("hint: add an operand"));
        assert_eq!(err.to_string(), "E0401: expected expression");
    }

    #[test]
    fn test_line_col() {
        let index = LineIndex::new("sig A {}\nsig {");
        let err = SyntaxError::at_offset("expected name", TextSize::new(13), ErrorCode::E0301);
        assert_eq!(err.line_col(&index), LineCol { line: 1, col: 4 });
    }

    #[test]
    fn test_format_context_error() {
        let err = format_context_error(
            "'}'",
            ParseContext::SigBody,
            ErrorCode::E0901,
            TextRange::empty(TextSize::new(3)),
        );

        assert!(err.message.contains("'}'"));
        assert!(err.message.contains("in sig body"));
        assert!(err.message.contains("expected a field"));
        assert_eq!(err.range, TextRange::empty(TextSize::new(3)));
    }
}
