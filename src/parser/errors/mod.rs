//! Parser error handling module
//!
//! - Categorized error codes and diagnostic classes
//! - Context-aware error messages and recovery sets
//! - Suggestions/hints and related spans ("block opened here")
//! - `ParseFailure`, the error type for unterminated input

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::{PARAGRAPH_START, ParseContext};
pub use error::{DiagnosticKind, ParseFailure, RelatedInfo, SyntaxError, format_context_error};

#[cfg(test)]
mod tests;
