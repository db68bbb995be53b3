//! Rowan-based parser for Forge
//!
//! This module provides a lossless, error-tolerant parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! Whitespace and comments are kept in the tree, so the text of the root
//! node is exactly the input. Malformed input still produces a complete
//! tree: unparseable stretches end up in `ERROR` nodes and every problem is
//! reported as a [`SyntaxError`].
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser (recursive descent + precedence climbing) → GreenNode tree
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode (Paragraph, Expr, ...)
//!     ↓
//! visit → Listener / Visitor traversal
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod config;
pub mod errors;
pub mod grammar;
mod lexer;
mod syntax_kind;
pub mod visit;

pub use ast::*;
pub use config::{ParseConfig, TemporalMode};
pub use errors::{DiagnosticKind, ErrorCode, ParseFailure, RelatedInfo, SyntaxError};
pub use lexer::{Lexer, Token, significant_tokens, tokenize};
pub use parser::{Parse, parse_expression, parse_expression_with, parse_module, parse_module_with};
pub use syntax_kind::{
    ForgeLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
    kind_to_name,
};
pub use visit::{Listener, Visitor, accept, walk};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
