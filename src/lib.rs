//! # forge-syntax
//!
//! Lossless, error-tolerant parser for the Forge relational and temporal
//! modeling language.
//!
//! ```
//! use forge_syntax::{parse_module, Paragraph, SourceFile, AstNode};
//!
//! let parse = parse_module("sig Node { edges: set Node }\npred p { some Node }");
//! assert!(parse.ok());
//!
//! let file = SourceFile::cast(parse.syntax()).unwrap();
//! assert!(matches!(file.paragraphs().next(), Some(Paragraph::Sig(_))));
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, recursive-descent parser, typed AST, traversal
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Span)
//! ```

/// Foundation types: text ranges and line/column conversion
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, AST, traversal
pub mod parser;

pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};
pub use parser::{
    AstNode, DiagnosticKind, ErrorCode, Expr, Listener, Paragraph, Parse, ParseConfig,
    ParseFailure, SourceFile, SyntaxError, SyntaxKind, SyntaxNode, TemporalMode, Visitor,
    parse_expression, parse_expression_with, parse_module, parse_module_with,
};
