//! Recursive descent parser for Forge
//!
//! Builds a rowan GreenNode tree from tokens and collects diagnostics.
//! Recovery never aborts a parse: the worst case is a partial tree whose last
//! diagnostic is marked fatal.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::config::{ParseConfig, TemporalMode};
use super::errors::{
    DiagnosticKind, ErrorCode, ParseContext, ParseFailure, RelatedInfo, SyntaxError,
    format_context_error,
};
use super::grammar::{self, BaseParser, found};
use super::lexer::{Token, tokenize};
use super::syntax_kind::{SyntaxKind, SyntaxNode, kind_to_name};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
    /// Text after `#lang`, if the input starts with a language line
    pub language: Option<SmolStr>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_fatal(&self) -> bool {
        self.errors.iter().any(|e| e.fatal)
    }

    pub fn errors_of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &SyntaxError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Fail only when input ended inside a rule with nothing to resync on
    pub fn into_result(self) -> Result<Parse, ParseFailure> {
        match self.errors.iter().find(|e| e.fatal).cloned() {
            Some(error) => Err(ParseFailure {
                error,
                partial: self,
            }),
            None => Ok(self),
        }
    }
}

/// Parse a Forge source file
pub fn parse_module(input: &str) -> Parse {
    parse_module_with(input, &ParseConfig::default())
}

pub fn parse_module_with(input: &str, config: &ParseConfig) -> Parse {
    let tokens = tokenize(input);
    debug!(tokens = tokens.len(), "parsing module");
    let mut parser = Parser::new(&tokens, config);
    grammar::source_file(&mut parser);
    let parse = parser.finish();
    debug!(errors = parse.errors.len(), "parsed module");
    parse
}

/// Parse a standalone expression; the root node is `EXPR_ROOT`
pub fn parse_expression(input: &str) -> Parse {
    parse_expression_with(input, &ParseConfig::default())
}

pub fn parse_expression_with(input: &str, config: &ParseConfig) -> Parse {
    let tokens = tokenize(input);
    debug!(tokens = tokens.len(), "parsing expression");
    let mut parser = Parser::new(&tokens, config);
    grammar::expr_root(&mut parser);
    let parse = parser.finish();
    debug!(errors = parse.errors.len(), "parsed expression");
    parse
}

/// Text of the `#lang` line when it precedes every significant token
fn language_of(tokens: &[Token<'_>]) -> Option<SmolStr> {
    tokens
        .iter()
        .take_while(|t| t.kind.is_trivia())
        .find(|t| t.kind == SyntaxKind::LANG_DECL)
        .map(|t| SmolStr::new(t.text.trim_start_matches("#lang").trim()))
}

fn lexical_error(token: &Token<'_>) -> SyntaxError {
    let code = if token.text.starts_with("/*") {
        ErrorCode::E0103
    } else if token.text.starts_with('"') {
        ErrorCode::E0102
    } else if token.text.starts_with("$(") {
        ErrorCode::E0104
    } else if token.text.starts_with('`') {
        ErrorCode::E0105
    } else {
        ErrorCode::E0101
    };
    let message = match code {
        ErrorCode::E0101 => format!("invalid character '{}'", token.text),
        _ => code.default_message().to_string(),
    };
    SyntaxError::new(message, TextRange::at(token.offset, TextSize::of(token.text)), code)
}

/// Deepest expression nesting parsed recursively
pub(crate) const MAX_NESTING: usize = 256;

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    end: TextSize,
    builder: GreenNodeBuilder<'static>,
    depth: usize,
    errors: Vec<SyntaxError>,
    contexts: Vec<ParseContext>,
    /// Expression nesting, bounded by `MAX_NESTING`
    nesting: usize,
    language: Option<SmolStr>,
    temporal_mode: TemporalMode,
    temporal: bool,
    max_diagnostics: Option<usize>,
    dropped: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token<'a>], config: &ParseConfig) -> Self {
        let language = language_of(tokens);
        let temporal = config.temporal_enabled_for(language.as_deref());
        let end = tokens.last().map(|t| t.end()).unwrap_or_default();
        let mut parser = Self {
            tokens,
            pos: 0,
            end,
            builder: GreenNodeBuilder::new(),
            depth: 0,
            errors: Vec::new(),
            contexts: vec![ParseContext::TopLevel],
            nesting: 0,
            language,
            temporal_mode: config.temporal,
            temporal,
            max_diagnostics: config.max_diagnostics,
            dropped: 0,
        };
        for token in tokens.iter().filter(|t| t.kind == SyntaxKind::ERROR) {
            parser.push_error(lexical_error(token));
        }
        parser
    }

    pub(crate) fn finish(mut self) -> Parse {
        self.errors.sort_by_key(|e| e.range.start());
        if self.dropped > 0 {
            debug!(dropped = self.dropped, "diagnostics over the cap were dropped");
        }
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
            language: self.language,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn is_skipped(kind: SyntaxKind) -> bool {
        kind.is_trivia() || kind == SyntaxKind::ERROR
    }

    /// Raw index of the nth significant token from the cursor
    fn significant_index(&self, n: usize) -> Option<usize> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !Self::is_skipped(t.kind))
            .nth(n)
            .map(|(idx, _)| self.pos + idx)
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.significant_index(0).map(|idx| &self.tokens[idx])
    }

    // =========================================================================
    // Trivia handling
    // =========================================================================

    /// Attach pending trivia and lexer error tokens to the open node
    fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !Self::is_skipped(token.kind) {
                break;
            }
            if token.kind == SyntaxKind::ERROR {
                self.builder.start_node(SyntaxKind::ERROR.into());
                self.builder.token(token.kind.into(), token.text);
                self.builder.finish_node();
            } else {
                self.builder.token(token.kind.into(), token.text);
            }
            self.pos += 1;
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn push_error(&mut self, error: SyntaxError) {
        if let Some(max) = self.max_diagnostics {
            if self.errors.len() >= max && !error.fatal {
                if self.dropped == 0 {
                    warn!(max, "diagnostic limit reached, further diagnostics are dropped");
                }
                self.dropped += 1;
                return;
            }
        }
        self.errors.push(error);
    }

    fn context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or_default()
    }

    fn in_follow_set(&self, kind: SyntaxKind) -> bool {
        self.contexts
            .iter()
            .any(|ctx| ctx.recovery_tokens().contains(&kind))
    }

    fn context_suffix(&self) -> String {
        match self.context() {
            ParseContext::TopLevel | ParseContext::Expression => String::new(),
            ctx => format!(" {}", ctx.description()),
        }
    }
}

impl BaseParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.end))
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        self.significant_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn at_eof(&self) -> bool {
        self.current().is_none()
    }

    fn get_pos(&self) -> usize {
        self.pos
    }

    fn bump(&mut self) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn expect_code(&mut self, kind: SyntaxKind, code: ErrorCode) -> bool {
        if self.eat(kind) {
            return true;
        }
        let current = self.current_kind();
        if !self.at_eof() && self.nth(1) == kind && !self.in_follow_set(current) {
            trace!(expected = ?kind, deleted = ?current, "single-token deletion");
            let message = format!(
                "unexpected {}, expected {}{}",
                found(self),
                kind_to_name(kind),
                self.context_suffix()
            );
            self.bump_error(ErrorCode::E0206, message);
            self.bump();
            return true;
        }
        trace!(expected = ?kind, found = ?current, "single-token insertion");
        let message = format!(
            "expected {}{}, found {}",
            kind_to_name(kind),
            self.context_suffix(),
            found(self)
        );
        self.error(code, message);
        false
    }

    fn expect_closing(&mut self, kind: SyntaxKind, opened_at: TextRange) -> bool {
        let before = self.errors.len();
        let ok = self.expect(kind);
        if !ok && self.errors.len() > before {
            if let Some(last) = self.errors.last_mut() {
                last.related.push(RelatedInfo::new("opened here", opened_at));
                last.hint = Some(format!("insert {}", kind_to_name(kind)));
            }
        }
        ok
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        if self.depth > 0 {
            self.skip_trivia();
        }
        self.builder.start_node(kind.into());
        self.depth += 1;
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia();
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
        self.depth += 1;
    }

    fn finish_node(&mut self) {
        if self.depth == 1 {
            self.skip_trivia();
        }
        self.builder.finish_node();
        self.depth = self.depth.saturating_sub(1);
    }

    fn error(&mut self, code: ErrorCode, message: String) {
        let mut error = SyntaxError::new(message, self.current_range(), code);
        if self.at_eof() {
            error = error.into_fatal();
        }
        self.push_error(error);
    }

    fn error_recover(&mut self, code: ErrorCode, message: String, recovery: &[SyntaxKind]) {
        self.error(code, message);
        if self.at_eof() {
            return;
        }
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        self.bump();
        let mut skipped = 1;
        while !self.at_eof()
            && !self.at_any(recovery)
            && !self.in_follow_set(self.current_kind())
        {
            self.bump();
            skipped += 1;
        }
        self.finish_node();
        trace!(skipped, resync = ?self.current_kind(), "rule-level recovery");
    }

    fn bump_error(&mut self, code: ErrorCode, message: String) {
        self.error(code, message);
        if !self.at_eof() {
            self.start_node(SyntaxKind::ERROR);
            self.bump();
            self.finish_node();
        }
    }

    fn error_unexpected(&mut self, code: ErrorCode) {
        let error = format_context_error(&found(self), self.context(), code, self.current_range());
        let error = if self.at_eof() { error.into_fatal() } else { error };
        self.push_error(error);
    }

    fn at_recovery_point(&self) -> bool {
        self.at_eof() || self.in_follow_set(self.current_kind())
    }

    fn push_context(&mut self, context: ParseContext) {
        self.contexts.push(context);
    }

    fn pop_context(&mut self) {
        if self.contexts.len() > 1 {
            self.contexts.pop();
        }
    }

    fn enter_nesting(&mut self) -> bool {
        if self.nesting >= MAX_NESTING {
            trace!(limit = MAX_NESTING, at = ?self.current_kind(), "nesting limit reached");
            return false;
        }
        self.nesting += 1;
        true
    }

    fn exit_nesting(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    fn temporal_enabled(&self) -> bool {
        self.temporal
    }

    fn enable_temporal(&mut self) {
        if self.temporal_mode == TemporalMode::FromLangLine {
            debug!("temporal mode enabled by option");
            self.temporal = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let parse = parse_module("");
        assert!(parse.ok());
        assert_eq!(parse.syntax().kind(), SyntaxKind::SOURCE_FILE);
    }

    #[test]
    fn test_lossless() {
        let input = "#lang forge\n-- comment\nsig A { f: set A }\n\npred p { some A }\n";
        let parse = parse_module(input);
        assert!(parse.ok(), "{:?}", parse.errors);
        assert_eq!(parse.syntax().text().to_string(), input);
        assert_eq!(parse.language.as_deref(), Some("forge"));
    }

    #[test]
    fn test_lossless_with_garbage() {
        let input = "sig A { ?? } pred { $$ } }}";
        let parse = parse_module(input);
        assert!(!parse.ok());
        assert_eq!(parse.syntax().text().to_string(), input);
    }

    #[test]
    fn test_lexical_errors_reported() {
        let parse = parse_module("sig A {} ?");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].code, ErrorCode::E0101);
        assert_eq!(parse.errors[0].kind, DiagnosticKind::Lexical);
    }

    #[test]
    fn test_nodes_start_at_significant_tokens() {
        let parse = parse_module("  \n sig A {}  ");
        let sig = parse.syntax().first_child().unwrap();
        assert_eq!(sig.kind(), SyntaxKind::SIG_DECL);
        assert_eq!(sig.text().to_string(), "sig A {}");
    }

    #[test]
    fn test_max_diagnostics() {
        let config = ParseConfig::new().with_max_diagnostics(2);
        let parse = parse_module_with("? ? ? ? ?", &config);
        assert_eq!(parse.errors.len(), 2);
    }

    #[test]
    fn test_into_result() {
        assert!(parse_module("sig A {}").into_result().is_ok());
        let failure = parse_module("sig A {").into_result().unwrap_err();
        assert!(failure.error.fatal);
        assert_eq!(failure.error.code, ErrorCode::E0201);
        assert_eq!(failure.partial.syntax().text().to_string(), "sig A {");
    }
}
