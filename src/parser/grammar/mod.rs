//! Grammar modules for Forge parsing
//!
//! - `expressions` - the precedence-climbing expression parser and its
//!   operator table
//! - `declarations` - paragraphs, commands, tests and bounds
//!
//! The parsing functions are generic over [`BaseParser`] so they only see the
//! token cursor, the tree builder and the diagnostics sink.

pub mod declarations;
pub mod expressions;

use rowan::{Checkpoint, TextRange};

use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::syntax_kind::{SyntaxKind, kind_to_name};

pub use declarations::source_file;
pub use expressions::{expr, expr_root};

/// Parser infrastructure used by every grammar rule
///
/// Trivia and lexer error tokens are invisible to all inspection methods;
/// they are attached to the tree when the next token is consumed or the next
/// node is opened.
pub trait BaseParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    fn current_text(&self) -> &str;
    fn current_range(&self) -> TextRange;
    /// Kind of the nth significant token ahead (`nth(0)` is the current one)
    fn nth(&self, n: usize) -> SyntaxKind;
    fn at_eof(&self) -> bool;

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    // Position tracking
    fn get_pos(&self) -> usize;

    // Token consumption
    fn bump(&mut self);

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind`, repairing by single-token deletion or insertion
    fn expect_code(&mut self, kind: SyntaxKind, code: ErrorCode) -> bool;

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        self.expect_code(kind, ErrorCode::for_missing(kind))
    }

    /// Like `expect`, pointing back at the opening delimiter when missing
    fn expect_closing(&mut self, kind: SyntaxKind, opened_at: TextRange) -> bool;

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn checkpoint(&mut self) -> Checkpoint;
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);
    fn finish_node(&mut self);

    // Diagnostics
    fn error(&mut self, code: ErrorCode, message: String);

    /// Report and skip into an ERROR node until a token of `recovery` or of
    /// the active context follow sets, consuming at least one token
    fn error_recover(&mut self, code: ErrorCode, message: String, recovery: &[SyntaxKind]);

    /// Report and wrap only the current token in an ERROR node
    fn bump_error(&mut self, code: ErrorCode, message: String);

    /// "unexpected X in <context>, expected <what the context wants>"
    fn error_unexpected(&mut self, code: ErrorCode);

    /// True if the current token belongs to an enclosing follow set
    fn at_recovery_point(&self) -> bool;

    // Context stack
    fn push_context(&mut self, context: ParseContext);
    fn pop_context(&mut self);

    // Nesting
    /// Enter one level of expression nesting; false once the depth limit is
    /// reached, in which case nothing is entered
    fn enter_nesting(&mut self) -> bool;
    fn exit_nesting(&mut self);

    // Temporal mode
    fn temporal_enabled(&self) -> bool;
    fn enable_temporal(&mut self);

    /// Report the current token if temporal constructs are not accepted
    fn check_temporal(&mut self) {
        if !self.temporal_enabled() {
            let message = format!(
                "{} requires temporal mode (use '#lang forge/temporal')",
                kind_to_name(self.current_kind())
            );
            self.error(ErrorCode::E0801, message);
        }
    }
}

/// Description of the current token for messages
pub(crate) fn found<P: BaseParser>(p: &P) -> String {
    if p.at_eof() {
        "end of input".to_string()
    } else {
        match p.current_kind() {
            SyntaxKind::IDENT => format!("identifier '{}'", p.current_text()),
            kind => kind_to_name(kind).to_string(),
        }
    }
}

/// Skip an operand nested past the depth limit into one flat ERROR node.
///
/// Delimiters are balanced by counting, so a group opened here is consumed
/// up to its closer while a closer of an enclosing group is left in place.
pub(crate) fn skip_nested<P: BaseParser>(p: &mut P) {
    p.error(ErrorCode::E0804, format!("expression nested too deeply at {}", found(p)));
    p.start_node(SyntaxKind::ERROR);
    let group = is_opener(p.current_kind());
    let mut open = 0usize;
    while !p.at_eof() {
        let kind = p.current_kind();
        if is_opener(kind) {
            open += 1;
        } else if is_closer(kind) {
            if open == 0 {
                break;
            }
            open -= 1;
        }
        p.bump();
        if open == 0 && (group || p.at_recovery_point()) {
            break;
        }
    }
    p.finish_node();
}

fn is_opener(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE)
}

fn is_closer(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE)
}

/// Tokens usable as a segment of a qualified name (`util/ordering`, `Int`)
pub fn is_name_segment(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::IDENT | SyntaxKind::INT_KW | SyntaxKind::SEQ_KW)
}

/// Multiplicity keywords that may prefix a sig
pub const SIG_MULT: &[SyntaxKind] = &[
    SyntaxKind::LONE_KW,
    SyntaxKind::SOME_KW,
    SyntaxKind::ONE_KW,
    SyntaxKind::TWO_KW,
];

/// Multiplicity keywords in front of a field type
pub const ARROW_MULT: &[SyntaxKind] = &[
    SyntaxKind::LONE_KW,
    SyntaxKind::SET_KW,
    SyntaxKind::ONE_KW,
    SyntaxKind::TWO_KW,
    SyntaxKind::FUNC_KW,
    SyntaxKind::PFUNC_KW,
];

/// Multiplicity keywords in front of a parameter or return type
pub const HELPER_MULT: &[SyntaxKind] = &[
    SyntaxKind::LONE_KW,
    SyntaxKind::SET_KW,
    SyntaxKind::ONE_KW,
    SyntaxKind::FUNC_KW,
    SyntaxKind::PFUNC_KW,
];

/// Name = IDENT
pub fn name<P: BaseParser>(p: &mut P) -> bool {
    if p.at(SyntaxKind::IDENT) {
        p.start_node(SyntaxKind::NAME);
        p.bump();
        p.finish_node();
        true
    } else {
        let message = format!("expected name, found {}", found(p));
        p.error(ErrorCode::E0301, message);
        false
    }
}

/// NameList = Name (',' Name)*
///
/// The NAME_LIST node is always created, possibly empty.
pub fn name_list<P: BaseParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::NAME_LIST);
    let ok = name(p);
    while ok && p.at(SyntaxKind::COMMA) && p.nth(1) == SyntaxKind::IDENT {
        p.bump();
        name(p);
    }
    p.finish_node();
    ok
}

pub fn at_qual_name<P: BaseParser>(p: &P) -> bool {
    is_name_segment(p.current_kind())
        || (p.at(SyntaxKind::THIS_KW) && p.nth(1) == SyntaxKind::SLASH)
}

/// QualName = ('this' '/')? Segment ('/' Segment)*
pub fn qual_name<P: BaseParser>(p: &mut P) -> bool {
    if !at_qual_name(p) {
        let message = format!("expected qualified name, found {}", found(p));
        p.error(ErrorCode::E0301, message);
        return false;
    }
    p.start_node(SyntaxKind::QUAL_NAME);
    if p.at(SyntaxKind::THIS_KW) {
        p.bump();
        p.bump(); // /
    }
    if is_name_segment(p.current_kind()) {
        p.bump();
    } else {
        p.error(ErrorCode::E0301, "expected name after 'this/'".to_string());
    }
    while p.at(SyntaxKind::SLASH) && is_name_segment(p.nth(1)) {
        p.bump();
        p.bump();
    }
    p.finish_node();
    true
}

/// QualNameList = QualName (',' QualName)*
pub fn qual_name_list<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::QUAL_NAME_LIST);
    qual_name(p);
    while p.at(SyntaxKind::COMMA) {
        p.bump();
        qual_name(p);
    }
    p.finish_node();
}

/// Optional multiplicity keyword wrapped in a MULT node
pub fn opt_mult<P: BaseParser>(p: &mut P, allowed: &[SyntaxKind]) -> bool {
    if p.at_any(allowed) {
        p.start_node(SyntaxKind::MULT);
        p.bump();
        p.finish_node();
        true
    } else {
        false
    }
}

/// Bounded lookahead: do the tokens at `offset` read `disj? name (, name)* :`?
///
/// This separates a quantifier (`some x: A | ...`) from a multiplicity
/// prefix (`some x`) and a comprehension from a block.
pub fn at_decl_list<P: BaseParser>(p: &P, offset: usize) -> bool {
    let mut i = offset;
    if p.nth(i) == SyntaxKind::DISJ_KW {
        i += 1;
    }
    if p.nth(i) != SyntaxKind::IDENT {
        return false;
    }
    i += 1;
    while p.nth(i) == SyntaxKind::COMMA && p.nth(i + 1) == SyntaxKind::IDENT {
        i += 2;
    }
    p.nth(i) == SyntaxKind::COLON
}

/// Run `item` until `end`, a recovery point or end of input, force-skipping
/// a token whenever an iteration makes no progress
pub fn list_until<P: BaseParser>(
    p: &mut P,
    end: SyntaxKind,
    code: ErrorCode,
    mut item: impl FnMut(&mut P),
) {
    while !p.at(end) && !p.at_eof() {
        let before = p.get_pos();
        item(p);
        if p.get_pos() == before {
            if p.at_recovery_point() {
                break;
            }
            let message = format!("unexpected {}", found(p));
            p.bump_error(code, message);
        }
    }
}
