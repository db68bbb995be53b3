//! Run/check commands and scopes
//!
//! ```text
//! CmdDecl   = (Name ':')? ('run' | 'check') (QualName | Block)? Scope? ('for' Bounds)?
//! Scope     = 'for' NUMBER ('but' Typescope (',' Typescope)*)?
//!           | 'for' Typescope (',' Typescope)*
//! Typescope = 'exactly'? NUMBER QualName
//! ```

use super::super::{BaseParser, at_qual_name, found, is_name_segment, name, qual_name};
use super::bounds::bounds;
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::grammar::expressions::block;
use crate::parser::syntax_kind::SyntaxKind;

pub fn cmd_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::CMD_DECL);
    if p.at(SyntaxKind::IDENT) {
        name(p);
        p.bump(); // :
    }
    if p.at(SyntaxKind::RUN_KW) || p.at(SyntaxKind::CHECK_KW) {
        p.bump();
    } else {
        let message = format!("expected 'run' or 'check', found {}", found(p));
        p.error(ErrorCode::E0205, message);
    }
    if at_qual_name(p) {
        qual_name(p);
    } else if p.at(SyntaxKind::L_BRACE) {
        block(p);
    }
    scope_and_bounds(p);
    p.finish_node();
}

/// Does a scope (rather than bounds) start after the `for` at `offset`?
pub(super) fn at_scope<P: BaseParser>(p: &P, offset: usize) -> bool {
    p.nth(offset) == SyntaxKind::FOR_KW
        && (p.nth(offset + 1) == SyntaxKind::NUMBER
            || (p.nth(offset + 1) == SyntaxKind::EXACTLY_KW
                && p.nth(offset + 2) == SyntaxKind::NUMBER))
}

/// Scope? ('for' Bounds)?
pub fn scope_and_bounds<P: BaseParser>(p: &mut P) {
    if at_scope(p, 0) {
        scope(p);
    }
    if p.eat(SyntaxKind::FOR_KW) {
        bounds(p);
    }
}

pub fn scope<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::SCOPE);
    p.push_context(ParseContext::Scope);
    p.expect(SyntaxKind::FOR_KW);

    let typescope_here = p.at(SyntaxKind::EXACTLY_KW)
        || (p.at(SyntaxKind::NUMBER)
            && (is_name_segment(p.nth(1))
                || (p.nth(1) == SyntaxKind::THIS_KW && p.nth(2) == SyntaxKind::SLASH)));

    if typescope_here {
        typescopes(p);
    } else if p.at(SyntaxKind::NUMBER) {
        p.bump();
        if p.eat(SyntaxKind::BUT_KW) {
            typescopes(p);
        }
    } else {
        let message = format!("expected scope, found {}", found(p));
        p.error(ErrorCode::E0601, message);
    }

    p.pop_context();
    p.finish_node();
}

fn typescopes<P: BaseParser>(p: &mut P) {
    typescope(p);
    while p.at(SyntaxKind::COMMA)
        && matches!(p.nth(1), SyntaxKind::NUMBER | SyntaxKind::EXACTLY_KW)
    {
        p.bump();
        typescope(p);
    }
}

fn typescope<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPESCOPE);
    p.eat(SyntaxKind::EXACTLY_KW);
    if p.at(SyntaxKind::NUMBER) {
        p.bump();
        qual_name(p);
    } else {
        let message = format!("expected bound number in typescope, found {}", found(p));
        p.error(ErrorCode::E0602, message);
    }
    p.finish_node();
}
