//! Signature declarations
//!
//! ```text
//! SigDecl   = ('var' | 'abstract' | Mult)* 'sig' NameList SigExt?
//!             '{' (ArrowDecl (',' ArrowDecl)* ','?)? '}' Block?
//! SigExt    = 'extends' QualName | 'in' QualName ('+' QualName)*
//! ArrowDecl = 'var'? NameList ':' ArrowMult? Expr
//! ```

use super::super::{ARROW_MULT, BaseParser, SIG_MULT, found, name_list, opt_mult, qual_name};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::grammar::expressions::{block, expr_at, operators::ARROW_LEVEL};
use crate::parser::syntax_kind::SyntaxKind;

pub fn sig_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::SIG_DECL);

    loop {
        match p.current_kind() {
            SyntaxKind::VAR_KW => {
                p.check_temporal();
                p.bump();
            }
            SyntaxKind::ABSTRACT_KW => p.bump(),
            kind if SIG_MULT.contains(&kind) => {
                opt_mult(p, SIG_MULT);
            }
            _ => break,
        }
    }

    p.expect_code(SyntaxKind::SIG_KW, ErrorCode::E0302);
    name_list(p);

    if p.at(SyntaxKind::EXTENDS_KW) || p.at(SyntaxKind::IN_KW) {
        sig_ext(p);
    }

    field_list(p);

    if p.at(SyntaxKind::L_BRACE) {
        block(p);
    }

    p.finish_node();
}

fn sig_ext<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::SIG_EXT);
    let subset = p.at(SyntaxKind::IN_KW);
    p.bump();
    qual_name(p);
    if subset {
        while p.at(SyntaxKind::PLUS) {
            p.bump();
            qual_name(p);
        }
    }
    p.finish_node();
}

/// The `{ ... }` field block; the node exists even when the block is missing
fn field_list<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::FIELD_LIST);
    let opened_at = p.current_range();
    if !p.expect(SyntaxKind::L_BRACE) {
        p.finish_node();
        return;
    }
    p.push_context(ParseContext::SigBody);

    loop {
        if p.at(SyntaxKind::R_BRACE) || p.at_eof() {
            break;
        }
        if p.at(SyntaxKind::VAR_KW) || p.at(SyntaxKind::IDENT) {
            field_decl(p);
        } else if p.at(SyntaxKind::COMMA) {
            p.bump_error(ErrorCode::E0303, "empty field declaration".to_string());
            continue;
        } else if p.at_recovery_point() {
            break;
        } else {
            let message = format!("expected field declaration, found {}", found(p));
            p.error_recover(
                ErrorCode::E0303,
                message,
                &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
            );
        }

        if p.eat(SyntaxKind::COMMA) {
            continue;
        }
        if p.at(SyntaxKind::VAR_KW) || p.at(SyntaxKind::IDENT) {
            let message = format!("expected ',' between fields, found {}", found(p));
            p.error(ErrorCode::E0205, message);
        }
    }

    p.pop_context();
    p.expect_closing(SyntaxKind::R_BRACE, opened_at);
    p.finish_node();
}

fn field_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::FIELD_DECL);
    if p.at(SyntaxKind::VAR_KW) {
        p.check_temporal();
        p.bump();
    }
    name_list(p);
    p.expect(SyntaxKind::COLON);
    opt_mult(p, ARROW_MULT);
    expr_at(p, ARROW_LEVEL);
    p.finish_node();
}
