//! Predicates, functions and facts

use super::super::{
    BaseParser, HELPER_MULT, found, is_name_segment, name, name_list, opt_mult, qual_name,
};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::grammar::expressions::{block, expr};
use crate::parser::syntax_kind::{SyntaxKind, kind_to_name};

/// PredDecl = 'pred' 'wheat'? (QualName '.')? Name ParaDecls? Block
pub fn pred_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::PRED_DECL);
    p.bump();
    if p.at(SyntaxKind::WHEAT_KW) {
        p.start_node(SyntaxKind::PRED_TYPE);
        p.bump();
        p.finish_node();
    }
    receiver(p);
    name(p);
    if p.at(SyntaxKind::L_PAREN) || p.at(SyntaxKind::L_BRACKET) {
        para_decls(p);
    }
    body(p, SyntaxKind::PRED_KW);
    p.finish_node();
}

/// FunDecl = 'fun' (QualName '.')? Name ParaDecls? ':' HelperMult? Expr Block
pub fn fun_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::FUN_DECL);
    p.bump();
    receiver(p);
    name(p);
    if p.at(SyntaxKind::L_PAREN) || p.at(SyntaxKind::L_BRACKET) {
        para_decls(p);
    }
    p.expect(SyntaxKind::COLON);
    opt_mult(p, HELPER_MULT);
    expr(p);
    body(p, SyntaxKind::FUN_KW);
    p.finish_node();
}

/// FactDecl = 'fact' Name? Block
pub fn fact_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::FACT_DECL);
    p.bump();
    if p.at(SyntaxKind::IDENT) {
        name(p);
    }
    body(p, SyntaxKind::FACT_KW);
    p.finish_node();
}

fn body<P: BaseParser>(p: &mut P, owner: SyntaxKind) {
    if p.at(SyntaxKind::L_BRACE) {
        block(p);
    } else {
        let message = format!(
            "expected '{{' to start the {} body, found {}",
            kind_to_name(owner),
            found(p)
        );
        p.error(ErrorCode::E0306, message);
    }
}

/// `Sig.` in front of a predicate or function name
fn at_receiver<P: BaseParser>(p: &P) -> bool {
    let mut i = 0;
    if p.nth(0) == SyntaxKind::THIS_KW && p.nth(1) == SyntaxKind::SLASH {
        i = 2;
    }
    if !is_name_segment(p.nth(i)) {
        return false;
    }
    i += 1;
    while p.nth(i) == SyntaxKind::SLASH && is_name_segment(p.nth(i + 1)) {
        i += 2;
    }
    p.nth(i) == SyntaxKind::DOT
}

fn receiver<P: BaseParser>(p: &mut P) {
    if at_receiver(p) {
        p.start_node(SyntaxKind::RECEIVER);
        qual_name(p);
        p.bump(); // .
        p.finish_node();
    }
}

/// ParaDecls = '(' ParaDeclList? ')' | '[' ParaDeclList? ']'
pub fn para_decls<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::PARA_DECLS);
    let close = if p.at(SyntaxKind::L_PAREN) {
        SyntaxKind::R_PAREN
    } else {
        SyntaxKind::R_BRACKET
    };
    let opened_at = p.current_range();
    p.bump();
    p.push_context(ParseContext::ParameterList);

    while !p.at(close) && !p.at_eof() {
        if p.at(SyntaxKind::IDENT) || p.at(SyntaxKind::DISJ_KW) {
            para_decl(p);
        } else if p.at_recovery_point() {
            break;
        } else {
            let message = format!("expected parameter, found {}", found(p));
            p.error_recover(ErrorCode::E0301, message, &[SyntaxKind::COMMA, close]);
        }
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }

    p.pop_context();
    p.expect_closing(close, opened_at);
    p.finish_node();
}

/// ParaDecl = 'disj'? NameList ':' HelperMult? Expr
fn para_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::PARA_DECL);
    p.eat(SyntaxKind::DISJ_KW);
    name_list(p);
    p.expect(SyntaxKind::COLON);
    opt_mult(p, HELPER_MULT);
    expr(p);
    p.finish_node();
}
