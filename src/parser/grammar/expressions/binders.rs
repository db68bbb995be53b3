//! Level-0 binders: quantifiers, `let` and `bind`
//!
//! A binder may appear in any prefix position and its body extends as far
//! right as possible, so `a and all x: A | p or q` reads the quantifier body
//! as `p or q`.

use super::super::{BaseParser, HELPER_MULT, at_decl_list, found, name, name_list, opt_mult};
use super::atoms::block;
use super::expr;
use super::operators::QUANTIFIERS;
use crate::parser::errors::ErrorCode;
use crate::parser::syntax_kind::{SyntaxKind, kind_to_name};

/// A quantifier keyword followed by a declaration list
pub fn at_quantifier<P: BaseParser>(p: &P) -> bool {
    p.at_any(QUANTIFIERS) && at_decl_list(p, 1)
}

pub(super) fn at_binder<P: BaseParser>(p: &P) -> bool {
    matches!(
        p.current_kind(),
        SyntaxKind::ALL_KW | SyntaxKind::SUM_KW | SyntaxKind::LET_KW | SyntaxKind::BIND_KW
    ) || at_quantifier(p)
}

pub(super) fn binder<P: BaseParser>(p: &mut P) {
    match p.current_kind() {
        SyntaxKind::LET_KW => let_like(p, SyntaxKind::LET_EXPR),
        SyntaxKind::BIND_KW => let_like(p, SyntaxKind::BIND_EXPR),
        _ => quantified(p),
    }
}

/// QuantExpr = Quant QuantDecl (',' QuantDecl)* ('|' Expr | Block)
fn quantified<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::QUANT_EXPR);
    let quantifier = p.current_kind();
    p.bump();
    if at_decl_list(p, 0) {
        quant_decls(p);
    } else {
        // `all` and `sum` only exist as binders
        let message = format!(
            "expected declarations after {}, found {}",
            kind_to_name(quantifier),
            found(p)
        );
        p.error(ErrorCode::E0405, message);
    }
    quant_body(p);
    p.finish_node();
}

/// QuantDecl (',' QuantDecl)*
pub fn quant_decls<P: BaseParser>(p: &mut P) {
    quant_decl(p);
    while p.at(SyntaxKind::COMMA) && at_decl_list(p, 1) {
        p.bump();
        quant_decl(p);
    }
}

/// QuantDecl = 'disj'? NameList ':' Mult? Expr
fn quant_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::QUANT_DECL);
    p.eat(SyntaxKind::DISJ_KW);
    name_list(p);
    p.expect(SyntaxKind::COLON);
    opt_mult(p, HELPER_MULT);
    expr(p);
    p.finish_node();
}

/// '|' Expr | Block
pub fn quant_body<P: BaseParser>(p: &mut P) {
    if p.eat(SyntaxKind::BAR) {
        expr(p);
    } else if p.at(SyntaxKind::L_BRACE) {
        block(p);
    } else {
        let message = format!("expected '|' or '{{', found {}", found(p));
        p.error(ErrorCode::E0205, message);
    }
}

/// LetExpr = 'let' LetDecl (',' LetDecl)* ('|' Expr | Block)
fn let_like<P: BaseParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    let_decl(p);
    while p.at(SyntaxKind::COMMA) && p.nth(1) == SyntaxKind::IDENT {
        p.bump();
        let_decl(p);
    }
    quant_body(p);
    p.finish_node();
}

/// LetDecl = Name '=' Expr
fn let_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::LET_DECL);
    name(p);
    p.expect(SyntaxKind::EQ);
    expr(p);
    p.finish_node();
}
