//! Atoms: constants, names, parenthesized expressions, blocks and
//! comprehensions

use super::super::{BaseParser, at_decl_list, list_until, qual_name};
use super::binders::quant_decls;
use super::{expr, operators};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::grammar::is_name_segment;
use crate::parser::syntax_kind::SyntaxKind;

/// Whether a token of `kind` can begin an expression
pub fn can_start_expr(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::NUMBER
            | SyntaxKind::MINUS
            | SyntaxKind::NONE_KW
            | SyntaxKind::UNIV_KW
            | SyntaxKind::IDEN_KW
            | SyntaxKind::THIS_KW
            | SyntaxKind::AT
            | SyntaxKind::ATOM_NAME
            | SyntaxKind::SEXPR
            | SyntaxKind::L_PAREN
            | SyntaxKind::L_BRACE
            | SyntaxKind::ALL_KW
            | SyntaxKind::SUM_KW
            | SyntaxKind::LET_KW
            | SyntaxKind::BIND_KW
    ) || is_name_segment(kind)
        || operators::prefix_op(kind).is_some()
}

/// Parse an atom; false (nothing consumed) when the current token is not one
pub(super) fn atom<P: BaseParser>(p: &mut P) -> bool {
    match p.current_kind() {
        SyntaxKind::NUMBER | SyntaxKind::NONE_KW | SyntaxKind::UNIV_KW | SyntaxKind::IDEN_KW => {
            token_node(p, SyntaxKind::CONST_EXPR);
        }
        SyntaxKind::MINUS if p.nth(1) == SyntaxKind::NUMBER => {
            p.start_node(SyntaxKind::CONST_EXPR);
            p.bump();
            p.bump();
            p.finish_node();
        }
        SyntaxKind::THIS_KW if p.nth(1) != SyntaxKind::SLASH => {
            token_node(p, SyntaxKind::THIS_EXPR);
        }
        SyntaxKind::THIS_KW => name_ref(p),
        kind if is_name_segment(kind) => name_ref(p),
        SyntaxKind::AT if p.nth(1) == SyntaxKind::IDENT => {
            p.start_node(SyntaxKind::AT_NAME_EXPR);
            p.bump();
            p.start_node(SyntaxKind::NAME);
            p.bump();
            p.finish_node();
            p.finish_node();
        }
        SyntaxKind::ATOM_NAME => token_node(p, SyntaxKind::ATOM_EXPR),
        SyntaxKind::SEXPR => token_node(p, SyntaxKind::SEXPR_EXPR),
        SyntaxKind::L_PAREN => paren(p),
        SyntaxKind::L_BRACE if at_decl_list(p, 1) => comprehension(p),
        SyntaxKind::L_BRACE => block(p),
        _ => return false,
    }
    true
}

fn token_node<P: BaseParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    p.finish_node();
}

fn name_ref<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAME_REF);
    qual_name(p);
    p.finish_node();
}

/// ParenExpr = '(' Expr ')'
fn paren<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::PAREN_EXPR);
    let opened_at = p.current_range();
    p.bump();
    p.push_context(ParseContext::Parenthesized);
    expr(p);
    p.pop_context();
    p.expect_closing(SyntaxKind::R_PAREN, opened_at);
    p.finish_node();
}

/// Block = '{' Expr* '}'
pub fn block<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::BLOCK);
    let opened_at = p.current_range();
    p.expect(SyntaxKind::L_BRACE);
    p.push_context(ParseContext::Block);
    list_until(p, SyntaxKind::R_BRACE, ErrorCode::E0401, |p| {
        expr(p);
    });
    p.pop_context();
    p.expect_closing(SyntaxKind::R_BRACE, opened_at);
    p.finish_node();
}

/// Comprehension = '{' QuantDecl (',' QuantDecl)* ('|' Expr | Block)? '}'
fn comprehension<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::COMPREHENSION_EXPR);
    let opened_at = p.current_range();
    p.bump();
    p.push_context(ParseContext::Block);
    quant_decls(p);
    if p.eat(SyntaxKind::BAR) {
        expr(p);
    } else if p.at(SyntaxKind::L_BRACE) {
        block(p);
    }
    p.pop_context();
    p.expect_closing(SyntaxKind::R_BRACE, opened_at);
    p.finish_node();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_start_expr() {
        assert!(can_start_expr(SyntaxKind::IDENT));
        assert!(can_start_expr(SyntaxKind::HASH));
        assert!(can_start_expr(SyntaxKind::ALWAYS_KW));
        assert!(can_start_expr(SyntaxKind::LET_KW));
        assert!(!can_start_expr(SyntaxKind::R_BRACE));
        assert!(!can_start_expr(SyntaxKind::BAR));
        assert!(!can_start_expr(SyntaxKind::ARROW));
    }
}
