//! Instances and partial-instance bounds
//!
//! ```text
//! InstDecl       = 'inst' Name Bounds Scope?
//! Bounds         = 'exactly'? ( '{' Bound* '}' | QualName )
//! Bound          = BoundLHS CompareOp BindRHSUnion | 'no' BoundLHS | QualName
//! BoundLHS       = '#'? QualName ('.' QualName)*
//! BindRHSUnion   = BindRHSProduct ('+' BindRHSProduct)*
//! BindRHSProduct = BindRHSAtom (('->' | ',') BindRHSAtom)*
//! BindRHSAtom    = ATOM_NAME | '-'? NUMBER | 'none' | QualName | '(' BindRHSUnion ')'
//! ```

use super::super::{
    BaseParser, at_qual_name, found, is_name_segment, list_until, name, qual_name, skip_nested,
};
use super::commands::{at_scope, scope};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::syntax_kind::SyntaxKind;

const BOUND_OPS: &[SyntaxKind] = &[
    SyntaxKind::IN_KW,
    SyntaxKind::IS_KW,
    SyntaxKind::EQ,
    SyntaxKind::NI_KW,
    SyntaxKind::LT,
    SyntaxKind::GT,
    SyntaxKind::LT_EQ,
    SyntaxKind::GT_EQ,
];

pub fn inst_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::INST_DECL);
    p.bump();
    name(p);
    bounds(p);
    if at_scope(p, 0) {
        scope(p);
    }
    p.finish_node();
}

pub fn bounds<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::BOUNDS);
    p.eat(SyntaxKind::EXACTLY_KW);
    if p.at(SyntaxKind::L_BRACE) {
        let opened_at = p.current_range();
        p.bump();
        p.push_context(ParseContext::Bounds);
        list_until(p, SyntaxKind::R_BRACE, ErrorCode::E0603, |p| {
            if p.at(SyntaxKind::NO_KW) || p.at(SyntaxKind::HASH) || at_qual_name(p) {
                bound(p);
            }
        });
        p.pop_context();
        p.expect_closing(SyntaxKind::R_BRACE, opened_at);
    } else if at_qual_name(p) {
        qual_name(p);
    } else {
        let message = format!("expected bounds block or instance name, found {}", found(p));
        p.error(ErrorCode::E0603, message);
    }
    p.finish_node();
}

fn bound<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::BOUND);
    if p.eat(SyntaxKind::NO_KW) {
        bound_lhs(p);
    } else {
        let simple = bound_lhs(p);
        if p.at_any(BOUND_OPS) {
            p.start_node(SyntaxKind::COMPARE_OP);
            p.bump();
            p.finish_node();
            bind_rhs_union(p);
        } else if !simple {
            let message = format!("expected 'in', 'is', '=' or 'ni' in bound, found {}", found(p));
            p.error(ErrorCode::E0603, message);
        }
    }
    p.finish_node();
}

/// Returns true when the left-hand side is a plain qualified name
fn bound_lhs<P: BaseParser>(p: &mut P) -> bool {
    p.start_node(SyntaxKind::BOUND_LHS);
    let mut simple = !p.eat(SyntaxKind::HASH);
    qual_name(p);
    while p.at(SyntaxKind::DOT) && is_name_segment(p.nth(1)) {
        simple = false;
        p.bump();
        qual_name(p);
    }
    p.finish_node();
    simple
}

fn bind_rhs_union<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::BIND_RHS_UNION);
    bind_rhs_product(p);
    while p.eat(SyntaxKind::PLUS) {
        bind_rhs_product(p);
    }
    p.finish_node();
}

fn bind_rhs_product<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::BIND_RHS_PRODUCT);
    bind_rhs_atom(p);
    while p.at(SyntaxKind::ARROW) || at_tuple_comma(p) {
        p.bump();
        bind_rhs_atom(p);
    }
    p.finish_node();
}

/// A `,` continues a tuple only if a value follows that does not open the
/// next bound
fn at_tuple_comma<P: BaseParser>(p: &P) -> bool {
    if !p.at(SyntaxKind::COMMA) {
        return false;
    }
    match p.nth(1) {
        SyntaxKind::ATOM_NAME
        | SyntaxKind::NUMBER
        | SyntaxKind::MINUS
        | SyntaxKind::NONE_KW
        | SyntaxKind::L_PAREN => true,
        kind if is_name_segment(kind) => {
            let next = p.nth(2);
            next != SyntaxKind::DOT && !BOUND_OPS.contains(&next)
        }
        _ => false,
    }
}

fn bind_rhs_atom<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::BIND_RHS_ATOM);
    match p.current_kind() {
        SyntaxKind::ATOM_NAME | SyntaxKind::NUMBER | SyntaxKind::NONE_KW => p.bump(),
        SyntaxKind::MINUS if p.nth(1) == SyntaxKind::NUMBER => {
            p.bump();
            p.bump();
        }
        SyntaxKind::L_PAREN => {
            if p.enter_nesting() {
                let opened_at = p.current_range();
                p.bump();
                bind_rhs_union(p);
                p.exit_nesting();
                p.expect_closing(SyntaxKind::R_PAREN, opened_at);
            } else {
                skip_nested(p);
            }
        }
        _ if at_qual_name(p) => {
            qual_name(p);
        }
        _ => {
            let message = format!("expected atom, number or name in bound, found {}", found(p));
            p.error(ErrorCode::E0604, message);
        }
    }
    p.finish_node();
}
