//! Expression parsing
//!
//! Precedence climbing over the levels in [`operators::OPERATOR_TABLE`]:
//!
//! ```text
//! binders (let, bind, quantifiers)
//!     → or → xor → iff → implies/else → and → until/release/since/triggered
//!     → ! always eventually ... → in = < > <= >= is ni → no some lone one two set
//!     → + - → # → ++ → & → -> → <: :> → e[..] → . → ' → ~ ^ * → atoms
//! ```
//!
//! The left operand is parsed first and wrapped afterwards with
//! `start_node_at(checkpoint, ..)` once an operator of a high enough level
//! shows up, so a node only exists when its operator does.

mod atoms;
mod binders;
pub mod operators;

use rowan::Checkpoint;

use super::{BaseParser, found, skip_nested};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::syntax_kind::{SyntaxKind, kind_to_name};

pub use atoms::{block, can_start_expr};
pub use binders::{at_quantifier, quant_body, quant_decls};
use operators::{
    ARROW_LEVEL, ARROW_OP_MULT, COMPARE_LEVEL, Fixity, IMPLIES_LEVEL, TEST_RESULTS, infix_op,
    prefix_op,
};

/// Parse an expression, reporting when there is none
pub fn expr<P: BaseParser>(p: &mut P) -> bool {
    expr_at(p, 0)
}

/// Parse an expression whose loosest operator is at `min` or tighter
pub fn expr_at<P: BaseParser>(p: &mut P, min: u8) -> bool {
    if expr_bp(p, min) {
        true
    } else {
        let message = format!("expected expression, found {}", found(p));
        p.error(ErrorCode::E0401, message);
        false
    }
}

/// ExprRoot = Expr EOF
pub fn expr_root<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::EXPR_ROOT);
    p.push_context(ParseContext::Expression);
    expr(p);
    if !p.at_eof() {
        let message = format!("unexpected {} after expression", found(p));
        p.error(ErrorCode::E0406, message);
        p.start_node(SyntaxKind::ERROR);
        while !p.at_eof() {
            p.bump();
        }
        p.finish_node();
    }
    p.pop_context();
    p.finish_node();
}

/// Parse without reporting; false when the current token cannot start an
/// expression (nothing is consumed then)
pub fn expr_bp<P: BaseParser>(p: &mut P, min: u8) -> bool {
    if !p.enter_nesting() {
        if !can_start_expr(p.current_kind()) {
            return false;
        }
        skip_nested(p);
        return true;
    }
    let checkpoint = p.checkpoint();
    let parsed = prefix(p);
    if parsed {
        continue_expression(p, checkpoint, min);
    }
    p.exit_nesting();
    parsed
}

/// Binders, prefix operators and atoms
fn prefix<P: BaseParser>(p: &mut P) -> bool {
    if binders::at_binder(p) {
        binders::binder(p);
        return true;
    }
    if let Some(row) = prefix_op(p.current_kind()) {
        let op = p.current_kind();
        p.start_node(row.node);
        if row.temporal {
            p.check_temporal();
        }
        p.bump();
        operand(p, row.operand_level(), op);
        p.finish_node();
        return true;
    }
    atoms::atom(p)
}

fn operand<P: BaseParser>(p: &mut P, min: u8, after: SyntaxKind) -> bool {
    if expr_bp(p, min) {
        true
    } else {
        let message = format!(
            "expected expression after {}, found {}",
            kind_to_name(after),
            found(p)
        );
        p.error(ErrorCode::E0402, message);
        false
    }
}

fn is_compare_op(kind: SyntaxKind) -> bool {
    infix_op(kind).is_some_and(|row| row.level == COMPARE_LEVEL)
}

/// Run the infix/postfix loop over an operand that started at `checkpoint`
pub fn continue_expression<P: BaseParser>(p: &mut P, checkpoint: Checkpoint, min: u8) {
    loop {
        let kind = p.current_kind();

        // `a !in b`, `a not = b`
        if matches!(kind, SyntaxKind::BANG | SyntaxKind::NOT_KW) && is_compare_op(p.nth(1)) {
            if COMPARE_LEVEL < min {
                break;
            }
            binary(p, checkpoint, SyntaxKind::COMPARE_EXPR, COMPARE_LEVEL + 1, kind);
            continue;
        }

        // `a set -> lone b`
        if ARROW_OP_MULT.contains(&kind) && p.nth(1) == SyntaxKind::ARROW {
            if ARROW_LEVEL < min {
                break;
            }
            binary(p, checkpoint, SyntaxKind::ARROW_EXPR, ARROW_LEVEL, kind);
            continue;
        }

        let Some(row) = infix_op(kind) else {
            break;
        };
        if row.level < min {
            break;
        }
        // `expr is sat` ends the expression of a test or assertion
        if kind == SyntaxKind::IS_KW && TEST_RESULTS.contains(&p.nth(1)) {
            break;
        }

        if row.fixity == Fixity::Postfix {
            p.start_node_at(checkpoint, row.node);
            if row.temporal {
                p.check_temporal();
            }
            if kind == SyntaxKind::L_BRACKET {
                box_join_args(p);
            } else {
                p.bump();
            }
            p.finish_node();
            continue;
        }

        if row.temporal {
            p.check_temporal();
        }
        binary(p, checkpoint, row.node, row.operand_level(), kind);
    }
}

fn binary<P: BaseParser>(
    p: &mut P,
    checkpoint: Checkpoint,
    node: SyntaxKind,
    rhs_level: u8,
    op: SyntaxKind,
) {
    p.start_node_at(checkpoint, node);
    match node {
        SyntaxKind::COMPARE_EXPR => compare_op(p),
        SyntaxKind::ARROW_EXPR => arrow_op(p),
        _ => p.bump(),
    }
    operand(p, rhs_level, op);
    if node == SyntaxKind::IMPLIES_EXPR && p.at(SyntaxKind::ELSE_KW) {
        p.bump();
        operand(p, IMPLIES_LEVEL, SyntaxKind::ELSE_KW);
    }
    p.finish_node();
}

/// CompareOp = ('!' | 'not')? ('in' | '=' | '<' | '>' | '<=' | '>=' | 'is' | 'ni')
fn compare_op<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::COMPARE_OP);
    if p.at(SyntaxKind::BANG) || p.at(SyntaxKind::NOT_KW) {
        p.bump();
    }
    p.bump();
    p.finish_node();
}

/// ArrowOp = Mult? '->' Mult?
fn arrow_op<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::ARROW_OP);
    if p.at_any(ARROW_OP_MULT) {
        p.bump();
    }
    p.bump(); // ->
    if p.at_any(ARROW_OP_MULT) && !at_quantifier(p) && can_start_expr(p.nth(1)) {
        p.bump();
    }
    p.finish_node();
}

/// BoxJoin tail = '[' (Expr (',' Expr)*)? ']'
fn box_join_args<P: BaseParser>(p: &mut P) {
    p.bump(); // [
    p.push_context(ParseContext::ArgumentList);
    p.start_node(SyntaxKind::EXPR_LIST);
    if !p.at(SyntaxKind::R_BRACKET) {
        expr(p);
        while p.eat(SyntaxKind::COMMA) {
            expr(p);
        }
    }
    p.finish_node();
    p.pop_context();
    p.expect_code(SyntaxKind::R_BRACKET, ErrorCode::E0404);
}
