//! Tests, examples and property assertions
//!
//! ```text
//! TestDecl       = (Name ':')? (QualName | Block)? Scope? ('for' Bounds)?
//!                  'is' ('sat' | 'unsat' | 'theorem' | 'forge_error' FILE_PATH?)
//! TestExpectDecl = 'test'? 'expect' Name? '{' TestDecl* '}'
//! TestSuiteDecl  = 'test' 'suite' 'for' Name '{' TestConstruct* '}'
//! ExampleDecl    = 'example' Name 'is' Expr 'for' Bounds
//! ```
//!
//! Every `assert` form shares the prefix `'assert' Expr 'is'`, so the asserted
//! expression is parsed first and the tag after `is` picks the node kind.

use super::super::{BaseParser, at_decl_list, at_qual_name, found, list_until, name, qual_name};
use super::bounds::bounds;
use super::commands::scope_and_bounds;
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::grammar::expressions::{
    block, continue_expression, expr, quant_body, quant_decls,
};
use crate::parser::syntax_kind::SyntaxKind;

pub fn test_expect_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::TEST_EXPECT_DECL);
    p.eat(SyntaxKind::TEST_KW);
    p.expect(SyntaxKind::EXPECT_KW);
    if p.at(SyntaxKind::IDENT) {
        name(p);
    }
    test_block(p, ParseContext::TestExpectBody, |p| {
        if p.at(SyntaxKind::IDENT) || p.at(SyntaxKind::L_BRACE) || at_qual_name(p) {
            test_decl(p);
        }
    });
    p.finish_node();
}

pub fn test_suite_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::TEST_SUITE_DECL);
    p.bump(); // test
    p.bump(); // suite
    p.expect(SyntaxKind::FOR_KW);
    name(p);
    test_block(p, ParseContext::TestSuiteBody, |p| match p.current_kind() {
        SyntaxKind::EXAMPLE_KW => example_decl(p),
        SyntaxKind::EXPECT_KW => test_expect_decl(p),
        SyntaxKind::TEST_KW if p.nth(1) == SyntaxKind::EXPECT_KW => test_expect_decl(p),
        SyntaxKind::ASSERT_KW => {
            if !assertion(p) {
                p.error(
                    ErrorCode::E0703,
                    "plain assertions are not allowed in a test suite".to_string(),
                );
            }
        }
        _ if p.at_recovery_point() => {}
        _ => {
            let message = format!(
                "expected 'example', 'expect' or 'assert' in test suite, found {}",
                found(p)
            );
            p.bump_error(ErrorCode::E0703, message);
        }
    });
    p.finish_node();
}

fn test_block<P: BaseParser>(p: &mut P, context: ParseContext, item: impl FnMut(&mut P)) {
    p.start_node(SyntaxKind::TEST_BLOCK);
    let opened_at = p.current_range();
    if p.expect(SyntaxKind::L_BRACE) {
        p.push_context(context);
        list_until(p, SyntaxKind::R_BRACE, ErrorCode::E0703, item);
        p.pop_context();
        p.expect_closing(SyntaxKind::R_BRACE, opened_at);
    }
    p.finish_node();
}

fn test_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::TEST_DECL);
    if p.at(SyntaxKind::IDENT) && p.nth(1) == SyntaxKind::COLON {
        name(p);
        p.bump(); // :
    }
    if at_qual_name(p) {
        qual_name(p);
    } else if p.at(SyntaxKind::L_BRACE) {
        block(p);
    }
    scope_and_bounds(p);
    p.expect(SyntaxKind::IS_KW);
    match p.current_kind() {
        SyntaxKind::SAT_KW | SyntaxKind::UNSAT_KW | SyntaxKind::THEOREM_KW => p.bump(),
        SyntaxKind::FORGE_ERROR_KW => {
            p.bump();
            p.eat(SyntaxKind::FILE_PATH);
        }
        _ => {
            let message = format!(
                "expected 'sat', 'unsat', 'theorem' or 'forge_error', found {}",
                found(p)
            );
            p.error(ErrorCode::E0701, message);
        }
    }
    p.finish_node();
}

pub fn example_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::EXAMPLE_DECL);
    p.bump();
    name(p);
    p.expect(SyntaxKind::IS_KW);
    expr(p);
    p.expect(SyntaxKind::FOR_KW);
    bounds(p);
    p.finish_node();
}

/// Parse any `assert` paragraph
///
/// Returns false for a plain `assert name? { ... }`, true for the property,
/// satisfiability and consistency forms (and for malformed ones, which are
/// already reported).
pub fn assertion<P: BaseParser>(p: &mut P) -> bool {
    let checkpoint = p.checkpoint();
    p.bump(); // assert

    // assert name { ... }
    if p.at(SyntaxKind::IDENT) && p.nth(1) == SyntaxKind::L_BRACE {
        p.start_node_at(checkpoint, SyntaxKind::ASSERT_DECL);
        name(p);
        block(p);
        p.finish_node();
        return false;
    }

    let mut quantified = false;
    if p.at(SyntaxKind::L_BRACE) && !at_decl_list(p, 1) {
        let body = p.checkpoint();
        block(p);
        continue_expression(p, body, 0);
        if !p.at(SyntaxKind::IS_KW) {
            p.start_node_at(checkpoint, SyntaxKind::ASSERT_DECL);
            p.finish_node();
            return false;
        }
    } else if p.at(SyntaxKind::ALL_KW) && at_decl_list(p, 1) {
        // Parsed inline: the quantified property form keeps the declarations
        // and body as its own children
        let body = p.checkpoint();
        p.bump();
        quant_decls(p);
        quant_body(p);
        if p.at(SyntaxKind::IS_KW)
            && matches!(p.nth(1), SyntaxKind::SUFFICIENT_KW | SyntaxKind::NECESSARY_KW)
        {
            quantified = true;
        } else {
            p.start_node_at(body, SyntaxKind::QUANT_EXPR);
            p.finish_node();
        }
    } else {
        expr(p);
    }

    let tag = if p.at(SyntaxKind::IS_KW) {
        p.nth(1)
    } else {
        SyntaxKind::ERROR
    };
    let kind = match tag {
        SyntaxKind::SUFFICIENT_KW | SyntaxKind::NECESSARY_KW if quantified => {
            SyntaxKind::QUANTIFIED_PROPERTY_DECL
        }
        SyntaxKind::SUFFICIENT_KW | SyntaxKind::NECESSARY_KW => SyntaxKind::PROPERTY_DECL,
        SyntaxKind::SAT_KW
        | SyntaxKind::UNSAT_KW
        | SyntaxKind::THEOREM_KW
        | SyntaxKind::FORGE_ERROR_KW => SyntaxKind::SATISFIABILITY_DECL,
        SyntaxKind::CONSISTENT_KW | SyntaxKind::INCONSISTENT_KW => SyntaxKind::CONSISTENCY_DECL,
        _ => SyntaxKind::ASSERT_DECL,
    };

    p.start_node_at(checkpoint, kind);
    match kind {
        SyntaxKind::PROPERTY_DECL | SyntaxKind::QUANTIFIED_PROPERTY_DECL => {
            p.bump(); // is
            p.bump(); // sufficient | necessary
            p.expect(SyntaxKind::FOR_KW);
            name(p);
            if kind == SyntaxKind::QUANTIFIED_PROPERTY_DECL && p.at(SyntaxKind::L_BRACKET) {
                property_args(p);
            }
            scope_and_bounds(p);
        }
        SyntaxKind::SATISFIABILITY_DECL => {
            p.bump(); // is
            let forge_error = p.at(SyntaxKind::FORGE_ERROR_KW);
            p.bump();
            if forge_error {
                p.eat(SyntaxKind::FILE_PATH);
            }
            scope_and_bounds(p);
        }
        SyntaxKind::CONSISTENCY_DECL => {
            p.bump(); // is
            p.bump(); // consistent | inconsistent
            p.expect(SyntaxKind::WITH_KW);
            name(p);
            scope_and_bounds(p);
        }
        _ => {
            let message = format!(
                "expected 'is' followed by 'sufficient', 'necessary', 'sat', 'unsat', \
                 'consistent' or 'inconsistent', found {}",
                found(p)
            );
            p.error(ErrorCode::E0702, message);
        }
    }
    p.finish_node();
    true
}

/// `[e1, e2]` arguments of a quantified property
fn property_args<P: BaseParser>(p: &mut P) {
    let opened_at = p.current_range();
    p.bump();
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
    p.expect_closing(SyntaxKind::R_BRACKET, opened_at);
}
