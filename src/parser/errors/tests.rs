//! Integration tests for the errors module

use super::*;
use crate::parser::SyntaxKind;
use rowan::{TextRange, TextSize};

#[test]
fn test_unclosed_block_points_at_opener() {
    let parse = crate::parser::parse_module("sig A {\n  f: set A\n");
    let err = parse.errors.last().unwrap();
    assert_eq!(err.code, ErrorCode::E0201);
    assert!(err.fatal);
    assert_eq!(err.related[0].message, "opened here");
    assert_eq!(err.related[0].range, TextRange::at(TextSize::new(6), TextSize::new(1)));
    assert_eq!(err.hint.as_deref(), Some("insert '}'"));
}

#[test]
fn test_error_code_exhaustiveness() {
    let codes = [
        ErrorCode::E0101,
        ErrorCode::E0102,
        ErrorCode::E0103,
        ErrorCode::E0104,
        ErrorCode::E0105,
        ErrorCode::E0201,
        ErrorCode::E0202,
        ErrorCode::E0203,
        ErrorCode::E0204,
        ErrorCode::E0205,
        ErrorCode::E0206,
        ErrorCode::E0301,
        ErrorCode::E0302,
        ErrorCode::E0303,
        ErrorCode::E0304,
        ErrorCode::E0305,
        ErrorCode::E0306,
        ErrorCode::E0307,
        ErrorCode::E0401,
        ErrorCode::E0402,
        ErrorCode::E0403,
        ErrorCode::E0404,
        ErrorCode::E0405,
        ErrorCode::E0406,
        ErrorCode::E0501,
        ErrorCode::E0502,
        ErrorCode::E0503,
        ErrorCode::E0601,
        ErrorCode::E0602,
        ErrorCode::E0603,
        ErrorCode::E0604,
        ErrorCode::E0701,
        ErrorCode::E0702,
        ErrorCode::E0703,
        ErrorCode::E0801,
        ErrorCode::E0802,
        ErrorCode::E0803,
        ErrorCode::E0804,
        ErrorCode::E0901,
        ErrorCode::E0902,
    ];

    for code in codes {
        assert_eq!(code.as_str().len(), 5);
        assert_eq!(code.to_string(), code.as_str());
        assert!(!code.default_message().is_empty());
        assert!(!code.category_description().is_empty());
    }
}

#[test]
fn test_context_recovery_sets_stop_at_closers() {
    for ctx in [
        ParseContext::SigBody,
        ParseContext::Block,
        ParseContext::Bounds,
        ParseContext::TestExpectBody,
        ParseContext::TestSuiteBody,
    ] {
        assert!(ctx.is_in_body());
        assert!(ctx.recovery_tokens().contains(&SyntaxKind::R_BRACE));
    }
}

#[test]
fn test_paragraph_start_tokens_are_keywords_or_literals() {
    for kind in PARAGRAPH_START {
        assert!(kind.is_keyword() || kind.is_literal(), "{kind:?}");
    }
}
