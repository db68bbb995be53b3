//! Error recovery, termination and configuration
//!
//! Every input, however malformed, yields a complete lossless tree; invalid
//! input yields at least one diagnostic.

#![allow(clippy::unwrap_used)]

use forge_syntax::{
    DiagnosticKind, ErrorCode, ParseConfig, SyntaxKind, TemporalMode, parse_expression,
    parse_expression_with, parse_module, parse_module_with,
};
use proptest::prelude::*;
use rstest::rstest;

fn codes(input: &str) -> Vec<ErrorCode> {
    parse_module(input).errors.iter().map(|e| e.code).collect()
}

fn count_kind(input: &str, kind: SyntaxKind) -> usize {
    parse_module(input)
        .syntax()
        .descendants()
        .filter(|n| n.kind() == kind)
        .count()
}

// =============================================================================
// RECOVERY
// =============================================================================

#[rstest]
#[case("sig A { f: }")]
#[case("sig A { f: set }")]
#[case("pred p[a: ] { }")]
#[case("pred p { a + }")]
#[case("pred p { all x | x }")]
#[case("fact { (a + b }")]
#[case("run p for")]
#[case("inst i { A = }")]
#[case("sig A {} ) sig B {}")]
#[case("}}}}")]
#[case("sig A { ?? }")]
#[case("assert foo is bogus for Bar")]
fn test_malformed_input_reports(#[case] input: &str) {
    let parse = parse_module(input);
    assert!(!parse.errors.is_empty(), "expected diagnostics for {input:?}");
    assert_eq!(parse.syntax().text().to_string(), input);
}

#[test]
fn test_recovery_continues_to_next_paragraph() {
    let input = "sig A { f: }\npred broken { a + }\nsig B {}\nrun p";
    assert!(!parse_module(input).ok());
    assert_eq!(count_kind(input, SyntaxKind::SIG_DECL), 2);
    assert_eq!(count_kind(input, SyntaxKind::PRED_DECL), 1);
    assert_eq!(count_kind(input, SyntaxKind::CMD_DECL), 1);
}

#[test]
fn test_stray_tokens_wrapped_in_error_node() {
    let input = "sig A {} ) ) sig B {}";
    assert_eq!(count_kind(input, SyntaxKind::ERROR), 1);
    assert_eq!(count_kind(input, SyntaxKind::SIG_DECL), 2);
}

#[test]
fn test_unclosed_delimiter_is_fatal() {
    let parse = parse_module("pred p { some A");
    assert!(parse.has_fatal());
    let failure = parse.into_result().unwrap_err();
    assert_eq!(failure.error.code, ErrorCode::E0201);
    assert_eq!(failure.partial.syntax().text().to_string(), "pred p { some A");
}

#[test]
fn test_recoverable_error_is_not_fatal() {
    let parse = parse_module("sig { }\nsig B {}");
    assert!(!parse.ok());
    assert!(!parse.has_fatal());
    assert!(parse.into_result().is_ok());
}

#[test]
fn test_missing_operand() {
    let parse = parse_expression("a + ");
    assert!(parse.errors.iter().any(|e| e.code == ErrorCode::E0402));
}

#[test]
fn test_trailing_tokens_after_expression() {
    let parse = parse_expression("a b");
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0406);
    let root = parse.syntax();
    assert_eq!(root.kind(), SyntaxKind::EXPR_ROOT);
    assert!(root.children().any(|n| n.kind() == SyntaxKind::ERROR));
}

#[test]
fn test_lexical_error_kind() {
    let parse = parse_module("sig A {}\n?");
    assert_eq!(parse.errors_of_kind(DiagnosticKind::Lexical).count(), 1);
}

// =============================================================================
// NESTING LIMIT
// =============================================================================

const DEEP: usize = 100_000;

#[rstest]
#[case("(", ")")]
#[case("{", "}")]
#[case("!", "")]
#[case("always ", "")]
fn test_deep_expression_nesting_is_cut_off(#[case] open: &str, #[case] close: &str) {
    let input = format!("{}a{}", open.repeat(DEEP), close.repeat(DEEP));
    let parse = parse_expression(&input);
    assert_eq!(parse.syntax().text().to_string(), input);
    assert_eq!(parse.errors.len(), 1, "{:?}", parse.errors.first());
    assert_eq!(parse.errors[0].code, ErrorCode::E0804);
    assert_eq!(parse.errors[0].kind, DiagnosticKind::FailedPredicate);
    assert!(!parse.has_fatal());
}

#[test]
fn test_nesting_below_limit_parses() {
    let input = format!("{}a{}", "(".repeat(200), ")".repeat(200));
    assert!(parse_expression(&input).ok());
}

#[test]
fn test_deep_nesting_inside_module_recovers() {
    let input = format!(
        "pred p {{ {}some A{} }}\ninst i {{ A = {}`A0{} }}\nsig B {{}}",
        "(".repeat(DEEP),
        ")".repeat(DEEP),
        "(".repeat(DEEP),
        ")".repeat(DEEP),
    );
    let parse = parse_module(&input);
    assert_eq!(parse.syntax().text().to_string(), input);
    assert_eq!(
        parse.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E0804, ErrorCode::E0804]
    );
    assert_eq!(count_kind(&input, SyntaxKind::SIG_DECL), 1);
}

#[test]
fn test_deep_unclosed_nesting_is_fatal() {
    let input = "(".repeat(DEEP);
    let parse = parse_expression(&input);
    assert_eq!(parse.syntax().text().to_string(), input);
    assert!(parse.errors.iter().any(|e| e.code == ErrorCode::E0804));
    assert!(parse.has_fatal());
}

// =============================================================================
// TEMPORAL MODE
// =============================================================================

#[rstest]
#[case("always some A")]
#[case("a until b")]
#[case("x' = x")]
#[case("eventually historically p")]
fn test_temporal_disabled(#[case] input: &str) {
    let config = ParseConfig::new().with_temporal(TemporalMode::Disabled);
    let parse = parse_expression_with(input, &config);
    assert!(
        parse.errors.iter().any(|e| e.code == ErrorCode::E0801),
        "expected E0801 for {input:?}, got {:?}",
        parse.errors
    );
    assert!(parse.errors_of_kind(DiagnosticKind::FailedPredicate).count() > 0);
    // the construct still gets its node
    assert_ne!(parse.syntax().first_child().unwrap().kind(), SyntaxKind::ERROR);
}

#[rstest]
#[case("always some A")]
#[case("a until b")]
#[case("x' = x")]
fn test_temporal_enabled_by_default(#[case] input: &str) {
    assert!(parse_expression(input).ok());
}

#[rstest]
#[case("#lang forge/temporal\nvar sig A {}", true)]
#[case("#lang forge\nvar sig A {}", false)]
#[case("var sig A {}", false)]
#[case("option problem_type temporal\nvar sig A {}", true)]
#[case("#lang forge\noption problem_type temporal\nfact { always some A }", true)]
#[case("fact { always some A }\noption problem_type temporal", false)]
fn test_temporal_from_lang_line(#[case] input: &str, #[case] accepted: bool) {
    let config = ParseConfig::new().with_temporal(TemporalMode::FromLangLine);
    let parse = parse_module_with(input, &config);
    let rejected = parse.errors.iter().any(|e| e.code == ErrorCode::E0801);
    assert_eq!(!rejected, accepted, "{input:?}: {:?}", parse.errors);
}

// =============================================================================
// PROPERTIES
// =============================================================================

const FRAGMENTS: &[&str] = &[
    "sig", "pred", "fun", "fact", "assert", "run", "check", "test", "expect", "suite", "for",
    "is", "sat", "all", "some", "no", "one", "lone", "set", "disj", "let", "in", "=", "!", "not",
    "&&", "||", "=>", "else", "->", "+", "-", "&", ".", "^", "~", "*", "#", "'", "[", "]", "(",
    ")", "{", "}", ",", ":", "|", "A", "b", "`N0", "3", "open", "module", "option", "inst",
    "always", "until", "@f", "this", "--c\n", "/* x */", "?", "\"p\"",
];

fn fragment_input() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn prop_module_parse_is_lossless(input in fragment_input()) {
        let parse = parse_module(&input);
        prop_assert_eq!(parse.syntax().text().to_string(), input);
    }

    #[test]
    fn prop_expression_parse_is_lossless(input in fragment_input()) {
        let parse = parse_expression(&input);
        prop_assert_eq!(parse.syntax().text().to_string(), input);
    }

    #[test]
    fn prop_arbitrary_text_terminates(input in "\\PC{0,200}") {
        let parse = parse_module(&input);
        prop_assert_eq!(parse.syntax().text().to_string(), input);
    }

    #[test]
    fn prop_errors_lie_within_input(input in fragment_input()) {
        let parse = parse_module(&input);
        let len = forge_syntax::TextSize::of(input.as_str());
        for error in &parse.errors {
            prop_assert!(error.range.end() <= len, "{:?} outside {:?}", error, input);
        }
    }
}

#[test]
fn test_codes_helper_covers_each_paragraph() {
    assert!(codes("sig A {}\npred p {}\nrun p").is_empty());
    assert_eq!(codes("sig A {} ?"), vec![ErrorCode::E0101]);
}
