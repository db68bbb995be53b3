//! Tokenizer properties

#![allow(clippy::unwrap_used)]

use forge_syntax::parser::{significant_tokens, tokenize};
use forge_syntax::{SyntaxKind, TextSize};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("sig", SyntaxKind::SIG_KW)]
#[case("pred", SyntaxKind::PRED_KW)]
#[case("sufficient", SyntaxKind::SUFFICIENT_KW)]
#[case("forge_error", SyntaxKind::FORGE_ERROR_KW)]
#[case("wheat", SyntaxKind::WHEAT_KW)]
#[case("`Atom3", SyntaxKind::ATOM_NAME)]
#[case("||", SyntaxKind::PIPE_PIPE)]
#[case("|", SyntaxKind::BAR)]
#[case("<=>", SyntaxKind::IFF_ARROW)]
#[case("'", SyntaxKind::PRIME)]
#[case("sigs", SyntaxKind::IDENT)]
fn test_single_token(#[case] input: &str, #[case] kind: SyntaxKind) {
    let tokens = significant_tokens(input);
    assert_eq!(tokens.len(), 1, "{input:?} lexed as {tokens:?}");
    assert_eq!(tokens[0].kind, kind);
}

#[test]
fn test_significant_tokens_skip_trivia() {
    let tokens = significant_tokens("-- header\nsig /* inline */ A // tail\n{}");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["sig", "A", "{", "}"]);
}

proptest! {
    #[test]
    fn prop_tokens_cover_input(input in "\\PC{0,120}") {
        let tokens = tokenize(&input);
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(&rebuilt, &input);

        let mut offset = TextSize::from(0);
        for token in &tokens {
            prop_assert_eq!(token.offset, offset);
            prop_assert!(!token.text.is_empty());
            offset = token.end();
        }
    }

    #[test]
    fn prop_identifiers_round_trip(name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        let tokens = significant_tokens(&name);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].text, name.as_str());
    }
}
