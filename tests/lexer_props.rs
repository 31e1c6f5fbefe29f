use apl::lexer::{lexer::tokenize, tokens::TokenKind};
use proptest::prelude::*;

fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,6}",
        "[0-9]{1,6}",
        "[{}(),;=]",
        "\"[a-z0-9_]{0,6}\"",
    ]
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec((lexeme(), "[ \t\n]{1,3}"), 0..24).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(lexeme, separator)| lexeme + &separator)
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]
    #[test]
    fn token_values_match_source_slices(source in program()) {
        let tokens = tokenize(&source, Some("prop.apl".to_string())).unwrap();
        let chars: Vec<char> = source.chars().collect();

        for token in tokens.iter() {
            let start = token.position.offset as usize;
            let end = start + token.value.chars().count();
            let slice: String = chars[start..end].iter().collect();
            prop_assert_eq!(&slice, &token.value, "token {} in {:?}", token, source);
        }

        let joined: String = tokens.iter().map(|token| token.value.as_str()).collect();
        let stripped: String = source
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '"')
            .collect();
        prop_assert_eq!(joined, stripped);
    }

    #[test]
    fn numbers_and_words_are_classified(word in "[a-z][a-z0-9]{0,6}", number in "[0-9]{1,6}") {
        let tokens = tokenize(&format!("{} {}", word, number), None).unwrap();

        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(matches!(
            tokens[0].kind,
            TokenKind::Text
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Func
                | TokenKind::Type
                | TokenKind::Import
                | TokenKind::Return
        ));
        prop_assert_eq!(tokens[1].kind, TokenKind::Number);
    }

    #[test]
    fn lexing_never_panics(source in ".*") {
        let _ = tokenize(&source, None);
    }
}
