//! Tokenizer properties.

use proptest::prelude::*;
use sitedex::tokenize;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: every token is non-empty lowercase ASCII alphanumeric.
    #[test]
    fn prop_tokens_are_clean(text in ".*") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(
                token.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
                "bad token {:?}", token
            );
        }
    }

    /// Property: tokenizing the joined tokens gives the same tokens back.
    #[test]
    fn prop_tokenize_idempotent(text in ".*") {
        let tokens = tokenize(&text);
        prop_assert_eq!(tokenize(&tokens.join(" ")), tokens);
    }

    /// Property: case never changes the result.
    #[test]
    fn prop_case_insensitive(text in "[ -~]*") {
        prop_assert_eq!(tokenize(&text.to_uppercase()), tokenize(&text.to_lowercase()));
    }

    /// Property: no alphanumeric character is lost.
    #[test]
    fn prop_alnum_preserved(text in "[ -~]*") {
        let expected: usize = text.bytes().filter(u8::is_ascii_alphanumeric).count();
        let actual: usize = tokenize(&text).iter().map(String::len).sum();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(tokenize("Hello, World!!"), vec!["hello", "world"]);
    assert!(tokenize("").is_empty());
    assert_eq!(tokenize("a-b_c"), vec!["a", "b", "c"]);
}
