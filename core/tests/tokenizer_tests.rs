use docsearch_core::tokenizer::tokenize;
use proptest::prelude::*;

#[test]
fn it_lowercases_without_stemming() {
    let words = tokenize("Running Runners RUN! The café's menu.");
    assert_eq!(words, vec!["running", "runners", "run!", "the", "café's", "menu."]);
}

#[test]
fn it_keeps_stopwords() {
    let words = tokenize("The quick brown fox and the lazy dog");
    assert_eq!(words.iter().filter(|w| *w == "the").count(), 2);
    assert!(words.contains(&"and".to_string()));
}

proptest! {
    #[test]
    fn rejoining_tokens_is_idempotent(text in "[a-zA-Z.,!é \t\n]{0,80}") {
        let first = tokenize(&text);
        let again = tokenize(&first.join(" "));
        prop_assert_eq!(first, again);
    }

    #[test]
    fn tokens_are_never_empty_or_padded(text in "\\PC{0,80}") {
        for t in tokenize(&text) {
            prop_assert!(!t.is_empty());
            prop_assert!(!t.chars().any(char::is_whitespace));
        }
    }
}
