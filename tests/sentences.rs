use drugprot_prep::nlp::sentences::{char_len, find_char_offset, split_sentences};

#[test]
fn splits_on_terminal_punctuation() {
    let sentences =
        split_sentences("Patients took aspirin. COX1 activity decreased significantly.");
    assert_eq!(
        sentences,
        vec![
            "Patients took aspirin.".to_string(),
            "COX1 activity decreased significantly.".to_string(),
        ]
    );
}

#[test]
fn single_sentence_passes_through() {
    let sentences = split_sentences("Drug X inhibits Protein Y directly.");
    assert_eq!(sentences, vec!["Drug X inhibits Protein Y directly.".to_string()]);
}

#[test]
fn sentences_are_verbatim_substrings() {
    let text = "Alpha was measured! Beta did not change? Gamma increased.";
    for sentence in split_sentences(text) {
        assert!(text.contains(&sentence));
    }
}

#[test]
fn offsets_count_characters_not_bytes() {
    let text = "αβγ aspirin";
    assert_eq!(find_char_offset(text, "aspirin"), Some(4));
    assert_eq!(char_len(text), 11);
}
