//! Sentence boundary segmentation for abstract bodies.
//!
//! The splitter is deliberately simple: sentence-final punctuation followed
//! by whitespace ends a sentence. Callers treat its exact segmentation rules
//! as opaque; the one guarantee relied upon is that every returned sentence
//! is a verbatim substring of the input.

use once_cell::sync::Lazy;
use regex::Regex;

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["')\]]*\s+"#).expect("valid regex"));

/// Split text into trimmed sentences, terminators kept attached.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last = 0;
    for boundary in BOUNDARY.find_iter(text) {
        // keep the punctuation run, drop the trailing whitespace
        let cut = boundary.start() + boundary.as_str().trim_end().len();
        let sentence = text[last..cut].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        last = boundary.end();
    }
    let tail = text[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Character offset of the first occurrence of `needle` in `haystack`.
///
/// Entity offsets in the annotation tables count characters, not bytes, so
/// span arithmetic against sentence positions has to stay in character
/// units.
pub fn find_char_offset(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}

/// Length of a string in characters.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
