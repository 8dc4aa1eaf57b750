//! Sentence-level context extraction for an entity pair.

use crate::data::drugprot::EntityRow;
use crate::nlp::sentences::{char_len, find_char_offset, split_sentences};

/// Return the first sentence of the abstract body that fully contains both
/// entities' spans, or the empty string if no single sentence does (for
/// example when the pair straddles a sentence boundary).
///
/// Raw entity offsets count from the start of `title + separator + body`, so
/// each is shifted left by the title length plus one before comparing
/// against sentence spans. The arithmetic is signed: an entity tagged inside
/// the title lands at a negative body offset and never matches a sentence.
///
/// Sentences are located by first-occurrence substring search from the start
/// of the body. If the same sentence text appears twice, the search anchors
/// to the earlier occurrence; a pair inside the later one then goes without
/// context. Known limitation, kept as-is.
pub fn pair_context(
    chemical: &EntityRow,
    gene: &EntityRow,
    title: &str,
    abstract_text: &str,
) -> String {
    let title_length = char_len(title) as i64 + 1;

    let span_start = chemical.start_offset.min(gene.start_offset) as i64 - title_length;
    let span_end = chemical.end_offset.max(gene.end_offset) as i64 - title_length;

    for sentence in split_sentences(abstract_text) {
        let Some(sentence_start) = find_char_offset(abstract_text, &sentence) else {
            continue;
        };
        let sentence_start = sentence_start as i64;
        let sentence_end = sentence_start + char_len(&sentence) as i64;

        // context is only ever a single sentence
        if sentence_start <= span_start && sentence_end >= span_end {
            return sentence;
        }
    }

    String::new()
}
