//! Folio numbering
//!
//! This module turns a start number and a page count into the text stamped
//! on every page:
//! - the word table for `letters` and `mixed` numbering
//! - the per-page label sequence, honoring the numbering direction

mod sequence;
mod words;

pub use sequence::{folio_number, generate_labels, label_for, pad_number};
pub use words::MAX_WORD_NUMBER;

use words::SPANISH_WORDS;

/// Look up the Spanish word form of a folio number.
///
/// Returns `None` for negative numbers and anything above [`MAX_WORD_NUMBER`].
pub fn number_to_words(number: i64) -> Option<&'static str> {
    usize::try_from(number)
        .ok()
        .and_then(|index| SPANISH_WORDS.get(index))
        .copied()
}

/// Word form of a folio number, or its decimal string when the table has no entry
pub fn words_or_decimal(number: i64) -> String {
    match number_to_words(number) {
        Some(words) => words.to_string(),
        None => number.to_string(),
    }
}
