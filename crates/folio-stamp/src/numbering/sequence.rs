use super::words_or_decimal;
use crate::types::{Direction, FolioLabel, NumberingType};

/// Folio number carried by the page at physical `index` (0-based).
///
/// With [`Direction::Last`] the final page receives `start_number` and the
/// numbers grow walking back toward page 1.
pub fn folio_number(start_number: i64, total_pages: usize, index: usize, direction: Direction) -> i64 {
    let offset = match direction {
        Direction::First => index,
        Direction::Last => total_pages.saturating_sub(1).saturating_sub(index),
    };
    start_number.saturating_add(offset as i64)
}

/// Decimal string of `number`, left-padded with `'0'` to `zero_padding` characters.
///
/// Longer numbers are never truncated.
pub fn pad_number(number: i64, zero_padding: usize) -> String {
    let digits = number.to_string();
    let mut padded = "0".repeat(zero_padding.saturating_sub(digits.len()));
    padded.push_str(&digits);
    padded
}

/// Label for one folio number
pub fn label_for(number: i64, numbering_type: NumberingType, zero_padding: usize) -> FolioLabel {
    match numbering_type {
        NumberingType::Numbers => FolioLabel::Single(pad_number(number, zero_padding)),
        NumberingType::Letters => FolioLabel::Single(words_or_decimal(number)),
        NumberingType::Mixed => FolioLabel::Paired {
            primary: pad_number(number, zero_padding),
            secondary: words_or_decimal(number),
        },
    }
}

/// Labels for every page of a document, in physical page order
pub fn generate_labels(
    start_number: i64,
    total_pages: usize,
    numbering_type: NumberingType,
    zero_padding: usize,
    direction: Direction,
) -> Vec<FolioLabel> {
    (0..total_pages)
        .map(|index| {
            let number = folio_number(start_number, total_pages, index, direction);
            label_for(number, numbering_type, zero_padding)
        })
        .collect()
}
