//! PDF rendering for folio stamps
//!
//! This module handles all PDF-specific operations:
//! - Parsing the stamp color
//! - Encoding label text for the standard font
//! - Generating the text-drawing content stream
//! - Attaching font, opacity and content to existing pages

mod color;
mod content;
mod page;

pub use color::Rgb;
pub use content::{StampStyle, TextDraw, encode_win_ansi, label_draws, stamp_operations};
pub use page::{MediaBox, StampResources, append_page_stamp, get_media_box};
