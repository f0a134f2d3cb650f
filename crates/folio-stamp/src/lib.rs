pub mod numbering;
mod options;
mod placement;
mod preview;
pub mod random;
pub mod render;
pub mod stamp;
mod transparency;
mod types;
pub mod units;

pub use numbering::{generate_labels, label_for};
pub use options::*;
pub use placement::{corner_anchor, resolve_placement};
pub use preview::{PreviewOverlay, preview_overlay};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use stamp::{
    CancelToken, load_pdf_bytes, save_pdf_bytes, stamp_document, stamp_document_with, stamp_file,
    stamp_pdf, stamp_pdf_with_progress,
};
pub use transparency::{normalize_transparency, opacity_to_transparency, transparency_to_opacity};
pub use types::*;
