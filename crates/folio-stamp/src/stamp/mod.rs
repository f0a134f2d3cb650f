//! Folio stamping - numbering every page of a PDF
//!
//! This module orchestrates the stamping process:
//! 1. Load the source document
//! 2. Generate the label for every page, in physical order
//! 3. Resolve each page's placement in PDF coordinates
//! 4. Draw the labels and serialize the result

mod cancel;
mod io;

pub use cancel::CancelToken;
pub use io::{load_pdf_bytes, save_pdf_bytes, stamp_file};

use crate::numbering::generate_labels;
use crate::options::FolioConfig;
use crate::placement::resolve_placement;
use crate::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::render::{Rgb, StampResources, append_page_stamp, get_media_box, label_draws};
use crate::transparency::transparency_to_opacity;
use crate::types::*;
use crate::units::DEFAULT_FONT_SIZE;
use lopdf::{Document, ObjectId};

/// Stamp every page of a PDF held in memory, with fresh random jitter
pub fn stamp_document(pdf_bytes: &[u8], config: &FolioConfig) -> Result<Vec<u8>> {
    stamp_document_with(
        pdf_bytes,
        config,
        &mut ThreadRandom::new(),
        &CancelToken::new(),
        |_, _| {},
    )
}

/// Stamp a PDF held in memory with an explicit random source.
///
/// `cancel` is checked before each page and `on_page(done, total)` is called
/// after each one. Any failure aborts the whole document.
pub fn stamp_document_with(
    pdf_bytes: &[u8],
    config: &FolioConfig,
    rng: &mut dyn RandomSource,
    cancel: &CancelToken,
    on_page: impl FnMut(usize, usize),
) -> Result<Vec<u8>> {
    let mut doc = load_document(pdf_bytes)?;
    stamp_loaded_document(&mut doc, config, rng, cancel, on_page)?;

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| FolioError::Render(format!("Failed to serialize PDF: {}", e)))?;
    Ok(output)
}

/// Parse PDF bytes, rejecting encrypted documents.
///
/// lopdf decrypts files with an empty user password while loading and drops
/// `/Encrypt` from the trailer, so the recorded encryption state is checked too.
pub fn load_document(pdf_bytes: &[u8]) -> Result<Document> {
    let doc = Document::load_mem(pdf_bytes).map_err(|e| FolioError::DocumentLoad(e.to_string()))?;
    if doc.encryption_state.is_some() || doc.trailer.get(b"Encrypt").is_ok() {
        return Err(FolioError::DocumentLoad(
            "Encrypted PDFs are not supported".to_string(),
        ));
    }
    Ok(doc)
}

/// Stamp every page of an already loaded document in place
pub fn stamp_loaded_document(
    doc: &mut Document,
    config: &FolioConfig,
    rng: &mut dyn RandomSource,
    cancel: &CancelToken,
    mut on_page: impl FnMut(usize, usize),
) -> Result<()> {
    // Physical page order; direction only changes which label a page gets
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    let total_pages = page_ids.len();
    log::info!("Stamping {} page(s)", total_pages);

    let numbering = &config.numbering;
    let labels = generate_labels(
        numbering.start_number,
        total_pages,
        numbering.numbering_type,
        numbering.zero_padding,
        numbering.direction,
    );

    let opacity = transparency_to_opacity(config.appearance.transparency);
    let color = Rgb::from_hex_or_black(&config.appearance.color);
    let font_size = effective_font_size(config.appearance.font_size);
    let shared = StampResources::install(doc, opacity);

    for (index, (page_id, label)) in page_ids.iter().zip(&labels).enumerate() {
        if cancel.is_cancelled() {
            log::info!("Stamping cancelled before page {}", index + 1);
            return Err(FolioError::Cancelled);
        }

        let media_box = get_media_box(doc, *page_id);
        let mut placement = resolve_placement(
            &config.position,
            media_box.geometry(),
            Convention::Pdf,
            rng,
        );
        let (origin_x, origin_y) = media_box.origin();
        placement.x += origin_x;
        placement.y += origin_y;

        log::debug!(
            "Page {}: {} at ({:.2}, {:.2}) rotated {:.2}°",
            index + 1,
            label,
            placement.x,
            placement.y,
            placement.display_rotation()
        );

        let draws = label_draws(label, &placement, font_size);
        append_page_stamp(doc, *page_id, &shared, &draws, font_size, color)?;
        on_page(index + 1, total_pages);
    }

    Ok(())
}

/// Stamp a PDF on a blocking task so async callers are not stalled.
///
/// `seed` makes the random jitter reproducible.
pub async fn stamp_pdf(pdf_bytes: Vec<u8>, config: FolioConfig, seed: Option<u64>) -> Result<Vec<u8>> {
    stamp_pdf_with_progress(pdf_bytes, config, seed, CancelToken::new(), |_, _| {}).await
}

/// Async stamping with cancellation and per-page progress
pub async fn stamp_pdf_with_progress(
    pdf_bytes: Vec<u8>,
    config: FolioConfig,
    seed: Option<u64>,
    cancel: CancelToken,
    on_page: impl FnMut(usize, usize) + Send + 'static,
) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || {
        let mut rng: Box<dyn RandomSource> = match seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom::new()),
        };
        stamp_document_with(&pdf_bytes, &config, rng.as_mut(), &cancel, on_page)
    })
    .await?
}

/// Font size actually drawn: non-finite or non-positive sizes use the default
fn effective_font_size(font_size: f64) -> f64 {
    if font_size.is_finite() && font_size > 0.0 {
        font_size
    } else {
        DEFAULT_FONT_SIZE
    }
}
