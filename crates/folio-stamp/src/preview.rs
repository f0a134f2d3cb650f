use crate::numbering::{folio_number, label_for};
use crate::options::FolioConfig;
use crate::placement::resolve_placement;
use crate::random::RandomSource;
use crate::render::{Rgb, TextDraw};
use crate::transparency::transparency_to_opacity;
use crate::types::*;
use crate::units::{DEFAULT_FONT_SIZE, MIXED_LINE_SHIFT, points_to_pixels};

/// Everything a viewer needs to draw the folio over a rendered page
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOverlay {
    /// Anchor in screen pixels, already multiplied by the zoom
    pub placement: StampPlacement,
    pub label: FolioLabel,
    pub opacity: f64,
    pub color: Rgb,
    pub font_size_px: f64,
}

impl PreviewOverlay {
    /// Text draws in screen space, y growing downward.
    ///
    /// A paired label puts the numeral above the anchor, matching the
    /// stamped PDF.
    pub fn draws(&self) -> Vec<TextDraw> {
        let draw = |text: &str, dy: f64| TextDraw {
            text: text.to_string(),
            x: self.placement.x,
            y: self.placement.y + dy,
            rotation_degrees: self.placement.rotation_degrees,
        };

        match &self.label {
            FolioLabel::Single(text) => vec![draw(text, 0.0)],
            FolioLabel::Paired { primary, secondary } => {
                let shift = self.font_size_px * MIXED_LINE_SHIFT;
                vec![draw(primary, -shift), draw(secondary, shift)]
            }
        }
    }
}

/// Compute the overlay for one page of the document being previewed.
///
/// `page_px` is the unzoomed page size in pixels and `page_number` is
/// 1-based. Out of range page numbers are clamped to the document.
pub fn preview_overlay(
    config: &FolioConfig,
    page_px: PageGeometry,
    page_number: usize,
    total_pages: usize,
    zoom: f64,
    rng: &mut dyn RandomSource,
) -> PreviewOverlay {
    let total_pages = total_pages.max(1);
    let index = page_number.clamp(1, total_pages) - 1;
    let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };

    let numbering = &config.numbering;
    let number = folio_number(numbering.start_number, total_pages, index, numbering.direction);
    let label = label_for(number, numbering.numbering_type, numbering.zero_padding);

    let placement = resolve_placement(&config.position, page_px, Convention::Screen, rng).scaled(zoom);

    let font_size = config.appearance.font_size;
    let font_size = if font_size.is_finite() && font_size > 0.0 {
        font_size
    } else {
        DEFAULT_FONT_SIZE
    };

    PreviewOverlay {
        placement,
        label,
        opacity: transparency_to_opacity(config.appearance.transparency),
        color: Rgb::from_hex_or_black(&config.appearance.color),
        font_size_px: points_to_pixels(font_size) * zoom,
    }
}
