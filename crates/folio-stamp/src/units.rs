//! Shared constants for folio stamping
//!
//! The PDF writer and the preview overlay both convert through these
//! functions so a stamp lands on the same visual spot in each.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per centimeter, rounded the way the stamping tool has always used it
pub const POINTS_PER_CM: f64 = 28.35;

/// Screen pixels per point at 96 DPI rendering
pub const PIXELS_PER_POINT: f64 = 1.33;

/// Convert centimeters to PDF points
#[inline]
pub fn cm_to_points(cm: f64) -> f64 {
    cm * POINTS_PER_CM
}

/// Convert centimeters to screen pixels
#[inline]
pub fn cm_to_pixels(cm: f64) -> f64 {
    cm * POINTS_PER_CM * PIXELS_PER_POINT
}

/// Convert PDF points to screen pixels
#[inline]
pub fn points_to_pixels(pt: f64) -> f64 {
    pt * PIXELS_PER_POINT
}

// =============================================================================
// Stamp Anchoring
// =============================================================================

/// Horizontal distance of the stamp anchor from the chosen corner (cm)
pub const BASE_SEPARATION_X_CM: f64 = 3.0;

/// Vertical distance of the stamp anchor from the chosen corner (cm)
pub const BASE_SEPARATION_Y_CM: f64 = 2.0;

// =============================================================================
// Appearance
// =============================================================================

/// Font size used when the configured one is unusable (points)
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Transparency used when the configured one is not a number (fully opaque)
pub const DEFAULT_TRANSPARENCY: f64 = 100.0;

/// Fraction of the font size between the two lines of a mixed label and its anchor
pub const MIXED_LINE_SHIFT: f64 = 0.5;

/// Standard font every stamp is drawn with
pub const STAMP_BASE_FONT: &str = "Helvetica-Bold";

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f64 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f64 = 792.0;
