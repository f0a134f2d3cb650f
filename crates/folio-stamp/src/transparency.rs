//! Conversion between the user-facing transparency scale and PDF opacity
//!
//! Transparency runs from 0 (stamp invisible) to 100 (stamp fully opaque),
//! opacity from 0.0 to 1.0 with the same orientation.

use crate::units::DEFAULT_TRANSPARENCY;

/// Resolution transparency values are snapped to when converting back from opacity
const TRANSPARENCY_RESOLUTION: f64 = 1e9;

/// Convert a transparency value (0-100) to an opacity (0-1)
pub fn transparency_to_opacity(transparency: f64) -> f64 {
    let transparency = normalize_transparency(transparency, DEFAULT_TRANSPARENCY);
    (transparency / 100.0).clamp(0.0, 1.0)
}

/// Convert an opacity (0-1) back to a transparency value (0-100)
pub fn opacity_to_transparency(opacity: f64) -> f64 {
    let opacity = if opacity.is_nan() {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    // 0.29 * 100.0 is 28.999999999999996 in binary floating point
    let transparency = (opacity * 100.0 * TRANSPARENCY_RESOLUTION).round() / TRANSPARENCY_RESOLUTION;
    transparency.clamp(0.0, 100.0)
}

/// Clamp a transparency value into 0-100, substituting `default` for NaN
pub fn normalize_transparency(transparency: f64, default: f64) -> f64 {
    if transparency.is_nan() {
        default
    } else {
        transparency.clamp(0.0, 100.0)
    }
}
