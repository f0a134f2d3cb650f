//! Stamp placement
//!
//! Computes where the folio goes on a page. The algorithm is the same for
//! both coordinate conventions:
//! 1. Anchor at a fixed separation from the chosen corner
//! 2. Add the user offset
//! 3. Add bounded random jitter on x, y and rotation
//!
//! Only the vertical anchor flips between [`Convention::Pdf`] (y up) and
//! [`Convention::Screen`] (y down).

use crate::options::PositionConfig;
use crate::random::RandomSource;
use crate::types::{Convention, CornerHorizontal, CornerVertical, PageGeometry, StampPlacement};
use crate::units::{BASE_SEPARATION_X_CM, BASE_SEPARATION_Y_CM, cm_to_pixels, cm_to_points};

impl Convention {
    /// Convert centimeters into this convention's unit
    pub fn cm_to_units(self, cm: f64) -> f64 {
        match self {
            Convention::Pdf => cm_to_points(cm),
            Convention::Screen => cm_to_pixels(cm),
        }
    }

    /// Base separation from the corner as `(x, y)` in this convention's unit
    pub fn base_separation(self) -> (f64, f64) {
        (
            self.cm_to_units(BASE_SEPARATION_X_CM),
            self.cm_to_units(BASE_SEPARATION_Y_CM),
        )
    }
}

/// Anchor point before offsets and jitter
pub fn corner_anchor(position: &PositionConfig, page: PageGeometry, convention: Convention) -> (f64, f64) {
    let (sep_x, sep_y) = convention.base_separation();

    let x = match position.corner_horizontal {
        CornerHorizontal::Left => sep_x,
        CornerHorizontal::Right => page.width - sep_x,
    };

    let measure_from_bottom = matches!(
        (position.corner_vertical, convention),
        (CornerVertical::Bottom, Convention::Pdf) | (CornerVertical::Top, Convention::Screen)
    );
    let y = if measure_from_bottom {
        sep_y
    } else {
        page.height - sep_y
    };

    (x, y)
}

/// Resolve the final placement of the stamp on one page.
///
/// Jitter is drawn from `rng` on every call, so call this once per page.
pub fn resolve_placement(
    position: &PositionConfig,
    page: PageGeometry,
    convention: Convention,
    rng: &mut dyn RandomSource,
) -> StampPlacement {
    let (base_x, base_y) = corner_anchor(position, page, convention);

    let offset_x = convention.cm_to_units(finite_or_zero(position.offset_x));
    let offset_y = convention.cm_to_units(finite_or_zero(position.offset_y));

    let random_x = jitter(rng, position.randomness_x) * convention.cm_to_units(1.0);
    let random_y = jitter(rng, position.randomness_y) * convention.cm_to_units(1.0);
    let random_rotation = jitter(rng, position.randomness_rotation);

    StampPlacement {
        x: base_x + offset_x + random_x,
        y: base_y + offset_y + random_y,
        rotation_degrees: finite_or_zero(position.rotation) + random_rotation,
    }
}

/// Symmetric jitter in `[-bound/2, bound/2)`; unusable bounds produce none
fn jitter(rng: &mut dyn RandomSource, bound: f64) -> f64 {
    let bound = finite_or_zero(bound).max(0.0);
    // Always draw so each axis consumes one sample regardless of its bound
    let u = rng.next_unit();
    (u - 0.5) * bound
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, SequenceRandom, ThreadRandom};

    const LETTER: PageGeometry = PageGeometry {
        width: 612.0,
        height: 792.0,
    };

    fn at(vertical: CornerVertical, horizontal: CornerHorizontal) -> PositionConfig {
        PositionConfig {
            corner_vertical: vertical,
            corner_horizontal: horizontal,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_randomness_is_deterministic() {
        let position = PositionConfig {
            offset_x: 1.2,
            offset_y: -0.4,
            rotation: 15.0,
            ..Default::default()
        };
        let mut rng = ThreadRandom::new();
        let first = resolve_placement(&position, LETTER, Convention::Pdf, &mut rng);
        for _ in 0..20 {
            assert_eq!(resolve_placement(&position, LETTER, Convention::Pdf, &mut rng), first);
        }
    }

    #[test]
    fn test_top_left_pdf_sits_below_top_edge() {
        let (_, sep_y) = Convention::Pdf.base_separation();
        let placement = resolve_placement(
            &at(CornerVertical::Top, CornerHorizontal::Left),
            LETTER,
            Convention::Pdf,
            &mut FixedRandom(0.5),
        );
        assert!(placement.y < LETTER.height);
        assert!(placement.y > LETTER.height - 2.0 * sep_y);
        assert!((placement.x - 3.0 * 28.35).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_left_pdf_sits_at_base_separation() {
        let (sep_x, sep_y) = Convention::Pdf.base_separation();
        let placement = resolve_placement(
            &at(CornerVertical::Bottom, CornerHorizontal::Left),
            LETTER,
            Convention::Pdf,
            &mut FixedRandom(0.5),
        );
        assert!((placement.y - sep_y).abs() < 1e-9);
        assert!((placement.x - sep_x).abs() < 1e-9);
    }

    #[test]
    fn test_right_corner_measures_from_right_edge() {
        let (sep_x, _) = Convention::Pdf.base_separation();
        let placement = resolve_placement(
            &at(CornerVertical::Top, CornerHorizontal::Right),
            LETTER,
            Convention::Pdf,
            &mut FixedRandom(0.5),
        );
        assert!((placement.x - (LETTER.width - sep_x)).abs() < 1e-9);
    }

    #[test]
    fn test_screen_convention_flips_vertical_anchor() {
        let page_px = LETTER.points_to_pixels();
        let (_, sep_y) = Convention::Screen.base_separation();

        let top = resolve_placement(
            &at(CornerVertical::Top, CornerHorizontal::Left),
            page_px,
            Convention::Screen,
            &mut FixedRandom(0.5),
        );
        let bottom = resolve_placement(
            &at(CornerVertical::Bottom, CornerHorizontal::Left),
            page_px,
            Convention::Screen,
            &mut FixedRandom(0.5),
        );
        assert!((top.y - sep_y).abs() < 1e-9);
        assert!((bottom.y - (page_px.height - sep_y)).abs() < 1e-9);
    }

    #[test]
    fn test_conventions_agree_visually() {
        for vertical in [CornerVertical::Top, CornerVertical::Bottom] {
            for horizontal in [CornerHorizontal::Left, CornerHorizontal::Right] {
                let position = at(vertical, horizontal);
                let pdf = resolve_placement(&position, LETTER, Convention::Pdf, &mut FixedRandom(0.5));
                let screen = resolve_placement(
                    &position,
                    LETTER.points_to_pixels(),
                    Convention::Screen,
                    &mut FixedRandom(0.5),
                );
                // Same distance from the left edge and from the top edge
                let px = crate::units::PIXELS_PER_POINT;
                assert!((pdf.x * px - screen.x).abs() < 1e-6);
                assert!(((LETTER.height - pdf.y) * px - screen.y).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_offsets_are_added_in_centimeters() {
        let position = PositionConfig {
            corner_vertical: CornerVertical::Bottom,
            corner_horizontal: CornerHorizontal::Left,
            offset_x: 1.0,
            offset_y: 2.0,
            ..Default::default()
        };
        let base = corner_anchor(&position, LETTER, Convention::Pdf);
        let placement = resolve_placement(&position, LETTER, Convention::Pdf, &mut FixedRandom(0.5));
        assert!((placement.x - base.0 - 28.35).abs() < 1e-9);
        assert!((placement.y - base.1 - 56.7).abs() < 1e-9);
    }

    #[test]
    fn test_randomness_stays_within_bounds() {
        let position = PositionConfig {
            corner_vertical: CornerVertical::Bottom,
            corner_horizontal: CornerHorizontal::Left,
            randomness_x: 2.0,
            randomness_y: 1.0,
            randomness_rotation: 10.0,
            ..Default::default()
        };
        let base = corner_anchor(&position, LETTER, Convention::Pdf);
        let mut rng = ThreadRandom::new();
        for _ in 0..500 {
            let p = resolve_placement(&position, LETTER, Convention::Pdf, &mut rng);
            assert!((p.x - base.0).abs() <= 28.35 + 1e-9);
            assert!((p.y - base.1).abs() <= 0.5 * 28.35 + 1e-9);
            assert!(p.rotation_degrees.abs() <= 5.0 + 1e-9);
        }
    }

    #[test]
    fn test_extreme_samples_reach_half_bound() {
        let position = PositionConfig {
            corner_vertical: CornerVertical::Bottom,
            corner_horizontal: CornerHorizontal::Left,
            randomness_x: 2.0,
            randomness_rotation: 10.0,
            ..Default::default()
        };
        let base = corner_anchor(&position, LETTER, Convention::Pdf);
        // x, y, rotation draw in that order
        let mut rng = SequenceRandom::new(vec![0.0, 0.5, 0.0]);
        let p = resolve_placement(&position, LETTER, Convention::Pdf, &mut rng);
        assert!((p.x - (base.0 - 28.35)).abs() < 1e-9);
        assert!((p.y - base.1).abs() < 1e-9);
        assert!((p.rotation_degrees + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let position = PositionConfig {
            corner_vertical: CornerVertical::Bottom,
            corner_horizontal: CornerHorizontal::Left,
            offset_x: f64::NAN,
            rotation: f64::INFINITY,
            randomness_x: -3.0,
            randomness_y: f64::NAN,
            ..Default::default()
        };
        let base = corner_anchor(&position, LETTER, Convention::Pdf);
        let p = resolve_placement(&position, LETTER, Convention::Pdf, &mut FixedRandom(0.0));
        assert_eq!((p.x, p.y), base);
        assert_eq!(p.rotation_degrees, 0.0);
    }

    #[test]
    fn test_rotation_is_not_normalized() {
        let position = PositionConfig {
            rotation: 370.0,
            ..Default::default()
        };
        let p = resolve_placement(&position, LETTER, Convention::Pdf, &mut FixedRandom(0.5));
        assert_eq!(p.rotation_degrees, 370.0);
        assert!((p.display_rotation() - 10.0).abs() < 1e-9);
    }
}
