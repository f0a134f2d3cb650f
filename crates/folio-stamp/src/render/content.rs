//! Content stream operations for drawing folio labels

use super::color::Rgb;
use crate::types::{FolioError, FolioLabel, Result, StampPlacement};
use crate::units::{MIXED_LINE_SHIFT, STAMP_BASE_FONT};
use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

/// One positioned text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
}

/// Resource names and appearance shared by every draw on a page
#[derive(Debug, Clone, PartialEq)]
pub struct StampStyle {
    /// Name of the font in the page's `/Font` resources
    pub font_resource: String,
    /// Name of the graphics state in the page's `/ExtGState` resources
    pub gs_resource: String,
    pub font_size: f64,
    pub color: Rgb,
}

/// Expand a label into its text draws.
///
/// A paired label puts the numeral `font_size * 0.5` above the anchor and
/// the words the same distance below it.
pub fn label_draws(label: &FolioLabel, placement: &StampPlacement, font_size: f64) -> Vec<TextDraw> {
    let draw = |text: &str, dy: f64| TextDraw {
        text: text.to_string(),
        x: placement.x,
        y: placement.y + dy,
        rotation_degrees: placement.rotation_degrees,
    };

    match label {
        FolioLabel::Single(text) => vec![draw(text, 0.0)],
        FolioLabel::Paired { primary, secondary } => {
            let shift = font_size * MIXED_LINE_SHIFT;
            vec![draw(primary, shift), draw(secondary, -shift)]
        }
    }
}

/// Build the operations that draw `draws` with `style`.
///
/// The whole stamp is wrapped in `q`/`Q` so it leaves the page's graphics
/// state untouched.
pub fn stamp_operations(draws: &[TextDraw], style: &StampStyle) -> Result<Vec<Operation>> {
    let mut ops = vec![
        Operation::new("q", vec![]),
        Operation::new("gs", vec![Object::Name(style.gs_resource.as_bytes().to_vec())]),
        Operation::new(
            "rg",
            vec![
                Object::Real(style.color.r),
                Object::Real(style.color.g),
                Object::Real(style.color.b),
            ],
        ),
    ];

    for draw in draws {
        let encoded = encode_win_ansi(&draw.text)?;
        let (sin, cos) = draw.rotation_degrees.to_radians().sin_cos();

        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(style.font_resource.as_bytes().to_vec()),
                Object::Real(style.font_size as f32),
            ],
        ));
        ops.push(Operation::new(
            "Tm",
            vec![
                Object::Real(cos as f32),
                Object::Real(sin as f32),
                Object::Real(-sin as f32),
                Object::Real(cos as f32),
                Object::Real(draw.x as f32),
                Object::Real(draw.y as f32),
            ],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encoded, StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    ops.push(Operation::new("Q", vec![]));
    Ok(ops)
}

/// Encode text for a standard Type1 font using WinAnsiEncoding.
///
/// Fails on characters the encoding cannot represent.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            match code {
                0x20..=0x7E | 0xA0..=0xFF => Ok(code as u8),
                _ => win_ansi_extra(c).ok_or_else(|| {
                    FolioError::Render(format!(
                        "Character {:?} (U+{:04X}) is not available in {}",
                        c, code, STAMP_BASE_FONT
                    ))
                }),
            }
        })
        .collect()
}

/// WinAnsi code points in 0x80..=0x9F
fn win_ansi_extra(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        _ => return None,
    };
    Some(byte)
}
