/// RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Parse `#rrggbb`, `rrggbb` or the `#rgb` shorthand
    pub fn parse_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let (r, g, b) = match digits.len() {
            6 => (
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
            ),
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
                (nibble(0).ok()?, nibble(1).ok()?, nibble(2).ok()?)
            }
            _ => return None,
        };

        Some(Rgb {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        })
    }

    /// Parse a hex color, substituting black for anything malformed
    pub fn from_hex_or_black(hex: &str) -> Rgb {
        match Self::parse_hex(hex) {
            Some(rgb) => rgb,
            None => {
                log::warn!("Unrecognized stamp color {:?}, using black", hex);
                Self::BLACK
            }
        }
    }
}
