use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the stamp goes and how much it may wander
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PositionConfig {
    pub corner_vertical: CornerVertical,
    pub corner_horizontal: CornerHorizontal,
    /// Horizontal adjustment from the base anchor (cm)
    #[cfg_attr(feature = "serde", serde(alias = "positionX"))]
    pub offset_x: f64,
    /// Vertical adjustment from the base anchor (cm)
    #[cfg_attr(feature = "serde", serde(alias = "positionY"))]
    pub offset_y: f64,
    /// Rotation in degrees
    pub rotation: f64,
    /// Full width of the random horizontal jitter (cm)
    pub randomness_x: f64,
    /// Full height of the random vertical jitter (cm)
    pub randomness_y: f64,
    /// Full span of the random rotation jitter (degrees)
    pub randomness_rotation: f64,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            corner_vertical: CornerVertical::Top,
            corner_horizontal: CornerHorizontal::Right,
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
            randomness_x: 0.0,
            randomness_y: 0.0,
            randomness_rotation: 0.0,
        }
    }
}

/// How the stamp looks
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AppearanceConfig {
    /// Hex RGB color, e.g. `#1a2b3c`
    pub color: String,
    /// 0 = invisible, 100 = fully opaque
    pub transparency: f64,
    /// Font size in points
    pub font_size: f64,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            transparency: 100.0,
            font_size: 12.0,
        }
    }
}

/// What the stamp says
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct NumberingConfig {
    pub start_number: i64,
    pub direction: Direction,
    pub numbering_type: NumberingType,
    /// Minimum digit count of the numeral
    pub zero_padding: usize,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            start_number: 1,
            direction: Direction::First,
            numbering_type: NumberingType::Numbers,
            zero_padding: 6,
        }
    }
}

/// Complete folio configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FolioConfig {
    pub position: PositionConfig,
    pub appearance: AppearanceConfig,
    pub numbering: NumberingConfig,
}

/// Partial update of [`PositionConfig`]; `None` fields keep their value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionUpdate {
    pub corner_vertical: Option<CornerVertical>,
    pub corner_horizontal: Option<CornerHorizontal>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub rotation: Option<f64>,
    pub randomness_x: Option<f64>,
    pub randomness_y: Option<f64>,
    pub randomness_rotation: Option<f64>,
}

/// Partial update of [`AppearanceConfig`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppearanceUpdate {
    pub color: Option<String>,
    pub transparency: Option<f64>,
    pub font_size: Option<f64>,
}

/// Partial update of [`NumberingConfig`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberingUpdate {
    pub start_number: Option<i64>,
    pub direction: Option<Direction>,
    pub numbering_type: Option<NumberingType>,
    pub zero_padding: Option<usize>,
}

/// One configuration change, as sent by whatever edits the configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigUpdate {
    Position(PositionUpdate),
    Appearance(AppearanceUpdate),
    Numbering(NumberingUpdate),
    Reset,
}

impl PositionUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AppearanceUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl NumberingUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FolioConfig {
    /// Load configuration from a JSON file; missing keys take their defaults.
    ///
    /// Only the nested layout written by [`FolioConfig::save`] is read:
    /// `{"position": {..}, "appearance": {..}, "numbering": {..}}`. Keys outside
    /// it, such as a flat top-level `positionX`, are ignored with a warning.
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let parse_error =
            |e: serde_json::Error| FolioError::ConfigValidation(format!("Failed to parse config: {}", e));

        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(parse_error)?;
        let ignored = ignored_keys(&value);
        if !ignored.is_empty() {
            log::warn!(
                "Ignoring unknown configuration keys in {}: {}",
                path.display(),
                ignored.join(", ")
            );
        }
        serde_json::from_value(value).map_err(parse_error)
    }

    /// Save configuration to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            FolioError::ConfigValidation(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Apply a section update in place
    pub fn apply(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Position(u) => {
                let p = &mut self.position;
                if let Some(v) = u.corner_vertical {
                    p.corner_vertical = v;
                }
                if let Some(v) = u.corner_horizontal {
                    p.corner_horizontal = v;
                }
                if let Some(v) = u.offset_x {
                    p.offset_x = v;
                }
                if let Some(v) = u.offset_y {
                    p.offset_y = v;
                }
                if let Some(v) = u.rotation {
                    p.rotation = v;
                }
                if let Some(v) = u.randomness_x {
                    p.randomness_x = v;
                }
                if let Some(v) = u.randomness_y {
                    p.randomness_y = v;
                }
                if let Some(v) = u.randomness_rotation {
                    p.randomness_rotation = v;
                }
            }
            ConfigUpdate::Appearance(u) => {
                let a = &mut self.appearance;
                if let Some(v) = u.color {
                    a.color = v;
                }
                if let Some(v) = u.transparency {
                    a.transparency = v;
                }
                if let Some(v) = u.font_size {
                    a.font_size = v;
                }
            }
            ConfigUpdate::Numbering(u) => {
                let n = &mut self.numbering;
                if let Some(v) = u.start_number {
                    n.start_number = v;
                }
                if let Some(v) = u.direction {
                    n.direction = v;
                }
                if let Some(v) = u.numbering_type {
                    n.numbering_type = v;
                }
                if let Some(v) = u.zero_padding {
                    n.zero_padding = v;
                }
            }
            ConfigUpdate::Reset => *self = Self::default(),
        }
    }

    /// Validate the configuration against the product ranges.
    ///
    /// The stamping engine does not call this; it clamps instead.
    pub fn validate(&self) -> Result<()> {
        let n = &self.numbering;
        if !(1..=9999).contains(&n.start_number) {
            return Err(FolioError::ConfigValidation(format!(
                "Start number must be between 1 and 9999, got {}",
                n.start_number
            )));
        }
        if !(1..=10).contains(&n.zero_padding) {
            return Err(FolioError::ConfigValidation(format!(
                "Zero padding must be between 1 and 10 digits, got {}",
                n.zero_padding
            )));
        }

        let a = &self.appearance;
        check_range("Font size", a.font_size, 6.0, 72.0)?;
        check_range("Transparency", a.transparency, 0.0, 100.0)?;
        if crate::render::Rgb::parse_hex(&a.color).is_none() {
            return Err(FolioError::ConfigValidation(format!(
                "Color must be a hex RGB value like #000000, got {:?}",
                a.color
            )));
        }

        let p = &self.position;
        check_range("Horizontal offset", p.offset_x, -10.0, 10.0)?;
        check_range("Vertical offset", p.offset_y, -10.0, 10.0)?;
        if !p.rotation.is_finite() {
            return Err(FolioError::ConfigValidation(
                "Rotation must be a finite number".to_string(),
            ));
        }
        check_range("Horizontal randomness", p.randomness_x, 0.0, 5.0)?;
        check_range("Vertical randomness", p.randomness_y, 0.0, 5.0)?;
        check_range("Rotation randomness", p.randomness_rotation, 0.0, 30.0)?;

        Ok(())
    }
}

#[cfg(feature = "serde")]
const POSITION_KEYS: &[&str] = &[
    "cornerVertical",
    "cornerHorizontal",
    "offsetX",
    "offsetY",
    "positionX",
    "positionY",
    "rotation",
    "randomnessX",
    "randomnessY",
    "randomnessRotation",
];

#[cfg(feature = "serde")]
const APPEARANCE_KEYS: &[&str] = &["color", "transparency", "fontSize"];

#[cfg(feature = "serde")]
const NUMBERING_KEYS: &[&str] = &["startNumber", "direction", "numberingType", "zeroPadding"];

/// Keys of a JSON configuration that deserialization would silently drop,
/// as dotted paths (`position.offsetZ`)
#[cfg(feature = "serde")]
pub fn ignored_keys(value: &serde_json::Value) -> Vec<String> {
    let Some(root) = value.as_object() else {
        return Vec::new();
    };

    let mut ignored = Vec::new();
    for (key, section) in root {
        let known = match key.as_str() {
            "position" => POSITION_KEYS,
            "appearance" => APPEARANCE_KEYS,
            "numbering" => NUMBERING_KEYS,
            _ => {
                ignored.push(key.clone());
                continue;
            }
        };
        if let Some(fields) = section.as_object() {
            ignored.extend(
                fields
                    .keys()
                    .filter(|field| !known.contains(&field.as_str()))
                    .map(|field| format!("{}.{}", key, field)),
            );
        }
    }
    ignored
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(FolioError::ConfigValidation(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )))
    }
}
