use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Failed to load PDF: {0}")]
    DocumentLoad(String),
    #[error("Failed to render folio: {0}")]
    Render(String),
    #[error("Invalid configuration: {0}")]
    ConfigValidation(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Stamping cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, FolioError>;

/// Vertical half of the corner anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CornerVertical {
    #[default]
    Top,
    Bottom,
}

/// Horizontal half of the corner anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CornerHorizontal {
    Left,
    #[default]
    Right,
}

/// Which end of the document receives the start number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Page 1 gets the start number, numbers ascend toward the end
    #[default]
    First,
    /// The last page gets the start number, numbers ascend toward page 1
    Last,
}

/// How the folio number is written on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberingType {
    /// Zero-padded numeral
    #[default]
    Numbers,
    /// Word form from the numbering table
    Letters,
    /// Numeral and word form, both on every page
    Mixed,
}

/// Coordinate convention a placement is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// PDF user space: points, origin bottom-left, y grows upward
    Pdf,
    /// Screen space: pixels, origin top-left, y grows downward
    Screen,
}

/// Page size in the units of whichever convention it is used with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
}

impl PageGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a page measured in points to screen pixels
    pub fn points_to_pixels(self) -> Self {
        Self {
            width: crate::units::points_to_pixels(self.width),
            height: crate::units::points_to_pixels(self.height),
        }
    }
}

/// Final stamp anchor and rotation for one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampPlacement {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, not normalized
    pub rotation_degrees: f64,
}

impl StampPlacement {
    /// Rotation folded into `[0, 360)` for display
    pub fn display_rotation(&self) -> f64 {
        self.rotation_degrees.rem_euclid(360.0)
    }

    /// Multiply the coordinates by a zoom factor (rotation is unchanged)
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            rotation_degrees: self.rotation_degrees,
        }
    }
}

/// Text stamped on one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioLabel {
    Single(String),
    Paired { primary: String, secondary: String },
}

impl FolioLabel {
    /// Number of text draws this label needs
    pub fn draw_count(&self) -> usize {
        match self {
            FolioLabel::Single(_) => 1,
            FolioLabel::Paired { .. } => 2,
        }
    }

    /// The numeral (or only) text of the label
    pub fn primary(&self) -> &str {
        match self {
            FolioLabel::Single(text) => text,
            FolioLabel::Paired { primary, .. } => primary,
        }
    }
}

impl std::fmt::Display for FolioLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FolioLabel::Single(text) => f.write_str(text),
            FolioLabel::Paired { primary, secondary } => write!(f, "{} / {}", primary, secondary),
        }
    }
}
