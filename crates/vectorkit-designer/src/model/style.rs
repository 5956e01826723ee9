//! Style attributes shared by several shape kinds.

use serde::{Deserialize, Serialize};
use vectorkit_core::GeometryError;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    #[default]
    None,
    Plain,
    Hatchings,
    Gradient,
}

/// Border of a line-bearing shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    thickness: f64,
    pub style: LineStyle,
    pub colour: Colour,
}

impl Border {
    pub const DEFAULT_THICKNESS: f64 = 2.0;

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Sets the stroke thickness; must be finite and strictly positive.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), GeometryError> {
        self.thickness = GeometryError::check_positive("thickness", thickness)?;
        Ok(())
    }
}

impl Default for Border {
    fn default() -> Self {
        Self {
            thickness: Self::DEFAULT_THICKNESS,
            style: LineStyle::Solid,
            colour: Colour::BLACK,
        }
    }
}

/// Drop shadow cast by a bordered shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub enabled: bool,
    pub colour: Colour,
    size: f64,
    angle: f64,
}

impl Shadow {
    pub const DEFAULT_SIZE: f64 = 8.0;

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Direction of the cast, in degrees within `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_size(&mut self, size: f64) -> Result<(), GeometryError> {
        self.size = GeometryError::check_positive("shadow size", size)?;
        Ok(())
    }

    pub fn set_angle(&mut self, degrees: f64) -> Result<(), GeometryError> {
        self.angle = normalise_degrees(GeometryError::check_finite("shadow angle", degrees)?);
        Ok(())
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            enabled: false,
            colour: Colour::rgb(128, 128, 128),
            size: Self::DEFAULT_SIZE,
            angle: 315.0,
        }
    }
}

/// Second stroke drawn parallel to the border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleBorder {
    pub enabled: bool,
    pub colour: Colour,
    separation: f64,
}

impl DoubleBorder {
    pub const DEFAULT_SEPARATION: f64 = 2.0;

    /// Gap between the two strokes.
    pub fn separation(&self) -> f64 {
        self.separation
    }

    pub fn set_separation(&mut self, separation: f64) -> Result<(), GeometryError> {
        self.separation = GeometryError::check_positive("double border separation", separation)?;
        Ok(())
    }
}

impl Default for DoubleBorder {
    fn default() -> Self {
        Self {
            enabled: false,
            colour: Colour::WHITE,
            separation: Self::DEFAULT_SEPARATION,
        }
    }
}

/// Decoration drawn at one end of an open path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowStyle {
    #[default]
    None,
    Arrow,
    ReverseArrow,
    Bar,
    Bracket,
    RoundBracket,
    Disk,
    Circle,
}

/// Arrow heads of an open path and their shared dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrows {
    pub start: ArrowStyle,
    pub end: ArrowStyle,
    size: f64,
    length: f64,
    inset: f64,
}

impl Arrows {
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn inset(&self) -> f64 {
        self.inset
    }

    pub fn set_size(&mut self, size: f64) -> Result<(), GeometryError> {
        self.size = GeometryError::check_positive("arrow size", size)?;
        Ok(())
    }

    pub fn set_length(&mut self, length: f64) -> Result<(), GeometryError> {
        self.length = GeometryError::check_positive("arrow length", length)?;
        Ok(())
    }

    /// Depth of the notch cut into the head; zero draws a plain triangle.
    pub fn set_inset(&mut self, inset: f64) -> Result<(), GeometryError> {
        self.inset = GeometryError::check_non_negative("arrow inset", inset)?;
        Ok(())
    }
}

impl Default for Arrows {
    fn default() -> Self {
        Self {
            start: ArrowStyle::None,
            end: ArrowStyle::None,
            size: 4.0,
            length: 1.4,
            inset: 0.0,
        }
    }
}

/// Map any finite angle in degrees into `[0, 360)`.
pub(crate) fn normalise_degrees(degrees: f64) -> f64 {
    let normalised = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if normalised >= 360.0 {
        0.0
    } else {
        normalised
    }
}

/// Interior filling of a closed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filling {
    pub style: FillStyle,
    pub colour: Colour,
}

impl Default for Filling {
    fn default() -> Self {
        Self {
            style: FillStyle::None,
            colour: Colour::WHITE,
        }
    }
}
