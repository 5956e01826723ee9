use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result};

use super::{unsupported, Capability, DesignerShape, Point, PropertyKey, PropertyValue, ShapeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotStyle {
    #[default]
    Dot,
    Square,
    Triangle,
    Cross,
    Plus,
    Diamond,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDot {
    position: Point,
    style: DotStyle,
    size: f64,
}

impl Default for DesignDot {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            style: DotStyle::Dot,
            size: 6.0,
        }
    }
}

impl DesignDot {
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Rotation,
        Capability::Position,
        Capability::Dot,
    ];

    pub fn new(position: Point, style: DotStyle, size: f64) -> std::result::Result<Self, GeometryError> {
        Ok(Self {
            position,
            style,
            size: GeometryError::check_positive("dot size", size)?,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn style(&self) -> DotStyle {
        self.style
    }

    pub fn size(&self) -> f64 {
        self.size
    }
}

impl DesignerShape for DesignDot {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError> {
        Ok(())
    }

    fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        match key {
            PropertyKey::DotStyle => Some(PropertyValue::DotStyle(self.style)),
            PropertyKey::DotSize => Some(PropertyValue::Number(self.size)),
            _ => None,
        }
    }

    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()> {
        match key {
            PropertyKey::DotStyle => self.style = value.as_dot_style(key)?,
            PropertyKey::DotSize => {
                self.size = GeometryError::check_positive("dot size", value.as_number(key)?)?
            }
            _ => return Err(unsupported(key, ShapeType::Dot)),
        }
        Ok(())
    }

    /// The dot is centred on its position.
    fn top_left(&self) -> Point {
        let half = self.size / 2.0;
        Point::saturating(self.position.x() - half, self.position.y() - half)
    }

    fn translate(&mut self, dx: f64, dy: f64) -> std::result::Result<(), GeometryError> {
        self.position = self.position.offset(dx, dy)?;
        Ok(())
    }
}
