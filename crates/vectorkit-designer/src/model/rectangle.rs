use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result};

use super::{unsupported, Capability, DesignerShape, Point, PropertyKey, PropertyValue, ShapeType};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    position: Point,
    width: f64,
    height: f64,
}

impl Default for DesignRectangle {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl DesignRectangle {
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Rotation,
        Capability::Position,
        Capability::Border,
        Capability::DoubleBorder,
        Capability::Shadow,
        Capability::Filling,
    ];

    pub fn new(position: Point, width: f64, height: f64) -> std::result::Result<Self, GeometryError> {
        Ok(Self {
            position,
            width: GeometryError::check_positive("width", width)?,
            height: GeometryError::check_positive("height", height)?,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> std::result::Result<(), GeometryError> {
        let width = GeometryError::check_positive("width", width)?;
        let height = GeometryError::check_positive("height", height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }
}

impl DesignerShape for DesignRectangle {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError> {
        Ok(())
    }

    fn property(&self, _key: PropertyKey) -> Option<PropertyValue> {
        None
    }

    fn set_property(&mut self, key: PropertyKey, _value: &PropertyValue) -> Result<()> {
        Err(unsupported(key, ShapeType::Rectangle))
    }

    fn top_left(&self) -> Point {
        self.position
    }

    fn translate(&mut self, dx: f64, dy: f64) -> std::result::Result<(), GeometryError> {
        self.position = self.position.offset(dx, dy)?;
        Ok(())
    }
}
