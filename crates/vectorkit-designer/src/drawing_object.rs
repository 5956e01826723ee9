//! Drawing objects: a shape plus the style attributes every kind may share.

use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result, ShapeId};

use crate::model::style::normalise_degrees;
use crate::model::{
    unsupported, Arrows, Border, Capability, DesignerShape, DoubleBorder, Filling, Point,
    PropertyKey, PropertyValue, Shadow, Shape, ShapeType,
};

/// A shape owned by the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingObject {
    pub id: ShapeId,
    pub name: String,
    pub shape: Shape,
    border: Border,
    #[serde(default)]
    double_border: DoubleBorder,
    #[serde(default)]
    shadow: Shadow,
    filling: Filling,
    #[serde(default)]
    arrows: Arrows,
    rotation: f64,
}

impl DrawingObject {
    pub fn new(id: ShapeId, shape: Shape) -> Self {
        Self {
            id,
            name: format!("{} {}", shape.shape_type(), id.get()),
            shape,
            border: Border::default(),
            double_border: DoubleBorder::default(),
            shadow: Shadow::default(),
            filling: Filling::default(),
            arrows: Arrows::default(),
            rotation: 0.0,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.shape.supports(capability)
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn filling(&self) -> &Filling {
        &self.filling
    }

    pub fn double_border(&self) -> &DoubleBorder {
        &self.double_border
    }

    pub fn shadow(&self) -> &Shadow {
        &self.shadow
    }

    pub fn arrows(&self) -> &Arrows {
        &self.arrows
    }

    /// Minimum corner of the shape's bounding box.
    pub fn position(&self) -> Point {
        self.shape.top_left()
    }

    /// Move the shape so that its bounding box starts at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) -> std::result::Result<(), GeometryError> {
        let x = GeometryError::check_finite("x position", x)?;
        let y = GeometryError::check_finite("y position", y)?;
        let current = self.position();
        self.shape.translate(x - current.x(), y - current.y())
    }

    /// Rotation in degrees, in `[0, 360)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f64) -> std::result::Result<(), GeometryError> {
        self.rotation = normalise_degrees(GeometryError::check_finite("rotation", degrees)?);
        Ok(())
    }

    /// Current value of any property this object carries.
    pub fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        if !self.supports(key.capability()) {
            return None;
        }
        match key {
            PropertyKey::Rotation => Some(PropertyValue::Number(self.rotation)),
            PropertyKey::PositionX => Some(PropertyValue::Number(self.position().x())),
            PropertyKey::PositionY => Some(PropertyValue::Number(self.position().y())),
            PropertyKey::Thickness => Some(PropertyValue::Number(self.border.thickness())),
            PropertyKey::LineStyle => Some(PropertyValue::LineStyle(self.border.style)),
            PropertyKey::LineColour => Some(PropertyValue::Colour(self.border.colour)),
            PropertyKey::DoubleBorderEnabled => Some(PropertyValue::Flag(self.double_border.enabled)),
            PropertyKey::DoubleBorderColour => Some(PropertyValue::Colour(self.double_border.colour)),
            PropertyKey::DoubleBorderSeparation => {
                Some(PropertyValue::Number(self.double_border.separation()))
            }
            PropertyKey::ShadowEnabled => Some(PropertyValue::Flag(self.shadow.enabled)),
            PropertyKey::ShadowColour => Some(PropertyValue::Colour(self.shadow.colour)),
            PropertyKey::ShadowSize => Some(PropertyValue::Number(self.shadow.size())),
            PropertyKey::ShadowAngle => Some(PropertyValue::Number(self.shadow.angle())),
            PropertyKey::FillStyle => Some(PropertyValue::FillStyle(self.filling.style)),
            PropertyKey::FillColour => Some(PropertyValue::Colour(self.filling.colour)),
            PropertyKey::ArrowStart => Some(PropertyValue::ArrowStyle(self.arrows.start)),
            PropertyKey::ArrowEnd => Some(PropertyValue::ArrowStyle(self.arrows.end)),
            PropertyKey::ArrowSize => Some(PropertyValue::Number(self.arrows.size())),
            PropertyKey::ArrowLength => Some(PropertyValue::Number(self.arrows.length())),
            PropertyKey::ArrowInset => Some(PropertyValue::Number(self.arrows.inset())),
            _ => self.shape.property(key),
        }
    }

    /// Set a property, leaving the object untouched on failure.
    ///
    /// Derived geometry is recomputed before this returns.
    pub fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()> {
        if !self.supports(key.capability()) {
            return Err(unsupported(key, self.shape_type()));
        }
        match key {
            PropertyKey::Rotation => self.set_rotation(value.as_number(key)?)?,
            PropertyKey::PositionX => {
                let y = self.position().y();
                self.move_to(value.as_number(key)?, y)?
            }
            PropertyKey::PositionY => {
                let x = self.position().x();
                self.move_to(x, value.as_number(key)?)?
            }
            PropertyKey::Thickness => self.border.set_thickness(value.as_number(key)?)?,
            PropertyKey::LineStyle => self.border.style = value.as_line_style(key)?,
            PropertyKey::LineColour => self.border.colour = value.as_colour(key)?,
            PropertyKey::DoubleBorderEnabled => self.double_border.enabled = value.as_flag(key)?,
            PropertyKey::DoubleBorderColour => self.double_border.colour = value.as_colour(key)?,
            PropertyKey::DoubleBorderSeparation => {
                self.double_border.set_separation(value.as_number(key)?)?
            }
            PropertyKey::ShadowEnabled => self.shadow.enabled = value.as_flag(key)?,
            PropertyKey::ShadowColour => self.shadow.colour = value.as_colour(key)?,
            PropertyKey::ShadowSize => self.shadow.set_size(value.as_number(key)?)?,
            PropertyKey::ShadowAngle => self.shadow.set_angle(value.as_number(key)?)?,
            PropertyKey::FillStyle => self.filling.style = value.as_fill_style(key)?,
            PropertyKey::FillColour => self.filling.colour = value.as_colour(key)?,
            PropertyKey::ArrowStart => self.arrows.start = value.as_arrow_style(key)?,
            PropertyKey::ArrowEnd => self.arrows.end = value.as_arrow_style(key)?,
            PropertyKey::ArrowSize => self.arrows.set_size(value.as_number(key)?)?,
            PropertyKey::ArrowLength => self.arrows.set_length(value.as_number(key)?)?,
            PropertyKey::ArrowInset => self.arrows.set_inset(value.as_number(key)?)?,
            _ => self.shape.set_property(key, value)?,
        }
        Ok(())
    }

    /// Values of every property of `capability`, in display order.
    pub fn properties(&self, capability: Capability) -> Vec<(PropertyKey, PropertyValue)> {
        capability
            .keys()
            .iter()
            .filter_map(|&key| self.property(key).map(|value| (key, value)))
            .collect()
    }
}
