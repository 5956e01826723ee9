use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result};

use super::{unsupported, Capability, DesignerShape, Point, PropertyKey, PropertyValue, ShapeType};

/// Which point of the text box sits at the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPosition {
    #[default]
    BottomLeft,
    Bottom,
    BottomRight,
    TopLeft,
    Top,
    TopRight,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignText {
    position: Point,
    anchor: TextPosition,
    content: String,
}

impl DesignText {
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Rotation,
        Capability::Position,
        Capability::Text,
    ];

    pub fn new(position: Point, content: impl Into<String>) -> Self {
        Self {
            position,
            anchor: TextPosition::BottomLeft,
            content: content.into(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn anchor(&self) -> TextPosition {
        self.anchor
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl DesignerShape for DesignText {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError> {
        Ok(())
    }

    fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        match key {
            PropertyKey::TextPosition => Some(PropertyValue::TextPosition(self.anchor)),
            PropertyKey::TextContent => Some(PropertyValue::Text(self.content.clone())),
            _ => None,
        }
    }

    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()> {
        match key {
            PropertyKey::TextPosition => self.anchor = value.as_text_position(key)?,
            PropertyKey::TextContent => self.content = value.as_text(key)?,
            _ => return Err(unsupported(key, ShapeType::Text)),
        }
        Ok(())
    }

    fn top_left(&self) -> Point {
        self.position
    }

    fn translate(&mut self, dx: f64, dy: f64) -> std::result::Result<(), GeometryError> {
        self.position = self.position.offset(dx, dy)?;
        Ok(())
    }
}
