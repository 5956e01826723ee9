use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result};

use super::axes::Axes;
use super::{unsupported, Capability, DesignerShape, Point, PropertyKey, PropertyValue, ShapeType};

/// Labelled axis grid; bounds are in grid units from `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignGrid {
    position: Point,
    x_start: f64,
    y_start: f64,
    x_end: f64,
    y_end: f64,
    labels_size: u32,
    #[serde(default)]
    axes: Axes,
}

impl Default for DesignGrid {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            x_start: 0.0,
            y_start: 0.0,
            x_end: 2.0,
            y_end: 2.0,
            labels_size: 10,
            axes: Axes::default(),
        }
    }
}

impl DesignGrid {
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Rotation,
        Capability::Position,
        Capability::Grid,
        Capability::Axes,
    ];

    pub fn new(
        position: Point,
        x_start: f64,
        y_start: f64,
        x_end: f64,
        y_end: f64,
    ) -> std::result::Result<Self, GeometryError> {
        let grid = Self {
            position,
            x_start,
            y_start,
            x_end,
            y_end,
            ..Default::default()
        };
        grid.validate()?;
        Ok(grid)
    }

    fn validate(&self) -> std::result::Result<(), GeometryError> {
        check_bounds("grid x range", self.x_start, self.x_end)?;
        check_bounds("grid y range", self.y_start, self.y_end)?;
        if self.labels_size == 0 {
            return Err(GeometryError::InvalidCount {
                field: "grid labels size",
                value: self.labels_size,
            });
        }
        Ok(())
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x_start(&self) -> f64 {
        self.x_start
    }

    pub fn y_start(&self) -> f64 {
        self.y_start
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    pub fn y_end(&self) -> f64 {
        self.y_end
    }

    pub fn labels_size(&self) -> u32 {
        self.labels_size
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    fn commit<F: FnOnce(&mut Self)>(&mut self, change: F) -> std::result::Result<(), GeometryError> {
        let mut next = self.clone();
        change(&mut next);
        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn check_bounds(field: &'static str, start: f64, end: f64) -> std::result::Result<(), GeometryError> {
    GeometryError::check_finite(field, start)?;
    GeometryError::check_finite(field, end)?;
    if start >= end {
        return Err(GeometryError::InvalidRange {
            field,
            min: start,
            max: end,
        });
    }
    Ok(())
}

impl DesignerShape for DesignGrid {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError> {
        Ok(())
    }

    fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        let value = match key {
            PropertyKey::GridXStart => PropertyValue::Number(self.x_start),
            PropertyKey::GridYStart => PropertyValue::Number(self.y_start),
            PropertyKey::GridXEnd => PropertyValue::Number(self.x_end),
            PropertyKey::GridYEnd => PropertyValue::Number(self.y_end),
            PropertyKey::GridLabelsSize => PropertyValue::Count(self.labels_size),
            PropertyKey::AxesStyle => PropertyValue::AxesStyle(self.axes.style),
            PropertyKey::TicksStyle => PropertyValue::TicksStyle(self.axes.ticks_style),
            PropertyKey::TicksSize => PropertyValue::Number(self.axes.ticks_size()),
            PropertyKey::ShowTicks => PropertyValue::PlottingStyle(self.axes.show_ticks),
            PropertyKey::ShowLabels => PropertyValue::PlottingStyle(self.axes.show_labels),
            PropertyKey::ShowOrigin => PropertyValue::Flag(self.axes.show_origin),
            PropertyKey::LabelsIncrementX => PropertyValue::Number(self.axes.increment_x()),
            PropertyKey::LabelsIncrementY => PropertyValue::Number(self.axes.increment_y()),
            _ => return None,
        };
        Some(value)
    }

    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()> {
        match key {
            PropertyKey::GridXStart => {
                let v = value.as_number(key)?;
                self.commit(|g| g.x_start = v)?
            }
            PropertyKey::GridYStart => {
                let v = value.as_number(key)?;
                self.commit(|g| g.y_start = v)?
            }
            PropertyKey::GridXEnd => {
                let v = value.as_number(key)?;
                self.commit(|g| g.x_end = v)?
            }
            PropertyKey::GridYEnd => {
                let v = value.as_number(key)?;
                self.commit(|g| g.y_end = v)?
            }
            PropertyKey::GridLabelsSize => {
                let v = value.as_count(key)?;
                self.commit(|g| g.labels_size = v)?
            }
            PropertyKey::AxesStyle => self.axes.style = value.as_axes_style(key)?,
            PropertyKey::TicksStyle => self.axes.ticks_style = value.as_ticks_style(key)?,
            PropertyKey::TicksSize => self.axes.set_ticks_size(value.as_number(key)?)?,
            PropertyKey::ShowTicks => self.axes.show_ticks = value.as_plotting_style(key)?,
            PropertyKey::ShowLabels => self.axes.show_labels = value.as_plotting_style(key)?,
            PropertyKey::ShowOrigin => self.axes.show_origin = value.as_flag(key)?,
            PropertyKey::LabelsIncrementX => self.axes.set_increment_x(value.as_number(key)?)?,
            PropertyKey::LabelsIncrementY => self.axes.set_increment_y(value.as_number(key)?)?,
            _ => return Err(unsupported(key, ShapeType::Grid)),
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
