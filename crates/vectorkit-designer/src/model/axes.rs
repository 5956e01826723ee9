//! Axes, ticks and labels drawn over a grid.

use serde::{Deserialize, Serialize};
use vectorkit_core::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxesStyle {
    #[default]
    Axes,
    Frame,
    None,
}

/// Which side of an axis the ticks are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicksStyle {
    #[default]
    Full,
    Top,
    Bottom,
}

/// Which axes a decoration applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlottingStyle {
    #[default]
    All,
    X,
    Y,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub style: AxesStyle,
    pub ticks_style: TicksStyle,
    pub show_ticks: PlottingStyle,
    pub show_labels: PlottingStyle,
    pub show_origin: bool,
    ticks_size: f64,
    increment_x: f64,
    increment_y: f64,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            style: AxesStyle::Axes,
            ticks_style: TicksStyle::Full,
            show_ticks: PlottingStyle::All,
            show_labels: PlottingStyle::All,
            show_origin: true,
            ticks_size: 2.0,
            increment_x: 1.0,
            increment_y: 1.0,
        }
    }
}

impl Axes {
    pub fn ticks_size(&self) -> f64 {
        self.ticks_size
    }

    /// Distance between two labels on the x axis, in grid units.
    pub fn increment_x(&self) -> f64 {
        self.increment_x
    }

    pub fn increment_y(&self) -> f64 {
        self.increment_y
    }

    pub fn set_ticks_size(&mut self, size: f64) -> Result<(), GeometryError> {
        self.ticks_size = GeometryError::check_positive("ticks size", size)?;
        Ok(())
    }

    pub fn set_increment_x(&mut self, increment: f64) -> Result<(), GeometryError> {
        self.increment_x = GeometryError::check_positive("labels x increment", increment)?;
        Ok(())
    }

    pub fn set_increment_y(&mut self, increment: f64) -> Result<(), GeometryError> {
        self.increment_y = GeometryError::check_positive("labels y increment", increment)?;
        Ok(())
    }
}
