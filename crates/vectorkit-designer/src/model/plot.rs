//! Function plots sampled over a domain.
//!
//! A plot caches its sampled points. Every setter goes through
//! [`DesignPlot::update`], which validates the new parameters and resamples
//! before committing, so the cache is never observed stale.

use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result};

use super::{
    min_corner, unsupported, Capability, DesignerShape, Equation, Point, PropertyKey,
    PropertyValue, ShapeType,
};

/// How the sampled points are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotStyle {
    Line,
    #[default]
    Curve,
    /// Curve whose first and last samples only act as control points.
    ECurve,
    /// Closed curve.
    CCurve,
    Polygon,
    Dots,
}

impl PlotStyle {
    pub fn is_closed(self) -> bool {
        matches!(self, PlotStyle::CCurve | PlotStyle::Polygon)
    }
}

impl std::fmt::Display for PlotStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlotStyle::Line => "line",
            PlotStyle::Curve => "curve",
            PlotStyle::ECurve => "ecurve",
            PlotStyle::CCurve => "ccurve",
            PlotStyle::Polygon => "polygon",
            PlotStyle::Dots => "dots",
        };
        f.write_str(name)
    }
}

/// Upper bound on the number of sampled points of one plot.
///
/// Sampling is eager and runs on the editor thread.
pub const MAX_NB_POINTS: u32 = 10_000;

/// Primary attributes of a plot, also used as configurable defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    pub style: PlotStyle,
    pub nb_points: u32,
    pub min_x: f64,
    pub max_x: f64,
    pub x_scale: f64,
    pub y_scale: f64,
    pub polar: bool,
    pub equation: String,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            style: PlotStyle::Curve,
            nb_points: 50,
            min_x: 0.0,
            max_x: 10.0,
            x_scale: 1.0,
            y_scale: 1.0,
            polar: false,
            equation: "x".to_string(),
        }
    }
}

impl PlotParams {
    /// Check the parameters without sampling.
    pub fn validate(&self) -> std::result::Result<(), GeometryError> {
        check_domain(self.min_x, self.max_x)?;
        check_nb_points(self.nb_points)?;
        GeometryError::check_finite("x scale", self.x_scale)?;
        GeometryError::check_finite("y scale", self.y_scale)?;
        Equation::parse(&self.equation)?;
        Ok(())
    }
}

fn check_domain(min_x: f64, max_x: f64) -> std::result::Result<(), GeometryError> {
    GeometryError::check_finite("min x", min_x)?;
    GeometryError::check_finite("max x", max_x)?;
    if min_x >= max_x {
        return Err(GeometryError::InvalidRange {
            field: "plot domain",
            min: min_x,
            max: max_x,
        });
    }
    GeometryError::check_finite("plot domain width", max_x - min_x)?;
    Ok(())
}

fn check_nb_points(nb_points: u32) -> std::result::Result<(), GeometryError> {
    if nb_points == 0 || nb_points > MAX_NB_POINTS {
        return Err(GeometryError::InvalidCount {
            field: "plotted points",
            value: nb_points,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlotRepr", into = "PlotRepr")]
pub struct DesignPlot {
    position: Point,
    style: PlotStyle,
    nb_points: u32,
    min_x: f64,
    max_x: f64,
    x_scale: f64,
    y_scale: f64,
    polar: bool,
    equation: Equation,
    points: Vec<Point>,
}

#[derive(Serialize, Deserialize)]
struct PlotRepr {
    position: Point,
    #[serde(flatten)]
    params: PlotParams,
}

impl TryFrom<PlotRepr> for DesignPlot {
    type Error = GeometryError;

    fn try_from(repr: PlotRepr) -> std::result::Result<Self, Self::Error> {
        DesignPlot::new(repr.position, &repr.params)
    }
}

impl From<DesignPlot> for PlotRepr {
    fn from(plot: DesignPlot) -> Self {
        Self {
            position: plot.position,
            params: plot.params(),
        }
    }
}

impl DesignPlot {
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Rotation,
        Capability::Position,
        Capability::Border,
        Capability::DoubleBorder,
        Capability::Shadow,
        Capability::Filling,
        Capability::Plot,
    ];

    pub fn new(position: Point, params: &PlotParams) -> std::result::Result<Self, GeometryError> {
        check_domain(params.min_x, params.max_x)?;
        check_nb_points(params.nb_points)?;
        let mut plot = Self {
            position,
            style: params.style,
            nb_points: params.nb_points,
            min_x: params.min_x,
            max_x: params.max_x,
            x_scale: GeometryError::check_finite("x scale", params.x_scale)?,
            y_scale: GeometryError::check_finite("y scale", params.y_scale)?,
            polar: params.polar,
            equation: Equation::parse(&params.equation)?,
            points: Vec::new(),
        };
        plot.points = plot.sample()?;
        Ok(plot)
    }

    pub fn params(&self) -> PlotParams {
        PlotParams {
            style: self.style,
            nb_points: self.nb_points,
            min_x: self.min_x,
            max_x: self.max_x,
            x_scale: self.x_scale,
            y_scale: self.y_scale,
            polar: self.polar,
            equation: self.equation.source().to_string(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn style(&self) -> PlotStyle {
        self.style
    }

    pub fn nb_points(&self) -> u32 {
        self.nb_points
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    pub fn is_polar(&self) -> bool {
        self.polar
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Sampled points, exactly `nb_points` of them.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points actually drawn: an `ECurve` hides its two end control points.
    pub fn visible_points(&self) -> &[Point] {
        match self.style {
            PlotStyle::ECurve if self.points.len() > 2 => &self.points[1..self.points.len() - 1],
            PlotStyle::ECurve => &[],
            _ => &self.points,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.style.is_closed()
    }

    /// Apply `change` to a copy, validate and resample it, then commit.
    pub fn update<F>(&mut self, change: F) -> std::result::Result<(), GeometryError>
    where
        F: FnOnce(&mut Self) -> std::result::Result<(), GeometryError>,
    {
        let mut next = self.clone();
        change(&mut next)?;
        check_domain(next.min_x, next.max_x)?;
        check_nb_points(next.nb_points)?;
        next.recompute_derived()?;
        *self = next;
        Ok(())
    }

    pub fn set_style(&mut self, style: PlotStyle) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.style = style;
            Ok(())
        })
    }

    pub fn set_nb_points(&mut self, nb_points: u32) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.nb_points = nb_points;
            Ok(())
        })
    }

    pub fn set_min_x(&mut self, min_x: f64) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.min_x = min_x;
            Ok(())
        })
    }

    pub fn set_max_x(&mut self, max_x: f64) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.max_x = max_x;
            Ok(())
        })
    }

    /// Set both bounds at once, for moves that would cross the other bound.
    pub fn set_domain(&mut self, min_x: f64, max_x: f64) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.min_x = min_x;
            p.max_x = max_x;
            Ok(())
        })
    }

    pub fn set_x_scale(&mut self, x_scale: f64) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.x_scale = GeometryError::check_finite("x scale", x_scale)?;
            Ok(())
        })
    }

    pub fn set_y_scale(&mut self, y_scale: f64) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.y_scale = GeometryError::check_finite("y scale", y_scale)?;
            Ok(())
        })
    }

    pub fn set_polar(&mut self, polar: bool) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.polar = polar;
            Ok(())
        })
    }

    pub fn set_equation(&mut self, source: &str) -> std::result::Result<(), GeometryError> {
        let equation = Equation::parse(source)?;
        self.update(|p| {
            p.equation = equation;
            Ok(())
        })
    }

    pub fn set_position(&mut self, position: Point) -> std::result::Result<(), GeometryError> {
        self.update(|p| {
            p.position = position;
            Ok(())
        })
    }

    fn sample(&self) -> std::result::Result<Vec<Point>, GeometryError> {
        let n = self.nb_points as usize;
        let step = if n > 1 {
            (self.max_x - self.min_x) / (n - 1) as f64
        } else {
            0.0
        };

        let mut points = Vec::with_capacity(n);
        for index in 0..n {
            let x = if n > 1 && index == n - 1 {
                self.max_x
            } else {
                self.min_x + step * index as f64
            };
            let fx = self.equation.eval(x)?;
            let (px, py) = if self.polar {
                let angle = x.to_radians();
                (fx * angle.cos(), fx * angle.sin())
            } else {
                (x, fx)
            };
            let px = px * self.x_scale + self.position.x();
            let py = py * self.y_scale + self.position.y();
            let point =
                Point::new(px, py).map_err(|_| GeometryError::NonFiniteSample { index, x })?;
            points.push(point);
        }
        Ok(points)
    }
}

impl DesignerShape for DesignPlot {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError> {
        self.points = self.sample()?;
        Ok(())
    }

    fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        let value = match key {
            PropertyKey::PlotStyle => PropertyValue::PlotStyle(self.style),
            PropertyKey::PlotPoints => PropertyValue::Count(self.nb_points),
            PropertyKey::PlotMinX => PropertyValue::Number(self.min_x),
            PropertyKey::PlotMaxX => PropertyValue::Number(self.max_x),
            PropertyKey::PlotXScale => PropertyValue::Number(self.x_scale),
            PropertyKey::PlotYScale => PropertyValue::Number(self.y_scale),
            PropertyKey::PlotPolar => PropertyValue::Flag(self.polar),
            PropertyKey::PlotEquation => PropertyValue::Text(self.equation.source().to_string()),
            _ => return None,
        };
        Some(value)
    }

    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()> {
        match key {
            PropertyKey::PlotStyle => self.set_style(value.as_plot_style(key)?)?,
            PropertyKey::PlotPoints => self.set_nb_points(value.as_count(key)?)?,
            PropertyKey::PlotMinX => self.set_min_x(value.as_number(key)?)?,
            PropertyKey::PlotMaxX => self.set_max_x(value.as_number(key)?)?,
            PropertyKey::PlotXScale => self.set_x_scale(value.as_number(key)?)?,
            PropertyKey::PlotYScale => self.set_y_scale(value.as_number(key)?)?,
            PropertyKey::PlotPolar => self.set_polar(value.as_flag(key)?)?,
            PropertyKey::PlotEquation => self.set_equation(&value.as_text(key)?)?,
            _ => return Err(unsupported(key, ShapeType::Plot)),
        }
        Ok(())
    }

    fn top_left(&self) -> Point {
        min_corner(self.points.iter().copied())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> std::result::Result<(), GeometryError> {
        let position = self.position.offset(dx, dy)?;
        self.set_position(position)
    }
}
