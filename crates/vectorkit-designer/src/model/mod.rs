//! Geometric shape model.
//!
//! Every shape validates its inputs, and the values derived from them, before
//! committing any state. A failed constructor produces no shape and a failed
//! setter leaves the shape untouched.

use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result};

pub mod arc;
pub mod axes;
pub mod dot;
pub mod equation;
pub mod grid;
pub mod line;
pub mod plot;
pub mod property;
pub mod rectangle;
pub mod style;
pub mod text;

pub use arc::{ArcKind, DesignArc};
pub use axes::{Axes, AxesStyle, PlottingStyle, TicksStyle};
pub use dot::{DesignDot, DotStyle};
pub use equation::Equation;
pub use grid::DesignGrid;
pub use line::{DesignLine, Slope};
pub use plot::{DesignPlot, PlotParams, PlotStyle, MAX_NB_POINTS};
pub use property::{Capability, PropertyEdit, PropertyKey, PropertyValue};
pub use rectangle::DesignRectangle;
pub use style::{
    ArrowStyle, Arrows, Border, Colour, DoubleBorder, FillStyle, Filling, LineStyle, Shadow,
};
pub use text::{DesignText, TextPosition};

/// A point with finite coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointRepr", into = "PointRepr")]
pub struct Point {
    x: f64,
    y: f64,
}

#[derive(Serialize, Deserialize)]
struct PointRepr {
    x: f64,
    y: f64,
}

impl TryFrom<PointRepr> for Point {
    type Error = GeometryError;

    fn try_from(repr: PointRepr) -> std::result::Result<Self, Self::Error> {
        Point::new(repr.x, repr.y)
    }
}

impl From<Point> for PointRepr {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> std::result::Result<Self, GeometryError> {
        Ok(Self {
            x: GeometryError::check_finite("x", x)?,
            y: GeometryError::check_finite("y", y)?,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Translated copy; fails if the sum overflows to infinity.
    pub fn offset(&self, dx: f64, dy: f64) -> std::result::Result<Self, GeometryError> {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Point from raw coordinates, saturating overflow at the finite range.
    pub(crate) fn saturating(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(f64::MIN, f64::MAX),
            y: y.clamp(f64::MIN, f64::MAX),
        }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Componentwise minimum of `points`; the origin when there are none.
pub(crate) fn min_corner<I: IntoIterator<Item = Point>>(points: I) -> Point {
    points
        .into_iter()
        .reduce(|a, b| Point::saturating(a.x.min(b.x), a.y.min(b.y)))
        .unwrap_or_default()
}

/// Behaviour shared by every shape kind.
pub trait DesignerShape {
    /// The capabilities this shape kind implements.
    fn capabilities(&self) -> &'static [Capability];

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Rebuild cached derived values from primary attributes.
    ///
    /// Pure and idempotent; on failure the cached values are left as they were.
    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError>;

    /// Current value of a shape-specific property, if this kind carries it.
    fn property(&self, key: PropertyKey) -> Option<PropertyValue>;

    /// Set a shape-specific property; derived values are recomputed before
    /// returning.
    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()>;

    /// Minimum corner of the bounding box; y grows downwards.
    fn top_left(&self) -> Point;

    /// Move the whole shape; on failure the shape is left as it was.
    fn translate(&mut self, dx: f64, dy: f64) -> std::result::Result<(), GeometryError>;
}

/// Kind tag of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Line,
    Plot,
    Arc,
    Grid,
    Rectangle,
    Dot,
    Text,
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeType::Line => "Line",
            ShapeType::Plot => "Plot",
            ShapeType::Arc => "Arc",
            ShapeType::Grid => "Grid",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Dot => "Dot",
            ShapeType::Text => "Text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(DesignLine),
    Plot(DesignPlot),
    Arc(DesignArc),
    Grid(DesignGrid),
    Rectangle(DesignRectangle),
    Dot(DesignDot),
    Text(DesignText),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Plot(_) => ShapeType::Plot,
            Shape::Arc(_) => ShapeType::Arc,
            Shape::Grid(_) => ShapeType::Grid,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Dot(_) => ShapeType::Dot,
            Shape::Text(_) => ShapeType::Text,
        }
    }

    pub fn as_plot(&self) -> Option<&DesignPlot> {
        match self {
            Shape::Plot(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&DesignLine> {
        match self {
            Shape::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_arc(&self) -> Option<&DesignArc> {
        match self {
            Shape::Arc(a) => Some(a),
            _ => None,
        }
    }
}

impl DesignerShape for Shape {
    fn capabilities(&self) -> &'static [Capability] {
        match self {
            Shape::Line(s) => s.capabilities(),
            Shape::Plot(s) => s.capabilities(),
            Shape::Arc(s) => s.capabilities(),
            Shape::Grid(s) => s.capabilities(),
            Shape::Rectangle(s) => s.capabilities(),
            Shape::Dot(s) => s.capabilities(),
            Shape::Text(s) => s.capabilities(),
        }
    }

    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError> {
        match self {
            Shape::Line(s) => s.recompute_derived(),
            Shape::Plot(s) => s.recompute_derived(),
            Shape::Arc(s) => s.recompute_derived(),
            Shape::Grid(s) => s.recompute_derived(),
            Shape::Rectangle(s) => s.recompute_derived(),
            Shape::Dot(s) => s.recompute_derived(),
            Shape::Text(s) => s.recompute_derived(),
        }
    }

    fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        match self {
            Shape::Line(s) => s.property(key),
            Shape::Plot(s) => s.property(key),
            Shape::Arc(s) => s.property(key),
            Shape::Grid(s) => s.property(key),
            Shape::Rectangle(s) => s.property(key),
            Shape::Dot(s) => s.property(key),
            Shape::Text(s) => s.property(key),
        }
    }

    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()> {
        match self {
            Shape::Line(s) => s.set_property(key, value),
            Shape::Plot(s) => s.set_property(key, value),
            Shape::Arc(s) => s.set_property(key, value),
            Shape::Grid(s) => s.set_property(key, value),
            Shape::Rectangle(s) => s.set_property(key, value),
            Shape::Dot(s) => s.set_property(key, value),
            Shape::Text(s) => s.set_property(key, value),
        }
    }

    fn top_left(&self) -> Point {
        match self {
            Shape::Line(s) => s.top_left(),
            Shape::Plot(s) => s.top_left(),
            Shape::Arc(s) => s.top_left(),
            Shape::Grid(s) => s.top_left(),
            Shape::Rectangle(s) => s.top_left(),
            Shape::Dot(s) => s.top_left(),
            Shape::Text(s) => s.top_left(),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) -> std::result::Result<(), GeometryError> {
        match self {
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Plot(s) => s.translate(dx, dy),
            Shape::Arc(s) => s.translate(dx, dy),
            Shape::Grid(s) => s.translate(dx, dy),
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Dot(s) => s.translate(dx, dy),
            Shape::Text(s) => s.translate(dx, dy),
        }
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(
    Line => DesignLine,
    Plot => DesignPlot,
    Arc => DesignArc,
    Grid => DesignGrid,
    Rectangle => DesignRectangle,
    Dot => DesignDot,
    Text => DesignText,
);

/// Error for a key the shape kind does not carry.
pub(crate) fn unsupported(key: PropertyKey, shape: ShapeType) -> vectorkit_core::Error {
    vectorkit_core::PropertyError::Unsupported {
        property: key.name().to_string(),
        shape: shape.to_string(),
    }
    .into()
}
