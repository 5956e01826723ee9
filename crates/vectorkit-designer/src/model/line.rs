use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result};

use super::{
    min_corner, unsupported, Capability, DesignerShape, Point, PropertyKey, PropertyValue,
    ShapeType,
};

/// Derived orientation of a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Slope {
    /// `y = a·x + b`.
    Finite { a: f64, b: f64 },
    /// Both points share the abscissa `x`; the slope is undefined.
    Vertical { x: f64 },
}

impl Slope {
    fn between(p1: &Point, p2: &Point) -> std::result::Result<Self, GeometryError> {
        let dx = p2.x() - p1.x();
        if dx == 0.0 {
            return Ok(Slope::Vertical { x: p1.x() });
        }
        let a = GeometryError::check_finite("slope", (p2.y() - p1.y()) / dx)?;
        let b = GeometryError::check_finite("intercept", p1.y() - a * p1.x())?;
        Ok(Slope::Finite { a, b })
    }
}

/// A straight segment between two points, with cached slope and intercept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineRepr", into = "LineRepr")]
pub struct DesignLine {
    point1: Point,
    point2: Point,
    slope: Slope,
}

#[derive(Serialize, Deserialize)]
struct LineRepr {
    point1: Point,
    point2: Point,
}

impl TryFrom<LineRepr> for DesignLine {
    type Error = GeometryError;

    fn try_from(repr: LineRepr) -> std::result::Result<Self, Self::Error> {
        DesignLine::new(repr.point1, repr.point2)
    }
}

impl From<DesignLine> for LineRepr {
    fn from(line: DesignLine) -> Self {
        Self {
            point1: line.point1,
            point2: line.point2,
        }
    }
}

impl DesignLine {
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Rotation,
        Capability::Position,
        Capability::Border,
        Capability::DoubleBorder,
        Capability::Shadow,
        Capability::Arrows,
        Capability::LineGeometry,
    ];

    pub fn new(point1: Point, point2: Point) -> std::result::Result<Self, GeometryError> {
        let slope = Slope::between(&point1, &point2)?;
        Ok(Self {
            point1,
            point2,
            slope,
        })
    }

    /// Line through `point` and `(0, b)`.
    pub fn from_intercept(b: f64, point: Point) -> std::result::Result<Self, GeometryError> {
        let b = GeometryError::check_finite("intercept", b)?;
        Self::new(point, Point::new(0.0, b)?)
    }

    /// Line through `point` with slope `a`; the second point is one unit to the right.
    pub fn from_slope(a: f64, point: Point) -> std::result::Result<Self, GeometryError> {
        let a = GeometryError::check_finite("slope", a)?;
        let second = point.offset(1.0, a)?;
        Self::new(point, second)
    }

    pub fn point1(&self) -> Point {
        self.point1
    }

    pub fn point2(&self) -> Point {
        self.point2
    }

    pub fn slope(&self) -> Slope {
        self.slope
    }

    /// Slope, or `None` for a vertical line.
    pub fn a(&self) -> Option<f64> {
        match self.slope {
            Slope::Finite { a, .. } => Some(a),
            Slope::Vertical { .. } => None,
        }
    }

    /// Intercept, or `None` for a vertical line.
    pub fn b(&self) -> Option<f64> {
        match self.slope {
            Slope::Finite { b, .. } => Some(b),
            Slope::Vertical { .. } => None,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self.slope, Slope::Vertical { .. })
    }

    pub fn length(&self) -> f64 {
        self.point1.distance_to(&self.point2)
    }

    pub fn set_point1(&mut self, point: Point) -> std::result::Result<(), GeometryError> {
        self.slope = Slope::between(&point, &self.point2)?;
        self.point1 = point;
        Ok(())
    }

    pub fn set_point2(&mut self, point: Point) -> std::result::Result<(), GeometryError> {
        self.slope = Slope::between(&self.point1, &point)?;
        self.point2 = point;
        Ok(())
    }
}

impl DesignerShape for DesignLine {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError> {
        self.slope = Slope::between(&self.point1, &self.point2)?;
        Ok(())
    }

    fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        match key {
            PropertyKey::LinePoint1 => Some(PropertyValue::Point(self.point1)),
            PropertyKey::LinePoint2 => Some(PropertyValue::Point(self.point2)),
            _ => None,
        }
    }

    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()> {
        match key {
            PropertyKey::LinePoint1 => self.set_point1(value.as_point(key)?)?,
            PropertyKey::LinePoint2 => self.set_point2(value.as_point(key)?)?,
            _ => return Err(unsupported(key, ShapeType::Line)),
        }
        Ok(())
    }

    fn top_left(&self) -> Point {
        min_corner([self.point1, self.point2])
    }

    fn translate(&mut self, dx: f64, dy: f64) -> std::result::Result<(), GeometryError> {
        *self = Self::new(self.point1.offset(dx, dy)?, self.point2.offset(dx, dy)?)?;
        Ok(())
    }
}
