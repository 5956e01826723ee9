use serde::{Deserialize, Serialize};
use vectorkit_core::{GeometryError, Result};

use super::{unsupported, Capability, DesignerShape, Point, PropertyKey, PropertyValue, ShapeType};

/// How the ends of an arc are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcKind {
    /// Open arc.
    #[default]
    Arc,
    /// Closed through the centre.
    Wedge,
    /// Closed by the chord between the ends.
    Chord,
}

/// Circular arc; angles are in degrees, counter-clockwise from the x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArcRepr", into = "ArcRepr")]
pub struct DesignArc {
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    kind: ArcKind,
    start_point: Point,
    end_point: Point,
}

#[derive(Serialize, Deserialize)]
struct ArcRepr {
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    #[serde(default)]
    kind: ArcKind,
}

impl TryFrom<ArcRepr> for DesignArc {
    type Error = GeometryError;

    fn try_from(repr: ArcRepr) -> std::result::Result<Self, Self::Error> {
        let mut arc = DesignArc::new(repr.center, repr.radius, repr.start_angle, repr.end_angle)?;
        arc.kind = repr.kind;
        Ok(arc)
    }
}

impl From<DesignArc> for ArcRepr {
    fn from(arc: DesignArc) -> Self {
        Self {
            center: arc.center,
            radius: arc.radius,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            kind: arc.kind,
        }
    }
}

fn point_on_circle(
    center: Point,
    radius: f64,
    angle: f64,
) -> std::result::Result<Point, GeometryError> {
    let theta = angle.to_radians();
    center.offset(radius * theta.cos(), radius * theta.sin())
}

impl DesignArc {
    const CAPABILITIES: &'static [Capability] = &[
        Capability::Rotation,
        Capability::Position,
        Capability::Border,
        Capability::DoubleBorder,
        Capability::Shadow,
        Capability::Filling,
        Capability::Arrows,
        Capability::Arc,
    ];

    pub fn new(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> std::result::Result<Self, GeometryError> {
        let mut arc = Self {
            center,
            radius: GeometryError::check_positive("radius", radius)?,
            start_angle: GeometryError::check_finite("start angle", start_angle)?,
            end_angle: GeometryError::check_finite("end angle", end_angle)?,
            kind: ArcKind::Arc,
            start_point: center,
            end_point: center,
        };
        arc.recompute_derived()?;
        Ok(arc)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    pub fn kind(&self) -> ArcKind {
        self.kind
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }

    pub fn set_kind(&mut self, kind: ArcKind) {
        self.kind = kind;
    }

    pub fn set_radius(&mut self, radius: f64) -> std::result::Result<(), GeometryError> {
        let radius = GeometryError::check_positive("radius", radius)?;
        self.commit(|arc| arc.radius = radius)
    }

    pub fn set_start_angle(&mut self, angle: f64) -> std::result::Result<(), GeometryError> {
        let angle = GeometryError::check_finite("start angle", angle)?;
        self.commit(|arc| arc.start_angle = angle)
    }

    pub fn set_end_angle(&mut self, angle: f64) -> std::result::Result<(), GeometryError> {
        let angle = GeometryError::check_finite("end angle", angle)?;
        self.commit(|arc| arc.end_angle = angle)
    }

    pub fn set_center(&mut self, center: Point) -> std::result::Result<(), GeometryError> {
        self.commit(|arc| arc.center = center)
    }

    fn commit<F: FnOnce(&mut Self)>(&mut self, change: F) -> std::result::Result<(), GeometryError> {
        let mut next = self.clone();
        change(&mut next);
        next.recompute_derived()?;
        *self = next;
        Ok(())
    }
}

impl DesignerShape for DesignArc {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn recompute_derived(&mut self) -> std::result::Result<(), GeometryError> {
        let start = point_on_circle(self.center, self.radius, self.start_angle)?;
        let end = point_on_circle(self.center, self.radius, self.end_angle)?;
        self.start_point = start;
        self.end_point = end;
        Ok(())
    }

    fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        match key {
            PropertyKey::ArcKind => Some(PropertyValue::ArcKind(self.kind)),
            PropertyKey::ArcStartAngle => Some(PropertyValue::Number(self.start_angle)),
            PropertyKey::ArcEndAngle => Some(PropertyValue::Number(self.end_angle)),
            _ => None,
        }
    }

    fn set_property(&mut self, key: PropertyKey, value: &PropertyValue) -> Result<()> {
        match key {
            PropertyKey::ArcKind => self.set_kind(value.as_arc_kind(key)?),
            PropertyKey::ArcStartAngle => self.set_start_angle(value.as_number(key)?)?,
            PropertyKey::ArcEndAngle => self.set_end_angle(value.as_number(key)?)?,
            _ => return Err(unsupported(key, ShapeType::Arc)),
        }
        Ok(())
    }

    /// Corner of the full circle's bounding box.
    fn top_left(&self) -> Point {
        Point::saturating(self.center.x() - self.radius, self.center.y() - self.radius)
    }

    fn translate(&mut self, dx: f64, dy: f64) -> std::result::Result<(), GeometryError> {
        let center = self.center.offset(dx, dy)?;
        self.set_center(center)
    }
}
