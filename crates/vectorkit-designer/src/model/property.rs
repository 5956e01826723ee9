//! Capabilities, editable properties and typed property values.
//!
//! A [`Capability`] is a contract a shape kind either implements or not. Every
//! [`PropertyKey`] belongs to exactly one capability, so the eligibility of a
//! shape for an edit is a set-membership test on its capabilities.

use serde::{Deserialize, Serialize};
use vectorkit_core::PropertyError;

use super::arc::ArcKind;
use super::axes::{AxesStyle, PlottingStyle, TicksStyle};
use super::dot::DotStyle;
use super::plot::PlotStyle;
use super::style::{ArrowStyle, Colour, FillStyle, LineStyle};
use super::text::TextPosition;
use super::Point;

/// A property group a shape may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    Rotation,
    Position,
    Border,
    DoubleBorder,
    Shadow,
    Filling,
    Arrows,
    LineGeometry,
    Plot,
    Arc,
    Grid,
    Axes,
    Dot,
    Text,
}

impl Capability {
    pub const ALL: [Capability; 14] = [
        Capability::Rotation,
        Capability::Position,
        Capability::Border,
        Capability::DoubleBorder,
        Capability::Shadow,
        Capability::Filling,
        Capability::Arrows,
        Capability::LineGeometry,
        Capability::Plot,
        Capability::Arc,
        Capability::Grid,
        Capability::Axes,
        Capability::Dot,
        Capability::Text,
    ];

    /// Properties edited through this capability, in display order.
    pub fn keys(self) -> &'static [PropertyKey] {
        use PropertyKey::*;
        match self {
            Capability::Rotation => &[Rotation],
            Capability::Position => &[PositionX, PositionY],
            Capability::Border => &[Thickness, LineStyle, LineColour],
            Capability::DoubleBorder => &[
                DoubleBorderEnabled,
                DoubleBorderColour,
                DoubleBorderSeparation,
            ],
            Capability::Shadow => &[ShadowEnabled, ShadowColour, ShadowSize, ShadowAngle],
            Capability::Filling => &[FillStyle, FillColour],
            Capability::Arrows => &[ArrowStart, ArrowEnd, ArrowSize, ArrowLength, ArrowInset],
            Capability::LineGeometry => &[LinePoint1, LinePoint2],
            Capability::Plot => &[
                PlotStyle,
                PlotPoints,
                PlotMinX,
                PlotMaxX,
                PlotXScale,
                PlotYScale,
                PlotPolar,
                PlotEquation,
            ],
            Capability::Arc => &[ArcKind, ArcStartAngle, ArcEndAngle],
            Capability::Grid => &[GridXStart, GridYStart, GridXEnd, GridYEnd, GridLabelsSize],
            Capability::Axes => &[
                AxesStyle,
                TicksStyle,
                TicksSize,
                ShowTicks,
                ShowLabels,
                ShowOrigin,
                LabelsIncrementX,
                LabelsIncrementY,
            ],
            Capability::Dot => &[DotStyle, DotSize],
            Capability::Text => &[TextPosition, TextContent],
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::Rotation => "Rotation",
            Capability::Position => "Position",
            Capability::Border => "Border",
            Capability::DoubleBorder => "Double border",
            Capability::Shadow => "Shadow",
            Capability::Filling => "Filling",
            Capability::Arrows => "Arrows",
            Capability::LineGeometry => "Line geometry",
            Capability::Plot => "Plot",
            Capability::Arc => "Arc",
            Capability::Grid => "Grid",
            Capability::Axes => "Axes",
            Capability::Dot => "Dot",
            Capability::Text => "Text",
        };
        f.write_str(name)
    }
}

/// An editable shape property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    Rotation,
    PositionX,
    PositionY,
    Thickness,
    LineStyle,
    LineColour,
    DoubleBorderEnabled,
    DoubleBorderColour,
    DoubleBorderSeparation,
    ShadowEnabled,
    ShadowColour,
    ShadowSize,
    ShadowAngle,
    FillStyle,
    FillColour,
    ArrowStart,
    ArrowEnd,
    ArrowSize,
    ArrowLength,
    ArrowInset,
    LinePoint1,
    LinePoint2,
    PlotStyle,
    PlotPoints,
    PlotMinX,
    PlotMaxX,
    PlotXScale,
    PlotYScale,
    PlotPolar,
    PlotEquation,
    ArcKind,
    ArcStartAngle,
    ArcEndAngle,
    GridXStart,
    GridYStart,
    GridXEnd,
    GridYEnd,
    GridLabelsSize,
    AxesStyle,
    TicksStyle,
    TicksSize,
    ShowTicks,
    ShowLabels,
    ShowOrigin,
    LabelsIncrementX,
    LabelsIncrementY,
    DotStyle,
    DotSize,
    TextPosition,
    TextContent,
}

impl PropertyKey {
    /// The capability a shape needs to carry this property.
    pub fn capability(self) -> Capability {
        use PropertyKey::*;
        match self {
            Rotation => Capability::Rotation,
            PositionX | PositionY => Capability::Position,
            Thickness | LineStyle | LineColour => Capability::Border,
            DoubleBorderEnabled | DoubleBorderColour | DoubleBorderSeparation => {
                Capability::DoubleBorder
            }
            ShadowEnabled | ShadowColour | ShadowSize | ShadowAngle => Capability::Shadow,
            FillStyle | FillColour => Capability::Filling,
            ArrowStart | ArrowEnd | ArrowSize | ArrowLength | ArrowInset => Capability::Arrows,
            LinePoint1 | LinePoint2 => Capability::LineGeometry,
            PlotStyle | PlotPoints | PlotMinX | PlotMaxX | PlotXScale | PlotYScale | PlotPolar
            | PlotEquation => Capability::Plot,
            ArcKind | ArcStartAngle | ArcEndAngle => Capability::Arc,
            GridXStart | GridYStart | GridXEnd | GridYEnd | GridLabelsSize => Capability::Grid,
            AxesStyle | TicksStyle | TicksSize | ShowTicks | ShowLabels | ShowOrigin
            | LabelsIncrementX | LabelsIncrementY => Capability::Axes,
            DotStyle | DotSize => Capability::Dot,
            TextPosition | TextContent => Capability::Text,
        }
    }

    pub fn name(self) -> &'static str {
        use PropertyKey::*;
        match self {
            Rotation => "rotation",
            PositionX => "x position",
            PositionY => "y position",
            Thickness => "thickness",
            LineStyle => "line style",
            LineColour => "line colour",
            DoubleBorderEnabled => "double border",
            DoubleBorderColour => "double border colour",
            DoubleBorderSeparation => "double border separation",
            ShadowEnabled => "shadow",
            ShadowColour => "shadow colour",
            ShadowSize => "shadow size",
            ShadowAngle => "shadow angle",
            FillStyle => "fill style",
            FillColour => "fill colour",
            ArrowStart => "start arrow",
            ArrowEnd => "end arrow",
            ArrowSize => "arrow size",
            ArrowLength => "arrow length",
            ArrowInset => "arrow inset",
            LinePoint1 => "first point",
            LinePoint2 => "second point",
            PlotStyle => "plot style",
            PlotPoints => "plotted points",
            PlotMinX => "plot min x",
            PlotMaxX => "plot max x",
            PlotXScale => "plot x scale",
            PlotYScale => "plot y scale",
            PlotPolar => "polar coordinates",
            PlotEquation => "plot equation",
            ArcKind => "arc kind",
            ArcStartAngle => "arc start angle",
            ArcEndAngle => "arc end angle",
            GridXStart => "grid x start",
            GridYStart => "grid y start",
            GridXEnd => "grid x end",
            GridYEnd => "grid y end",
            GridLabelsSize => "grid labels size",
            AxesStyle => "axes style",
            TicksStyle => "ticks style",
            TicksSize => "ticks size",
            ShowTicks => "shown ticks",
            ShowLabels => "shown labels",
            ShowOrigin => "show origin",
            LabelsIncrementX => "labels x increment",
            LabelsIncrementY => "labels y increment",
            DotStyle => "dot style",
            DotSize => "dot size",
            TextPosition => "text position",
            TextContent => "text",
        }
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    Count(u32),
    Flag(bool),
    Text(String),
    Point(Point),
    Colour(Colour),
    LineStyle(LineStyle),
    FillStyle(FillStyle),
    PlotStyle(PlotStyle),
    ArcKind(ArcKind),
    DotStyle(DotStyle),
    TextPosition(TextPosition),
    ArrowStyle(ArrowStyle),
    AxesStyle(AxesStyle),
    TicksStyle(TicksStyle),
    PlottingStyle(PlottingStyle),
}

macro_rules! value_accessor {
    ($fn_name:ident, $variant:ident, $ty:ty, $expected:literal) => {
        pub fn $fn_name(&self, key: PropertyKey) -> Result<$ty, PropertyError> {
            match self {
                PropertyValue::$variant(v) => Ok(v.clone()),
                _ => Err(PropertyError::TypeMismatch {
                    property: key.name().to_string(),
                    expected: $expected,
                }),
            }
        }
    };
}

impl PropertyValue {
    value_accessor!(as_number, Number, f64, "number");
    value_accessor!(as_count, Count, u32, "count");
    value_accessor!(as_flag, Flag, bool, "flag");
    value_accessor!(as_text, Text, String, "text");
    value_accessor!(as_point, Point, Point, "point");
    value_accessor!(as_colour, Colour, Colour, "colour");
    value_accessor!(as_line_style, LineStyle, LineStyle, "line style");
    value_accessor!(as_fill_style, FillStyle, FillStyle, "fill style");
    value_accessor!(as_plot_style, PlotStyle, PlotStyle, "plot style");
    value_accessor!(as_arc_kind, ArcKind, ArcKind, "arc kind");
    value_accessor!(as_dot_style, DotStyle, DotStyle, "dot style");
    value_accessor!(as_text_position, TextPosition, TextPosition, "text position");
    value_accessor!(as_arrow_style, ArrowStyle, ArrowStyle, "arrow style");
    value_accessor!(as_axes_style, AxesStyle, AxesStyle, "axes style");
    value_accessor!(as_ticks_style, TicksStyle, TicksStyle, "ticks style");
    value_accessor!(as_plotting_style, PlottingStyle, PlottingStyle, "plotting style");
}

/// A single logical edit: which property, and its new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEdit {
    pub key: PropertyKey,
    pub value: PropertyValue,
}

impl PropertyEdit {
    pub fn new(key: PropertyKey, value: PropertyValue) -> Self {
        Self { key, value }
    }

    pub fn number(key: PropertyKey, value: f64) -> Self {
        Self::new(key, PropertyValue::Number(value))
    }

    pub fn plot_style(style: PlotStyle) -> Self {
        Self::new(PropertyKey::PlotStyle, PropertyValue::PlotStyle(style))
    }

    pub fn capability(&self) -> Capability {
        self.key.capability()
    }
}
