use proptest::prelude::*;
use vectorkit_designer::model::{DesignPlot, PlotParams, PlotStyle};
use vectorkit_designer::{DesignerShape, Point, PropertyKey, PropertyValue};

#[derive(Clone, Debug)]
enum Change {
    Style(PlotStyle),
    NbPoints(u32),
    MinX(f64),
    MaxX(f64),
    XScale(f64),
    YScale(f64),
    Polar(bool),
    Equation(&'static str),
}

fn style_strategy() -> impl Strategy<Value = PlotStyle> {
    prop_oneof![
        Just(PlotStyle::Line),
        Just(PlotStyle::Curve),
        Just(PlotStyle::ECurve),
        Just(PlotStyle::CCurve),
        Just(PlotStyle::Polygon),
        Just(PlotStyle::Dots),
    ]
}

fn number_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -100.0f64..100.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn change_strategy() -> impl Strategy<Value = Change> {
    prop_oneof![
        style_strategy().prop_map(Change::Style),
        (0u32..200).prop_map(Change::NbPoints),
        number_strategy().prop_map(Change::MinX),
        number_strategy().prop_map(Change::MaxX),
        number_strategy().prop_map(Change::XScale),
        number_strategy().prop_map(Change::YScale),
        any::<bool>().prop_map(Change::Polar),
        prop_oneof![
            Just("x"),
            Just("x 2 exp"),
            Just("1 x div"),
            Just("x sqrt"),
            Just("x sin 3 mul"),
            Just("x add"),
        ]
        .prop_map(Change::Equation),
    ]
}

fn apply(plot: &mut DesignPlot, change: &Change) {
    let (key, value) = match change {
        Change::Style(s) => (PropertyKey::PlotStyle, PropertyValue::PlotStyle(*s)),
        Change::NbPoints(n) => (PropertyKey::PlotPoints, PropertyValue::Count(*n)),
        Change::MinX(v) => (PropertyKey::PlotMinX, PropertyValue::Number(*v)),
        Change::MaxX(v) => (PropertyKey::PlotMaxX, PropertyValue::Number(*v)),
        Change::XScale(v) => (PropertyKey::PlotXScale, PropertyValue::Number(*v)),
        Change::YScale(v) => (PropertyKey::PlotYScale, PropertyValue::Number(*v)),
        Change::Polar(p) => (PropertyKey::PlotPolar, PropertyValue::Flag(*p)),
        Change::Equation(e) => (PropertyKey::PlotEquation, PropertyValue::Text(e.to_string())),
    };
    let before = plot.clone();
    if plot.set_property(key, &value).is_err() {
        assert_eq!(*plot, before, "rejected {:?} mutated the plot", change);
    }
}

#[test]
fn test_recompute_is_idempotent() {
    let params = PlotParams {
        equation: "x sin x cos mul".to_string(),
        nb_points: 33,
        polar: true,
        ..Default::default()
    };
    let mut plot = DesignPlot::new(Point::ORIGIN, &params).expect("plot");
    let first: Vec<(u64, u64)> = plot
        .points()
        .iter()
        .map(|p| (p.x().to_bits(), p.y().to_bits()))
        .collect();
    plot.recompute_derived().expect("recompute");
    plot.recompute_derived().expect("recompute");
    let second: Vec<(u64, u64)> = plot
        .points()
        .iter()
        .map(|p| (p.x().to_bits(), p.y().to_bits()))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_style_change_keeps_sample_count() {
    let mut plot = DesignPlot::new(Point::ORIGIN, &PlotParams::default()).expect("plot");
    for style in [
        PlotStyle::Line,
        PlotStyle::ECurve,
        PlotStyle::CCurve,
        PlotStyle::Polygon,
        PlotStyle::Dots,
    ] {
        plot.set_style(style).expect("style");
        assert_eq!(plot.points().len(), plot.nb_points() as usize);
    }
}

proptest! {
    #[test]
    fn prop_sample_count_matches_nb_points(
        changes in prop::collection::vec(change_strategy(), 1..30)
    ) {
        let mut plot = DesignPlot::new(Point::ORIGIN, &PlotParams::default()).expect("plot");
        for change in &changes {
            apply(&mut plot, change);
            prop_assert_eq!(plot.points().len(), plot.nb_points() as usize);
            prop_assert!(plot.points().iter().all(|p| p.x().is_finite() && p.y().is_finite()));
            prop_assert!(plot.min_x() < plot.max_x());
        }
    }
}
