use proptest::prelude::*;
use vectorkit_core::CommandError;
use vectorkit_designer::model::{
    ArrowStyle, AxesStyle, DesignArc, DesignDot, DesignGrid, DesignLine, DesignPlot,
    DesignRectangle, PlotParams, PlotStyle, MAX_NB_POINTS,
};
use vectorkit_designer::{
    DispatchOutcome, DrawingObject, EligibilityPolicy, Point, PropertyDispatcher, PropertyEdit,
    PropertyKey, PropertyValue, Selection, ShapeId, ShapeStore,
};

fn line_style_plot(store: &mut ShapeStore) -> ShapeId {
    let params = PlotParams {
        style: PlotStyle::Line,
        nb_points: 12,
        ..Default::default()
    };
    store.insert(DesignPlot::new(Point::ORIGIN, &params).expect("plot").into())
}

fn snapshot(store: &ShapeStore) -> Vec<DrawingObject> {
    store.iter().cloned().collect()
}

#[test]
fn test_polygon_style_reaches_every_plot() {
    let mut store = ShapeStore::new();
    let a = line_style_plot(&mut store);
    let b = line_style_plot(&mut store);
    let mut selection = Selection::new();
    selection.replace([a, b], &store);

    let outcome = PropertyDispatcher::default()
        .dispatch(
            &mut store,
            &selection,
            &PropertyEdit::plot_style(PlotStyle::Polygon),
        )
        .expect("applied");
    assert!(outcome.is_applied());

    for id in [a, b] {
        let plot = store
            .get(id)
            .and_then(|o| o.shape.as_plot())
            .expect("plot");
        assert_eq!(plot.style(), PlotStyle::Polygon);
        assert_eq!(plot.points().len(), 12);
        assert!(plot.is_closed());
    }
}

#[test]
fn test_plot_edit_on_plot_and_rectangle_is_a_no_op() {
    let mut store = ShapeStore::new();
    let p = line_style_plot(&mut store);
    let r = store.insert(DesignRectangle::default().into());
    let mut selection = Selection::new();
    selection.replace([p, r], &store);
    let before = snapshot(&store);

    for edit in [
        PropertyEdit::plot_style(PlotStyle::Dots),
        PropertyEdit::new(PropertyKey::PlotPoints, PropertyValue::Count(3)),
        PropertyEdit::new(PropertyKey::PlotPolar, PropertyValue::Flag(true)),
    ] {
        let outcome = PropertyDispatcher::default()
            .dispatch(&mut store, &selection, &edit)
            .expect("no error");
        assert_eq!(outcome, DispatchOutcome::Ineligible);
    }
    assert_eq!(snapshot(&store), before);
}

#[test]
fn test_shared_capability_edit_reaches_mixed_selection() {
    let mut store = ShapeStore::new();
    let p = line_style_plot(&mut store);
    let l = store.insert(
        DesignLine::new(Point::ORIGIN, Point::new(2.0, 3.0).expect("point"))
            .expect("line")
            .into(),
    );
    let mut selection = Selection::new();
    selection.replace([p, l], &store);

    PropertyDispatcher::default()
        .dispatch(
            &mut store,
            &selection,
            &PropertyEdit::number(PropertyKey::Thickness, 4.5),
        )
        .expect("applied");
    for id in [p, l] {
        assert_eq!(
            store.get(id).map(|o| o.border().thickness()),
            Some(4.5)
        );
    }
}

#[test]
fn test_empty_selection_is_a_no_op() {
    let mut store = ShapeStore::new();
    line_style_plot(&mut store);
    let selection = Selection::new();
    let outcome = PropertyDispatcher::new(EligibilityPolicy::Lenient)
        .dispatch(&mut store, &selection, &PropertyEdit::number(PropertyKey::Rotation, 10.0))
        .expect("no error");
    assert_eq!(outcome, DispatchOutcome::Ineligible);
}

#[test]
fn test_lenient_policy_skips_dots() {
    let mut store = ShapeStore::new();
    let d = store.insert(DesignDot::default().into());
    let a = line_style_plot(&mut store);
    let b = line_style_plot(&mut store);
    let mut selection = Selection::new();
    selection.replace([d, a, b], &store);
    let dot_before = store.get(d).cloned();

    let outcome = PropertyDispatcher::new(EligibilityPolicy::Lenient)
        .dispatch(&mut store, &selection, &PropertyEdit::plot_style(PlotStyle::CCurve))
        .expect("applied");
    let DispatchOutcome::Applied(cmd) = outcome else {
        panic!("expected an applied command");
    };
    assert_eq!(cmd.ids(), vec![a, b]);
    assert_eq!(store.get(d).cloned(), dot_before);
}

#[test]
fn test_type_mismatch_is_rolled_back_like_any_rejection() {
    let mut store = ShapeStore::new();
    let a = line_style_plot(&mut store);
    let mut selection = Selection::new();
    selection.add(a, &store);
    let before = snapshot(&store);

    let err = PropertyDispatcher::default()
        .dispatch(
            &mut store,
            &selection,
            &PropertyEdit::new(PropertyKey::PlotStyle, PropertyValue::Flag(true)),
        )
        .expect_err("wrong value kind");
    match err {
        CommandError::Rejected { source, .. } => assert!(source.is_property_error()),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(snapshot(&store), before);
}

#[test]
fn test_oversized_point_count_is_rejected_without_change() {
    let mut store = ShapeStore::new();
    let a = line_style_plot(&mut store);
    let b = line_style_plot(&mut store);
    let mut selection = Selection::new();
    selection.replace([a, b], &store);
    let before = snapshot(&store);

    for count in [MAX_NB_POINTS + 1, u32::MAX] {
        let err = PropertyDispatcher::default()
            .dispatch(
                &mut store,
                &selection,
                &PropertyEdit::new(PropertyKey::PlotPoints, PropertyValue::Count(count)),
            )
            .expect_err("too many points");
        assert!(matches!(err, CommandError::Rejected { shape_id, .. } if shape_id == a));
        assert_eq!(snapshot(&store), before);
    }
}

#[test]
fn test_shadow_size_rejection_keeps_every_shape() {
    let mut store = ShapeStore::new();
    let r = store.insert(DesignRectangle::default().into());
    let p = line_style_plot(&mut store);
    let mut selection = Selection::new();
    selection.replace([r, p], &store);

    PropertyDispatcher::default()
        .dispatch(
            &mut store,
            &selection,
            &PropertyEdit::new(PropertyKey::ShadowEnabled, PropertyValue::Flag(true)),
        )
        .expect("applied");
    let before = snapshot(&store);

    let err = PropertyDispatcher::default()
        .dispatch(
            &mut store,
            &selection,
            &PropertyEdit::number(PropertyKey::ShadowSize, -4.0),
        )
        .expect_err("negative shadow");
    assert!(matches!(err, CommandError::Rejected { shape_id, .. } if shape_id == r));
    assert_eq!(snapshot(&store), before);
    assert!(store.iter().all(|o| o.shadow().enabled));
}

#[test]
fn test_arrow_edit_reaches_lines_and_arcs_only() {
    let mut store = ShapeStore::new();
    let l = store.insert(
        DesignLine::new(Point::ORIGIN, Point::new(4.0, 0.0).expect("point"))
            .expect("line")
            .into(),
    );
    let a = store.insert(DesignArc::new(Point::ORIGIN, 2.0, 0.0, 180.0).expect("arc").into());
    let r = store.insert(DesignRectangle::default().into());
    let edit = PropertyEdit::new(
        PropertyKey::ArrowStart,
        PropertyValue::ArrowStyle(ArrowStyle::RoundBracket),
    );

    let mut selection = Selection::new();
    selection.replace([l, a, r], &store);
    let before = snapshot(&store);
    let outcome = PropertyDispatcher::default()
        .dispatch(&mut store, &selection, &edit)
        .expect("no error");
    assert_eq!(outcome, DispatchOutcome::Ineligible);
    assert_eq!(snapshot(&store), before);

    selection.remove(r, &store);
    PropertyDispatcher::default()
        .dispatch(&mut store, &selection, &edit)
        .expect("applied");
    for id in [l, a] {
        assert_eq!(
            store.get(id).map(|o| o.arrows().start),
            Some(ArrowStyle::RoundBracket)
        );
    }
}

#[test]
fn test_position_edit_aligns_mixed_selection() {
    let mut store = ShapeStore::new();
    let d = store.insert(DesignDot::default().into());
    let r = store.insert(DesignRectangle::default().into());
    let g = store.insert(DesignGrid::default().into());
    let mut selection = Selection::new();
    selection.replace([d, r, g], &store);

    PropertyDispatcher::default()
        .dispatch(
            &mut store,
            &selection,
            &PropertyEdit::number(PropertyKey::PositionX, 20.0),
        )
        .expect("applied");
    for id in [d, r, g] {
        assert_eq!(store.get(id).map(|o| o.position().x()), Some(20.0));
    }
}

#[test]
fn test_axes_edit_needs_grids_only() {
    let mut store = ShapeStore::new();
    let g = store.insert(DesignGrid::default().into());
    let d = store.insert(DesignDot::default().into());
    let edit = PropertyEdit::new(PropertyKey::AxesStyle, PropertyValue::AxesStyle(AxesStyle::None));

    let mut selection = Selection::new();
    selection.replace([g, d], &store);
    let outcome = PropertyDispatcher::new(EligibilityPolicy::Lenient)
        .dispatch(&mut store, &selection, &edit)
        .expect("applied");
    assert!(outcome.is_applied());
    let style = store
        .get(g)
        .and_then(|o| o.property(PropertyKey::AxesStyle));
    assert_eq!(style, Some(PropertyValue::AxesStyle(AxesStyle::None)));
}

proptest! {
    #[test]
    fn prop_rejected_edit_restores_every_shape(
        mins in prop::collection::vec(-50.0f64..50.0, 1..8),
        new_max in -60.0f64..70.0,
    ) {
        let mut store = ShapeStore::new();
        let ids: Vec<ShapeId> = mins
            .iter()
            .map(|&min_x| {
                let params = PlotParams { min_x, max_x: min_x + 10.0, ..Default::default() };
                store.insert(DesignPlot::new(Point::ORIGIN, &params).expect("plot").into())
            })
            .collect();
        let mut selection = Selection::new();
        selection.replace(ids.iter().copied(), &store);
        let before = snapshot(&store);

        let result = PropertyDispatcher::default().dispatch(
            &mut store,
            &selection,
            &PropertyEdit::number(PropertyKey::PlotMaxX, new_max),
        );

        let all_accept = mins.iter().all(|&min_x| min_x < new_max);
        match result {
            Ok(outcome) => {
                prop_assert!(all_accept);
                prop_assert!(outcome.is_applied());
                for obj in store.iter() {
                    let plot = obj.shape.as_plot().expect("plot");
                    prop_assert_eq!(plot.max_x(), new_max);
                    prop_assert_eq!(plot.points().len(), plot.nb_points() as usize);
                }
            }
            Err(_) => {
                prop_assert!(!all_accept);
                prop_assert_eq!(snapshot(&store), before);
            }
        }
    }
}
