use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use vectorkit_core::{AppEvent, CustomiserEvent, EventBus, EventCategory, EventFilter};
use vectorkit_designer::model::{
    DesignArc, DesignDot, DesignGrid, DesignLine, DesignPlot, DesignRectangle, DesignText,
    PlotParams,
};
use vectorkit_designer::{
    Capability, CustomiserPanel, Point, Selection, Shape, ShapeId, ShapeStore, Transition,
};

fn every_kind() -> Vec<Shape> {
    let one = Point::new(1.0, 1.0).expect("point");
    vec![
        DesignLine::new(Point::ORIGIN, one).expect("line").into(),
        DesignPlot::new(Point::ORIGIN, &PlotParams::default())
            .expect("plot")
            .into(),
        DesignArc::new(Point::ORIGIN, 1.0, 0.0, 90.0).expect("arc").into(),
        DesignGrid::default().into(),
        DesignRectangle::default().into(),
        DesignDot::default().into(),
        DesignText::new(Point::ORIGIN, "label").into(),
    ]
}

fn populated() -> (ShapeStore, Vec<ShapeId>) {
    let mut store = ShapeStore::new();
    let ids = every_kind().into_iter().map(|s| store.insert(s)).collect();
    (store, ids)
}

#[test]
fn test_empty_selection_leaves_everything_inactive() {
    let (store, ids) = populated();
    let mut selection = Selection::new();
    let mut panel = CustomiserPanel::new(None);
    panel.attach(&mut selection, &store);
    assert!(panel.active().is_empty());

    selection.replace(ids.iter().copied(), &store);
    assert_eq!(
        panel.active(),
        vec![Capability::Rotation, Capability::Position]
    );

    selection.clear(&store);
    assert!(panel.active().is_empty());
}

#[test]
fn test_plot_customiser_stays_inactive_with_rectangle() {
    let (store, ids) = populated();
    let (plot, rect) = (ids[1], ids[4]);
    let mut selection = Selection::new();
    let mut panel = CustomiserPanel::new(None);
    panel.attach(&mut selection, &store);

    selection.replace([plot, rect], &store);
    assert!(!panel.is_active(Capability::Plot));
    assert!(panel.is_active(Capability::Border));
    assert!(panel.is_active(Capability::Filling));
}

#[test]
fn test_arrows_active_only_for_open_paths() {
    let (store, ids) = populated();
    let (line, arc, rect) = (ids[0], ids[2], ids[4]);
    let mut selection = Selection::new();
    let mut panel = CustomiserPanel::new(None);
    panel.attach(&mut selection, &store);

    selection.replace([line, arc], &store);
    assert!(panel.is_active(Capability::Arrows));
    assert!(panel.is_active(Capability::Shadow));
    assert!(panel.is_active(Capability::DoubleBorder));

    selection.add(rect, &store);
    assert!(!panel.is_active(Capability::Arrows));
    assert!(panel.is_active(Capability::Shadow));
    assert!(panel.is_active(Capability::DoubleBorder));
}

#[test]
fn test_axes_follow_grid_selection() {
    let (store, ids) = populated();
    let (grid, dot) = (ids[3], ids[5]);
    let mut selection = Selection::new();
    let mut panel = CustomiserPanel::new(None);
    panel.attach(&mut selection, &store);

    selection.add(grid, &store);
    assert!(panel.is_active(Capability::Axes));
    assert!(!panel.is_active(Capability::Shadow));
    let shown = panel
        .customiser(Capability::Axes)
        .map(|c| c.displayed_properties().len());
    assert_eq!(shown, Some(Capability::Axes.keys().len()));

    selection.add(dot, &store);
    assert!(!panel.is_active(Capability::Axes));
    assert!(panel.is_active(Capability::Position));
}

#[test]
fn test_transitions_are_published() {
    let (store, ids) = populated();
    let bus = Arc::new(EventBus::new());
    let seen: Arc<Mutex<Vec<CustomiserEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Customiser]),
        move |event| {
            if let AppEvent::Customiser(e) = event {
                if let Ok(mut seen) = sink.lock() {
                    seen.push(e);
                }
            }
        },
    );

    let mut selection = Selection::new();
    let mut panel = CustomiserPanel::new(Some(bus));
    panel.attach(&mut selection, &store);

    let dot = ids[5];
    selection.add(dot, &store);
    selection.clear(&store);

    let seen = seen.lock().expect("lock");
    assert_eq!(
        *seen,
        vec![
            CustomiserEvent::Activated {
                group: "Rotation".to_string(),
                representative: dot,
            },
            CustomiserEvent::Activated {
                group: "Position".to_string(),
                representative: dot,
            },
            CustomiserEvent::Activated {
                group: "Dot".to_string(),
                representative: dot,
            },
            CustomiserEvent::Deactivated {
                group: "Rotation".to_string(),
            },
            CustomiserEvent::Deactivated {
                group: "Position".to_string(),
            },
            CustomiserEvent::Deactivated {
                group: "Dot".to_string(),
            },
        ]
    );
}

#[test]
fn test_explicit_refresh_after_external_mutation() {
    let (mut store, ids) = populated();
    let plot = ids[1];
    let mut selection = Selection::new();
    let mut panel = CustomiserPanel::new(None);
    panel.attach(&mut selection, &store);
    selection.add(plot, &store);

    if let Some(obj) = store.get_mut(plot) {
        obj.set_property(
            vectorkit_designer::PropertyKey::PlotPolar,
            &vectorkit_designer::PropertyValue::Flag(true),
        )
        .expect("polar");
    }
    let shown = |panel: &CustomiserPanel| {
        panel.customiser(Capability::Plot).and_then(|c| {
            c.displayed_value(vectorkit_designer::PropertyKey::PlotPolar)
                .cloned()
        })
    };
    assert_eq!(
        shown(&panel),
        Some(vectorkit_designer::PropertyValue::Flag(false))
    );

    assert!(panel.refresh(&selection, &store).is_empty());
    assert_eq!(
        shown(&panel),
        Some(vectorkit_designer::PropertyValue::Flag(true))
    );
}

#[derive(Clone, Debug)]
enum SelectionOp {
    Add(usize),
    Remove(usize),
    Toggle(usize),
    Replace(Vec<usize>),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = SelectionOp> {
    prop_oneof![
        (0usize..7).prop_map(SelectionOp::Add),
        (0usize..7).prop_map(SelectionOp::Remove),
        (0usize..7).prop_map(SelectionOp::Toggle),
        prop::collection::vec(0usize..7, 0..5).prop_map(SelectionOp::Replace),
        Just(SelectionOp::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_active_iff_non_empty_and_fully_eligible(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let (store, ids) = populated();
        let mut selection = Selection::new();
        let mut panel = CustomiserPanel::new(None);
        panel.attach(&mut selection, &store);

        for op in ops {
            match op {
                SelectionOp::Add(i) => { selection.add(ids[i], &store); }
                SelectionOp::Remove(i) => { selection.remove(ids[i], &store); }
                SelectionOp::Toggle(i) => { selection.toggle(ids[i], &store); }
                SelectionOp::Replace(is) => {
                    selection.replace(is.into_iter().map(|i| ids[i]), &store);
                }
                SelectionOp::Clear => { selection.clear(&store); }
            }

            for capability in Capability::ALL {
                let expected = !selection.is_empty()
                    && selection.ids().iter().all(|&id| {
                        store.get(id).is_some_and(|o| o.supports(capability))
                    });
                let customiser = panel.customiser(capability).expect("customiser");
                prop_assert_eq!(customiser.is_active(), expected, "{}", capability);
                if expected {
                    prop_assert_eq!(customiser.representative(), selection.first());
                    let activated = matches!(
                        customiser.last_transition(),
                        Some(Transition::Activated { .. })
                    );
                    prop_assert!(activated);
                }
            }
        }
    }
}
