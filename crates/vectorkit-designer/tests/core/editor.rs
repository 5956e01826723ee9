use vectorkit_core::{AppEvent, ChangeOrigin, DocumentEvent, EventBusConfig, SelectionEvent, ShapeEvent};
use vectorkit_designer::model::{DesignPlot, DesignRectangle, PlotStyle};
use vectorkit_designer::{
    Capability, DispatchOutcome, Editor, EditorOptions, EligibilityPolicy, Point, PropertyEdit,
    PropertyKey, PropertyValue,
};

fn editor_with_history() -> Editor {
    Editor::with_options(EditorOptions {
        event_bus: EventBusConfig {
            enable_history: true,
            ..Default::default()
        },
        ..Default::default()
    })
}

fn add_plot(editor: &mut Editor) -> vectorkit_designer::ShapeId {
    let plot = DesignPlot::new(Point::ORIGIN, editor.plot_defaults()).expect("plot");
    editor.add_shape(plot)
}

#[test]
fn test_selection_drives_customisers() {
    let mut editor = Editor::new();
    let p = add_plot(&mut editor);
    let r = editor.add_shape(DesignRectangle::default());

    assert!(editor.active_capabilities().is_empty());
    editor.select(p);
    assert!(editor.is_active(Capability::Plot));
    editor.toggle_selection(r);
    assert!(!editor.is_active(Capability::Plot));
    assert!(editor.is_active(Capability::Filling));
    editor.deselect(r);
    assert!(editor.is_active(Capability::Plot));
    editor.clear_selection();
    assert!(editor.active_capabilities().is_empty());
}

#[test]
fn test_event_stream_for_one_edit() {
    let mut editor = editor_with_history();
    let a = add_plot(&mut editor);
    let b = add_plot(&mut editor);
    editor.select_only(&[a, b]);
    editor.bus().clear_history();

    editor
        .apply(PropertyEdit::plot_style(PlotStyle::Polygon))
        .expect("applied");

    let shape_events: Vec<AppEvent> = editor
        .bus()
        .history()
        .into_iter()
        .filter(|e| matches!(e, AppEvent::Shape(_)))
        .collect();
    assert_eq!(
        shape_events,
        vec![AppEvent::Shape(ShapeEvent::PropertiesChanged {
            ids: vec![a, b],
            property: "plot style".to_string(),
            origin: ChangeOrigin::Command,
        })]
    );
}

#[test]
fn test_document_and_selection_events() {
    let mut editor = editor_with_history();
    let p = add_plot(&mut editor);
    editor.select(p);
    editor.remove_shape(p).expect("removed");

    let history = editor.bus().history();
    assert!(history.contains(&AppEvent::Document(DocumentEvent::ShapeAdded {
        id: p,
        kind: "Plot".to_string(),
    })));
    assert!(history.contains(&AppEvent::Document(DocumentEvent::ShapeRemoved { id: p })));
    assert_eq!(
        history.last(),
        Some(&AppEvent::Selection(SelectionEvent::Changed { ids: vec![] }))
    );
}

#[test]
fn test_undo_publishes_origin() {
    let mut editor = editor_with_history();
    let p = add_plot(&mut editor);
    editor.select(p);
    editor
        .apply(PropertyEdit::number(PropertyKey::Rotation, 30.0))
        .expect("applied");
    editor.undo().expect("undo");

    let last_shape_event = editor
        .bus()
        .history()
        .into_iter()
        .rev()
        .find(|e| matches!(e, AppEvent::Shape(_)));
    assert_eq!(
        last_shape_event,
        Some(AppEvent::Shape(ShapeEvent::PropertiesChanged {
            ids: vec![p],
            property: "rotation".to_string(),
            origin: ChangeOrigin::Undo,
        }))
    );
    assert_eq!(editor.shape(p).map(|o| o.rotation()), Some(0.0));
}

#[test]
fn test_ineligible_edit_is_not_recorded() {
    let mut editor = Editor::new();
    let p = add_plot(&mut editor);
    let r = editor.add_shape(DesignRectangle::default());
    editor.select_all();

    let outcome = editor
        .apply(PropertyEdit::plot_style(PlotStyle::Dots))
        .expect("no error");
    assert_eq!(outcome, DispatchOutcome::Ineligible);
    assert!(!editor.can_undo());
    assert_eq!(editor.selection().ids(), &[p, r]);
}

#[test]
fn test_lenient_editor_edits_subset() {
    let mut editor = Editor::with_options(EditorOptions {
        eligibility: EligibilityPolicy::Lenient,
        ..Default::default()
    });
    let p = add_plot(&mut editor);
    let r = editor.add_shape(DesignRectangle::default());
    editor.select_all();

    editor
        .apply(PropertyEdit::plot_style(PlotStyle::Dots))
        .expect("applied");
    assert_eq!(
        editor.shape(p).and_then(|o| o.property(PropertyKey::PlotStyle)),
        Some(PropertyValue::PlotStyle(PlotStyle::Dots))
    );
    assert!(editor.shape(r).is_some());
    assert!(editor.can_undo());
}

#[test]
fn test_history_depth_is_bounded() {
    let mut editor = Editor::with_options(EditorOptions {
        history_depth: 3,
        ..Default::default()
    });
    let p = add_plot(&mut editor);
    editor.select(p);
    for angle in 1..=5 {
        editor
            .apply(PropertyEdit::number(PropertyKey::Rotation, f64::from(angle)))
            .expect("applied");
    }
    for _ in 0..3 {
        editor.undo().expect("undo");
    }
    assert!(!editor.can_undo());
    assert_eq!(editor.shape(p).map(|o| o.rotation()), Some(2.0));
}

#[test]
fn test_undo_restores_position_and_shadow() {
    let mut editor = Editor::new();
    let r = editor.add_shape(DesignRectangle::default());
    editor.select(r);

    editor
        .apply(PropertyEdit::number(PropertyKey::PositionY, 7.5))
        .expect("moved");
    editor
        .apply(PropertyEdit::number(PropertyKey::ShadowAngle, 90.0))
        .expect("shadow");
    let shown = editor
        .customiser(Capability::Position)
        .and_then(|c| c.displayed_value(PropertyKey::PositionY).cloned());
    assert_eq!(shown, Some(PropertyValue::Number(7.5)));

    editor.undo().expect("undo shadow");
    editor.undo().expect("undo move");
    let rect = editor.shape(r).expect("rectangle");
    assert_eq!(rect.position(), Point::ORIGIN);
    assert_eq!(rect.shadow().angle(), 315.0);
    let shown = editor
        .customiser(Capability::Position)
        .and_then(|c| c.displayed_value(PropertyKey::PositionY).cloned());
    assert_eq!(shown, Some(PropertyValue::Number(0.0)));
}
