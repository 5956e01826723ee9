use vectorkit_core::shared;
use vectorkit_designer::model::{DesignDot, DesignLine, DesignRectangle};
use vectorkit_designer::{Capability, Point, Selection, SelectionObserver, ShapeId, ShapeStore};

#[derive(Default)]
struct Counter {
    notifications: usize,
    last_len: usize,
}

impl SelectionObserver for Counter {
    fn selection_changed(&mut self, selection: &Selection, _store: &ShapeStore) {
        self.notifications += 1;
        self.last_len = selection.len();
    }
}

fn line() -> DesignLine {
    DesignLine::new(Point::ORIGIN, Point::new(1.0, 1.0).expect("point")).expect("line")
}

#[test]
fn test_every_mutation_kind_notifies() {
    let mut store = ShapeStore::new();
    let a = store.insert(line().into());
    let b = store.insert(DesignDot::default().into());
    let mut selection = Selection::new();
    let counter = shared(Counter::default());
    selection.subscribe(&counter);

    assert!(selection.add(a, &store));
    assert!(selection.replace([b, a], &store));
    assert!(selection.remove(a, &store));
    assert!(selection.toggle(a, &store));
    assert!(selection.clear(&store));

    assert_eq!(counter.borrow().notifications, 5);
    assert_eq!(counter.borrow().last_len, 0);
}

#[test]
fn test_replace_with_same_content_is_silent() {
    let mut store = ShapeStore::new();
    let a = store.insert(line().into());
    let mut selection = Selection::new();
    selection.add(a, &store);

    let counter = shared(Counter::default());
    selection.subscribe(&counter);
    assert!(!selection.replace([a], &store));
    assert!(!selection.replace([a, ShapeId(42), a], &store));
    assert_eq!(counter.borrow().notifications, 0);
}

#[test]
fn test_eligibility_is_per_capability_not_per_type() {
    let mut store = ShapeStore::new();
    let l = store.insert(line().into());
    let r = store.insert(DesignRectangle::default().into());
    let mut selection = Selection::new();
    selection.replace([l, r], &store);

    assert!(selection.all_support(Capability::Border, &store));
    assert!(selection.all_support(Capability::Rotation, &store));
    assert!(!selection.all_support(Capability::Filling, &store));
    assert!(!selection.all_support(Capability::LineGeometry, &store));
    assert_eq!(selection.eligible(Capability::LineGeometry, &store), vec![l]);
}

#[test]
fn test_stale_ids_are_not_eligible() {
    let mut store = ShapeStore::new();
    let a = store.insert(DesignDot::default().into());
    let mut selection = Selection::new();
    selection.add(a, &store);
    store.remove(a);

    assert!(!selection.all_support(Capability::Dot, &store));
    assert!(selection.eligible(Capability::Dot, &store).is_empty());
    assert!(selection.purge(&store));
    assert!(selection.is_empty());
}
