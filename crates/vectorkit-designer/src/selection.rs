//! Selection registry.
//!
//! The selection holds shape ids in the order they were selected, never the
//! shapes themselves. Observers are held weakly and notified synchronously
//! after every mutation that actually changes the content.

use std::rc::Rc;

use vectorkit_core::{ShapeId, Shared, SubscriptionId, WeakShared};

use crate::model::Capability;
use crate::shape_store::ShapeStore;

/// Receives selection change notifications.
pub trait SelectionObserver {
    fn selection_changed(&mut self, selection: &Selection, store: &ShapeStore);
}

/// Ordered, duplicate-free set of selected shape ids.
#[derive(Default)]
pub struct Selection {
    ids: Vec<ShapeId>,
    observers: Vec<(SubscriptionId, WeakShared<dyn SelectionObserver>)>,
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("ids", &self.ids)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ShapeId] {
        &self.ids
    }

    pub fn first(&self) -> Option<ShapeId> {
        self.ids.first().copied()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Append `id`. Returns false for ids already selected or unknown to the store.
    pub fn add(&mut self, id: ShapeId, store: &ShapeStore) -> bool {
        if !store.contains(id) {
            tracing::warn!("Refusing to select unknown shape {}", id);
            return false;
        }
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        self.notify(store);
        true
    }

    pub fn remove(&mut self, id: ShapeId, store: &ShapeStore) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&other| other != id);
        if self.ids.len() == before {
            return false;
        }
        self.notify(store);
        true
    }

    /// Select `id` if unselected, deselect it otherwise.
    pub fn toggle(&mut self, id: ShapeId, store: &ShapeStore) -> bool {
        if self.contains(id) {
            self.remove(id, store)
        } else {
            self.add(id, store)
        }
    }

    pub fn clear(&mut self, store: &ShapeStore) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        self.ids.clear();
        self.notify(store);
        true
    }

    /// Replace the whole content. Unknown and repeated ids are dropped.
    pub fn replace<I>(&mut self, ids: I, store: &ShapeStore) -> bool
    where
        I: IntoIterator<Item = ShapeId>,
    {
        let mut next: Vec<ShapeId> = Vec::new();
        for id in ids {
            if !store.contains(id) {
                tracing::warn!("Ignoring unknown shape {} in selection", id);
            } else if !next.contains(&id) {
                next.push(id);
            }
        }
        if next == self.ids {
            return false;
        }
        self.ids = next;
        self.notify(store);
        true
    }

    /// Drop ids of shapes the store no longer holds.
    pub fn purge(&mut self, store: &ShapeStore) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&id| store.contains(id));
        if self.ids.len() == before {
            return false;
        }
        tracing::debug!("Purged {} stale ids from selection", before - self.ids.len());
        self.notify(store);
        true
    }

    /// True when every selected shape supports `capability`; vacuously true
    /// for an empty selection.
    pub fn all_support(&self, capability: Capability, store: &ShapeStore) -> bool {
        self.ids
            .iter()
            .all(|&id| store.get(id).is_some_and(|obj| obj.supports(capability)))
    }

    /// Selected shapes supporting `capability`, in selection order.
    pub fn eligible(&self, capability: Capability, store: &ShapeStore) -> Vec<ShapeId> {
        self.ids
            .iter()
            .copied()
            .filter(|&id| store.get(id).is_some_and(|obj| obj.supports(capability)))
            .collect()
    }

    /// Register an observer. The registry keeps a weak handle only.
    pub fn subscribe<O>(&mut self, observer: &Shared<O>) -> SubscriptionId
    where
        O: SelectionObserver + 'static,
    {
        let weak: WeakShared<O> = Rc::downgrade(observer);
        let weak: WeakShared<dyn SelectionObserver> = weak;
        let id = SubscriptionId::new();
        self.observers.push((id, weak));
        tracing::debug!("Selection observer {} subscribed", id);
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        let removed = self.observers.len() != before;
        if removed {
            tracing::debug!("Selection observer {} unsubscribed", id);
        }
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    fn notify(&mut self, store: &ShapeStore) {
        self.observers.retain(|(_, weak)| weak.strong_count() > 0);
        let live: Vec<(SubscriptionId, Shared<dyn SelectionObserver>)> = self
            .observers
            .iter()
            .filter_map(|(id, weak)| weak.upgrade().map(|rc| (*id, rc)))
            .collect();

        tracing::debug!(
            "Selection changed to {:?}, notifying {} observers",
            self.ids,
            live.len()
        );
        for (id, observer) in live {
            match observer.try_borrow_mut() {
                Ok(mut observer) => observer.selection_changed(self, store),
                Err(_) => tracing::warn!("Observer {} is busy, skipping notification", id),
            }
        }
    }
}
