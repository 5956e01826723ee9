//! Customisers: one activation state machine per capability.
//!
//! A customiser is active exactly when the selection is non-empty and every
//! selected shape supports its capability. It re-evaluates synchronously on
//! each selection notification and publishes its transitions on the event bus.

use std::cell::Ref;
use std::collections::BTreeMap;
use std::sync::Arc;

use vectorkit_core::{
    shared, AppEvent, CustomiserEvent, EventBus, ShapeId, Shared, SubscriptionId,
};

use crate::model::{Capability, PropertyKey, PropertyValue};
use crate::selection::{Selection, SelectionObserver};
use crate::shape_store::ShapeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationState {
    #[default]
    Inactive,
    Active {
        /// Shape seeding the displayed values.
        representative: ShapeId,
    },
}

/// A change of [`ActivationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Activated { representative: ShapeId },
    Deactivated,
}

/// One property as shown by an active customiser.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedProperty {
    pub key: PropertyKey,
    /// Value held by the representative shape.
    pub value: PropertyValue,
    /// Whether every eligible shape holds that same value.
    pub uniform: bool,
}

#[derive(Debug)]
pub struct Customiser {
    capability: Capability,
    state: ActivationState,
    displayed: Vec<DisplayedProperty>,
    last_transition: Option<Transition>,
    bus: Option<Arc<EventBus>>,
}

impl Customiser {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            state: ActivationState::Inactive,
            displayed: Vec::new(),
            last_transition: None,
            bus: None,
        }
    }

    pub fn with_event_bus(capability: Capability, bus: Arc<EventBus>) -> Self {
        Self {
            bus: Some(bus),
            ..Self::new(capability)
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ActivationState::Active { .. })
    }

    pub fn representative(&self) -> Option<ShapeId> {
        match self.state {
            ActivationState::Active { representative } => Some(representative),
            ActivationState::Inactive => None,
        }
    }

    pub fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }

    /// Displayed properties; empty while inactive.
    pub fn displayed_properties(&self) -> &[DisplayedProperty] {
        &self.displayed
    }

    pub fn displayed_value(&self, key: PropertyKey) -> Option<&PropertyValue> {
        self.displayed
            .iter()
            .find(|p| p.key == key)
            .map(|p| &p.value)
    }

    /// Re-evaluate activation and resynchronise displayed values.
    ///
    /// Returns the transition, if the state changed.
    pub fn refresh(&mut self, selection: &Selection, store: &ShapeStore) -> Option<Transition> {
        let eligible = !selection.is_empty() && selection.all_support(self.capability, store);
        let representative = selection.first().filter(|_| eligible);

        let transition = match (self.state, representative) {
            (ActivationState::Inactive, Some(representative)) => {
                Some(Transition::Activated { representative })
            }
            (ActivationState::Active { .. }, None) => Some(Transition::Deactivated),
            _ => None,
        };

        match representative {
            Some(representative) => {
                self.state = ActivationState::Active { representative };
                self.displayed = self.seed(representative, selection, store);
            }
            None => {
                self.state = ActivationState::Inactive;
                self.displayed.clear();
            }
        }

        if let Some(transition) = transition {
            self.record(transition);
        }
        transition
    }

    fn seed(
        &self,
        representative: ShapeId,
        selection: &Selection,
        store: &ShapeStore,
    ) -> Vec<DisplayedProperty> {
        let Some(rep) = store.get(representative) else {
            return Vec::new();
        };
        rep.properties(self.capability)
            .into_iter()
            .map(|(key, value)| {
                let uniform = selection
                    .ids()
                    .iter()
                    .filter_map(|&id| store.get(id))
                    .all(|obj| obj.property(key).as_ref() == Some(&value));
                DisplayedProperty {
                    key,
                    value,
                    uniform,
                }
            })
            .collect()
    }

    fn record(&mut self, transition: Transition) {
        self.last_transition = Some(transition);
        let group = self.capability.to_string();
        let event = match transition {
            Transition::Activated { representative } => {
                tracing::debug!("{} customiser activated on {}", group, representative);
                CustomiserEvent::Activated {
                    group,
                    representative,
                }
            }
            Transition::Deactivated => {
                tracing::debug!("{} customiser deactivated", group);
                CustomiserEvent::Deactivated { group }
            }
        };
        if let Some(bus) = &self.bus {
            let _ = bus.publish(AppEvent::Customiser(event));
        }
    }
}

impl SelectionObserver for Customiser {
    fn selection_changed(&mut self, selection: &Selection, store: &ShapeStore) {
        self.refresh(selection, store);
    }
}

/// Owns one customiser per capability and their selection subscriptions.
#[derive(Debug)]
pub struct CustomiserPanel {
    customisers: BTreeMap<Capability, Shared<Customiser>>,
    subscriptions: Vec<SubscriptionId>,
}

impl CustomiserPanel {
    pub fn new(bus: Option<Arc<EventBus>>) -> Self {
        let customisers = Capability::ALL
            .iter()
            .map(|&capability| {
                let customiser = match &bus {
                    Some(bus) => Customiser::with_event_bus(capability, Arc::clone(bus)),
                    None => Customiser::new(capability),
                };
                (capability, shared(customiser))
            })
            .collect();
        Self {
            customisers,
            subscriptions: Vec::new(),
        }
    }

    /// Subscribe every customiser to `selection` and evaluate it once.
    pub fn attach(&mut self, selection: &mut Selection, store: &ShapeStore) {
        if self.is_attached() {
            self.detach(selection);
        }
        for customiser in self.customisers.values() {
            self.subscriptions.push(selection.subscribe(customiser));
        }
        self.refresh(selection, store);
    }

    pub fn detach(&mut self, selection: &mut Selection) {
        for id in self.subscriptions.drain(..) {
            selection.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Re-evaluate every customiser, e.g. after shapes changed outside a selection event.
    pub fn refresh(
        &self,
        selection: &Selection,
        store: &ShapeStore,
    ) -> Vec<(Capability, Transition)> {
        self.customisers
            .iter()
            .filter_map(|(&capability, customiser)| {
                customiser
                    .try_borrow_mut()
                    .ok()
                    .and_then(|mut c| c.refresh(selection, store))
                    .map(|t| (capability, t))
            })
            .collect()
    }

    pub fn customiser(&self, capability: Capability) -> Option<Ref<'_, Customiser>> {
        self.customisers
            .get(&capability)
            .and_then(|c| c.try_borrow().ok())
    }

    pub fn is_active(&self, capability: Capability) -> bool {
        self.customiser(capability).is_some_and(|c| c.is_active())
    }

    /// Capabilities whose customiser is active.
    pub fn active(&self) -> Vec<Capability> {
        self.customisers
            .iter()
            .filter(|(_, c)| c.try_borrow().is_ok_and(|c| c.is_active()))
            .map(|(&capability, _)| capability)
            .collect()
    }
}
