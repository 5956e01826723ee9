//! Property command dispatcher.
//!
//! Applies one property edit to every eligible selected shape as a single
//! all-or-nothing unit, then emits one aggregate notification.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vectorkit_core::{
    AppEvent, ChangeOrigin, CommandError, CommandEvent, EventBus, ShapeEvent, ShapeId,
};

use crate::commands::ChangeProperties;
use crate::drawing_object::DrawingObject;
use crate::model::PropertyEdit;
use crate::selection::Selection;
use crate::shape_store::ShapeStore;

/// Which selected shapes an edit reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityPolicy {
    /// Only edit when every selected shape supports the property.
    #[default]
    Strict,
    /// Edit the supporting shapes and skip the others.
    Lenient,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Nothing eligible; no shape was touched.
    Ineligible,
    Applied(ChangeProperties),
}

impl DispatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, DispatchOutcome::Applied(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertyDispatcher {
    policy: EligibilityPolicy,
    bus: Option<Arc<EventBus>>,
}

impl PropertyDispatcher {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy, bus: None }
    }

    pub fn with_event_bus(policy: EligibilityPolicy, bus: Arc<EventBus>) -> Self {
        Self {
            policy,
            bus: Some(bus),
        }
    }

    pub fn policy(&self) -> EligibilityPolicy {
        self.policy
    }

    /// Shapes the edit would reach under the current policy.
    pub fn eligible(&self, store: &ShapeStore, selection: &Selection, edit: &PropertyEdit) -> Vec<ShapeId> {
        let capability = edit.capability();
        match self.policy {
            EligibilityPolicy::Strict if !selection.all_support(capability, store) => Vec::new(),
            _ => selection.eligible(capability, store),
        }
    }

    /// Apply `edit` and publish one `PropertiesChanged` event on success.
    pub fn dispatch(
        &self,
        store: &mut ShapeStore,
        selection: &Selection,
        edit: &PropertyEdit,
    ) -> Result<DispatchOutcome, CommandError> {
        let outcome = self.execute(store, selection, edit)?;
        if let DispatchOutcome::Applied(cmd) = &outcome {
            self.announce(cmd);
        }
        Ok(outcome)
    }

    /// Apply `edit` without publishing the change event.
    ///
    /// Rejections are still published. Callers must [`announce`](Self::announce)
    /// an applied command once their own state is up to date.
    pub(crate) fn execute(
        &self,
        store: &mut ShapeStore,
        selection: &Selection,
        edit: &PropertyEdit,
    ) -> Result<DispatchOutcome, CommandError> {
        let targets = self.eligible(store, selection, edit);
        if targets.is_empty() {
            tracing::debug!("No eligible shape for {}, ignoring edit", edit.key);
            return Ok(DispatchOutcome::Ineligible);
        }

        let before: Vec<DrawingObject> = targets
            .iter()
            .map(|&id| store.get(id).cloned().ok_or(CommandError::ShapeNotFound(id)))
            .collect::<Result<_, _>>()?;

        for (done, &id) in targets.iter().enumerate() {
            let result = match store.get_mut(id) {
                Some(obj) => obj.set_property(edit.key, &edit.value),
                None => Err(CommandError::ShapeNotFound(id).into()),
            };
            if let Err(err) = result {
                for snapshot in &before[..=done] {
                    store.replace(snapshot.clone());
                }
                tracing::warn!("{} rejected by {}, rolled back: {}", edit.key, id, err);
                self.publish(AppEvent::Command(CommandEvent::Rejected {
                    property: edit.key.name().to_string(),
                    shape_id: id,
                    reason: err.to_string(),
                }));
                return Err(CommandError::Rejected {
                    shape_id: id,
                    property: edit.key.name().to_string(),
                    source: Box::new(err),
                });
            }
        }

        let after: Vec<DrawingObject> = targets
            .iter()
            .filter_map(|&id| store.get(id).cloned())
            .collect();

        tracing::info!("Applied {} to {} shapes", edit.key, targets.len());
        Ok(DispatchOutcome::Applied(ChangeProperties::new(
            edit.key, before, after,
        )))
    }

    pub(crate) fn announce(&self, cmd: &ChangeProperties) {
        self.publish(AppEvent::Shape(ShapeEvent::PropertiesChanged {
            ids: cmd.ids(),
            property: cmd.property.name().to_string(),
            origin: ChangeOrigin::Command,
        }));
    }

    pub(crate) fn publish(&self, event: AppEvent) {
        if let Some(bus) = &self.bus {
            let _ = bus.publish(event);
        }
    }
}
