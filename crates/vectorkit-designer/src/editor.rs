//! Editor state.
//!
//! The editor is the single mutation path for shapes and the selection: it
//! owns the store, the selection, the customisers and the undo history, and
//! publishes every change on its event bus.

use std::cell::Ref;
use std::sync::Arc;

use vectorkit_core::{
    AppEvent, ChangeOrigin, CommandError, DocumentEvent, EventBus, EventBusConfig, SelectionEvent,
    ShapeEvent, ShapeId,
};

use crate::commands::{ChangeProperties, History};
use crate::customiser::{Customiser, CustomiserPanel};
use crate::dispatcher::{DispatchOutcome, EligibilityPolicy, PropertyDispatcher};
use crate::drawing_object::DrawingObject;
use crate::model::{Capability, PlotParams, PropertyEdit, Shape};
use crate::selection::Selection;
use crate::shape_store::ShapeStore;

/// Editor construction options.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub eligibility: EligibilityPolicy,
    pub history_depth: usize,
    pub event_bus: EventBusConfig,
    pub plot_defaults: PlotParams,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            eligibility: EligibilityPolicy::Strict,
            history_depth: History::DEFAULT_DEPTH,
            event_bus: EventBusConfig::default(),
            plot_defaults: PlotParams::default(),
        }
    }
}

pub struct Editor {
    store: ShapeStore,
    selection: Selection,
    panel: CustomiserPanel,
    dispatcher: PropertyDispatcher,
    history: History,
    bus: Arc<EventBus>,
    plot_defaults: PlotParams,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("shapes", &self.store.len())
            .field("selection", &self.selection)
            .field("policy", &self.dispatcher.policy())
            .field("undo_depth", &self.history.undo_depth())
            .finish()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        let bus = Arc::new(EventBus::with_config(options.event_bus));
        let store = ShapeStore::new();
        let mut selection = Selection::new();
        let mut panel = CustomiserPanel::new(Some(Arc::clone(&bus)));
        panel.attach(&mut selection, &store);

        Self {
            store,
            selection,
            panel,
            dispatcher: PropertyDispatcher::with_event_bus(options.eligibility, Arc::clone(&bus)),
            history: History::new(options.history_depth),
            bus,
            plot_defaults: options.plot_defaults,
        }
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn shape(&self, id: ShapeId) -> Option<&DrawingObject> {
        self.store.get(id)
    }

    pub fn plot_defaults(&self) -> &PlotParams {
        &self.plot_defaults
    }

    pub fn eligibility(&self) -> EligibilityPolicy {
        self.dispatcher.policy()
    }

    fn publish(&self, event: AppEvent) {
        let _ = self.bus.publish(event);
    }

    fn publish_selection(&self) {
        self.publish(AppEvent::Selection(SelectionEvent::Changed {
            ids: self.selection.ids().to_vec(),
        }));
    }

    // Document

    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let shape = shape.into();
        let kind = shape.shape_type().to_string();
        let id = self.store.insert(shape);
        tracing::debug!("Added {} {}", kind, id);
        self.publish(AppEvent::Document(DocumentEvent::ShapeAdded { id, kind }));
        id
    }

    /// Destroy a shape and purge it from the selection.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<DrawingObject> {
        let removed = self.store.remove(id)?;
        self.publish(AppEvent::Document(DocumentEvent::ShapeRemoved { id }));
        if self.selection.purge(&self.store) {
            self.publish_selection();
        }
        Some(removed)
    }

    // Selection

    pub fn select(&mut self, id: ShapeId) -> bool {
        let changed = self.selection.add(id, &self.store);
        if changed {
            self.publish_selection();
        }
        changed
    }

    pub fn select_only(&mut self, ids: &[ShapeId]) -> bool {
        let changed = self.selection.replace(ids.iter().copied(), &self.store);
        if changed {
            self.publish_selection();
        }
        changed
    }

    pub fn select_all(&mut self) -> bool {
        let ids = self.store.ids().to_vec();
        self.select_only(&ids)
    }

    pub fn deselect(&mut self, id: ShapeId) -> bool {
        let changed = self.selection.remove(id, &self.store);
        if changed {
            self.publish_selection();
        }
        changed
    }

    pub fn toggle_selection(&mut self, id: ShapeId) -> bool {
        let changed = self.selection.toggle(id, &self.store);
        if changed {
            self.publish_selection();
        }
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        let changed = self.selection.clear(&self.store);
        if changed {
            self.publish_selection();
        }
        changed
    }

    // Customisers

    pub fn customiser(&self, capability: Capability) -> Option<Ref<'_, Customiser>> {
        self.panel.customiser(capability)
    }

    pub fn is_active(&self, capability: Capability) -> bool {
        self.panel.is_active(capability)
    }

    pub fn active_capabilities(&self) -> Vec<Capability> {
        self.panel.active()
    }

    /// Resynchronise the customisers after shapes were changed directly.
    pub fn refresh_customisers(&self) {
        self.panel.refresh(&self.selection, &self.store);
    }

    /// Direct mutable access to a shape, bypassing the dispatcher and history.
    ///
    /// Customisers are not refreshed; call [`Editor::refresh_customisers`] after.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut DrawingObject> {
        self.store.get_mut(id)
    }

    // Commands

    /// Apply an edit to the selection and record it for undo.
    pub fn apply(&mut self, edit: PropertyEdit) -> Result<DispatchOutcome, CommandError> {
        let outcome = self
            .dispatcher
            .execute(&mut self.store, &self.selection, &edit)?;
        if let DispatchOutcome::Applied(cmd) = &outcome {
            self.history.record(cmd.clone());
            self.refresh_customisers();
            self.dispatcher.announce(cmd);
        }
        Ok(outcome)
    }

    pub fn undo(&mut self) -> Result<(), CommandError> {
        let cmd = self.history.take_undo().ok_or(CommandError::NothingToUndo)?;
        let ids = cmd.undo(&mut self.store);
        tracing::info!("Undo: {}", cmd.name());
        self.after_history_step(&cmd, ids, ChangeOrigin::Undo);
        self.history.push_redo(cmd);
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), CommandError> {
        let cmd = self.history.take_redo().ok_or(CommandError::NothingToRedo)?;
        let ids = cmd.apply(&mut self.store);
        tracing::info!("Redo: {}", cmd.name());
        self.after_history_step(&cmd, ids, ChangeOrigin::Redo);
        self.history.push_undo(cmd);
        Ok(())
    }

    fn after_history_step(&self, cmd: &ChangeProperties, ids: Vec<ShapeId>, origin: ChangeOrigin) {
        self.refresh_customisers();
        if !ids.is_empty() {
            self.publish(AppEvent::Shape(ShapeEvent::PropertiesChanged {
                ids,
                property: cmd.property.name().to_string(),
                origin,
            }));
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        self.panel.detach(&mut self.selection);
    }
}
