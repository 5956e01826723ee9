use std::collections::VecDeque;

use vectorkit_core::ShapeId;

use crate::drawing_object::DrawingObject;
use crate::model::PropertyKey;
use crate::shape_store::ShapeStore;

/// An applied property edit, undoable by swapping whole object states.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeProperties {
    pub property: PropertyKey,
    pub before: Vec<DrawingObject>,
    pub after: Vec<DrawingObject>,
}

impl ChangeProperties {
    pub fn new(property: PropertyKey, before: Vec<DrawingObject>, after: Vec<DrawingObject>) -> Self {
        Self {
            property,
            before,
            after,
        }
    }

    pub fn ids(&self) -> Vec<ShapeId> {
        self.after.iter().map(|obj| obj.id).collect()
    }

    pub fn name(&self) -> String {
        format!("Change {}", self.property)
    }

    /// Restore the edited states. Returns the ids actually restored.
    pub fn apply(&self, store: &mut ShapeStore) -> Vec<ShapeId> {
        Self::restore(&self.after, store)
    }

    /// Restore the prior states. Returns the ids actually restored.
    pub fn undo(&self, store: &mut ShapeStore) -> Vec<ShapeId> {
        Self::restore(&self.before, store)
    }

    fn restore(states: &[DrawingObject], store: &mut ShapeStore) -> Vec<ShapeId> {
        states
            .iter()
            .filter_map(|state| {
                let id = state.id;
                match store.replace(state.clone()) {
                    Some(_) => Some(id),
                    None => {
                        tracing::warn!("Shape {} no longer exists, skipping", id);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Bounded undo stack with a redo stack.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: VecDeque<ChangeProperties>,
    redo_stack: Vec<ChangeProperties>,
    max_depth: usize,
}

impl History {
    pub const DEFAULT_DEPTH: usize = 50;

    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record a newly applied command; clears the redo stack.
    pub fn record(&mut self, command: ChangeProperties) {
        self.undo_stack.push_back(command);
        self.redo_stack.clear();
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    pub fn take_undo(&mut self) -> Option<ChangeProperties> {
        self.undo_stack.pop_back()
    }

    pub fn take_redo(&mut self) -> Option<ChangeProperties> {
        self.redo_stack.pop()
    }

    /// Park an undone command so it can be redone.
    pub fn push_redo(&mut self, command: ChangeProperties) {
        self.redo_stack.push(command);
    }

    /// Put a redone command back on the undo stack without clearing redo.
    pub fn push_undo(&mut self, command: ChangeProperties) {
        self.undo_stack.push_back(command);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}
