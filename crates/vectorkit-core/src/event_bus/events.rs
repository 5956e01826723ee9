//! Event type definitions for the event bus.
//!
//! This module defines all editor events organized by category.
//! Events are designed to be cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::types::ShapeId;

/// Root event enum for all editor events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Selection registry changes
    Selection(SelectionEvent),
    /// Shape property changes
    Shape(ShapeEvent),
    /// Customiser activation transitions
    Customiser(CustomiserEvent),
    /// Document store changes
    Document(DocumentEvent),
    /// Rejected commands
    Command(CommandEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Selection(_) => EventCategory::Selection,
            AppEvent::Shape(_) => EventCategory::Shape,
            AppEvent::Customiser(_) => EventCategory::Customiser,
            AppEvent::Document(_) => EventCategory::Document,
            AppEvent::Command(_) => EventCategory::Command,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Selection(e) => e.description(),
            AppEvent::Shape(e) => e.description(),
            AppEvent::Customiser(e) => e.description(),
            AppEvent::Document(e) => e.description(),
            AppEvent::Command(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Selection registry events.
    Selection,
    /// Shape property events.
    Shape,
    /// Customiser activation events.
    Customiser,
    /// Document store events.
    Document,
    /// Command diagnostics.
    Command,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Shape => write!(f, "Shape"),
            EventCategory::Customiser => write!(f, "Customiser"),
            EventCategory::Document => write!(f, "Document"),
            EventCategory::Command => write!(f, "Command"),
        }
    }
}

fn format_ids(ids: &[ShapeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Selection-related events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The selection content changed.
    Changed {
        /// Selected shapes, in selection order.
        ids: Vec<ShapeId>,
    },
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::Changed { ids } if ids.is_empty() => "Selection cleared".to_string(),
            SelectionEvent::Changed { ids } => format!("Selection: [{}]", format_ids(ids)),
        }
    }
}

/// What caused a batch of property changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeOrigin {
    /// A property edit dispatched to the selection.
    Command,
    /// An undone edit.
    Undo,
    /// A redone edit.
    Redo,
}

/// Shape property events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeEvent {
    /// One aggregate notification for every shape touched by one edit.
    PropertiesChanged {
        /// Shapes that now hold new values.
        ids: Vec<ShapeId>,
        /// Name of the edited property.
        property: String,
        /// What caused the change.
        origin: ChangeOrigin,
    },
}

impl ShapeEvent {
    fn description(&self) -> String {
        match self {
            ShapeEvent::PropertiesChanged {
                ids,
                property,
                origin,
            } => format!("{:?}: {} changed on [{}]", origin, property, format_ids(ids)),
        }
    }
}

/// Customiser activation events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CustomiserEvent {
    /// A property group became editable.
    Activated {
        /// Name of the property group.
        group: String,
        /// Shape whose values seed the displayed properties.
        representative: ShapeId,
    },
    /// A property group stopped being editable.
    Deactivated {
        /// Name of the property group.
        group: String,
    },
}

impl CustomiserEvent {
    fn description(&self) -> String {
        match self {
            CustomiserEvent::Activated {
                group,
                representative,
            } => format!("{} customiser activated on {}", group, representative),
            CustomiserEvent::Deactivated { group } => format!("{} customiser deactivated", group),
        }
    }
}

/// Document store events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// A shape was added to the drawing.
    ShapeAdded {
        /// Identifier of the new shape.
        id: ShapeId,
        /// Kind of the new shape.
        kind: String,
    },
    /// A shape was destroyed.
    ShapeRemoved {
        /// Identifier of the removed shape.
        id: ShapeId,
    },
}

impl DocumentEvent {
    fn description(&self) -> String {
        match self {
            DocumentEvent::ShapeAdded { id, kind } => format!("{} {} added", kind, id),
            DocumentEvent::ShapeRemoved { id } => format!("Shape {} removed", id),
        }
    }
}

/// Command diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommandEvent {
    /// An edit was rolled back because a shape rejected it.
    Rejected {
        /// Name of the edited property.
        property: String,
        /// The shape that rejected the value.
        shape_id: ShapeId,
        /// Human-readable cause.
        reason: String,
    },
}

impl CommandEvent {
    fn description(&self) -> String {
        match self {
            CommandEvent::Rejected {
                property,
                shape_id,
                reason,
            } => format!("{} rejected by {}: {}", property, shape_id, reason),
        }
    }
}
