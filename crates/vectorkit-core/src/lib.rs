//! # VectorKit Core
//!
//! Core types, errors and the event bus shared by the VectorKit crates.
//! Provides the error taxonomy for geometry validation and command dispatch,
//! the publish/subscribe channel towards the presentation layer, and the
//! shared-ownership aliases used by the single-threaded editor core.

pub mod error;
pub mod event_bus;
pub mod types;

pub use error::{CommandError, Error, GeometryError, PropertyError, Result};

pub use event_bus::{
    AppEvent, ChangeOrigin, CommandEvent, CustomiserEvent, DocumentEvent, EventBus,
    EventBusConfig, EventCategory, EventFilter, SelectionEvent, ShapeEvent,
    SubscriptionId,
};

pub use types::{shared, thread_safe_rw, Shared, ShapeId, ThreadSafeRw, WeakShared};
