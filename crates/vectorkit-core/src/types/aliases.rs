//! Type aliases for commonly used complex types.
//!
//! Complex types like `Rc<RefCell<T>>` or `Arc<RwLock<HashMap<K, V>>>` are hard
//! to read at a glance; the aliases below name them once so every crate spells
//! them the same way.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vectorkit_core::types::*;
//!
//! // Instead of: Rc<RefCell<Customiser>>
//! let customiser: Shared<Customiser> = shared(Customiser::new(Capability::Plot));
//! ```

use parking_lot::RwLock;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::Arc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// The editor core runs on one logical thread of control; observers of the
/// selection registry are held this way.
pub type Shared<T> = Rc<RefCell<T>>;

/// A non-owning handle to a [`Shared`] value.
///
/// Registries keep these so that dropping the last strong handle is enough to
/// stop notifications.
pub type WeakShared<T> = Weak<RefCell<T>>;

/// Wrap a value into a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<RwLock<T>>)
// =============================================================================

/// A thread-safe read-write locked wrapper for read-heavy shared state.
///
/// Uses `parking_lot::RwLock` for better performance than `std::sync::RwLock`.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// A thread-safe read-write locked hash map.
pub type ThreadSafeRwMap<K, V> = Arc<RwLock<HashMap<K, V>>>;

/// Create a new [`ThreadSafeRw`] wrapper.
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// A thread-safe callback that receives a value.
pub type DataCallback<T> = Box<dyn Fn(T) + Send + Sync>;

/// A subscription map from handle to registered value.
pub type SubscriptionMap<K, V> = ThreadSafeRwMap<K, V>;
