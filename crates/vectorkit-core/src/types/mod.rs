//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>`, `Arc<RwLock<T>>`, callbacks.
//! - [`ids`]: Stable identifiers shared by the document store and the selection.

pub mod aliases;
pub mod ids;

pub use aliases::*;
pub use ids::*;
