//! # Event Bus Module
//!
//! Provides the publish/subscribe channel between the editor core and the
//! presentation layer.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async receivers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vectorkit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Customiser]),
//!     |event| {
//!         if let AppEvent::Customiser(change) = event {
//!             println!("Show/hide control group: {:?}", change);
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
