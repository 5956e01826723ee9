//! VectorKit Settings Crate
//!
//! Loads, validates and saves the editor configuration, and turns it into
//! [`vectorkit_designer::EditorOptions`].

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings};
pub use error::{SettingsError, SettingsResult};
