//! # VectorKit
//!
//! Selection-driven property editing for a vector drawing editor.
//!
//! ## Architecture
//!
//! VectorKit is organized as a workspace with multiple crates:
//!
//! 1. **vectorkit-core** - Error types, identifiers, event bus
//! 2. **vectorkit-designer** - Shapes, selection, customisers, property dispatch, undo
//! 3. **vectorkit-settings** - Configuration files and editor options
//! 4. **vectorkit** - Library facade and demo binary

use std::path::Path;

pub use vectorkit_core::{
    AppEvent, ChangeOrigin, CommandError, Error, EventBus, GeometryError, PropertyError, Result,
    ShapeId,
};
pub use vectorkit_designer::{
    model, Capability, DispatchOutcome, DrawingObject, Editor, EditorOptions, EligibilityPolicy,
    Point, PropertyEdit, PropertyKey, PropertyValue, Selection, Shape, ShapeStore, ShapeType,
};
pub use vectorkit_settings::{Config, EditorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build an editor from a config file, or from the platform config when
/// no path is given. A missing file yields the defaults.
pub fn open_editor(config_path: Option<&Path>) -> anyhow::Result<(Config, Editor)> {
    let config = match config_path {
        Some(path) => Config::load_or_default(path)?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };
    tracing::info!(
        "VectorKit {} (built {}), eligibility {:?}",
        VERSION,
        BUILD_DATE,
        config.editor.eligibility
    );
    let editor = Editor::with_options(config.editor_options());
    Ok((config, editor))
}
