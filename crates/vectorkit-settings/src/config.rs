//! Configuration for VectorKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform configuration directory.
//!
//! Configuration is organized into two sections:
//! - Editor behaviour (eligibility policy, undo depth, event history)
//! - Default attributes for newly created plots

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vectorkit_core::EventBusConfig;
use vectorkit_designer::model::PlotParams;
use vectorkit_designer::{EditorOptions, EligibilityPolicy, History};

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "vectorkit";
const CONFIG_FILE: &str = "config.toml";

/// Editor behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// What happens when only part of the selection can take an edit
    pub eligibility: EligibilityPolicy,
    /// Maximum number of undoable edits
    pub history_depth: usize,
    /// Keep published events for inspection
    pub event_history: bool,
    /// Maximum number of retained events
    pub event_history_size: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            eligibility: EligibilityPolicy::Strict,
            history_depth: History::DEFAULT_DEPTH,
            event_history: false,
            event_history_size: 1000,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor behaviour
    pub editor: EditorSettings,
    /// Attributes given to new plots
    pub plot_defaults: PlotParams,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.editor.history_depth == 0 {
            return Err(SettingsError::invalid("editor.history_depth", "must be > 0"));
        }
        if self.editor.event_history && self.editor.event_history_size == 0 {
            return Err(SettingsError::invalid(
                "editor.event_history_size",
                "must be > 0 when event history is enabled",
            ));
        }
        self.plot_defaults.validate()?;
        Ok(())
    }

    /// Platform location of the config file.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))?;
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Load the file if it exists, defaults otherwise.
    ///
    /// A file that exists but fails to load is an error, not a silent reset.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Options for constructing an [`vectorkit_designer::Editor`].
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            eligibility: self.editor.eligibility,
            history_depth: self.editor.history_depth,
            event_bus: EventBusConfig {
                enable_history: self.editor.event_history,
                max_history_size: self.editor.event_history_size,
                ..EventBusConfig::default()
            },
            plot_defaults: self.plot_defaults.clone(),
        }
    }
}
