//! Shared configuration loader for the tabulist toolchain.
//!
//! `defaults/tabulist.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`TabulistConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tabulist_core::{ListMarkerStyle, ToggleOptions, ValueEscapeStyle};

const DEFAULT_TOML: &str = include_str!("../defaults/tabulist.default.toml");

/// File name looked up in the working directory by hosts that support a
/// project-local configuration.
pub const PROJECT_CONFIG_FILE: &str = "tabulist.toml";

/// Top-level configuration consumed by tabulist applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TabulistConfig {
    pub toggle: ToggleConfig,
}

/// Mirrors the knobs exposed by the toggle engine.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleConfig {
    pub root_header_name: String,
    pub output_empty_keys: bool,
    pub value_escape_style: ValueEscapeStyle,
    pub list_marker_style: ListMarkerStyle,
    pub format_table: bool,
    pub smart_pipe_escape: bool,
    pub flatten_nested_keys: bool,
}

impl From<ToggleConfig> for ToggleOptions {
    fn from(config: ToggleConfig) -> Self {
        ToggleOptions {
            root_header_name: config.root_header_name,
            output_empty_keys: config.output_empty_keys,
            value_escape_style: config.value_escape_style,
            list_marker_style: config.list_marker_style,
            format_table: config.format_table,
            smart_pipe_escape: config.smart_pipe_escape,
            flatten_nested_keys: config.flatten_nested_keys,
        }
    }
}

impl From<&ToggleConfig> for ToggleOptions {
    fn from(config: &ToggleConfig) -> Self {
        ToggleOptions {
            root_header_name: config.root_header_name.clone(),
            output_empty_keys: config.output_empty_keys,
            value_escape_style: config.value_escape_style,
            list_marker_style: config.list_marker_style,
            format_table: config.format_table,
            smart_pipe_escape: config.smart_pipe_escape,
            flatten_nested_keys: config.flatten_nested_keys,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TabulistConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TabulistConfig, ConfigError> {
    Loader::new().build()
}
