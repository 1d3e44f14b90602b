//! Settings loader for the command-line front end.
//!
//! `defaults/linecompare.default.toml` is embedded into the binary. A settings
//! file, `LINECOMPARE_*` environment variables and finally explicit command
//! line flags are layered on top of it before deserializing into
//! [`Settings`].

use clap::ValueEnum;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use linecompare_core::DiffConfig;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/linecompare.default.toml");

/// Settings file picked up from the working directory when present
pub const LOCAL_SETTINGS_FILE: &str = "linecompare.toml";

/// Prefix of environment variables, e.g. `LINECOMPARE_DIFF__IGNORE_WHITESPACE`
pub const ENV_PREFIX: &str = "LINECOMPARE";

/// Top-level settings consumed by the binary
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub diff: DiffConfig,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub color: bool,
    pub only_changes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned row per record
    Table,
    /// Verdict, statistics and records as JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
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

    /// Layer a settings file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional settings file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `LINECOMPARE_*` variables from the process environment.
    pub fn with_environment(self) -> Self {
        self.with_environment_source(environment())
    }

    /// Layer an explicit environment source.
    pub fn with_environment_source(mut self, source: Environment) -> Self {
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

    /// Finalize the builder and deserialize the resulting settings.
    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment source mapping `LINECOMPARE_DIFF__STRATEGY` to `diff.strategy`
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
