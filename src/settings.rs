//! Configuration loader for the pysig command line
//!
//! Layers, lowest first:
//!
//! 1. `defaults/pysig.default.toml`, embedded at compile time
//! 2. `./pysig.toml` in the working directory, if present
//! 3. the file named by `--config`
//! 4. `--format` / `--shape` flags
//!
//! The result deserializes into [`PysigConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/pysig.default.toml");

/// Per-directory settings file picked up by [`Loader::discover`]
pub const LOCAL_CONFIG: &str = "pysig.toml";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PysigConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// How signature files and stdin are read
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Lines starting with this are skipped; empty disables comments
    pub comment_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered output format
    pub format: String,
    /// Attach the calling-convention shape to every report
    pub shape: bool,
}

/// Builds a [`PysigConfig`] from the embedded defaults and whatever is layered on top
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded defaults
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Defaults plus `pysig.toml` from the working directory, when there is one
    pub fn discover() -> Self {
        Self::new().with_optional_file(LOCAL_CONFIG)
    }

    /// Layer a TOML file that must exist (`--config`)
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one key, e.g. `output.format` from `--format`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PysigConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.output.format, "json");
        assert!(!config.output.shape);
        assert_eq!(config.input.comment_prefix, "#");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "text")
            .expect("override to apply")
            .set_override("output.shape", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "text");
        assert!(config.output.shape);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nformat = \"yaml\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "yaml");
        assert!(!config.output.shape);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/pysig.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/pysig.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn discover_without_local_file_uses_defaults() {
        // the crate root carries no pysig.toml
        assert!(!Path::new(LOCAL_CONFIG).exists());
        let config = Loader::discover().build().expect("config to build");
        assert_eq!(config.output.format, "json");
        assert_eq!(config.input.comment_prefix, "#");
    }
}
