//! Shared configuration loader for the dtok toolchain.
//!
//! `defaults/dtok.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DtokConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/dtok.default.toml");

/// Top-level configuration consumed by dtok applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DtokConfig {
    pub paths: PathsConfig,
    pub sets: SetsConfig,
    pub artifacts: ArtifactsConfig,
    pub tool: ToolConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub source: String,
    pub output_dir: String,
}

/// Set-name identifiers routing token sets to classifier branches.
#[derive(Debug, Clone, Deserialize)]
pub struct SetsConfig {
    pub primitive: String,
    pub semantic_prefix: String,
    pub brand_prefix: String,
}

/// File names of the emitted artifacts, relative to the output directory.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    pub nested: String,
    pub variables: String,
}

/// The external variable-generation tool run after emission.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    pub command: String,
    pub args: Vec<String>,
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
    pub fn build(self) -> Result<DtokConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DtokConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.sets.primitive, "primitive/value");
        assert_eq!(config.sets.semantic_prefix, "semantic/");
        assert_eq!(config.artifacts.nested, "index.ts");
        assert_eq!(config.tool.command, "style-dictionary");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("paths.output_dir", "out")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.paths.output_dir, "out");
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[tool]\ncommand = \"true\"\nargs = []").expect("write");
        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.tool.command, "true");
        // untouched keys keep their defaults
        assert_eq!(config.sets.brand_prefix, "brand/");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new().with_file("does/not/exist.toml").build().is_err());
    }

    #[test]
    fn absent_optional_file_falls_back_to_defaults() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.paths.source, "tokens/figma/tokens.json");
    }

    #[test]
    fn present_optional_file_layers_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[paths]\noutput_dir = \"generated\"").expect("write");
        let config = Loader::new()
            .with_optional_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.paths.output_dir, "generated");
        assert_eq!(config.artifacts.variables, "variables.json");
    }
}
