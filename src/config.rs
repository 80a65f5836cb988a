//! Configuration loading.
//!
//! `defaults/xmlfmt.default.toml` is embedded into the binary so the documented
//! defaults and runtime behavior cannot drift apart. Callers layer user files and
//! command-line overrides on top of it with [`Loader`], deserialize the result
//! into [`XmlfmtConfig`], and then build one [`Settings`] value that is passed
//! explicitly through the pipeline.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/xmlfmt.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct XmlfmtConfig {
    pub formatting: FormattingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    /// Indentation unit repeated once per nest level.
    pub tabulator: String,
    pub emit: Emit,
}

/// What the pipeline writes to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emit {
    /// The indented document.
    #[default]
    Formatted,
    /// The token stream as JSON, for inspecting how a document was lexed.
    Tokens,
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

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<XmlfmtConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<XmlfmtConfig, ConfigError> {
    Loader::new().build()
}

/// Everything one formatting run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tabulator: String,
    pub emit: Emit,
}

impl Settings {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, config: &XmlfmtConfig) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            tabulator: unescape_tabulator(&config.formatting.tabulator),
            emit: config.formatting.emit,
        }
    }
}

/// Shells pass `-t "\t"` through as a backslash and a `t`; read it as a tab.
pub fn unescape_tabulator(raw: &str) -> String {
    raw.replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.formatting.tabulator, "  ");
        assert_eq!(config.formatting.emit, Emit::Formatted);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("formatting.tabulator", "\t")
            .expect("override to apply")
            .set_override("formatting.emit", "tokens")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.tabulator, "\t");
        assert_eq!(config.formatting.emit, Emit::Tokens);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[formatting]\ntabulator = \"    \"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.tabulator, "    ");
        assert_eq!(config.formatting.emit, Emit::Formatted);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/nonexistent/xmlfmt.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/xmlfmt.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.formatting.tabulator, "  ");
    }

    #[test]
    fn unknown_emit_is_rejected() {
        let result = Loader::new()
            .set_override("formatting.emit", "yaml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn settings_unescape_tab() {
        let config = Loader::new()
            .set_override("formatting.tabulator", "\\t")
            .expect("override to apply")
            .build()
            .expect("config to build");
        let settings = Settings::new("in.xml", "out.xml", &config);
        assert_eq!(settings.tabulator, "\t");
        assert_eq!(settings.input, PathBuf::from("in.xml"));
    }

    #[test]
    fn unescape_leaves_spaces_alone() {
        assert_eq!(unescape_tabulator("  "), "  ");
        assert_eq!(unescape_tabulator("\\t\\t"), "\t\t");
    }
}
