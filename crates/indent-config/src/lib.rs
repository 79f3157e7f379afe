//! Configuration for indent writers and markup rendering.
//!
//! Parses `indent.toml` files with serde and provides auto-discovery of the
//! file in the current directory and its parents.
//!
//! ```toml
//! [writer]
//! indent_unit = "\t"    # or: indent_width = 2
//! enabled = true
//!
//! [markup]
//! indent_width = 2      # optional, falls back to the writer settings
//! ```

use std::path::{Path, PathBuf};

use indent_markup::RenderOptions;
use indent_writer::{DEFAULT_INDENT_UNIT, IndentOptions};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "indent.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Indent writer configuration.
    pub writer: WriterConfig,
    /// Markup rendering configuration.
    pub markup: MarkupConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[writer]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Literal per-level prefix.
    pub indent_unit: Option<String>,
    /// Per-level prefix as a number of spaces.
    pub indent_width: Option<usize>,
    /// Whether indent prefixes are emitted.
    pub enabled: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent_unit: None,
            indent_width: None,
            enabled: true,
        }
    }
}

/// `[markup]` section.
///
/// Unset fields fall back to the `[writer]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Literal per-level prefix for rendered markup.
    pub indent_unit: Option<String>,
    /// Per-level prefix for rendered markup as a number of spaces.
    pub indent_width: Option<usize>,
}

/// Resolve an optional unit/width pair to a prefix string.
fn resolve_unit(unit: Option<&String>, width: Option<usize>) -> Option<String> {
    unit.cloned().or_else(|| width.map(|w| " ".repeat(w)))
}

/// Check that at most one of `indent_unit` and `indent_width` is set and that
/// the unit stays on one line.
fn validate_unit(
    unit: Option<&String>,
    width: Option<usize>,
    section: &str,
) -> Result<(), ConfigError> {
    if unit.is_some() && width.is_some() {
        return Err(ConfigError::Validation(format!(
            "{section}.indent_unit and {section}.indent_width are mutually exclusive"
        )));
    }
    if unit.is_some_and(|u| u.contains(['\n', '\r'])) {
        return Err(ConfigError::Validation(format!(
            "{section}.indent_unit cannot contain line breaks"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `indent.toml` in the current directory and parents, and falls back
    /// to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for the config file in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_unit(
            self.writer.indent_unit.as_ref(),
            self.writer.indent_width,
            "writer",
        )?;
        validate_unit(
            self.markup.indent_unit.as_ref(),
            self.markup.indent_width,
            "markup",
        )?;
        Ok(())
    }

    /// Options for constructing indent writers.
    #[must_use]
    pub fn indent_options(&self) -> IndentOptions {
        let unit = resolve_unit(self.writer.indent_unit.as_ref(), self.writer.indent_width)
            .unwrap_or_else(|| DEFAULT_INDENT_UNIT.to_owned());
        IndentOptions::default()
            .with_indent_unit(unit)
            .with_enabled(self.writer.enabled)
    }

    /// Options for rendering markup trees.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        match resolve_unit(self.markup.indent_unit.as_ref(), self.markup.indent_width) {
            Some(unit) => RenderOptions::default().with_indent_unit(unit),
            None => RenderOptions::from(&self.indent_options()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indent_markup::{XmlFactory, args};
    use indent_writer::{IndentWriter, StringBuilder};
    use pretty_assertions::assert_eq;

    fn assert_validation_error(toml: &str, expected_substrings: &[&str]) {
        let err = Config::from_toml_str(toml).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ConfigError::Validation(_)), "got {message}");
        for expected in expected_substrings {
            assert!(
                message.contains(expected),
                "expected {expected:?} in {message:?}"
            );
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.writer.enabled);
        assert_eq!(config.indent_options(), IndentOptions::default());
        assert_eq!(config.render_options(), RenderOptions::default());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.indent_options().indent_unit, "    ");
    }

    #[test]
    fn test_parse_writer_unit() {
        let toml = r#"
[writer]
indent_unit = "\t"
enabled = false
"#;
        let config = Config::from_toml_str(toml).unwrap();
        let options = config.indent_options();
        assert_eq!(options.indent_unit, "\t");
        assert!(!options.enabled);
    }

    #[test]
    fn test_parse_writer_width() {
        let config = Config::from_toml_str("[writer]\nindent_width = 2\n").unwrap();
        assert_eq!(config.indent_options().indent_unit, "  ");
    }

    #[test]
    fn test_markup_falls_back_to_writer() {
        let config = Config::from_toml_str("[writer]\nindent_width = 3\n").unwrap();
        assert_eq!(config.render_options().indent_unit, "   ");
    }

    #[test]
    fn test_markup_overrides_writer() {
        let toml = r#"
[writer]
indent_width = 8

[markup]
indent_unit = "  "
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.indent_options().indent_unit, "        ");
        assert_eq!(config.render_options().indent_unit, "  ");
    }

    #[test]
    fn test_validate_unit_and_width_conflict() {
        assert_validation_error(
            "[writer]\nindent_unit = \"  \"\nindent_width = 2\n",
            &["writer.indent_unit", "mutually exclusive"],
        );
        assert_validation_error(
            "[markup]\nindent_unit = \"  \"\nindent_width = 2\n",
            &["markup.indent_unit"],
        );
    }

    #[test]
    fn test_validate_unit_line_break() {
        assert_validation_error(
            "[writer]\nindent_unit = \"\\n\"\n",
            &["writer.indent_unit", "line breaks"],
        );
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml_str("[writer]\nindent_width = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[writer]\nindent_width = 2\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.indent_options().indent_unit, "  ");
    }

    #[test]
    fn test_discover_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        assert_eq!(Config::discover_from(&nested), Some(path));
    }

    #[test]
    fn test_discover_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("project");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(nested.join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_options_drive_writer_and_renderer() {
        let config = Config::from_toml_str("[writer]\nindent_width = 2\n").unwrap();

        let mut w = IndentWriter::with_options(StringBuilder::new(), &config.indent_options());
        w.println("{");
        w.indented(|w| {
            w.println("x;");
        });
        w.println("}");
        assert_eq!(w.to_string(), "{\n  x;\n}\n");

        let x = XmlFactory;
        let list = x.ul(args![x.li("a").unwrap()]).unwrap();
        assert_eq!(
            list.render_with(&config.render_options()),
            "<ul>\n  <li>a</li>\n</ul>\n"
        );
    }
}
