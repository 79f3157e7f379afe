//! Rendering options.

use indent_writer::{DEFAULT_INDENT_UNIT, IndentOptions};

/// Options controlling how markup trees are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Text added per nesting level in front of child lines.
    pub indent_unit: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_owned(),
        }
    }
}

impl RenderOptions {
    /// Set the per-level indent.
    #[must_use]
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Writer options used for one element's buffer.
    pub(crate) fn writer_options(&self) -> IndentOptions {
        IndentOptions::default().with_indent_unit(self.indent_unit.clone())
    }
}

impl From<&IndentOptions> for RenderOptions {
    fn from(options: &IndentOptions) -> Self {
        Self {
            indent_unit: options.indent_unit.clone(),
        }
    }
}
