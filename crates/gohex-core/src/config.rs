//! Formatting options for a single run.

use crate::error::{Error, Result};

/// Default number of byte literals per line
pub const DEFAULT_COLUMNS: usize = 10;

/// Default body indentation, in tabs
pub const DEFAULT_INDENT: usize = 1;

/// Default Go variable name
pub const DEFAULT_VARIABLE: &str = "gohex";

/// Default Go package name
pub const DEFAULT_PACKAGE: &str = "main";

/// Options controlling how a byte stream is rendered as Go source.
///
/// Built once, validated once, then passed by reference to the emitter
/// and encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Number of byte literals per line (>= 1)
    pub columns: usize,
    /// Body indentation in tabs (>= 1); declarations sit one tab shallower
    pub indent: usize,
    /// Raw variable name, sanitized when emitted
    pub variable: String,
    /// Package name; empty omits the package clause
    pub package: String,
    /// Emit only the body, without package, variable or closing brace
    pub strip: bool,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            indent: DEFAULT_INDENT,
            variable: DEFAULT_VARIABLE.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            strip: false,
        }
    }
}

impl EmbedConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of byte literals per line
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the body indentation depth
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the variable name
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variable = name.into();
        self
    }

    /// Sets the package name (empty for none)
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package = name.into();
        self
    }

    /// Sets whether declarations are stripped
    pub fn strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    /// Checks the constraints the encoder and emitter rely on.
    ///
    /// Columns are checked first, then indentation, then the variable name.
    pub fn validate(&self) -> Result<()> {
        if self.columns < 1 {
            return Err(Error::InvalidColumns {
                columns: self.columns,
            });
        }

        if self.indent < 1 {
            return Err(Error::InvalidIndent {
                indent: self.indent,
            });
        }

        if self.variable.is_empty() {
            return Err(Error::InvalidVariableName);
        }

        Ok(())
    }

    /// True when a package clause should be written
    pub fn has_package(&self) -> bool {
        !self.strip && !self.package.is_empty()
    }
}
