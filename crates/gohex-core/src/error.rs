//! Error types for the gohex-core library.
//!
//! Configuration problems are reported before any output is produced.
//! I/O failures keep the side they came from (read, write or flush) so the
//! driver can report them precisely, with the I/O error available as the
//! [`source`](std::error::Error::source). End of input is never an error.

use thiserror::Error;

/// Result type alias for gohex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all gohex operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Column count below one
    #[error("invalid number of columns: {columns} (min. 1)")]
    InvalidColumns {
        /// The rejected column count
        columns: usize,
    },

    /// Indentation depth below one
    #[error("invalid indentation: {indent} (min. 1)")]
    InvalidIndent {
        /// The rejected indentation depth
        indent: usize,
    },

    /// Empty variable name
    #[error("invalid variable name: must not be empty")]
    InvalidVariableName,

    /// Reading the input stream failed
    #[error("failed to read input")]
    Read(#[source] std::io::Error),

    /// Writing to the output sink failed
    #[error("failed to write output")]
    Write(#[source] std::io::Error),

    /// Flushing the buffered output failed
    #[error("failed to flush output")]
    Flush(#[source] std::io::Error),
}

impl Error {
    /// Creates a new read error
    pub fn read(source: std::io::Error) -> Self {
        Self::Read(source)
    }

    /// Creates a new write error
    pub fn write(source: std::io::Error) -> Self {
        Self::Write(source)
    }

    /// Returns true if this error was raised while validating configuration,
    /// i.e. before any I/O took place
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidColumns { .. } | Self::InvalidIndent { .. } | Self::InvalidVariableName
        )
    }
}
