//! Full document rendering.
//!
//! [`Embedder`] sequences the package clause, the variable declaration, the
//! encoded body and the closing brace against one buffered sink, flushing it
//! exactly once at the end.

use crate::config::EmbedConfig;
use crate::decl;
use crate::encoder::{EncodeStats, HexEncoder};
use crate::error::{Error, Result};
use std::io::{BufReader, BufWriter, Read, Write};
use tracing::debug;

/// Renders byte streams as Go source according to an [`EmbedConfig`].
///
/// # Example
///
/// ```
/// use gohex_core::{EmbedConfig, Embedder};
///
/// let embedder = Embedder::new(EmbedConfig::new().package("").variable("hi"))?;
/// let out = embedder.embed_to_vec(&b"hi"[..])?;
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "var hi = []byte{\n\t0x68, 0x69,\n}\n"
/// );
/// # Ok::<(), gohex_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Embedder {
    config: EmbedConfig,
}

impl Embedder {
    /// Creates an embedder, rejecting invalid configuration up front
    pub fn new(config: EmbedConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Writes the full document for `reader` into `writer`.
    ///
    /// Both ends are buffered internally; the writer is flushed once all
    /// output has been produced. On failure, whatever reached `writer` before
    /// the error stays there.
    pub fn embed<R, W>(&self, reader: R, writer: W) -> Result<EncodeStats>
    where
        R: Read,
        W: Write,
    {
        let config = &self.config;
        let mut reader = BufReader::new(reader);
        let mut sink = BufWriter::new(writer);

        if config.has_package() {
            decl::write_package(&mut sink, &config.package)?;
        }

        if !config.strip {
            decl::open_var(&mut sink, &config.variable, config.indent)?;
        }

        let stats =
            HexEncoder::new(config.columns, config.indent).encode(&mut reader, &mut sink)?;

        if !config.strip {
            decl::close_var(&mut sink, config.indent)?;
        }

        sink.flush().map_err(Error::Flush)?;

        debug!(
            "Embedded {} bytes as '{}' ({} lines, strip: {})",
            stats.bytes,
            decl::sanitize(&config.variable),
            stats.lines,
            config.strip
        );
        Ok(stats)
    }

    /// Renders the document for `reader` into memory
    pub fn embed_to_vec<R: Read>(&self, reader: R) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.embed(reader, &mut out)?;
        Ok(out)
    }
}
