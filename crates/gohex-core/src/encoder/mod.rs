//! Streaming byte encoder.
//!
//! Reads the input in chunks of exactly `columns` bytes and writes one body
//! line per chunk. Only the final chunk may be short, and a stream ending on
//! a chunk boundary produces no trailing empty line. Memory use is one chunk
//! plus one formatted line regardless of input size.
//!
//! ## Example
//!
//! ```
//! use gohex_core::encode;
//!
//! let mut out = Vec::new();
//! let stats = encode(&b"Hello"[..], &mut out, 2, 1)?;
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\t0x48, 0x65,\n\t0x6c, 0x6c,\n\t0x6f,\n"
//! );
//! assert_eq!(stats.bytes, 5);
//! assert_eq!(stats.lines, 3);
//! # Ok::<(), gohex_core::Error>(())
//! ```

mod hex;

use crate::error::{Error, Result};
use std::io::{self, Read, Write};
use tracing::{debug, trace};

pub use hex::{hex_digits, parse_line, push_line, INDENT_UNIT, LITERAL_WIDTH};

/// Counts produced by one encoding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Bytes consumed from the input
    pub bytes: u64,
    /// Body lines written to the output
    pub lines: u64,
}

/// Reusable encoder holding the chunk and line buffers.
#[derive(Debug, Clone)]
pub struct HexEncoder {
    columns: usize,
    indent: usize,
    chunk: Vec<u8>,
    line: Vec<u8>,
}

impl HexEncoder {
    /// Creates an encoder for `columns` literals per line at `indent` tabs.
    ///
    /// Both values must be at least one; see
    /// [`EmbedConfig::validate`](crate::EmbedConfig::validate).
    pub fn new(columns: usize, indent: usize) -> Self {
        debug_assert!(columns >= 1 && indent >= 1);

        Self {
            columns,
            indent,
            chunk: vec![0; columns],
            line: Vec::with_capacity(indent + columns * LITERAL_WIDTH),
        }
    }

    /// Encodes `source` into `sink` until the source is exhausted.
    ///
    /// Read and write failures abort the pass. Lines already written stay
    /// written.
    pub fn encode<R, W>(&mut self, source: &mut R, sink: &mut W) -> Result<EncodeStats>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut stats = EncodeStats::default();

        loop {
            let n = read_chunk(source, &mut self.chunk).map_err(Error::read)?;
            if n == 0 {
                break;
            }

            self.line.clear();
            push_line(&mut self.line, &self.chunk[..n], self.indent);
            sink.write_all(&self.line).map_err(Error::write)?;

            stats.bytes += n as u64;
            stats.lines += 1;
            trace!("Wrote line {} ({} bytes)", stats.lines, n);

            if n < self.columns {
                break;
            }
        }

        debug!(
            "Encoded {} bytes into {} lines",
            stats.bytes, stats.lines
        );
        Ok(stats)
    }
}

/// Encodes `source` into `sink` with `columns` literals per line, indented
/// by `indent` tabs.
pub fn encode<R, W>(mut source: R, mut sink: W, columns: usize, indent: usize) -> Result<EncodeStats>
where
    R: Read,
    W: Write,
{
    HexEncoder::new(columns, indent).encode(&mut source, &mut sink)
}

/// Fills `buf` from `source`, stopping early only at end of input.
///
/// Returns the number of bytes read; anything short of `buf.len()` means the
/// input is exhausted.
fn read_chunk<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}
