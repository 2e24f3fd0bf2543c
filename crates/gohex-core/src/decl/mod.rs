//! Go declarations surrounding the encoded bytes.
//!
//! A full document looks like:
//!
//! ```text
//! package main
//!
//! var gohex = []byte{
//! 	0x48, 0x65, 0x6c, 0x6c, 0x6f,
//! }
//! ```
//!
//! The `var` line and the closing brace sit one tab shallower than the body,
//! so an `indent` of 1 puts them in column zero. All writes go straight to
//! the sink; failures are returned as [`Error::Write`].

mod ident;

use crate::encoder::INDENT_UNIT;
use crate::error::{Error, Result};
use std::io::Write;

pub use ident::{is_identifier, sanitize};

/// Writes the package clause followed by a blank line.
///
/// Callers skip this entirely when the package name is empty.
pub fn write_package<W: Write + ?Sized>(sink: &mut W, package: &str) -> Result<()> {
    write!(sink, "package {}\n\n", package).map_err(Error::write)
}

/// Writes the variable declaration and opening brace.
///
/// `raw_name` is passed through [`sanitize`] first.
pub fn open_var<W: Write + ?Sized>(sink: &mut W, raw_name: &str, indent: usize) -> Result<()> {
    write_outer_indent(sink, indent)?;
    writeln!(sink, "var {} = []byte{{", sanitize(raw_name)).map_err(Error::write)
}

/// Writes the closing brace of the variable declaration.
pub fn close_var<W: Write + ?Sized>(sink: &mut W, indent: usize) -> Result<()> {
    write_outer_indent(sink, indent)?;
    writeln!(sink, "}}").map_err(Error::write)
}

fn write_outer_indent<W: Write + ?Sized>(sink: &mut W, indent: usize) -> Result<()> {
    let depth = indent.saturating_sub(1);
    if depth == 0 {
        return Ok(());
    }
    sink.write_all(&vec![INDENT_UNIT; depth])
        .map_err(Error::write)
}
