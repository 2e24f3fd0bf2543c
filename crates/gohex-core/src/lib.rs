//! # gohex-core
//!
//! A library for rendering arbitrary byte streams as Go byte slice literals,
//! the Go counterpart of `xxd -i`.
//!
//! This crate provides the core functionality for:
//! - Streaming input into fixed-width rows of `0xHH` literals
//! - Emitting the surrounding `package` and `var ... = []byte{` declarations
//! - Sanitizing arbitrary names into valid Go identifiers
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`encoder`]: Streaming byte-to-literal encoding
//! - [`decl`]: Declarations and identifier sanitization
//! - [`embed`]: Sequencing a complete document against a buffered sink
//! - [`config`]: Formatting options
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use gohex_core::{EmbedConfig, Embedder};
//! use std::fs::File;
//! use std::io;
//!
//! let config = EmbedConfig::new().package("assets").variable("logo.png");
//! let embedder = Embedder::new(config)?;
//!
//! let input = File::open("logo.png")?;
//! embedder.embed(input, io::stdout().lock())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod config;
pub mod decl;
pub mod embed;
pub mod encoder;
pub mod error;

// Re-export primary types for convenience
pub use config::EmbedConfig;
pub use decl::sanitize;
pub use embed::Embedder;
pub use encoder::{encode, EncodeStats, HexEncoder};
pub use error::{Error, Result};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
