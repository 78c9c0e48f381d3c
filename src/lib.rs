//! BinCrypt - reversible binary-text conversion with bit-split encryption
//!
//! Converts arbitrary files to and from a human-readable textual
//! representation of their bits, and offers a reversible transform that
//! splits each byte into a 7-bit payload stream and a 1-bit key stream.
//! Reassembling the original bytes requires both streams together.
//!
//! ## Pipeline
//!
//! ```text
//! convert:   bytes → 8-bit groups → lines                       → payload file
//! encrypt:   bytes → 7-bit groups → lines → payload file
//!                  ↘ key bits     → lines → key file   (lock-step)
//! deconvert: lines → 8-bit groups → bytes
//! decrypt:   payload lines + flattened key bits → bytes
//! ```
//!
//! The key is a plain complementary bitstream, not a secret derived from
//! a hard-to-invert function; this is a reversible encoding, not a
//! cryptographic security mechanism.
//!
//! Decoding is tolerant: invalid characters, ragged line lengths, and an
//! exhausted key stream are recorded as [`Diagnostic`]s in an
//! [`ErrorLog`] and skipped, never aborting the pass. Only I/O failures
//! are fatal.
//!
//! ## Example
//!
//! ```no_run
//! use bincrypt::cli::{convert_file, deconvert_file, ConvertOptions};
//! use std::path::Path;
//!
//! convert_file(
//!     Path::new("photo.png"),
//!     Path::new("photo.png.bin"),
//!     &ConvertOptions::default(),
//! ).unwrap();
//!
//! let (_bytes, log) = deconvert_file(
//!     Path::new("photo.png.bin"),
//!     Path::new("photo.png.out"),
//! ).unwrap();
//! assert!(log.is_empty());
//! ```

pub mod bits;
pub mod cli;
pub mod error;
pub mod files;
pub mod framing;
pub mod report;
pub mod stream;

pub use error::{BincryptError, Result};
pub use report::{Diagnostic, ErrorLog};
pub use stream::{decode, decrypt, encode, DecodeOutcome, EncodeOptions, Mode};
