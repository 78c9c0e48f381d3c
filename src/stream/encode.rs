//! Chunked streaming encoder.
//!
//! The byte source is read in fixed-size chunks; each chunk becomes one
//! text line. Split mode additionally writes one key line per chunk, so
//! line *n* of the key output always covers the same bytes as line *n*
//! of the payload output.

use std::io::{Read, Write};

use crate::bits::{byte_to_bits, split_byte};
use crate::error::{BincryptError, Result};
use crate::framing::encode_line;
use crate::stream::Mode;

/// Bytes per chunk (one chunk per output line) unless overridden.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Options for a streaming encode pass
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub chunk_size: usize,
    pub spaced: bool,
    pub mode: Mode,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            spaced: true,
            mode: Mode::Plain,
        }
    }
}

/// Stream `source` through the bit codec into `payload`.
///
/// In [`Mode::Split`] the key bits go to `key`, one unspaced line per
/// chunk, in lock-step with the payload lines. Returns the number of
/// bytes consumed. I/O failures are fatal and propagate immediately.
pub fn encode<R, P, K>(
    mut source: R,
    mut payload: P,
    mut key: Option<K>,
    options: &EncodeOptions,
) -> Result<u64>
where
    R: Read,
    P: Write,
    K: Write,
{
    if options.chunk_size == 0 {
        return Err(BincryptError::InvalidChunkSize(options.chunk_size));
    }
    if options.mode == Mode::Split && key.is_none() {
        return Err(BincryptError::MissingKeySink);
    }

    let mut buffer = vec![0u8; options.chunk_size];
    let mut total: u64 = 0;

    loop {
        let filled = fill_chunk(&mut source, &mut buffer)?;
        if filled == 0 {
            break;
        }
        let chunk = &buffer[..filled];

        match options.mode {
            Mode::Plain => {
                let groups: Vec<String> = chunk.iter().map(|&b| byte_to_bits(b)).collect();
                payload.write_all(encode_line(&groups, options.spaced).as_bytes())?;
            }
            Mode::Split => {
                let mut groups = Vec::with_capacity(chunk.len());
                let mut key_line = String::with_capacity(chunk.len() + 1);
                for &b in chunk {
                    let (bits, key_bit) = split_byte(b);
                    groups.push(bits);
                    key_line.push(key_bit);
                }
                key_line.push('\n');

                payload.write_all(encode_line(&groups, options.spaced).as_bytes())?;
                if let Some(sink) = key.as_mut() {
                    sink.write_all(key_line.as_bytes())?;
                }
            }
        }

        total += filled as u64;
        if filled < buffer.len() {
            // short chunk: the source is exhausted
            break;
        }
    }

    payload.flush()?;
    if let Some(sink) = key.as_mut() {
        sink.flush()?;
    }
    Ok(total)
}

/// Read until `buffer` is full or the source hits EOF
fn fill_chunk<R: Read>(source: &mut R, buffer: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        let n = source.read(&mut buffer[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
