use crate::error::Result;
use crate::files::create_sink;
use crate::stream::{encode, EncodeOptions, Mode, DEFAULT_CHUNK_SIZE};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Options for the encrypt command
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    pub spaced: bool,
    pub chunk_size: usize,
}

impl Default for EncryptOptions {
    fn default() -> Self {
        Self {
            spaced: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Split a file into a 7-bit payload file and a 1-bit key file.
/// Both outputs are chunk-synchronized: line n of the key file covers
/// exactly the bytes of line n of the payload file.
/// Returns the number of bytes encrypted
pub fn encrypt_file(
    input_path: &Path,
    payload_path: &Path,
    key_path: &Path,
    options: &EncryptOptions,
) -> Result<u64> {
    let source = BufReader::new(File::open(input_path)?);
    let payload = BufWriter::new(create_sink(payload_path)?);
    let key = BufWriter::new(create_sink(key_path)?);

    let encode_options = EncodeOptions {
        chunk_size: options.chunk_size,
        spaced: options.spaced,
        mode: Mode::Split,
    };
    encode(source, payload, Some(key), &encode_options)
}
