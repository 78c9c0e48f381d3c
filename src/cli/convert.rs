use crate::error::Result;
use crate::files::create_sink;
use crate::stream::{encode, EncodeOptions, Mode, DEFAULT_CHUNK_SIZE};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Options for the convert command
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub spaced: bool,
    pub chunk_size: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            spaced: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Convert a file into its binary-text representation
/// Returns the number of bytes converted
pub fn convert_file(
    input_path: &Path,
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<u64> {
    let source = BufReader::new(File::open(input_path)?);
    let sink = BufWriter::new(create_sink(output_path)?);

    let encode_options = EncodeOptions {
        chunk_size: options.chunk_size,
        spaced: options.spaced,
        mode: Mode::Plain,
    };
    encode(source, sink, None::<File>, &encode_options)
}
