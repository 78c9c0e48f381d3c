pub mod decode;
pub mod encode;

pub use decode::{decode, decrypt, DecodeOutcome};
pub use encode::{encode, EncodeOptions, DEFAULT_CHUNK_SIZE};

/// Which representation the encoder emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One 8-bit group per input byte
    #[default]
    Plain,
    /// One 7-bit payload group per byte plus a parallel key bit
    Split,
}
