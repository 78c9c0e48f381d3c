//! Line-oriented streaming decoder.
//!
//! Decoding is driven by lines, not by the chunk size used at encode
//! time. Content defects never abort a pass; each one is recorded as a
//! [`Diagnostic`] and the offending unit is skipped.

use std::io::BufRead;

use crate::bits::{bits_to_byte, join_split, BYTE_WIDTH, KEY_WIDTH, PAYLOAD_WIDTH};
use crate::error::Result;
use crate::framing::decode_line;
use crate::report::{Diagnostic, ErrorLog};

/// Reconstructed bytes plus the recoverable defects found along the way
#[derive(Debug, Default)]
pub struct DecodeOutcome {
    pub bytes: Vec<u8>,
    pub log: ErrorLog,
}

/// Decode a binary-text stream (8-bit groups) back into bytes
pub fn decode<R: BufRead>(source: R) -> Result<DecodeOutcome> {
    let mut outcome = DecodeOutcome::default();

    for (index, line) in source.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let (groups, diagnostics) = decode_line(&line, BYTE_WIDTH, line_no);
        outcome.log.extend(diagnostics);

        for group in groups {
            match bits_to_byte(&group) {
                Some(byte) => outcome.bytes.push(byte),
                None => outcome.log.push(Diagnostic::MalformedGroup {
                    line: line_no,
                    group,
                }),
            }
        }
    }

    Ok(outcome)
}

/// Decode a split-payload stream (7-bit groups) using its key stream.
///
/// The whole key stream is materialized up front into one flat bit
/// sequence; the key index is shared across the file, not reset per
/// line. A payload group past the end of the key emits
/// [`Diagnostic::KeyExhausted`] and stops consuming that line only;
/// later lines are still attempted.
pub fn decrypt<R: BufRead, K: BufRead>(payload: R, key: K) -> Result<DecodeOutcome> {
    let mut outcome = DecodeOutcome::default();
    let key_bits = materialize_key(key, &mut outcome.log)?;
    let mut key_index = 0usize;

    for (index, line) in payload.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let (groups, diagnostics) = decode_line(&line, PAYLOAD_WIDTH, line_no);
        outcome.log.extend(diagnostics);

        for group in groups {
            if key_index >= key_bits.len() {
                outcome.log.push(Diagnostic::KeyExhausted { line: line_no });
                break;
            }
            match join_split(&group, key_bits[key_index]) {
                Some(byte) => outcome.bytes.push(byte),
                None => outcome.log.push(Diagnostic::MalformedGroup {
                    line: line_no,
                    group,
                }),
            }
            key_index += 1;
        }
    }

    Ok(outcome)
}

/// Flatten the key stream into one bit sequence, ignoring line breaks.
/// Malformed key lines are reported like any other line defect.
fn materialize_key<K: BufRead>(key: K, log: &mut ErrorLog) -> Result<Vec<char>> {
    let mut bits = Vec::new();

    for (index, line) in key.lines().enumerate() {
        let line = line?;
        let (groups, diagnostics) = decode_line(&line, KEY_WIDTH, index + 1);
        log.extend(diagnostics);
        bits.extend(groups.into_iter().filter_map(|g| g.chars().next()));
    }

    Ok(bits)
}
