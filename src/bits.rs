//! Byte-level bit codec: the pure, stateless leaf of the pipeline.
//!
//! A byte is rendered as an 8-character `0`/`1` string, most significant
//! bit first. The split representation separates the low bit of each byte
//! into a key bit, leaving a 7-bit payload: `b == (payload << 1) | key`.

/// Width of a plain binary group.
pub const BYTE_WIDTH: usize = 8;
/// Width of a split-mode payload group.
pub const PAYLOAD_WIDTH: usize = 7;
/// Width of a key-stream group.
pub const KEY_WIDTH: usize = 1;

/// Render a byte as its zero-padded 8-bit binary string
pub fn byte_to_bits(byte: u8) -> String {
    format!("{byte:08b}")
}

/// Parse an 8-character binary string back into a byte
/// Returns None unless the string is exactly 8 chars of '0'/'1'
pub fn bits_to_byte(bits: &str) -> Option<u8> {
    if bits.len() != BYTE_WIDTH {
        return None;
    }
    bits_value(bits)
}

/// Split a byte into its 7-bit payload string and its key bit
pub fn split_byte(byte: u8) -> (String, char) {
    let payload = format!("{:07b}", byte >> 1);
    let key = if byte & 1 == 1 { '1' } else { '0' };
    (payload, key)
}

/// Reassemble a byte from a 7-bit payload string and a key bit
/// Inverse of [`split_byte`]; returns None on malformed input
pub fn join_split(payload: &str, key: char) -> Option<u8> {
    if payload.len() != PAYLOAD_WIDTH {
        return None;
    }
    let high = bits_value(payload)?;
    let low = match key {
        '0' => 0,
        '1' => 1,
        _ => return None,
    };
    Some((high << 1) | low)
}

fn bits_value(bits: &str) -> Option<u8> {
    let mut value: u8 = 0;
    for c in bits.chars() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            _ => return None,
        };
        value = (value << 1) | bit;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_bits() {
        assert_eq!(byte_to_bits(0x41), "01000001");
        assert_eq!(byte_to_bits(0x00), "00000000");
        assert_eq!(byte_to_bits(0xFF), "11111111");
    }

    #[test]
    fn test_bits_to_byte() {
        assert_eq!(bits_to_byte("01000001"), Some(0x41));
        assert_eq!(bits_to_byte("00000000"), Some(0x00));
        assert_eq!(bits_to_byte("11111111"), Some(0xFF));
    }

    #[test]
    fn test_bits_to_byte_rejects_malformed() {
        assert_eq!(bits_to_byte(""), None);
        assert_eq!(bits_to_byte("0100000"), None); // too short
        assert_eq!(bits_to_byte("010000011"), None); // too long
        assert_eq!(bits_to_byte("0100x001"), None); // bad character
    }

    #[test]
    fn test_split_byte_example() {
        // 0x41 = 01000001: payload is the high 7 bits, key is the low bit
        let (payload, key) = split_byte(0x41);
        assert_eq!(payload, "0100000");
        assert_eq!(key, '1');
        assert_eq!(join_split(&payload, key), Some(0x41));
    }

    #[test]
    fn test_join_split_rejects_malformed() {
        assert_eq!(join_split("010000", '1'), None); // too short
        assert_eq!(join_split("01000000", '1'), None); // too long
        assert_eq!(join_split("0100000", 'x'), None); // bad key bit
        assert_eq!(join_split("01000x0", '1'), None); // bad payload
    }

    #[test]
    fn test_split_join_bijection_all_bytes() {
        for b in 0..=255u8 {
            let (payload, key) = split_byte(b);
            assert_eq!(payload.len(), PAYLOAD_WIDTH);
            assert_eq!(join_split(&payload, key), Some(b));
        }
    }

    #[test]
    fn test_bits_roundtrip_all_bytes() {
        for b in 0..=255u8 {
            assert_eq!(bits_to_byte(&byte_to_bits(b)), Some(b));
        }
    }
}
