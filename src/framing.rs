//! Line framing: groups of fixed-width bit strings joined into one text
//! line per chunk, and the tolerant inverse.
//!
//! The space separator is cosmetic only. Decoding strips every space
//! before partitioning, so spaced and unspaced lines produce identical
//! groups.

use crate::report::Diagnostic;

/// Join bit-string groups into one newline-terminated line
pub fn encode_line(groups: &[String], spaced: bool) -> String {
    let separator = if spaced { " " } else { "" };
    let mut line = groups.join(separator);
    line.push('\n');
    line
}

/// Split a line into fixed-width binary groups.
///
/// A line containing any non-binary character is discarded whole with a
/// single diagnostic. A line whose cleaned length is not a multiple of
/// `width` keeps its full-width prefix groups; the ragged total and the
/// skipped trailing group each get a diagnostic.
pub fn decode_line(line: &str, width: usize, line_no: usize) -> (Vec<String>, Vec<Diagnostic>) {
    debug_assert!(width > 0);

    let trimmed = line.trim_end_matches(['\n', '\r']);
    let cleaned: String = trimmed.chars().filter(|c| *c != ' ').collect();

    if cleaned.chars().any(|c| c != '0' && c != '1') {
        let diagnostic = Diagnostic::InvalidCharacters {
            line: line_no,
            content: trimmed.to_string(),
        };
        return (Vec::new(), vec![diagnostic]);
    }

    let mut diagnostics = Vec::new();
    if cleaned.len() % width != 0 {
        diagnostics.push(Diagnostic::RaggedLine {
            line: line_no,
            length: cleaned.len(),
            width,
        });
    }

    let full = cleaned.len() / width;
    let mut groups = Vec::with_capacity(full);
    for i in 0..full {
        groups.push(cleaned[i * width..(i + 1) * width].to_string());
    }

    let remainder = &cleaned[full * width..];
    if !remainder.is_empty() {
        diagnostics.push(Diagnostic::ShortGroup {
            line: line_no,
            group: remainder.to_string(),
        });
    }

    (groups, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encode_line_spaced() {
        let line = encode_line(&groups(&["01000001", "01000010"]), true);
        assert_eq!(line, "01000001 01000010\n");
    }

    #[test]
    fn test_encode_line_unspaced() {
        let line = encode_line(&groups(&["01000001", "01000010"]), false);
        assert_eq!(line, "0100000101000010\n");
    }

    #[test]
    fn test_decode_line_separator_irrelevant() {
        let spaced = encode_line(&groups(&["01000001", "01000010"]), true);
        let unspaced = encode_line(&groups(&["01000001", "01000010"]), false);

        let (from_spaced, diags_spaced) = decode_line(&spaced, 8, 1);
        let (from_unspaced, diags_unspaced) = decode_line(&unspaced, 8, 1);

        assert_eq!(from_spaced, groups(&["01000001", "01000010"]));
        assert_eq!(from_spaced, from_unspaced);
        assert!(diags_spaced.is_empty());
        assert!(diags_unspaced.is_empty());
    }

    #[test]
    fn test_decode_line_invalid_characters_discard_whole_line() {
        let (parsed, diags) = decode_line("01000001 0100x010\n", 8, 3);
        assert!(parsed.is_empty());
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0],
            Diagnostic::InvalidCharacters {
                line: 3,
                content: "01000001 0100x010".into(),
            }
        );
    }

    #[test]
    fn test_decode_line_ragged_keeps_full_prefix() {
        // 18 chars: two full 8-bit groups plus a 2-bit remainder
        let (parsed, diags) = decode_line("010000010100001011\n", 8, 2);
        assert_eq!(parsed, groups(&["01000001", "01000010"]));
        assert_eq!(diags.len(), 2);
        assert_eq!(
            diags[0],
            Diagnostic::RaggedLine {
                line: 2,
                length: 18,
                width: 8,
            }
        );
        assert_eq!(
            diags[1],
            Diagnostic::ShortGroup {
                line: 2,
                group: "11".into(),
            }
        );
    }

    #[test]
    fn test_decode_line_empty() {
        let (parsed, diags) = decode_line("\n", 8, 1);
        assert!(parsed.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_decode_line_crlf() {
        let (parsed, diags) = decode_line("01000001\r\n", 8, 1);
        assert_eq!(parsed, groups(&["01000001"]));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_decode_line_width_one() {
        let (parsed, diags) = decode_line("101\n", 1, 1);
        assert_eq!(parsed, groups(&["1", "0", "1"]));
        assert!(diags.is_empty());
    }
}
