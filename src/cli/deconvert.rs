use crate::error::Result;
use crate::files::write_output;
use crate::report::ErrorLog;
use crate::stream::decode;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reconstruct the original bytes from a binary-text file.
/// Returns the number of bytes written and the accumulated error log;
/// content defects are in the log, not in the Result.
pub fn deconvert_file(input_path: &Path, output_path: &Path) -> Result<(u64, ErrorLog)> {
    let source = BufReader::new(File::open(input_path)?);
    let outcome = decode(source)?;
    write_output(output_path, &outcome.bytes)?;
    Ok((outcome.bytes.len() as u64, outcome.log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::convert::{convert_file, ConvertOptions};
    use tempfile::tempdir;

    #[test]
    fn test_deconvert_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let encoded = dir.path().join("encoded.txt");
        let restored = dir.path().join("restored.bin");

        let original: Vec<u8> = (0..=255).collect();
        std::fs::write(&input, &original).unwrap();

        convert_file(&input, &encoded, &ConvertOptions::default()).unwrap();
        let (bytes, log) = deconvert_file(&encoded, &restored).unwrap();

        assert_eq!(bytes, 256);
        assert!(log.is_empty());
        assert_eq!(std::fs::read(&restored).unwrap(), original);
    }

    #[test]
    fn test_deconvert_roundtrip_unspaced() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.bin");
        let encoded = dir.path().join("encoded.txt");
        let restored = dir.path().join("restored.bin");

        std::fs::write(&input, b"no separators here").unwrap();

        let options = ConvertOptions {
            spaced: false,
            ..Default::default()
        };
        convert_file(&input, &encoded, &options).unwrap();
        let (_, log) = deconvert_file(&encoded, &restored).unwrap();

        assert!(log.is_empty());
        assert_eq!(std::fs::read(&restored).unwrap(), b"no separators here");
    }

    #[test]
    fn test_deconvert_reports_defects_but_succeeds() {
        let dir = tempdir().unwrap();
        let encoded = dir.path().join("encoded.txt");
        let restored = dir.path().join("restored.bin");

        std::fs::write(&encoded, "01000001\nnot binary\n01000010\n").unwrap();
        let (bytes, log) = deconvert_file(&encoded, &restored).unwrap();

        assert_eq!(bytes, 2);
        assert_eq!(log.len(), 1);
        assert_eq!(std::fs::read(&restored).unwrap(), b"AB");
    }
}
