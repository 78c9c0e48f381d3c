use crate::error::Result;
use crate::files::write_output;
use crate::report::ErrorLog;
use crate::stream::decrypt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Rebuild the original bytes from a payload file and its key file.
/// Returns the number of bytes written and the accumulated error log.
pub fn decrypt_file(
    payload_path: &Path,
    key_path: &Path,
    output_path: &Path,
) -> Result<(u64, ErrorLog)> {
    let payload = BufReader::new(File::open(payload_path)?);
    let key = BufReader::new(File::open(key_path)?);
    let outcome = decrypt(payload, key)?;
    write_output(output_path, &outcome.bytes)?;
    Ok((outcome.bytes.len() as u64, outcome.log))
}
