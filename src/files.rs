//! Output-path helpers shared by the CLI operations.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{BincryptError, Result};

/// Default output path: the full input file name with `.extension`
/// appended (`photo.png` becomes `photo.png.bin`)
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let mut os: OsString = input.as_os_str().to_os_string();
    os.push(".");
    os.push(extension);
    PathBuf::from(os)
}

/// Write `content` to `path`, creating parent directories as needed
pub fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)?;
    Ok(())
}

/// Open `path` for writing, creating parent directories as needed
pub fn create_sink(path: &Path) -> Result<File> {
    ensure_parent(path)?;
    Ok(File::create(path)?)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(BincryptError::EmptyOutputPath);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
