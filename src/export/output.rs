use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::SensorgenError;

/// Writes `bytes` to `dir/file_name`, creating `dir` if needed.
///
/// The bytes land in a temporary sibling first and are renamed into place,
/// so a failed write never leaves a truncated file at the final path.
pub fn write_output(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SensorgenError> {
    fs::create_dir_all(dir).map_err(|source| SensorgenError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let tmp_path = dir.join(format!("{file_name}.{}.tmp", std::process::id()));

    if let Err(source) = fs::write(&tmp_path, bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SensorgenError::Io {
            path: tmp_path,
            source,
        });
    }
    if let Err(source) = fs::rename(&tmp_path, &path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SensorgenError::Io { path, source });
    }

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
