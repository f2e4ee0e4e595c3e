use altvendor_core::{Dataset, Error, Result};
use std::path::Path;
use std::time::SystemTime;
use tracing::warn;

/// A dataset read from disk, with the file's modification time
#[derive(Debug)]
pub struct LoadedFile {
    pub dataset: Dataset,
    /// `None` when the file does not exist
    pub modified: Option<SystemTime>,
}

/// Read a dataset document from `path`.
///
/// A missing file yields an empty dataset. An unreadable or malformed file
/// is an error.
pub fn load_dataset(path: &Path) -> Result<LoadedFile> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "dataset file not found, serving an empty dataset");
            return Ok(LoadedFile {
                dataset: Dataset::new(),
                modified: None,
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_file() {
        return Err(Error::InvalidConfig(format!(
            "dataset path is not a file: {}",
            path.display()
        )));
    }

    let data = std::fs::read(path)?;
    let dataset = Dataset::from_slice(&data)?;

    Ok(LoadedFile {
        dataset,
        modified: metadata.modified().ok(),
    })
}

/// Modification time of `path`, `None` if it does not exist or the
/// platform does not report one
pub fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
