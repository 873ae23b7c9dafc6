//! Moving documents into the validated and invalid areas.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::MovementError;

/// Move `source` into the `area` directory, keeping its base name.
///
/// An existing file with the same name in `area` is replaced. The area must
/// already exist. Returns the new path of the file.
pub fn relocate(source: &Path, area: &Path) -> Result<PathBuf, MovementError> {
    let movement_error = |source_err: io::Error| MovementError {
        file: source.to_path_buf(),
        destination: area.to_path_buf(),
        source: source_err,
    };

    let file_name = source.file_name().ok_or_else(|| {
        movement_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;

    if !area.is_dir() {
        return Err(movement_error(io::Error::new(
            io::ErrorKind::NotFound,
            "destination area does not exist",
        )));
    }

    let target = area.join(file_name);
    if target.exists() {
        warn!("Replacing existing file {}", target.display());
    }

    match fs::rename(source, &target) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(
                "Rename across devices, copying {} to {}",
                source.display(),
                target.display()
            );
            fs::copy(source, &target).map_err(movement_error)?;
            fs::remove_file(source).map_err(movement_error)?;
        }
        Err(e) => return Err(movement_error(e)),
    }

    Ok(target)
}
