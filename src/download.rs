//! Saving bundled resources for the user
//!
//! The `cv` command copies the bundled PDF into the user's download
//! directory. Existing files are never overwritten; a ` (n)` suffix is added
//! to the stem instead, the way browsers name repeated downloads.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::CvConfig;
use crate::error::{Error, Result};

/// Directory downloads go to when none is configured
///
/// Falls back from the platform download directory to the home directory
/// and then the current directory.
pub fn default_download_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    if let Some(home) = dirs::home_dir() {
        debug!("No download directory, using home {}", home.display());
        return Ok(home);
    }
    std::env::current_dir().map_err(|_| Error::NoDownloadDirectory)
}

/// First path in `dir` named `file_name` that does not exist yet
pub fn unique_destination(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let extension = name.extension().map(|e| e.to_string_lossy().into_owned());

    let mut n = 1u32;
    loop {
        let numbered = match &extension {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", stem, n),
        };
        let candidate = dir.join(numbered);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Copy `source` into `dir` as `file_name` and return where it landed
pub fn save_resource(source: &Path, dir: &Path, file_name: &str) -> Result<PathBuf> {
    if !source.is_file() {
        warn!("Resource missing: {}", source.display());
        return Err(Error::ResourceNotFound {
            path: source.to_path_buf(),
        });
    }

    fs::create_dir_all(dir).map_err(|e| Error::DownloadFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let destination = unique_destination(dir, file_name);
    fs::copy(source, &destination).map_err(|e| Error::DownloadFailed {
        path: destination.clone(),
        reason: e.to_string(),
    })?;

    info!("Saved {} to {}", source.display(), destination.display());
    Ok(destination)
}

/// Save the CV as configured
pub fn save_cv(config: &CvConfig) -> Result<PathBuf> {
    let dir = match &config.destination {
        Some(dir) => dir.clone(),
        None => default_download_dir()?,
    };
    save_resource(&config.source, &dir, &config.download_name)
}
