//! Serializes a password batch and saves it to disk.
//!
//! Each entry is the password, a newline, then the mask line. Entries are
//! separated by one blank line and the document has no trailing newline.

use std::fs::{self, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tempfile::{Builder, NamedTempFile};

use crate::generator::Password;

pub const MASK_LINE: &str = "********************";

const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, thiserror::Error)]
#[error("Could not save '{}': {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

pub fn render(batch: &[Password]) -> String {
    batch
        .iter()
        .map(|password| format!("{}\n{}", password, MASK_LINE))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Writes the rendered batch to `path`, creating or truncating it.
///
/// The document goes to a temporary file next to the destination first and
/// is then renamed into place, so a failed write never leaves a partial file
/// behind. A symlinked destination is followed and the link is kept. An
/// existing file keeps its permissions. When the directory does not let us
/// create the temporary file but the destination itself is writable, it is
/// truncated and written in place.
pub fn write(batch: &[Password], path: &Path) -> Result<(), WriteError> {
    let document = render(batch);
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let existing = fs::metadata(&target)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on an early return removes it.
    let mut file = match temp_file_in(dir, existing.as_ref()) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::PermissionDenied && existing.is_some() => {
            tracing::debug!(path = %target.display(), "directory not writable, writing in place");
            fs::write(&target, document.as_bytes()).map_err(wrap)?;
            return Ok(());
        }
        Err(err) => return Err(wrap(err)),
    };
    file.write_all(document.as_bytes()).map_err(wrap)?;
    file.as_file().sync_all().map_err(wrap)?;
    file.persist(&target).map_err(|e| wrap(e.error))?;

    tracing::debug!(path = %target.display(), bytes = document.len(), "wrote password file");
    Ok(())
}

/// New files get the usual umask-filtered mode instead of owner-only.
fn temp_file_in(dir: &Path, existing: Option<&Permissions>) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".passgen");

    match existing {
        Some(permissions) => {
            let file = builder.tempfile_in(dir)?;
            file.as_file().set_permissions(permissions.clone())?;
            Ok(file)
        }
        None => {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                builder.permissions(Permissions::from_mode(0o666));
            }
            builder.tempfile_in(dir)
        }
    }
}

pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("PASS_{}.{}", now.format("%Y-%m-%d-%H-%M-%S"), DEFAULT_EXTENSION)
}

/// Where a save dialog would start: documents, then home, then the working directory.
pub fn default_save_path(now: DateTime<Local>) -> PathBuf {
    let dir = dirs::document_dir()
        .or_else(dirs::home_dir)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    dir.join(default_file_name(now))
}

/// Turns a user-chosen destination into the file to write.
///
/// A directory (existing, or spelled with a trailing separator) gets the
/// default file name inside it. A file name without an extension gets `.txt`.
pub fn resolve_destination(path: PathBuf, now: DateTime<Local>) -> PathBuf {
    let names_directory = path
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(std::path::is_separator);

    if names_directory || path.is_dir() {
        path.join(default_file_name(now))
    } else if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
