//! Raw config file I/O.
//!
//! Reading goes through the [`ReadFile`] capability so tests (and embedders)
//! can substitute the byte source without touching the filesystem. Writing is
//! always to disk: truncate, write once, and verify the full buffer landed.
//! Files are created owner-read/write only since they hold tokens.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::ConfigError;

/// Capability for reading a file's raw bytes by path.
pub trait ReadFile {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disk;

impl ReadFile for Disk {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Read the config file through the capability, mapping a missing file to
/// [`ConfigError::DoesNotExist`] so callers can branch on first run.
pub(crate) fn read_config(reader: &dyn ReadFile, path: &Path) -> Result<Vec<u8>, ConfigError> {
    reader.read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::DoesNotExist {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Truncate `path` and write `data` in a single call, mode 0600.
///
/// A write that reports success but lands fewer bytes than given is surfaced
/// as [`ConfigError::ShortWrite`], never ignored.
pub(crate) fn write_config(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let io_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = options.open(path).map_err(io_err)?;
    let n = file.write(data).map_err(io_err)?;
    if n < data.len() {
        return Err(ConfigError::ShortWrite {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
