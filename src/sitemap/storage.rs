//! Output targets for rendered sitemaps.

use std::{fs, io, path::Path};

/// Write a byte buffer to a named target, replacing what was there.
///
/// Implementations do not create parent directories.
pub trait Storage {
    fn write(&self, target: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Local filesystem storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn write(&self, target: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::write(target, bytes)
    }
}
