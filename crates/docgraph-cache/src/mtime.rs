//! Modification-time queries.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Source of "last modified" timestamps.
///
/// `None` means the timestamp cannot be determined (missing file,
/// unsupported platform); a cache entry is never fresh against `None`.
pub trait ModTimeSource {
    fn modified(&self, path: &Path) -> Option<SystemTime>;
}

/// Reads timestamps from file system metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsModTime;

impl ModTimeSource for FsModTime {
    fn modified(&self, path: &Path) -> Option<SystemTime> {
        fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }
}

impl<F> ModTimeSource for F
where
    F: Fn(&Path) -> Option<SystemTime>,
{
    fn modified(&self, path: &Path) -> Option<SystemTime> {
        self(path)
    }
}
