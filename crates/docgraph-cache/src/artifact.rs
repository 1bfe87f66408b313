//! The artifact cache.

use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::mtime::{FsModTime, ModTimeSource};

/// Artifacts built from one file.
///
/// `P` is the checked program handle, `S` the parsed source and `C` the
/// compiler options. Each slot is filled independently by
/// [`ArtifactCache::set`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedArtifact<P, S, C> {
    /// Modification time of the file when the artifacts were built.
    pub modified: Option<SystemTime>,
    pub program: Option<P>,
    pub source: Option<S>,
    pub options: Option<C>,
}

impl<P, S, C> CachedArtifact<P, S, C> {
    fn stamped(modified: Option<SystemTime>) -> Self {
        Self {
            modified,
            program: None,
            source: None,
            options: None,
        }
    }

    fn merge(&mut self, update: ArtifactUpdate<P, S, C>) {
        if let Some(modified) = update.modified {
            self.modified = Some(modified);
        }
        if let Some(program) = update.program {
            self.program = Some(program);
        }
        if let Some(source) = update.source {
            self.source = Some(source);
        }
        if let Some(options) = update.options {
            self.options = Some(options);
        }
    }
}

/// A partial update. Only the `Some` fields overwrite the stored entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactUpdate<P, S, C> {
    pub modified: Option<SystemTime>,
    pub program: Option<P>,
    pub source: Option<S>,
    pub options: Option<C>,
}

impl<P, S, C> Default for ArtifactUpdate<P, S, C> {
    fn default() -> Self {
        Self {
            modified: None,
            program: None,
            source: None,
            options: None,
        }
    }
}

impl<P, S, C> ArtifactUpdate<P, S, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn program(mut self, program: P) -> Self {
        self.program = Some(program);
        self
    }

    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    pub fn options(mut self, options: C) -> Self {
        self.options = Some(options);
        self
    }
}

/// Lookup counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    /// No entry for the path.
    pub misses: u64,
    /// An entry exists but its timestamp no longer matches the file.
    pub stale: u64,
    pub evictions: u64,
}

/// Path to most-recent artifacts, valid while the modification time matches.
pub struct ArtifactCache<P, S, C, M = FsModTime> {
    entries: FxHashMap<PathBuf, CachedArtifact<P, S, C>>,
    clock: M,
    stats: CacheStats,
}

impl<P, S, C> ArtifactCache<P, S, C, FsModTime> {
    pub fn new() -> Self {
        Self::with_clock(FsModTime)
    }
}

impl<P, S, C> Default for ArtifactCache<P, S, C, FsModTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S, C, M: ModTimeSource> ArtifactCache<P, S, C, M> {
    pub fn with_clock(clock: M) -> Self {
        Self {
            entries: FxHashMap::default(),
            clock,
            stats: CacheStats::default(),
        }
    }

    /// The entry for `path`, if its stored timestamp equals the file's
    /// current one.
    ///
    /// A stale entry is kept until the next [`set`](Self::set) replaces it.
    pub fn get(&mut self, path: impl AsRef<Path>) -> Option<&CachedArtifact<P, S, C>> {
        let path = path.as_ref();
        let Some(entry) = self.entries.get(path) else {
            self.stats.misses += 1;
            debug!(path = %path.display(), "artifact cache miss");
            return None;
        };

        let current = self.clock.modified(path);
        if entry.modified.is_some() && entry.modified == current {
            self.stats.hits += 1;
            debug!(path = %path.display(), "artifact cache hit");
            Some(entry)
        } else {
            self.stats.stale += 1;
            debug!(
                path = %path.display(),
                stored = ?entry.modified,
                ?current,
                "artifact cache stale"
            );
            None
        }
    }

    /// Merge `update` into the entry for `path`, creating it if needed.
    ///
    /// The update is stamped with its explicit timestamp, or else the file's
    /// current modification time. An existing entry with a different stamp
    /// was built from another version of the file and is replaced rather
    /// than merged.
    pub fn set(&mut self, path: impl Into<PathBuf>, update: ArtifactUpdate<P, S, C>) {
        let path = path.into();
        let modified = update.modified.or_else(|| self.clock.modified(&path));
        let entry = match self.entries.entry(path) {
            Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                if entry.modified != modified {
                    debug!(
                        stored = ?entry.modified,
                        ?modified,
                        "artifact cache replaced stale entry"
                    );
                    *entry = CachedArtifact::stamped(modified);
                }
                entry
            }
            Entry::Vacant(vacant) => vacant.insert(CachedArtifact::stamped(modified)),
        };
        entry.merge(update);
    }

    /// Evict the entry for `path`.
    pub fn delete(&mut self, path: impl AsRef<Path>) -> Option<CachedArtifact<P, S, C>> {
        let path = path.as_ref();
        let removed = self.entries.remove(path);
        if removed.is_some() {
            self.stats.evictions += 1;
            debug!(path = %path.display(), "artifact cache evict");
        }
        removed
    }

    /// Whether an entry exists for `path`, fresh or not.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.entries.contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        let evicted = self.entries.len() as u64;
        self.entries.clear();
        self.stats.evictions += evicted;
        debug!(evicted, "artifact cache cleared");
    }
}

#[cfg(test)]
#[path = "tests/artifact_tests.rs"]
mod tests;
