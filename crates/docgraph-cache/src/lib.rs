//! Artifact cache keyed by file path.
//!
//! Holds the most recently built artifacts of a file (checked program,
//! parsed source, compiler options) and hands them back only while the
//! file's modification time is unchanged. One entry per path, no other
//! expiry. The cache is owned by a single parse driver and needs no locking.

pub mod artifact;
pub mod mtime;

pub use artifact::{ArtifactCache, ArtifactUpdate, CacheStats, CachedArtifact};
pub use mtime::{FsModTime, ModTimeSource};
