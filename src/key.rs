//! Identity of a finished document.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Stable key of a component document: a hash of the declaring file's path
/// and source text.
///
/// Two parses of the same text at the same path produce the same key, so
/// hosts can reuse an encoded document until either changes. The hash is
/// not cryptographic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentKey(u64);

impl DocumentKey {
    pub fn compute(path: &str, source: &str) -> Self {
        let mut hasher = FxHasher::default();
        path.hash(&mut hasher);
        source.hash(&mut hasher);
        Self(hasher.finish())
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
