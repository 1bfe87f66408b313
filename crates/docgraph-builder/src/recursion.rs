//! Depth guard for the recursive builder.

/// Depth-only guard against stack exhaustion.
///
/// The registry already breaks cycles through named types, so the guard only
/// needs to bound nesting; it does not track which types are being visited.
///
/// ```ignore
/// if !counter.enter() {
///     return Err(BuildError::DepthExceeded { .. });
/// }
/// let result = recurse();
/// counter.leave();
/// ```
#[derive(Debug)]
pub struct DepthCounter {
    depth: u32,
    max_depth: u32,
    exceeded: bool,
}

impl DepthCounter {
    pub fn new(max_depth: u32) -> Self {
        Self {
            depth: 0,
            max_depth,
            exceeded: false,
        }
    }

    /// Try to enter a deeper level.
    ///
    /// Returns `false` once `max_depth` is reached; the depth is then not
    /// incremented and `leave` must not be called.
    #[inline]
    pub fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return false;
        }
        self.depth += 1;
        true
    }

    /// Leave the current level. Must follow every successful `enter`.
    #[inline]
    pub fn leave(&mut self) {
        debug_assert!(
            self.depth > 0,
            "DepthCounter::leave() called at depth 0 without a matching enter()"
        );
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Sticky: stays `true` once the limit has been hit.
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }
}

#[cfg(debug_assertions)]
impl Drop for DepthCounter {
    fn drop(&mut self) {
        if !std::thread::panicking() && self.depth > 0 {
            panic!(
                "DepthCounter dropped at depth {}: enter() without matching leave()",
                self.depth
            );
        }
    }
}
