use docgraph_common::limits;

/// Knobs of one parse call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Maximum nesting depth of `build`.
    pub max_depth: u32,
    /// Prefix stripped from bindable prop names of the transpiled shape.
    pub bindable_prefix: String,
    /// Prefix added to legacy event names.
    pub event_prefix: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: limits::MAX_TYPE_GRAPH_DEPTH,
            bindable_prefix: limits::BINDABLE_PREFIX.to_string(),
            event_prefix: limits::EVENT_PREFIX.to_string(),
        }
    }
}

impl BuildOptions {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}
