//! Centralized limits for the type-graph builder.
//!
//! The builder recurses once per nested type. Real component surfaces stay
//! far below these limits; they exist so that a pathological input aborts
//! the parse with a diagnostic instead of overflowing the stack.

/// Maximum nesting depth of a single `build` call chain.
///
/// Every nested type (member, parameter, element, union member, operand)
/// adds one level. References that hit the registry do not descend, so
/// recursive types never approach this limit on their own.
///
/// ```typescript
/// // Only a deeply nested *anonymous* shape gets close:
/// type Deep = { a: { a: { a: { /* ... 256 levels ... */ } } } };
/// ```
pub const MAX_TYPE_GRAPH_DEPTH: u32 = 256;

/// Smallest depth accepted from configuration.
pub const MIN_TYPE_GRAPH_DEPTH: u32 = 1;

/// Initial capacity of the per-parse types registry.
pub const TYPES_REGISTRY_CAPACITY: usize = 64;

/// Prefix of synthesized names for anonymous referenced types (`<anon:N>`).
pub const ANONYMOUS_NAME_PREFIX: &str = "<anon:";

/// Symbol name the host compiler gives to type literals (`{ a: string }`).
pub const ANONYMOUS_LITERAL_MARKER: &str = "__type";

/// Prefix shared by all internal (non-source) symbol names, e.g. `__object`.
pub const INTERNAL_SYMBOL_PREFIX: &str = "__";

/// Prefix the transpiled component shape uses for bindable props.
pub const BINDABLE_PREFIX: &str = "bind:";

/// Prefix of legacy event names in the component document.
pub const EVENT_PREFIX: &str = "on:";
