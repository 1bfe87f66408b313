//! Type graph construction.
//!
//! - [`TypeGraph`]: per-parse context, `build(type) -> TypeOrRef`
//! - [`ReferenceNamer`]: stable registry names, memoized per type handle
//! - union normalization: nullable re-assembly and boolean recombination
//! - [`extract_component`]: props, exports, events and slots of a component
//!
//! One `TypeGraph` serves exactly one parse. Nothing is shared between
//! parses, so different components can be extracted on different threads.

pub mod builder;
pub mod error;
pub mod extract;
pub mod namer;
pub mod options;
pub mod recursion;
pub mod union;

pub use builder::TypeGraph;
pub use error::BuildError;
pub use extract::{ComponentShape, extract_component};
pub use namer::ReferenceNamer;
pub use options::BuildOptions;
pub use recursion::DepthCounter;
