//! Common types and utilities shared by the docgraph crates.
//!
//! - Centralized recursion and capacity limits
//! - Stable error identifiers that downstream tooling can link to

// Centralized limits and thresholds
pub mod limits;

// Stable error identifiers
pub mod diagnostics;
pub use diagnostics::ErrorCode;
