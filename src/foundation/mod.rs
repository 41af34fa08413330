//! Shared value types, errors and integer helpers.

/// Pixels, disposal, loop counts and bounds.
pub mod core;
/// Error type used across the crate.
pub mod error;
/// Wrapping arithmetic and fixed-point helpers.
pub mod math;
