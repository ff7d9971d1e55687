//! Error types for the slat layout engine.

use thiserror::Error;

/// Errors raised by layout builder mutation and configuration calls.
///
/// Compilation itself never fails: degenerate or negative resolved sizes are a
/// documented numeric edge case, not an error condition. Every fallible call
/// validates its arguments before touching the child sequence, so a returned
/// error guarantees the builder is unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("child index {index} out of range for layout with {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unsupported layout feature: {feature}")]
    UnsupportedFeature { feature: &'static str },
}
