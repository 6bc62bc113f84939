//! Error types for the Trellis layout engine.
//!
//! Malformed layout hints are never errors; they are normalized to safe
//! defaults so a layout pass always completes. Errors are reserved for API
//! misuse on the lower-level entry points.

use thiserror::Error;

/// Errors during layout computation.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("expected {expected} preferred sizes (one per placement), got {got}")]
    ItemCountMismatch { expected: usize, got: usize },
}
