//! Planner error types

use crate::storage::StoreError;
use thiserror::Error;

/// Errors that can occur while running a planner operation.
///
/// Search failures never show up here; they become messages in the search
/// results view instead.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Saved state couldn't be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
