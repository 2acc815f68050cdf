//! Error types for the org-chart data model.

use thiserror::Error;

use crate::EmployeeId;

/// Errors raised when validating employee records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A record names itself as its own manager.
    #[error("employee {0} is listed as their own manager")]
    SelfManaged(EmployeeId),
}

/// Result type for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;
