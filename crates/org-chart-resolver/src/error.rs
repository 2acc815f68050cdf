//! Error types for subordinate resolution.

use org_chart::EmployeeId;
use thiserror::Error;

/// Errors that can occur while resolving a subordinate closure.
///
/// An unknown employee id is not an error: it resolves to a closure
/// containing only itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// The manager relation reachable from `root` loops back on itself.
    #[error("management cycle reachable from employee {root}: {employee_id} is its own indirect manager")]
    CycleDetected {
        /// Employee the query started from.
        root: EmployeeId,
        /// Employee reached again while already on the reporting chain.
        employee_id: EmployeeId,
    },

    /// The hierarchy below `root` is deeper than the configured limit.
    #[error("hierarchy below employee {root} exceeds depth limit {limit}")]
    DepthLimitExceeded {
        /// Employee the query started from.
        root: EmployeeId,
        /// Configured limit.
        limit: usize,
    },

    /// The closure grew past the configured result limit.
    #[error("result set too large: {count} exceeds limit {limit}")]
    ResultTooLarge {
        /// Number of ids collected when the limit tripped.
        count: usize,
        /// Configured limit.
        limit: usize,
    },
}

/// Result type for resolver operations.
pub type ResolverResult<T> = std::result::Result<T, ResolverError>;
