//! # org-chart
//!
//! Data model for organizational hierarchies.
//!
//! This crate provides:
//! - **EmployeeRecord**: one row of an org chart (id, manager, name, designation)
//! - **Dataset**: an ordered, read-only collection of records
//!
//! Loading records from files lives in `org-chart-loader`; computing who can
//! see what lives in `org-chart-resolver`.
//!
//! ## Usage
//!
//! ```rust
//! use org_chart::{Dataset, EmployeeRecord};
//!
//! let dataset: Dataset = vec![
//!     EmployeeRecord::top_level(10, "Ashley Davis", "plant manager (fabrication)"),
//!     EmployeeRecord::new(30, Some(10), "Abigayle Heathcote", "foreman(fabrication)"),
//! ]
//! .into();
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.get(30).unwrap().manager_id(), Some(10));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod dataset;
mod error;
mod record;

pub use dataset::Dataset;
pub use error::{ModelError, ModelResult};
pub use record::EmployeeRecord;

/// Employee identifier (64-bit signed integer).
pub type EmployeeId = i64;
