//! # org-chart-loader
//!
//! Loads org-chart [`Dataset`]s from CSV.
//!
//! The expected layout is one header row followed by rows with four columns,
//! in this order:
//!
//! | Column | Type | Notes |
//! |--------|------|-------|
//! | `id` | integer | required |
//! | `manager_id` | integer | empty for top-level employees |
//! | `name` | string | passed through |
//! | `designation` | string | passed through |
//!
//! Columns are matched by position, so the header text is ignored.
//!
//! ## Quick Start
//!
//! ```ignore
//! use org_chart_loader::DatasetLoader;
//!
//! let dataset = DatasetLoader::new().load_path("org_data.csv")?;
//! println!("Loaded {} employees", dataset.len());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod loader;

pub use config::{LoaderConfig, LoaderConfigBuilder};
pub use error::{LoadError, LoadResult};
pub use loader::DatasetLoader;

pub use org_chart::{Dataset, EmployeeId, EmployeeRecord, ModelError};
