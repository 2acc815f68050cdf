//! # org-chart-resolver
//!
//! Computes what each employee in an org chart is allowed to see: their own
//! record plus the records of everyone who reports to them, directly or
//! indirectly.
//!
//! ## Quick Start
//!
//! ```ignore
//! use org_chart_loader::DatasetLoader;
//! use org_chart_resolver::{filter_visible_records, resolve_subordinates};
//!
//! let dataset = DatasetLoader::new().load_path("org_data.csv")?;
//!
//! // Ids in the subordinate closure, depth first
//! assert_eq!(resolve_subordinates(40, &dataset)?, vec![40, 60, 90, 100]);
//!
//! // Visible records, in file order
//! for record in filter_visible_records(10, &dataset)? {
//!     println!("{} - {}", record.name(), record.designation());
//! }
//! ```
//!
//! ## With an Index and Configuration
//!
//! ```ignore
//! use org_chart_resolver::{CyclePolicy, HierarchyIndex, ReportSubsetFilter, ResolverConfig};
//!
//! // Build once per dataset; lookups no longer scan every record.
//! let index = HierarchyIndex::build(&dataset);
//!
//! let config = ResolverConfig::builder()
//!     .with_cycle_policy(CyclePolicy::Skip)
//!     .with_max_depth(64)
//!     .build();
//!
//! let filter = ReportSubsetFilter::with_config(&dataset, &index, config);
//! let subset = filter.visible_records(10)?;
//! println!("{} visible records", subset.len());
//! ```
//!
//! ## Malformed Hierarchies
//!
//! | Input | Default behavior | Configurable |
//! |-------|------------------|--------------|
//! | Unknown employee id | Closure `[id]`, empty subset | No |
//! | Management cycle | `ResolverError::CycleDetected` | `CyclePolicy::Skip` |
//! | Repeated employee id | Repeated in the closure | `DuplicatePolicy::Dedupe` |
//!
//! ## Feature Flags
//!
//! - `parallel` - Runs batch queries on the rayon thread pool
//! - `serde` - Enables serde support on the re-exported model types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    org-chart-resolver                        │
//! │                                                              │
//! │  ReportSubsetFilter                                          │
//! │  ├── SubordinateResolver → SubordinateClosure (ids)         │
//! │  │   └── walks reports via OrgQueryable                     │
//! │  │       ├── Dataset        (linear scan per lookup)        │
//! │  │       └── HierarchyIndex (map built once per dataset)    │
//! │  └── keeps dataset records whose id is in the closure       │
//! │                                                              │
//! │  Dependencies:                                               │
//! │  └── org-chart - EmployeeId, EmployeeRecord, Dataset        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod filter;
mod index;
mod resolver;
mod result;
mod traits;

// Public re-exports
pub use config::{CyclePolicy, DuplicatePolicy, ResolverConfig, ResolverConfigBuilder};
pub use error::{ResolverError, ResolverResult};
pub use filter::{filter_visible_records, ReportSubset, ReportSubsetFilter};
pub use index::{HierarchyIndex, IndexStats};
pub use resolver::{resolve_subordinates, SubordinateResolver};
pub use result::{SubordinateClosure, TraversalStats};
pub use traits::OrgQueryable;

// Re-export commonly used types from dependencies for convenience
pub use org_chart::{Dataset, EmployeeId, EmployeeRecord};
