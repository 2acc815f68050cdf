//! Precomputed manager → direct reports lookup.
//!
//! Walking a [`Dataset`] directly costs a full scan per employee visited.
//! [`HierarchyIndex`] pays that cost once per dataset and answers each
//! `direct_reports` lookup from a map afterwards.
//!
//! # Example
//!
//! ```rust
//! use org_chart::{Dataset, EmployeeRecord};
//! use org_chart_resolver::{HierarchyIndex, SubordinateResolver};
//!
//! let dataset: Dataset = vec![
//!     EmployeeRecord::top_level(10, "Ashley Davis", "plant manager"),
//!     EmployeeRecord::new(30, Some(10), "Abigayle Heathcote", "foreman"),
//! ]
//! .into();
//!
//! let index = HierarchyIndex::build(&dataset);
//! assert_eq!(index.direct_reports(10), &[30]);
//!
//! let closure = SubordinateResolver::new(&index).resolve(10).unwrap();
//! assert_eq!(closure.ids(), &[10, 30]);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Instant;

use org_chart::{Dataset, EmployeeId};
use tracing::info;

use crate::traits::OrgQueryable;

/// Direct-report map built from a dataset.
///
/// Reports are stored in dataset order. A record whose id repeats is listed
/// under its manager once per record, exactly as a scan would see it.
pub struct HierarchyIndex {
    /// Direct reports per manager id.
    reports: HashMap<EmployeeId, Vec<EmployeeId>>,
    /// Manager of each employee (first record wins for repeated ids).
    managers: HashMap<EmployeeId, EmployeeId>,
    /// Employees without a manager, in dataset order.
    top_level: Vec<EmployeeId>,
    /// Every distinct id.
    employees: HashSet<EmployeeId>,
    stats: IndexStats,
}

impl HierarchyIndex {
    /// Builds the index with one pass over the dataset.
    pub fn build(dataset: &Dataset) -> Self {
        let start = Instant::now();

        let mut reports: HashMap<EmployeeId, Vec<EmployeeId>> = HashMap::new();
        let mut managers = HashMap::with_capacity(dataset.len());
        let mut top_level = Vec::new();
        let mut employees = HashSet::with_capacity(dataset.len());
        let mut reporting_edges = 0;

        for record in dataset {
            let id = record.id();
            let first_occurrence = employees.insert(id);

            match record.manager_id() {
                Some(manager_id) => {
                    reports.entry(manager_id).or_default().push(id);
                    if first_occurrence {
                        managers.insert(id, manager_id);
                    }
                    reporting_edges += 1;
                }
                None => top_level.push(id),
            }
        }

        let stats = IndexStats {
            record_count: dataset.len(),
            employee_count: employees.len(),
            reporting_edges,
            top_level_count: top_level.len(),
            build_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            employees = stats.employee_count,
            edges = stats.reporting_edges,
            "built hierarchy index"
        );

        Self {
            reports,
            managers,
            top_level,
            employees,
            stats,
        }
    }

    /// Gets direct reports of an employee.
    #[inline]
    pub fn direct_reports(&self, manager_id: EmployeeId) -> &[EmployeeId] {
        self.reports
            .get(&manager_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Gets the direct manager of an employee.
    #[inline]
    pub fn manager_of(&self, employee_id: EmployeeId) -> Option<EmployeeId> {
        self.managers.get(&employee_id).copied()
    }

    /// Employees without a manager, in dataset order.
    pub fn top_level(&self) -> &[EmployeeId] {
        &self.top_level
    }

    /// Returns true if the id appears in the dataset.
    #[inline]
    pub fn has_employee(&self, employee_id: EmployeeId) -> bool {
        self.employees.contains(&employee_id)
    }

    /// Returns the number of distinct employee ids.
    #[inline]
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Returns build statistics.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

impl OrgQueryable for HierarchyIndex {
    fn direct_reports(&self, manager_id: EmployeeId) -> Vec<EmployeeId> {
        HierarchyIndex::direct_reports(self, manager_id).to_vec()
    }
}

/// Statistics about an index build.
#[derive(Debug, Clone)]
pub struct IndexStats {
    /// Number of records read.
    pub record_count: usize,
    /// Number of distinct employee ids.
    pub employee_count: usize,
    /// Number of records that name a manager.
    pub reporting_edges: usize,
    /// Number of records without a manager.
    pub top_level_count: usize,
    /// Time taken to build the index in milliseconds.
    pub build_time_ms: u64,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hierarchy Index Statistics:")?;
        writeln!(f, "  Records:         {}", self.record_count)?;
        writeln!(f, "  Employees:       {}", self.employee_count)?;
        writeln!(f, "  Reporting edges: {}", self.reporting_edges)?;
        writeln!(f, "  Top level:       {}", self.top_level_count)?;
        writeln!(f, "  Build time:      {}ms", self.build_time_ms)?;
        Ok(())
    }
}
