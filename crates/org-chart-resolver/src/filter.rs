//! Projection of a subordinate closure back onto the dataset.

use std::collections::HashSet;

use org_chart::{Dataset, EmployeeId, EmployeeRecord};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::ResolverResult;
use crate::resolver::SubordinateResolver;
use crate::result::SubordinateClosure;
use crate::traits::OrgQueryable;

/// Records visible to one employee, in dataset order.
#[derive(Debug, Clone)]
pub struct ReportSubset<'a> {
    records: Vec<&'a EmployeeRecord>,
    closure: SubordinateClosure,
}

impl<'a> ReportSubset<'a> {
    /// The employee the subset was computed for.
    pub fn employee_id(&self) -> EmployeeId {
        self.closure.root()
    }

    /// Visible records, in dataset order.
    pub fn records(&self) -> &[&'a EmployeeRecord] {
        &self.records
    }

    /// The closure the records were selected with.
    pub fn closure(&self) -> &SubordinateClosure {
        &self.closure
    }

    /// Returns the number of visible records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record is visible (the employee is not in the dataset).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over visible records.
    pub fn iter(&self) -> impl Iterator<Item = &'a EmployeeRecord> + '_ {
        self.records.iter().copied()
    }

    /// Consumes the subset and returns the records.
    pub fn into_records(self) -> Vec<&'a EmployeeRecord> {
        self.records
    }
}

/// Selects the records an employee is allowed to see.
///
/// The closure is resolved through the configured store, then the dataset
/// is scanned once and every record whose id is in the closure is kept.
/// Results follow dataset order, not hierarchy order.
///
/// # Example
///
/// ```rust
/// use org_chart::{Dataset, EmployeeRecord};
/// use org_chart_resolver::{HierarchyIndex, ReportSubsetFilter, ResolverConfig};
///
/// let dataset: Dataset = vec![
///     EmployeeRecord::new(60, Some(40), "Alexis Becker", "foreman(assembly)"),
///     EmployeeRecord::top_level(40, "Ayana Greenfelder MD", "plant manager(assembly)"),
///     EmployeeRecord::top_level(20, "Bob Smith", "marketing manager"),
/// ]
/// .into();
///
/// let index = HierarchyIndex::build(&dataset);
/// let filter = ReportSubsetFilter::with_config(&dataset, &index, ResolverConfig::default());
///
/// let subset = filter.visible_records(40).unwrap();
/// let ids: Vec<i64> = subset.iter().map(|r| r.id()).collect();
/// assert_eq!(ids, vec![60, 40]);
/// ```
pub struct ReportSubsetFilter<'a> {
    dataset: &'a Dataset,
    resolver: SubordinateResolver<'a>,
}

impl<'a> ReportSubsetFilter<'a> {
    /// Creates a filter that resolves closures by scanning the dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_config(dataset, dataset, ResolverConfig::default())
    }

    /// Creates a filter that resolves closures through `store`.
    ///
    /// `store` must describe the same records as `dataset`, typically a
    /// [`HierarchyIndex`](crate::HierarchyIndex) built from it.
    pub fn with_store(dataset: &'a Dataset, store: &'a dyn OrgQueryable) -> Self {
        Self::with_config(dataset, store, ResolverConfig::default())
    }

    /// Creates a filter with a custom store and configuration.
    pub fn with_config(
        dataset: &'a Dataset,
        store: &'a dyn OrgQueryable,
        config: ResolverConfig,
    ) -> Self {
        Self {
            dataset,
            resolver: SubordinateResolver::with_config(store, config),
        }
    }

    /// Returns the resolver used for closures.
    pub fn resolver(&self) -> &SubordinateResolver<'a> {
        &self.resolver
    }

    /// Returns the records visible to `employee_id`.
    ///
    /// An unknown employee yields an empty subset, not an error.
    pub fn visible_records(&self, employee_id: EmployeeId) -> ResolverResult<ReportSubset<'a>> {
        let closure = self.resolver.resolve(employee_id)?;
        let members: HashSet<EmployeeId> = closure.to_set();

        let records: Vec<&'a EmployeeRecord> = self
            .dataset
            .iter()
            .filter(|record| members.contains(&record.id()))
            .collect();

        debug!(
            employee_id,
            visible = records.len(),
            "filtered visible records"
        );

        Ok(ReportSubset { records, closure })
    }

    /// Runs [`visible_records`](Self::visible_records) for several employees.
    ///
    /// Results are returned in input order; one failing query does not
    /// affect the others. With the `parallel` feature the queries run on
    /// the rayon thread pool.
    pub fn visible_records_batch(
        &self,
        employee_ids: &[EmployeeId],
    ) -> Vec<ResolverResult<ReportSubset<'a>>> {
        #[cfg(feature = "parallel")]
        let ids = employee_ids.par_iter();
        #[cfg(not(feature = "parallel"))]
        let ids = employee_ids.iter();

        ids.map(|&id| self.visible_records(id)).collect()
    }
}

/// Returns the records visible to `employee_id`, scanning `dataset` with the
/// default configuration.
///
/// ```rust
/// use org_chart::{Dataset, EmployeeRecord};
/// use org_chart_resolver::filter_visible_records;
///
/// let dataset: Dataset = vec![
///     EmployeeRecord::top_level(20, "Bob Smith", "marketing manager"),
/// ]
/// .into();
///
/// assert_eq!(filter_visible_records(20, &dataset).unwrap().len(), 1);
/// assert!(filter_visible_records(999, &dataset).unwrap().is_empty());
/// ```
pub fn filter_visible_records(
    employee_id: EmployeeId,
    dataset: &Dataset,
) -> ResolverResult<Vec<&EmployeeRecord>> {
    ReportSubsetFilter::new(dataset)
        .visible_records(employee_id)
        .map(ReportSubset::into_records)
}
