//! Subordinate closure computation.
//!
//! This module provides [`SubordinateResolver`], which walks the
//! manager → report relation depth-first with an explicit stack.

use std::collections::HashSet;
use std::time::Instant;

use org_chart::EmployeeId;
use tracing::{debug, debug_span, warn};

use crate::config::{CyclePolicy, DuplicatePolicy, ResolverConfig};
use crate::error::{ResolverError, ResolverResult};
use crate::result::{SubordinateClosure, TraversalStats};
use crate::traits::OrgQueryable;

/// Computes the set of employees reachable below a root employee.
///
/// Output order is the root, then for each direct report (in dataset order)
/// that report's whole closure before the next sibling. The walk keeps its
/// own stack, so hierarchy depth never grows the call stack, and it tracks
/// the current reporting chain so a loop in the manager relation is caught
/// instead of walked forever.
///
/// # Example
///
/// ```ignore
/// use org_chart_resolver::SubordinateResolver;
///
/// let resolver = SubordinateResolver::new(&dataset);
///
/// // Everyone visible to employee 40
/// let closure = resolver.resolve(40)?;
/// assert_eq!(closure.ids(), &[40, 60, 90, 100]);
/// ```
pub struct SubordinateResolver<'a> {
    store: &'a dyn OrgQueryable,
    config: ResolverConfig,
}

impl<'a> SubordinateResolver<'a> {
    /// Creates a resolver with default configuration.
    ///
    /// # Arguments
    ///
    /// * `store` - A dataset or index implementing `OrgQueryable`
    pub fn new(store: &'a dyn OrgQueryable) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    /// Creates a resolver with custom configuration.
    pub fn with_config(store: &'a dyn OrgQueryable, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    /// Returns a reference to the resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves the closure rooted at `root`.
    ///
    /// The root is always the first id, whether or not it exists in the
    /// store; an unknown root resolves to `[root]`.
    ///
    /// # Errors
    ///
    /// * [`ResolverError::CycleDetected`] - the root reaches a management
    ///   loop and the cycle policy is `Fail`
    /// * [`ResolverError::DepthLimitExceeded`] - `max_depth` is set and exceeded
    /// * [`ResolverError::ResultTooLarge`] - `max_results` is set and exceeded
    pub fn resolve(&self, root: EmployeeId) -> ResolverResult<SubordinateClosure> {
        let _span = debug_span!("resolve_subordinates", root).entered();
        let start = Instant::now();

        let dedupe = self.config.duplicate_policy == DuplicatePolicy::Dedupe;

        let mut ids = Vec::new();
        let mut emitted = HashSet::new();
        let mut stack: Vec<(EmployeeId, usize)> = vec![(root, 0)];
        // Reporting chain from the root down to the employee being expanded.
        let mut chain: Vec<EmployeeId> = Vec::new();
        let mut on_chain: HashSet<EmployeeId> = HashSet::new();
        let mut skipped = 0;
        let mut deepest = 0;

        while let Some((current, depth)) = stack.pop() {
            while chain.len() > depth {
                if let Some(left) = chain.pop() {
                    on_chain.remove(&left);
                }
            }

            if on_chain.contains(&current) {
                match self.config.cycle_policy {
                    CyclePolicy::Fail => {
                        warn!(root, employee_id = current, "management cycle detected");
                        return Err(ResolverError::CycleDetected {
                            root,
                            employee_id: current,
                        });
                    }
                    CyclePolicy::Skip => {
                        debug!(employee_id = current, "skipping management cycle edge");
                        skipped += 1;
                        continue;
                    }
                }
            }

            if dedupe && !emitted.insert(current) {
                skipped += 1;
                continue;
            }

            if let Some(limit) = self.config.max_depth {
                if depth > limit {
                    return Err(ResolverError::DepthLimitExceeded { root, limit });
                }
            }

            ids.push(current);
            if let Some(limit) = self.config.max_results {
                if ids.len() > limit {
                    return Err(ResolverError::ResultTooLarge {
                        count: ids.len(),
                        limit,
                    });
                }
            }

            chain.push(current);
            on_chain.insert(current);
            deepest = deepest.max(depth);

            // Reversed so the first report in dataset order is expanded first.
            for report in self.store.direct_reports(current).into_iter().rev() {
                stack.push((report, depth + 1));
            }
        }

        debug!(
            closure_size = ids.len(),
            skipped,
            max_depth = deepest,
            "resolved subordinate closure"
        );

        let stats = TraversalStats::new(start.elapsed(), skipped, deepest);
        Ok(SubordinateClosure::new(ids, stats))
    }

    /// Returns true if `employee_id` is `manager_id` or sits anywhere below them.
    pub fn is_visible_to(
        &self,
        employee_id: EmployeeId,
        manager_id: EmployeeId,
    ) -> ResolverResult<bool> {
        Ok(self.resolve(manager_id)?.contains(employee_id))
    }
}

/// Resolves the closure for `employee_id` by scanning `dataset` with the
/// default configuration.
///
/// ```rust
/// use org_chart::{Dataset, EmployeeRecord};
/// use org_chart_resolver::resolve_subordinates;
///
/// let dataset: Dataset = vec![
///     EmployeeRecord::top_level(40, "Ayana Greenfelder MD", "plant manager(assembly)"),
///     EmployeeRecord::new(60, Some(40), "Alexis Becker", "foreman(assembly)"),
/// ]
/// .into();
///
/// assert_eq!(resolve_subordinates(40, &dataset).unwrap(), vec![40, 60]);
/// assert_eq!(resolve_subordinates(999, &dataset).unwrap(), vec![999]);
/// ```
pub fn resolve_subordinates(
    employee_id: EmployeeId,
    dataset: &org_chart::Dataset,
) -> ResolverResult<Vec<EmployeeId>> {
    SubordinateResolver::new(dataset)
        .resolve(employee_id)
        .map(SubordinateClosure::into_vec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use org_chart::{Dataset, EmployeeRecord};

    /// Creates a test hierarchy:
    /// ```text
    ///        100 (root)
    ///       /   \
    ///     200   300
    ///    /   \    \
    ///  400  500   600
    ///  /
    /// 700
    /// ```
    fn create_test_hierarchy() -> Dataset {
        vec![
            EmployeeRecord::top_level(100, "A", "x"),
            EmployeeRecord::new(200, Some(100), "B", "x"),
            EmployeeRecord::new(300, Some(100), "C", "x"),
            EmployeeRecord::new(400, Some(200), "D", "x"),
            EmployeeRecord::new(500, Some(200), "E", "x"),
            EmployeeRecord::new(600, Some(300), "F", "x"),
            EmployeeRecord::new(700, Some(400), "G", "x"),
        ]
        .into()
    }

    // Ordering

    #[test]
    fn test_resolve_depth_first_order() {
        let dataset = create_test_hierarchy();
        let resolver = SubordinateResolver::new(&dataset);

        let closure = resolver.resolve(100).unwrap();
        assert_eq!(closure.ids(), &[100, 200, 400, 700, 500, 300, 600]);
    }

    #[test]
    fn test_resolve_siblings_follow_dataset_order() {
        let dataset: Dataset = vec![
            EmployeeRecord::new(3, Some(1), "C", "x"),
            EmployeeRecord::top_level(1, "A", "x"),
            EmployeeRecord::new(2, Some(1), "B", "x"),
        ]
        .into();

        let closure = SubordinateResolver::new(&dataset).resolve(1).unwrap();
        assert_eq!(closure.ids(), &[1, 3, 2]);
    }

    #[test]
    fn test_resolve_intermediate_node() {
        let dataset = create_test_hierarchy();
        let closure = SubordinateResolver::new(&dataset).resolve(200).unwrap();

        assert_eq!(closure.ids(), &[200, 400, 700, 500]);
        assert_eq!(closure.root(), 200);
    }

    #[test]
    fn test_resolve_leaf_node() {
        let dataset = create_test_hierarchy();
        let closure = SubordinateResolver::new(&dataset).resolve(700).unwrap();

        assert_eq!(closure.ids(), &[700]);
    }

    #[test]
    fn test_resolve_unknown_root() {
        let dataset = create_test_hierarchy();
        let closure = SubordinateResolver::new(&dataset).resolve(999).unwrap();

        assert_eq!(closure.ids(), &[999]);
    }

    #[test]
    fn test_resolve_unknown_root_with_reports() {
        // Manager id referenced by records but not itself present.
        let dataset: Dataset = vec![
            EmployeeRecord::new(1, Some(50), "A", "x"),
            EmployeeRecord::new(2, Some(1), "B", "x"),
        ]
        .into();

        let closure = SubordinateResolver::new(&dataset).resolve(50).unwrap();
        assert_eq!(closure.ids(), &[50, 1, 2]);
    }

    #[test]
    fn test_resolve_empty_dataset() {
        let dataset = Dataset::default();
        assert_eq!(resolve_subordinates(1, &dataset).unwrap(), vec![1]);
    }

    // Stats

    #[test]
    fn test_traversal_stats() {
        let dataset = create_test_hierarchy();
        let closure = SubordinateResolver::new(&dataset).resolve(100).unwrap();

        assert_eq!(closure.len(), 7);
        assert_eq!(closure.stats().edges_skipped, 0);
        assert_eq!(closure.stats().max_depth, 3);
    }

    // Cycles

    fn create_cyclic_dataset() -> Dataset {
        // 1 -> 2 -> 3 -> 1, with 4 hanging off 2
        vec![
            EmployeeRecord::new(1, Some(3), "A", "x"),
            EmployeeRecord::new(2, Some(1), "B", "x"),
            EmployeeRecord::new(3, Some(2), "C", "x"),
            EmployeeRecord::new(4, Some(2), "D", "x"),
        ]
        .into()
    }

    #[test]
    fn test_cycle_fails_by_default() {
        let dataset = create_cyclic_dataset();
        let err = SubordinateResolver::new(&dataset).resolve(1).unwrap_err();

        assert_eq!(
            err,
            ResolverError::CycleDetected {
                root: 1,
                employee_id: 1
            }
        );
    }

    #[test]
    fn test_self_managed_record_is_a_cycle() {
        let dataset: Dataset = vec![EmployeeRecord::new(7, Some(7), "Loop", "x")].into();
        let err = SubordinateResolver::new(&dataset).resolve(7).unwrap_err();

        assert!(matches!(err, ResolverError::CycleDetected { employee_id: 7, .. }));
    }

    #[test]
    fn test_cycle_skip_policy() {
        let dataset = create_cyclic_dataset();
        let config = ResolverConfig::builder()
            .with_cycle_policy(CyclePolicy::Skip)
            .build();

        let closure = SubordinateResolver::with_config(&dataset, config)
            .resolve(2)
            .unwrap();
        assert_eq!(closure.ids(), &[2, 3, 1, 4]);
        // 1 -> 2 closes the loop and is dropped.
        assert_eq!(closure.stats().edges_skipped, 1);
    }

    #[test]
    fn test_cycle_outside_closure_is_ignored() {
        let mut records = create_cyclic_dataset().into_records();
        records.push(EmployeeRecord::top_level(10, "Clean", "x"));
        records.push(EmployeeRecord::new(11, Some(10), "Clean report", "x"));
        let dataset = Dataset::new(records);

        assert_eq!(resolve_subordinates(10, &dataset).unwrap(), vec![10, 11]);
    }

    // Duplicates

    fn create_duplicate_dataset() -> Dataset {
        vec![
            EmployeeRecord::top_level(1, "A", "x"),
            EmployeeRecord::new(2, Some(1), "B", "x"),
            EmployeeRecord::new(2, Some(1), "B again", "x"),
            EmployeeRecord::new(3, Some(2), "C", "x"),
        ]
        .into()
    }

    #[test]
    fn test_duplicates_kept_by_default() {
        let dataset = create_duplicate_dataset();
        let closure = SubordinateResolver::new(&dataset).resolve(1).unwrap();

        // Each copy of 2 is walked, so 3 shows up twice as well.
        assert_eq!(closure.ids(), &[1, 2, 3, 2, 3]);
    }

    #[test]
    fn test_duplicates_deduped() {
        let dataset = create_duplicate_dataset();
        let config = ResolverConfig::builder()
            .with_duplicate_policy(DuplicatePolicy::Dedupe)
            .build();

        let closure = SubordinateResolver::with_config(&dataset, config)
            .resolve(1)
            .unwrap();
        assert_eq!(closure.ids(), &[1, 2, 3]);
        assert_eq!(closure.stats().edges_skipped, 1);
    }

    #[test]
    fn test_duplicates_are_not_cycles() {
        // Diamond through a repeated id: 4 appears under both 2 and 3.
        let dataset: Dataset = vec![
            EmployeeRecord::top_level(1, "A", "x"),
            EmployeeRecord::new(2, Some(1), "B", "x"),
            EmployeeRecord::new(3, Some(1), "C", "x"),
            EmployeeRecord::new(4, Some(2), "D", "x"),
            EmployeeRecord::new(4, Some(3), "D", "x"),
        ]
        .into();

        let closure = SubordinateResolver::new(&dataset).resolve(1).unwrap();
        assert_eq!(closure.ids(), &[1, 2, 4, 3, 4]);
    }

    #[test]
    fn test_dedupe_still_fails_on_cycle() {
        let dataset = create_cyclic_dataset();
        let config = ResolverConfig::builder()
            .with_duplicate_policy(DuplicatePolicy::Dedupe)
            .build();

        let result = SubordinateResolver::with_config(&dataset, config).resolve(3);
        assert!(matches!(result, Err(ResolverError::CycleDetected { .. })));
    }

    // Limits

    #[test]
    fn test_max_depth() {
        let dataset = create_test_hierarchy();

        let config = ResolverConfig::builder().with_max_depth(3).build();
        assert!(SubordinateResolver::with_config(&dataset, config)
            .resolve(100)
            .is_ok());

        let config = ResolverConfig::builder().with_max_depth(2).build();
        let err = SubordinateResolver::with_config(&dataset, config)
            .resolve(100)
            .unwrap_err();
        assert_eq!(err, ResolverError::DepthLimitExceeded { root: 100, limit: 2 });
    }

    #[test]
    fn test_max_results() {
        let dataset = create_test_hierarchy();

        let config = ResolverConfig::builder().with_max_results(4).build();
        let resolver = SubordinateResolver::with_config(&dataset, config);

        assert_eq!(resolver.resolve(200).unwrap().len(), 4);
        assert_eq!(
            resolver.resolve(100).unwrap_err(),
            ResolverError::ResultTooLarge { count: 5, limit: 4 }
        );
    }

    // Helpers

    #[test]
    fn test_is_visible_to() {
        let dataset = create_test_hierarchy();
        let resolver = SubordinateResolver::new(&dataset);

        assert!(resolver.is_visible_to(700, 100).unwrap());
        assert!(resolver.is_visible_to(200, 200).unwrap());
        assert!(!resolver.is_visible_to(600, 200).unwrap());
        assert!(!resolver.is_visible_to(100, 700).unwrap());
    }

    #[test]
    fn test_deep_hierarchy_does_not_recurse() {
        // A linear chain far deeper than a recursive walk would tolerate
        // on a small test thread stack.
        let depth: EmployeeId = 50_000;
        let dataset: Dataset = (0..depth)
            .map(|i| {
                let manager = if i == 0 { None } else { Some(i - 1) };
                EmployeeRecord::new(i, manager, "E", "x")
            })
            .collect();
        let index = crate::HierarchyIndex::build(&dataset);

        let closure = SubordinateResolver::new(&index).resolve(0).unwrap();
        assert_eq!(closure.len(), depth as usize);
        assert_eq!(closure.stats().max_depth, depth as usize - 1);
    }
}
