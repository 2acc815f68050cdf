//! Result types for subordinate resolution.

use std::collections::HashSet;
use std::time::Duration;

use org_chart::EmployeeId;

/// The ids an employee can see: themself first, then every direct and
/// indirect report in depth-first order.
///
/// Siblings appear in dataset order, and each report's whole subtree comes
/// before the next sibling. With duplicate ids in the dataset the list can
/// hold repeats unless the resolver deduplicates.
///
/// # Example
///
/// ```ignore
/// let closure = resolver.resolve(40)?;
///
/// assert_eq!(closure.ids(), &[40, 60, 90, 100]);
/// assert!(closure.contains(90));
/// ```
#[derive(Debug, Clone)]
pub struct SubordinateClosure {
    ids: Vec<EmployeeId>,
    stats: TraversalStats,
}

impl SubordinateClosure {
    /// Creates a closure from ids in traversal order. `ids[0]` is the root.
    pub(crate) fn new(ids: Vec<EmployeeId>, stats: TraversalStats) -> Self {
        debug_assert!(!ids.is_empty(), "a closure always holds its root");
        Self { ids, stats }
    }

    /// The employee the closure was computed for.
    pub fn root(&self) -> EmployeeId {
        self.ids[0]
    }

    /// Ids in traversal order.
    pub fn ids(&self) -> &[EmployeeId] {
        &self.ids
    }

    /// Returns the number of ids, counting repeats.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false for closures built by the resolver.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Checks if an id is in the closure.
    pub fn contains(&self, employee_id: EmployeeId) -> bool {
        self.ids.contains(&employee_id)
    }

    /// Returns an iterator over ids in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmployeeId> {
        self.ids.iter()
    }

    /// Collects the ids into a set for membership tests.
    pub fn to_set(&self) -> HashSet<EmployeeId> {
        self.ids.iter().copied().collect()
    }

    /// Traversal statistics.
    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }

    /// Consumes the closure and returns the ids.
    pub fn into_vec(self) -> Vec<EmployeeId> {
        self.ids
    }
}

impl IntoIterator for SubordinateClosure {
    type Item = EmployeeId;
    type IntoIter = std::vec::IntoIter<EmployeeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

impl<'a> IntoIterator for &'a SubordinateClosure {
    type Item = &'a EmployeeId;
    type IntoIter = std::slice::Iter<'a, EmployeeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Statistics from one closure computation.
#[derive(Debug, Clone, Default)]
pub struct TraversalStats {
    /// Total resolution time.
    pub duration: Duration,
    /// Reporting edges dropped by the cycle or duplicate policy.
    pub edges_skipped: usize,
    /// Deepest level reached below the root (root = 0).
    pub max_depth: usize,
}

impl TraversalStats {
    /// Creates new traversal stats.
    pub fn new(duration: Duration, edges_skipped: usize, max_depth: usize) -> Self {
        Self {
            duration,
            edges_skipped,
            max_depth,
        }
    }
}
