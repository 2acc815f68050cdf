//! Store abstraction for hierarchy traversal.
//!
//! The resolver never touches a [`Dataset`] directly when walking the
//! hierarchy; it asks an [`OrgQueryable`] store for direct reports. Two stores
//! ship with this crate:
//!
//! - [`Dataset`] itself, which answers by scanning every record
//! - [`HierarchyIndex`](crate::HierarchyIndex), which answers from a map
//!   built once per dataset
//!
//! Both return reports in dataset order, so the resolver produces the same
//! closure either way.

use org_chart::{Dataset, EmployeeId, EmployeeRecord};

/// Trait for stores the resolver can walk.
pub trait OrgQueryable: Send + Sync {
    /// Gets the ids whose manager is `manager_id`, in dataset order.
    ///
    /// Returns an empty Vec if nobody reports to `manager_id` or it doesn't
    /// exist. Duplicate ids are returned once per record.
    fn direct_reports(&self, manager_id: EmployeeId) -> Vec<EmployeeId>;
}

/// Linear scans over the records.
impl OrgQueryable for Dataset {
    fn direct_reports(&self, manager_id: EmployeeId) -> Vec<EmployeeId> {
        self.iter()
            .filter(|record| record.reports_to(manager_id))
            .map(EmployeeRecord::id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dataset() -> Dataset {
        vec![
            EmployeeRecord::top_level(100, "Root", "ceo"),
            EmployeeRecord::new(300, Some(100), "Second", "vp"),
            EmployeeRecord::new(200, Some(100), "First", "vp"),
            EmployeeRecord::new(400, Some(200), "Leaf", "engineer"),
        ]
        .into()
    }

    #[test]
    fn test_dataset_direct_reports_in_dataset_order() {
        let dataset = create_test_dataset();

        assert_eq!(dataset.direct_reports(100), vec![300, 200]);
        assert_eq!(dataset.direct_reports(200), vec![400]);
        assert!(dataset.direct_reports(400).is_empty());
        assert!(dataset.direct_reports(999).is_empty());
    }

    #[test]
    fn test_dataset_direct_reports_repeats_duplicate_ids() {
        let dataset: Dataset = vec![
            EmployeeRecord::top_level(1, "A", "x"),
            EmployeeRecord::new(2, Some(1), "B", "x"),
            EmployeeRecord::new(2, Some(1), "B", "x"),
        ]
        .into();

        assert_eq!(dataset.direct_reports(1), vec![2, 2]);
    }
}
