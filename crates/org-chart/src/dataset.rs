//! Ordered collections of employee records.

use std::collections::{HashMap, HashSet};

use crate::record::EmployeeRecord;
use crate::EmployeeId;

/// An ordered, read-only sequence of employee records.
///
/// Order is the order the records were loaded in; nothing is sorted.
/// The manager relation is expected to form a forest and ids are expected
/// to be unique, but neither is enforced here. Use [`duplicate_ids`] and
/// [`dangling_managers`] to inspect a dataset that may violate them.
///
/// [`duplicate_ids`]: Dataset::duplicate_ids
/// [`dangling_managers`]: Dataset::dangling_managers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dataset {
    records: Vec<EmployeeRecord>,
}

impl Dataset {
    /// Creates a dataset from records, keeping their order.
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records as a slice, in dataset order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns an iterator over the records, in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmployeeRecord> {
        self.records.iter()
    }

    /// Returns the first record with the given id.
    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns true if any record has the given id.
    pub fn contains_id(&self, id: EmployeeId) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// Returns ids that appear on more than one record, in order of first
    /// appearance.
    pub fn duplicate_ids(&self) -> Vec<EmployeeId> {
        let mut counts: HashMap<EmployeeId, usize> = HashMap::with_capacity(self.records.len());
        for record in &self.records {
            *counts.entry(record.id()).or_default() += 1;
        }

        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(EmployeeRecord::id)
            .filter(|id| counts[id] > 1 && seen.insert(*id))
            .collect()
    }

    /// Returns manager ids that no record in the dataset carries, in order
    /// of first appearance.
    pub fn dangling_managers(&self) -> Vec<EmployeeId> {
        let ids: HashSet<EmployeeId> = self.records.iter().map(EmployeeRecord::id).collect();

        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(EmployeeRecord::manager_id)
            .filter(|manager| !ids.contains(manager) && seen.insert(*manager))
            .collect()
    }

    /// Consumes the dataset and returns the records.
    pub fn into_records(self) -> Vec<EmployeeRecord> {
        self.records
    }
}

impl From<Vec<EmployeeRecord>> for Dataset {
    fn from(records: Vec<EmployeeRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<EmployeeRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = EmployeeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Dataset {
    type Item = EmployeeRecord;
    type IntoIter = std::vec::IntoIter<EmployeeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a EmployeeRecord;
    type IntoIter = std::slice::Iter<'a, EmployeeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
