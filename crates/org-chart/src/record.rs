//! Employee records.

use crate::error::{ModelError, ModelResult};
use crate::EmployeeId;

/// One row of an organizational chart.
///
/// Records are immutable once constructed; fields are exposed through
/// accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmployeeRecord {
    id: EmployeeId,
    manager_id: Option<EmployeeId>,
    name: String,
    designation: String,
}

impl EmployeeRecord {
    /// Creates a record. `manager_id` is `None` for top-level employees.
    pub fn new(
        id: EmployeeId,
        manager_id: Option<EmployeeId>,
        name: impl Into<String>,
        designation: impl Into<String>,
    ) -> Self {
        Self {
            id,
            manager_id,
            name: name.into(),
            designation: designation.into(),
        }
    }

    /// Creates a record for an employee without a manager.
    pub fn top_level(
        id: EmployeeId,
        name: impl Into<String>,
        designation: impl Into<String>,
    ) -> Self {
        Self::new(id, None, name, designation)
    }

    /// The employee's identifier.
    #[inline]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// The direct manager's identifier, if any.
    #[inline]
    pub fn manager_id(&self) -> Option<EmployeeId> {
        self.manager_id
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's designation (job title).
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns true if the record has no manager.
    pub fn is_top_level(&self) -> bool {
        self.manager_id.is_none()
    }

    /// Returns true if `manager_id` is this record's direct manager.
    #[inline]
    pub fn reports_to(&self, manager_id: EmployeeId) -> bool {
        self.manager_id == Some(manager_id)
    }

    /// Checks record-local consistency.
    ///
    /// Only catches a record managing itself; longer cycles need the
    /// whole dataset and are reported by the resolver.
    pub fn validate(&self) -> ModelResult<()> {
        if self.reports_to(self.id) {
            return Err(ModelError::SelfManaged(self.id));
        }
        Ok(())
    }
}
