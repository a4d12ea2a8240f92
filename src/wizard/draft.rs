use chrono::NaiveDate;

use crate::catalog::{Branch, Service};
use crate::wizard::slots::TimeSlot;

/// Contact fields captured on the final step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl ContactDetails {
    /// Name and phone are required; email and notes are optional.
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}

/// Everything the visitor has chosen so far.
///
/// Fields fill in step order; the step gate decides what may advance, the
/// controller decides what may change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionDraft {
    pub branch: Option<Branch>,
    pub service: Option<Service>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub contact: ContactDetails,
    pub policy_agreed: bool,
}

impl SelectionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branch_id(&self) -> Option<&str> {
        self.branch.as_ref().map(|branch| branch.id.as_str())
    }

    pub fn service_id(&self) -> Option<&str> {
        self.service.as_ref().map(|service| service.id.as_str())
    }

    /// True when the selected service is offered at the selected branch.
    /// Vacuously true while either side is missing.
    pub fn service_matches_branch(&self) -> bool {
        match (&self.branch, &self.service) {
            (Some(branch), Some(service)) => service.offered_at(&branch.id),
            _ => true,
        }
    }
}
