use std::fmt;

use crate::wizard::draft::SelectionDraft;
use crate::wizard::slots::SlotAvailability;
use crate::wizard::step::Step;

/// One reason a step cannot advance, keyed by the field it concerns.
///
/// Field keys match the wire names the backend uses in its rejection maps,
/// so server-side and local issues render through the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Why the given step cannot advance yet; empty when it can.
///
/// Evaluation only reads the draft, so re-checking a step the visitor
/// already passed gives the same answer until the draft changes.
pub fn issues(
    step: Step,
    draft: &SelectionDraft,
    availability: &SlotAvailability,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    match step {
        Step::Branch => {
            if draft.branch.is_none() {
                issues.push(ValidationIssue::new(
                    "branch",
                    "Select a branch to continue",
                ));
            }
        }
        Step::Service => {
            if draft.service.is_none() {
                issues.push(ValidationIssue::new(
                    "service",
                    "Select a service to continue",
                ));
            } else if !draft.service_matches_branch() {
                issues.push(ValidationIssue::new(
                    "service",
                    "The selected service is not offered at this branch",
                ));
            }
        }
        Step::DateTime => {
            if draft.date.is_none() {
                issues.push(ValidationIssue::new("date", "Pick a date"));
            }
            match (draft.date, draft.time) {
                (_, None) => issues.push(ValidationIssue::new("time", "Pick a time")),
                (Some(date), Some(slot)) if availability.is_disabled(date, slot) => {
                    issues.push(ValidationIssue::new(
                        "time",
                        "That time is no longer available",
                    ));
                }
                _ => {}
            }
        }
        Step::Details => {
            if draft.contact.full_name.trim().is_empty() {
                issues.push(ValidationIssue::new("fullName", "Full name is required"));
            }
            if draft.contact.phone.trim().is_empty() {
                issues.push(ValidationIssue::new("phone", "Phone number is required"));
            }
            if !draft.policy_agreed {
                issues.push(ValidationIssue::new(
                    "policy",
                    "The booking policy must be accepted",
                ));
            }
        }
    }
    issues
}

/// True when the step's required inputs are present and valid.
pub fn can_advance(step: Step, draft: &SelectionDraft, availability: &SlotAvailability) -> bool {
    issues(step, draft, availability).is_empty()
}

/// Issues across every step, in step order. Submission runs this as its
/// final check.
pub fn all_issues(draft: &SelectionDraft, availability: &SlotAvailability) -> Vec<ValidationIssue> {
    Step::ALL
        .iter()
        .flat_map(|step| issues(*step, draft, availability))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::catalog::Catalog;
    use crate::wizard::slots::find_slot;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn drafted_through_datetime(catalog: &Catalog) -> SelectionDraft {
        let mut draft = SelectionDraft::new();
        draft.branch = catalog.branch("olaya").cloned();
        draft.service = catalog.service("hydrafacial").cloned();
        draft.date = Some(date(2025, 3, 20));
        draft.time = find_slot("09:30");
        draft
    }

    #[test]
    fn empty_draft_blocks_the_first_step() {
        let availability = SlotAvailability::default();
        let draft = SelectionDraft::new();
        let found = issues(Step::Branch, &draft, &availability);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "branch");
        assert!(!can_advance(Step::Branch, &draft, &availability));
    }

    #[test]
    fn datetime_requires_both_date_and_time() {
        let catalog = Catalog::sample();
        let availability = SlotAvailability::default();
        let mut draft = drafted_through_datetime(&catalog);

        draft.time = None;
        let fields: Vec<&str> = issues(Step::DateTime, &draft, &availability)
            .iter()
            .map(|issue| issue.field)
            .collect();
        assert_eq!(fields, vec!["time"]);

        draft.date = None;
        let fields: Vec<&str> = issues(Step::DateTime, &draft, &availability)
            .iter()
            .map(|issue| issue.field)
            .collect();
        assert_eq!(fields, vec!["date", "time"]);
    }

    #[test]
    fn blocked_slot_blocks_the_datetime_step() {
        let catalog = Catalog::sample();
        let mut draft = drafted_through_datetime(&catalog);
        draft.time = find_slot("10:30");
        let availability = SlotAvailability::fixture();
        let found = issues(Step::DateTime, &draft, &availability);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "time");
    }

    #[test]
    fn availability_change_blocks_a_previously_valid_slot() {
        let catalog = Catalog::sample();
        let draft = drafted_through_datetime(&catalog);
        let mut availability = SlotAvailability::default();
        assert!(can_advance(Step::DateTime, &draft, &availability));

        availability.block_on(date(2025, 3, 20), "09:30");
        assert!(!can_advance(Step::DateTime, &draft, &availability));
    }

    #[test]
    fn details_requires_name_phone_and_policy() {
        let availability = SlotAvailability::default();
        let mut draft = SelectionDraft::new();
        let fields: Vec<&str> = issues(Step::Details, &draft, &availability)
            .iter()
            .map(|issue| issue.field)
            .collect();
        assert_eq!(fields, vec!["fullName", "phone", "policy"]);

        draft.contact.full_name = "Sara Youssef".into();
        draft.contact.phone = "+966 55 123 4567".into();
        draft.policy_agreed = true;
        assert!(can_advance(Step::Details, &draft, &availability));
    }

    #[test]
    fn whitespace_names_do_not_pass() {
        let availability = SlotAvailability::default();
        let mut draft = SelectionDraft::new();
        draft.contact.full_name = "   ".into();
        draft.contact.phone = "\t".into();
        draft.policy_agreed = true;
        assert_eq!(issues(Step::Details, &draft, &availability).len(), 2);
    }

    #[test]
    fn mismatched_service_blocks_the_service_step() {
        let catalog = Catalog::sample();
        let availability = SlotAvailability::default();
        let mut draft = SelectionDraft::new();
        draft.branch = catalog.branch("olaya").cloned();
        draft.service = catalog.service("peel").cloned();
        let found = issues(Step::Service, &draft, &availability);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "service");
    }

    #[test]
    fn earlier_gates_ignore_later_fields() {
        let availability = SlotAvailability::default();
        let catalog = Catalog::sample();

        // A draft filled back to front: later fields never unlock
        // earlier steps.
        let mut draft = SelectionDraft::new();
        draft.contact.full_name = "Sara Youssef".into();
        draft.contact.phone = "+966 55 123 4567".into();
        draft.policy_agreed = true;
        draft.date = Some(date(2025, 3, 20));
        draft.time = find_slot("09:30");
        assert!(!can_advance(Step::Branch, &draft, &availability));
        assert!(!can_advance(Step::Service, &draft, &availability));

        // And the branch gate needs nothing beyond the branch.
        let mut draft = SelectionDraft::new();
        draft.branch = catalog.branch("olaya").cloned();
        assert!(can_advance(Step::Branch, &draft, &availability));
    }

    #[test]
    fn all_issues_cover_every_step_in_order() {
        let availability = SlotAvailability::default();
        let draft = SelectionDraft::new();
        let fields: Vec<&str> = all_issues(&draft, &availability)
            .iter()
            .map(|issue| issue.field)
            .collect();
        assert_eq!(
            fields,
            vec!["branch", "service", "date", "time", "fullName", "phone", "policy"]
        );
    }
}
