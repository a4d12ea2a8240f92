use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::api::BookingApi;
use crate::catalog::text::Language;
use crate::catalog::{Catalog, Service};
use crate::errors::{SelectionError, TransitionError, WizardError};
use crate::wizard::calendar::is_past;
use crate::wizard::draft::SelectionDraft;
use crate::wizard::gate::{self, ValidationIssue};
use crate::wizard::slots::find_slot;
use crate::wizard::step::Step;
use crate::wizard::submission::{BookingConfirmation, SubmissionHandler};
use crate::wizard::summary::{self, SummaryView};

/// Result of a successful Next request.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Moved(Step),
    Confirmed(BookingConfirmation),
}

/// Drives one booking session from branch choice to confirmation.
///
/// All draft changes go through the selection methods, which refuse
/// anything the flow position or reference data does not allow. Forward
/// movement goes through the step gate; a confirmed wizard is terminal.
pub struct BookingWizard {
    catalog: Catalog,
    today: NaiveDate,
    step: Step,
    draft: SelectionDraft,
    submitter: SubmissionHandler,
    confirmation: Option<BookingConfirmation>,
}

impl BookingWizard {
    pub fn new(catalog: Catalog, today: NaiveDate, api: Box<dyn BookingApi>) -> Self {
        Self {
            catalog,
            today,
            step: Step::Branch,
            draft: SelectionDraft::new(),
            submitter: SubmissionHandler::new(api),
            confirmation: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &SelectionDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmation.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitter.is_in_flight()
    }

    /// Services offered at the drafted branch, empty until one is chosen.
    pub fn services_for_selected_branch(&self) -> Vec<&Service> {
        match self.draft.branch_id() {
            Some(branch_id) => self.catalog.services_for_branch(branch_id),
            None => Vec::new(),
        }
    }

    /// Whether the current step would let a Next request through.
    pub fn can_advance(&self) -> bool {
        !self.is_confirmed()
            && gate::can_advance(self.step, &self.draft, &self.catalog.availability)
    }

    /// Gate findings for the current step, for inline display.
    pub fn current_issues(&self) -> Vec<ValidationIssue> {
        gate::issues(self.step, &self.draft, &self.catalog.availability)
    }

    pub fn summary(&self, language: Language) -> SummaryView {
        summary::project(&self.draft, self.step, self.is_confirmed(), language)
    }

    /// Advances past the current step; on the last step this submits the
    /// booking. Blocked steps and failed submissions leave the position
    /// and draft untouched.
    pub fn next(&mut self) -> Result<StepOutcome, WizardError> {
        if self.is_confirmed() {
            return Err(TransitionError::Confirmed.into());
        }
        let issues = gate::issues(self.step, &self.draft, &self.catalog.availability);
        if !issues.is_empty() {
            return Err(TransitionError::Blocked {
                step: self.step,
                issues,
            }
            .into());
        }
        match self.step.next() {
            Some(next) => {
                debug!(from = %self.step, to = %next, "step advanced");
                self.step = next;
                Ok(StepOutcome::Moved(next))
            }
            None => {
                let confirmation = self
                    .submitter
                    .submit(&self.draft, &self.catalog.availability)?;
                self.confirmation = Some(confirmation.clone());
                Ok(StepOutcome::Confirmed(confirmation))
            }
        }
    }

    /// Moves one step back without re-validating anything.
    pub fn back(&mut self) -> Result<Step, TransitionError> {
        if self.is_confirmed() {
            return Err(TransitionError::Confirmed);
        }
        match self.step.prev() {
            Some(prev) => {
                debug!(from = %self.step, to = %prev, "step rewound");
                self.step = prev;
                Ok(prev)
            }
            None => Err(TransitionError::AtFirstStep),
        }
    }

    /// Jumps back to an earlier step to edit it. Forward jumps are
    /// rejected; Next is the only way forward.
    pub fn jump_to(&mut self, target: Step) -> Result<Step, TransitionError> {
        if self.is_confirmed() {
            return Err(TransitionError::Confirmed);
        }
        if target >= self.step {
            return Err(TransitionError::ForwardJump {
                from: self.step,
                to: target,
            });
        }
        debug!(from = %self.step, to = %target, "jumped back to edit");
        self.step = target;
        Ok(target)
    }

    /// Chooses a branch. Switching branches drops a drafted service the
    /// new branch does not offer; date, time, and contact fields survive.
    pub fn select_branch(&mut self, id: &str) -> Result<(), SelectionError> {
        self.ensure_active()?;
        let branch = self
            .catalog
            .branch(id)
            .cloned()
            .ok_or_else(|| SelectionError::UnknownBranch(id.to_string()))?;
        let switched = self
            .draft
            .branch_id()
            .map(|current| current != branch.id)
            .unwrap_or(false);
        self.draft.branch = Some(branch);
        if switched {
            let stale = self
                .draft
                .service
                .as_ref()
                .map(|service| !service.offered_at(id))
                .unwrap_or(false);
            if stale {
                if let Some(service) = self.draft.service.take() {
                    warn!(
                        service = %service.id,
                        branch = %id,
                        "dropped drafted service not offered at the new branch"
                    );
                }
            }
        }
        Ok(())
    }

    /// Chooses a service; it must exist and be offered at the drafted
    /// branch.
    pub fn select_service(&mut self, id: &str) -> Result<(), SelectionError> {
        self.ensure_active()?;
        let branch_id = self
            .draft
            .branch_id()
            .ok_or(SelectionError::BranchRequired)?
            .to_string();
        let service = self
            .catalog
            .service(id)
            .cloned()
            .ok_or_else(|| SelectionError::UnknownService(id.to_string()))?;
        if !service.offered_at(&branch_id) {
            return Err(SelectionError::NotOfferedAtBranch {
                service: service.id,
                branch: branch_id,
            });
        }
        self.draft.service = Some(service);
        Ok(())
    }

    /// Chooses an appointment date; today is allowed, earlier days are not.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        self.ensure_active()?;
        if is_past(date, self.today) {
            return Err(SelectionError::PastDate(date));
        }
        self.draft.date = Some(date);
        Ok(())
    }

    /// Chooses a start time from the timetable for the drafted date.
    pub fn select_slot(&mut self, time: &str) -> Result<(), SelectionError> {
        self.ensure_active()?;
        let date = self.draft.date.ok_or(SelectionError::DateRequired)?;
        let slot =
            find_slot(time).ok_or_else(|| SelectionError::SlotUnavailable(time.to_string()))?;
        if self.catalog.availability.is_disabled(date, slot) {
            return Err(SelectionError::SlotUnavailable(time.to_string()));
        }
        self.draft.time = Some(slot);
        Ok(())
    }

    pub fn set_full_name(&mut self, value: &str) -> Result<(), SelectionError> {
        self.ensure_active()?;
        self.draft.contact.full_name = value.to_string();
        Ok(())
    }

    pub fn set_phone(&mut self, value: &str) -> Result<(), SelectionError> {
        self.ensure_active()?;
        self.draft.contact.phone = value.to_string();
        Ok(())
    }

    pub fn set_email(&mut self, value: &str) -> Result<(), SelectionError> {
        self.ensure_active()?;
        self.draft.contact.email = value.to_string();
        Ok(())
    }

    pub fn set_notes(&mut self, value: &str) -> Result<(), SelectionError> {
        self.ensure_active()?;
        self.draft.contact.notes = value.to_string();
        Ok(())
    }

    pub fn set_policy_agreed(&mut self, agreed: bool) -> Result<(), SelectionError> {
        self.ensure_active()?;
        self.draft.policy_agreed = agreed;
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), SelectionError> {
        if self.is_confirmed() {
            Err(SelectionError::Confirmed)
        } else {
            Ok(())
        }
    }
}
