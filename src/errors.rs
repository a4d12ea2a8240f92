use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::wizard::gate::ValidationIssue;
use crate::wizard::step::Step;

/// Failures while loading branch and service reference data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog contains no branches or services")]
    Empty,
}

/// Rejected step-navigation requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("step \"{step}\" is incomplete")]
    Blocked {
        step: Step,
        issues: Vec<ValidationIssue>,
    },
    #[error("cannot jump forward from \"{from}\" to \"{to}\"")]
    ForwardJump { from: Step, to: Step },
    #[error("already at the first step")]
    AtFirstStep,
    #[error("the booking is already confirmed")]
    Confirmed,
}

/// Rejected draft mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown branch \"{0}\"")]
    UnknownBranch(String),
    #[error("unknown service \"{0}\"")]
    UnknownService(String),
    #[error("service \"{service}\" is not offered at branch \"{branch}\"")]
    NotOfferedAtBranch { service: String, branch: String },
    #[error("select a branch before choosing a service")]
    BranchRequired,
    #[error("select a date before choosing a time")]
    DateRequired,
    #[error("{0} is in the past")]
    PastDate(NaiveDate),
    #[error("time {0} cannot be booked")]
    SlotUnavailable(String),
    #[error("the booking is already confirmed")]
    Confirmed,
}

/// Failures while sending a finished draft to the booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("draft is missing required fields")]
    IncompleteDraft(Vec<ValidationIssue>),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("booking request could not be delivered: {0}")]
    Transport(String),
    #[error("booking rejected ({status})")]
    Rejected {
        status: u16,
        fields: BTreeMap<String, String>,
    },
    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),
}

/// Umbrella error for wizard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Errors surfaced by the interactive front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<TransitionError> for CliError {
    fn from(err: TransitionError) -> Self {
        Self::Wizard(err.into())
    }
}

impl From<SelectionError> for CliError {
    fn from(err: SelectionError) -> Self {
        Self::Wizard(err.into())
    }
}

impl From<SubmissionError> for CliError {
    fn from(err: SubmissionError) -> Self {
        Self::Wizard(err.into())
    }
}
