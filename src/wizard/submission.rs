use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::BookingApi;
use crate::catalog::{Branch, Service};
use crate::errors::SubmissionError;
use crate::wizard::draft::{ContactDetails, SelectionDraft};
use crate::wizard::gate;
use crate::wizard::slots::{SlotAvailability, TimeSlot};

/// Payload POSTed to the bookings endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub branch_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub time: String,
}

impl BookingRequest {
    /// Builds the wire payload from a finished draft, running the full
    /// validation gate first.
    pub fn from_draft(
        draft: &SelectionDraft,
        availability: &SlotAvailability,
    ) -> Result<Self, SubmissionError> {
        let issues = gate::all_issues(draft, availability);
        if !issues.is_empty() {
            return Err(SubmissionError::IncompleteDraft(issues));
        }
        match (&draft.branch, &draft.service, draft.date, draft.time) {
            (Some(branch), Some(service), Some(date), Some(slot)) => Ok(Self {
                full_name: draft.contact.full_name.trim().to_string(),
                phone: draft.contact.phone.trim().to_string(),
                email: draft.contact.email.trim().to_string(),
                notes: draft.contact.notes.trim().to_string(),
                branch_id: branch.id.clone(),
                service_id: service.id.clone(),
                date,
                time: slot.as_str().to_string(),
            }),
            // unreachable once the gate passes
            _ => Err(SubmissionError::IncompleteDraft(Vec::new())),
        }
    }
}

/// Body returned by the backend on 201 Created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub id: String,
    pub status: String,
}

/// Immutable record of an accepted booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub booking_id: String,
    /// Backend state, "pending" until the clinic confirms.
    pub status: String,
    pub branch: Branch,
    pub service: Service,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub contact: ContactDetails,
    pub submitted_at: DateTime<Utc>,
}

/// Sends finished drafts to the backend and guards against double sends.
pub struct SubmissionHandler {
    api: Box<dyn BookingApi>,
    in_flight: bool,
}

impl SubmissionHandler {
    pub fn new(api: Box<dyn BookingApi>) -> Self {
        Self {
            api,
            in_flight: false,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validates the draft, sends it, and returns the confirmation.
    ///
    /// The draft itself is never modified; on failure the caller decides
    /// whether to retry or let the visitor edit and try again.
    pub fn submit(
        &mut self,
        draft: &SelectionDraft,
        availability: &SlotAvailability,
    ) -> Result<BookingConfirmation, SubmissionError> {
        if self.in_flight {
            return Err(SubmissionError::InFlight);
        }
        let request = BookingRequest::from_draft(draft, availability)?;

        self.in_flight = true;
        let outcome = self.api.create_booking(&request);
        self.in_flight = false;

        let receipt = match outcome {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(error = %err, "booking submission failed");
                return Err(err);
            }
        };
        info!(booking_id = %receipt.id, status = %receipt.status, "booking accepted");

        match (&draft.branch, &draft.service, draft.date, draft.time) {
            (Some(branch), Some(service), Some(date), Some(slot)) => Ok(BookingConfirmation {
                booking_id: receipt.id,
                status: receipt.status,
                branch: branch.clone(),
                service: service.clone(),
                date,
                time: slot,
                contact: draft.contact.clone(),
                submitted_at: Utc::now(),
            }),
            // unreachable: from_draft already proved the draft is complete
            _ => Err(SubmissionError::IncompleteDraft(Vec::new())),
        }
    }
}
