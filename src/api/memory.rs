use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::api::BookingApi;
use crate::errors::SubmissionError;
use crate::wizard::submission::{BookingReceipt, BookingRequest};

/// Accepts bookings without a backend; used by tests and the offline demo.
pub struct InMemoryBookingApi {
    accepted: Arc<Mutex<Vec<BookingRequest>>>,
    fail_next: Option<SubmissionError>,
}

impl InMemoryBookingApi {
    pub fn new() -> Self {
        Self {
            accepted: Arc::new(Mutex::new(Vec::new())),
            fail_next: None,
        }
    }

    /// Makes the next create call fail with the given error, once.
    pub fn fail_next(&mut self, error: SubmissionError) {
        self.fail_next = Some(error);
    }

    /// Handle onto the accepted list that stays valid after the api is
    /// boxed and handed to the wizard.
    pub fn log(&self) -> Arc<Mutex<Vec<BookingRequest>>> {
        Arc::clone(&self.accepted)
    }

    pub fn accepted(&self) -> Vec<BookingRequest> {
        self.accepted
            .lock()
            .expect("accepted bookings lock")
            .clone()
    }
}

impl Default for InMemoryBookingApi {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingApi for InMemoryBookingApi {
    fn create_booking(
        &mut self,
        request: &BookingRequest,
    ) -> Result<BookingReceipt, SubmissionError> {
        if let Some(error) = self.fail_next.take() {
            return Err(error);
        }
        self.accepted
            .lock()
            .expect("accepted bookings lock")
            .push(request.clone());
        Ok(BookingReceipt {
            id: Uuid::new_v4().to_string(),
            status: "pending".to_string(),
        })
    }
}
