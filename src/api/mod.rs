//! Transport for accepted bookings.

pub mod http;
pub mod memory;

pub use http::HttpBookingApi;
pub use memory::InMemoryBookingApi;

use crate::errors::SubmissionError;
use crate::wizard::submission::{BookingReceipt, BookingRequest};

/// Seam between the wizard and the clinic backend.
///
/// Implementations map transport outcomes onto [`SubmissionError`]; the
/// wizard never sees status codes or sockets directly.
pub trait BookingApi {
    fn create_booking(
        &mut self,
        request: &BookingRequest,
    ) -> Result<BookingReceipt, SubmissionError>;
}
