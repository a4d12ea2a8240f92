//! The booking flow: step machine, calendar and slot models, validation
//! gate, summary projection, and submission.

pub mod calendar;
pub mod controller;
pub mod draft;
pub mod gate;
pub mod slots;
pub mod step;
pub mod submission;
pub mod summary;

pub use calendar::{CalendarCell, DayFlags, MonthCursor};
pub use controller::{BookingWizard, StepOutcome};
pub use draft::{ContactDetails, SelectionDraft};
pub use gate::ValidationIssue;
pub use slots::{DayPeriod, SlotAvailability, TimeSlot};
pub use step::Step;
pub use submission::{
    BookingConfirmation, BookingReceipt, BookingRequest, SubmissionHandler,
};
pub use summary::{SummaryEntry, SummaryView};
