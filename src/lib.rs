#![doc(test(attr(deny(warnings))))]

//! Booking Core models a clinic's appointment wizard: branch and service
//! catalogs, the step-by-step flow, calendar and time-slot pickers, and
//! submission to the booking backend.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Booking Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
