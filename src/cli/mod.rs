//! Terminal front end for the booking wizard.

pub mod navigation;
pub mod output;
pub mod prompts;
pub mod runner;
pub mod screens;
pub mod script;

pub use runner::run_wizard;
