//! Wires configuration, catalog, backend, and screens into one run.

use tracing::info;

use super::output;
use super::prompts::{self, PromptMode};
use super::screens::{self, ScreenOutcome};
use super::script;
use crate::api::{BookingApi, HttpBookingApi, InMemoryBookingApi};
use crate::catalog::text::Language;
use crate::catalog::{Catalog, CatalogSource, HttpCatalogSource, JsonFileSource, StaticSource};
use crate::config::AppConfig;
use crate::errors::{CliError, SubmissionError, TransitionError, WizardError};
use crate::wizard::{BookingWizard, Step};

fn label(language: Language, en: &'static str, ar: &'static str) -> &'static str {
    match language {
        Language::En => en,
        Language::Ar => ar,
    }
}

/// Runs the booking wizard to completion, cancellation, or failure.
pub fn run_wizard(config: &AppConfig) -> Result<(), CliError> {
    let mode = if config.script || script::has_queue() {
        colored::control::set_override(false);
        PromptMode::Script
    } else {
        PromptMode::Interactive
    };
    let language = config.language;

    output::section(label(
        language,
        "Clinic appointment booking",
        "حجز موعد العيادة",
    ));

    let source = resolve_source(config);
    let catalog = match load_catalog(source.as_ref(), mode, language)? {
        Some(catalog) => catalog,
        None => {
            output::info(label(language, "No booking made.", "لم يتم إجراء أي حجز."));
            return Ok(());
        }
    };

    let api: Box<dyn BookingApi> = match &config.api_base {
        Some(base) => Box::new(HttpBookingApi::new(base.clone())),
        None => {
            output::info(label(
                language,
                "No backend configured; bookings stay on this machine.",
                "لا يوجد خادم؛ تبقى الحجوزات على هذا الجهاز.",
            ));
            Box::new(InMemoryBookingApi::new())
        }
    };

    let mut wizard = BookingWizard::new(catalog, config.today(), api);
    if let Some(branch_id) = &config.default_branch {
        match wizard.select_branch(branch_id) {
            Ok(()) => info!(branch = %branch_id, "preselected branch from the environment"),
            Err(err) => output::warning(format!("Preselected branch skipped: {err}")),
        }
    }

    main_loop(&mut wizard, mode, language)
}

fn resolve_source(config: &AppConfig) -> Box<dyn CatalogSource> {
    if let Some(path) = &config.catalog_path {
        Box::new(JsonFileSource::new(path.clone()))
    } else if let Some(base) = &config.api_base {
        Box::new(HttpCatalogSource::new(base.clone()))
    } else {
        Box::new(StaticSource::sample())
    }
}

fn load_catalog(
    source: &dyn CatalogSource,
    mode: PromptMode,
    language: Language,
) -> Result<Option<Catalog>, CliError> {
    loop {
        match source.fetch() {
            Ok(catalog) => {
                for warning in catalog.warnings() {
                    output::warning(warning);
                }
                return Ok(Some(catalog));
            }
            Err(err) => {
                output::error(format!(
                    "{}: {err}",
                    label(
                        language,
                        "Could not load branches and services",
                        "تعذر تحميل الفروع والخدمات"
                    )
                ));
                let items = vec![
                    label(language, "Retry", "إعادة المحاولة").to_string(),
                    label(language, "Quit", "خروج").to_string(),
                ];
                match prompts::select(
                    mode,
                    label(language, "Reference data is unavailable", "البيانات غير متاحة"),
                    &items,
                )? {
                    Some(0) => continue,
                    _ => return Ok(None),
                }
            }
        }
    }
}

fn main_loop(
    wizard: &mut BookingWizard,
    mode: PromptMode,
    language: Language,
) -> Result<(), CliError> {
    loop {
        if let Some(confirmation) = wizard.confirmation() {
            output::blank_line();
            println!("{}", screens::render_confirmation(confirmation, language));
            output::success(label(
                language,
                "See you at the clinic!",
                "نراك في العيادة!",
            ));
            return Ok(());
        }

        let step = wizard.step();
        output::section(format!(
            "{} {} / 4: {}",
            label(language, "Step", "الخطوة"),
            step.index(),
            step.title(language)
        ));
        println!(
            "{}",
            screens::render_summary(&wizard.summary(language), language)
        );
        output::blank_line();

        let outcome = match step {
            Step::Branch => screens::branch_screen(wizard, mode, language)?,
            Step::Service => screens::service_screen(wizard, mode, language)?,
            Step::DateTime => screens::datetime_screen(wizard, mode, language)?,
            Step::Details => screens::details_screen(wizard, mode, language)?,
        };

        match outcome {
            ScreenOutcome::Continue => match wizard.next() {
                Ok(_) => {}
                Err(WizardError::Transition(TransitionError::Blocked { issues, .. })) => {
                    for issue in issues {
                        output::warning(issue.message);
                    }
                }
                Err(WizardError::Submission(err)) => {
                    if !submission_recovery(wizard, &err, mode, language)? {
                        output::info(label(language, "Booking cancelled.", "تم إلغاء الحجز."));
                        return Ok(());
                    }
                }
                Err(err) => output::error(err),
            },
            ScreenOutcome::Back => match wizard.back() {
                Ok(_) => {}
                Err(TransitionError::AtFirstStep) => {
                    if confirm_cancel(mode, language)? {
                        output::info(label(language, "Booking cancelled.", "تم إلغاء الحجز."));
                        return Ok(());
                    }
                }
                Err(err) => output::error(err),
            },
            ScreenOutcome::Jump(target) => {
                if let Err(err) = wizard.jump_to(target) {
                    output::error(err);
                }
            }
            ScreenOutcome::Cancel => {
                if confirm_cancel(mode, language)? {
                    output::info(label(language, "Booking cancelled.", "تم إلغاء الحجز."));
                    return Ok(());
                }
            }
        }
    }
}

// True keeps the wizard open, false means the visitor gave up.
fn submission_recovery(
    wizard: &mut BookingWizard,
    first: &SubmissionError,
    mode: PromptMode,
    language: Language,
) -> Result<bool, CliError> {
    describe_submission_error(first, language);
    loop {
        let items = vec![
            label(language, "Try again", "حاول مرة أخرى").to_string(),
            label(language, "Review details", "مراجعة البيانات").to_string(),
            label(language, "Cancel booking", "إلغاء الحجز").to_string(),
        ];
        match prompts::select(
            mode,
            label(language, "The booking was not sent", "لم يتم إرسال الحجز"),
            &items,
        )? {
            Some(0) => match wizard.next() {
                Ok(_) => return Ok(true),
                Err(WizardError::Submission(err)) => describe_submission_error(&err, language),
                Err(err) => {
                    output::error(err);
                    return Ok(true);
                }
            },
            Some(1) | None => return Ok(true),
            _ => return Ok(false),
        }
    }
}

fn describe_submission_error(err: &SubmissionError, language: Language) {
    match err {
        SubmissionError::Rejected { fields, .. } => {
            output::error(label(
                language,
                "The clinic could not accept this booking",
                "لم تتمكن العيادة من قبول هذا الحجز",
            ));
            for (field, message) in fields {
                output::warning(format!("{field}: {message}"));
            }
        }
        SubmissionError::IncompleteDraft(issues) => {
            output::error(label(
                language,
                "The booking is missing required information",
                "الحجز ينقصه معلومات مطلوبة",
            ));
            for issue in issues {
                output::warning(format!("{}: {}", issue.field, issue.message));
            }
        }
        other => output::error(format!(
            "{}: {other}",
            label(language, "Sending failed", "فشل الإرسال")
        )),
    }
}

fn confirm_cancel(mode: PromptMode, language: Language) -> Result<bool, CliError> {
    let answer = prompts::confirm(
        mode,
        label(language, "Discard this booking?", "هل تريد تجاهل هذا الحجز؟"),
        false,
    )?;
    // A drained script reads as giving up, so EOF cannot wedge the loop.
    Ok(answer.unwrap_or(mode == PromptMode::Script))
}
