//! Step screens and the pure renderers behind them.
//!
//! Renderers take plain data and return strings, so tests can pin the
//! layout without a terminal. Screens own the dialogue for one wizard
//! step and report how the visitor left it.

use chrono::NaiveDate;

use super::navigation;
use super::output;
use super::prompts::{self, PromptMode};
use crate::catalog::text::Language;
use crate::errors::CliError;
use crate::wizard::calendar::day_flags;
use crate::wizard::slots;
use crate::wizard::{
    BookingConfirmation, BookingWizard, CalendarCell, DayPeriod, MonthCursor, Step, SummaryView,
};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// How the visitor left a step screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenOutcome {
    /// Selections made; ask the wizard to advance.
    Continue,
    /// One step back.
    Back,
    /// Edit an earlier step.
    Jump(Step),
    /// Abandon the booking.
    Cancel,
}

fn pick_label(language: Language, en: &'static str, ar: &'static str) -> &'static str {
    match language {
        Language::En => en,
        Language::Ar => ar,
    }
}

/// Month grid as fixed-width text. Day cells are four columns wide:
/// the selected day is bracketed, today starred, past days dotted.
pub fn render_month(
    cursor: MonthCursor,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    language: Language,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{:^28}", cursor.label(language)).trim_end().to_string());
    lines.push(
        WEEKDAYS
            .iter()
            .map(|day| format!("{day:>3} "))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );
    let cells: Vec<String> = cursor
        .grid()
        .iter()
        .map(|cell| render_cell(cursor, *cell, today, selected))
        .collect();
    for row in cells.chunks(7) {
        lines.push(row.concat().trim_end().to_string());
    }
    lines.join("\n")
}

fn render_cell(
    cursor: MonthCursor,
    cell: CalendarCell,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> String {
    match cell {
        CalendarCell::Empty => "    ".to_string(),
        CalendarCell::Day(day) => match cursor.date(day) {
            None => "    ".to_string(),
            Some(date) => {
                let flags = day_flags(date, today, selected);
                if flags.selected {
                    format!("[{day:>2}]")
                } else if flags.today {
                    format!("{day:>3}*")
                } else if flags.past {
                    format!("{day:>3}.")
                } else {
                    format!("{day:>3} ")
                }
            }
        },
    }
}

/// Summary panel, one aligned row per step. Editable rows carry a
/// trailing marker and a hint line explains it.
pub fn render_summary(view: &SummaryView, language: Language) -> String {
    let width = view
        .entries
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0)
        + 1;
    let mut lines = Vec::with_capacity(view.entries.len() + 1);
    for entry in &view.entries {
        let label = format!("{}:", entry.label);
        let marker = if entry.editable { " *" } else { "" };
        lines.push(format!("{label:<width$}  {}{marker}", entry.text(language)));
    }
    if view.entries.iter().any(|entry| entry.editable) {
        lines.push(
            pick_label(language, "* can still be changed", "* لا يزال قابلاً للتعديل").to_string(),
        );
    }
    lines.join("\n")
}

/// Closing panel shown once the backend accepted the booking.
pub fn render_confirmation(confirmation: &BookingConfirmation, language: Language) -> String {
    let minutes = pick_label(language, "min", "دقيقة");
    let rows = [
        (
            pick_label(language, "Reference", "المرجع"),
            confirmation.booking_id.clone(),
        ),
        (
            pick_label(language, "Status", "الحالة"),
            confirmation.status.clone(),
        ),
        (
            pick_label(language, "Branch", "الفرع"),
            confirmation.branch.name.pick(language).to_string(),
        ),
        (
            pick_label(language, "Service", "الخدمة"),
            format!(
                "{} ({} {})",
                confirmation.service.name.pick(language),
                confirmation.service.duration_min,
                minutes
            ),
        ),
        (
            pick_label(language, "Date & time", "التاريخ والوقت"),
            format!("{} {}", confirmation.date.format("%Y-%m-%d"), confirmation.time),
        ),
        (
            pick_label(language, "Name", "الاسم"),
            confirmation.contact.full_name.clone(),
        ),
        (
            pick_label(language, "Phone", "الهاتف"),
            confirmation.contact.phone.clone(),
        ),
    ];
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        + 1;
    let title = pick_label(language, "Booking confirmed", "تم تأكيد الحجز");
    let mut lines = vec![format!("=== {title} ===")];
    for (label, value) in rows {
        let label = format!("{label}:");
        lines.push(format!("{label:<width$}  {value}"));
    }
    lines.join("\n")
}

pub fn branch_screen(
    wizard: &mut BookingWizard,
    mode: PromptMode,
    language: Language,
) -> Result<ScreenOutcome, CliError> {
    let choices: Vec<(String, String)> = wizard
        .catalog()
        .branches
        .iter()
        .map(|branch| {
            (
                branch.id.clone(),
                format!(
                    "{} ({:.1}/5, {} {})",
                    branch.name.pick(language),
                    branch.rating,
                    branch.review_count,
                    pick_label(language, "reviews", "تقييم")
                ),
            )
        })
        .collect();
    let items: Vec<String> = choices.iter().map(|(_, label)| label.clone()).collect();
    match prompts::select(
        mode,
        pick_label(language, "Choose a branch", "اختر الفرع"),
        &items,
    )? {
        Some(index) => {
            if let Err(err) = wizard.select_branch(&choices[index].0) {
                output::error(err);
            }
            Ok(ScreenOutcome::Continue)
        }
        None => Ok(ScreenOutcome::Cancel),
    }
}

pub fn service_screen(
    wizard: &mut BookingWizard,
    mode: PromptMode,
    language: Language,
) -> Result<ScreenOutcome, CliError> {
    let choices: Vec<(String, String)> = wizard
        .services_for_selected_branch()
        .iter()
        .map(|service| {
            (
                service.id.clone(),
                format!(
                    "{} ({} {}, {})",
                    service.name.pick(language),
                    service.duration_min,
                    pick_label(language, "min", "دقيقة"),
                    service.price_range.pick(language)
                ),
            )
        })
        .collect();
    if choices.is_empty() {
        output::warning(pick_label(
            language,
            "This branch has no bookable services",
            "لا توجد خدمات متاحة في هذا الفرع",
        ));
        return Ok(ScreenOutcome::Back);
    }
    let items: Vec<String> = choices.iter().map(|(_, label)| label.clone()).collect();
    match prompts::select(
        mode,
        pick_label(language, "Choose a service", "اختر الخدمة"),
        &items,
    )? {
        Some(index) => {
            if let Err(err) = wizard.select_service(&choices[index].0) {
                output::error(err);
            }
            Ok(ScreenOutcome::Continue)
        }
        None => Ok(ScreenOutcome::Back),
    }
}

pub fn datetime_screen(
    wizard: &mut BookingWizard,
    mode: PromptMode,
    language: Language,
) -> Result<ScreenOutcome, CliError> {
    let date = loop {
        match pick_date(wizard, mode, language)? {
            None => return Ok(ScreenOutcome::Back),
            Some(candidate) => match wizard.select_date(candidate) {
                Ok(()) => break candidate,
                Err(err) => output::warning(err),
            },
        }
    };
    loop {
        let period_items: Vec<String> = DayPeriod::ALL
            .iter()
            .map(|period| period.label(language).to_string())
            .collect();
        let period = match prompts::select(
            mode,
            pick_label(language, "Which part of the day?", "أي فترة من اليوم؟"),
            &period_items,
        )? {
            None => return Ok(ScreenOutcome::Back),
            Some(index) => DayPeriod::ALL[index],
        };
        let period_slots = slots::slots_in(period);
        let items: Vec<String> = period_slots
            .iter()
            .map(|slot| {
                if wizard.catalog().availability.is_disabled(date, *slot) {
                    format!(
                        "{} ({})",
                        slot,
                        pick_label(language, "unavailable", "غير متاح")
                    )
                } else {
                    slot.to_string()
                }
            })
            .collect();
        match prompts::select(
            mode,
            pick_label(language, "Choose a time", "اختر الوقت"),
            &items,
        )? {
            None => continue,
            Some(index) => match wizard.select_slot(period_slots[index].as_str()) {
                Ok(()) => return Ok(ScreenOutcome::Continue),
                Err(err) => output::warning(err),
            },
        }
    }
}

fn pick_date(
    wizard: &BookingWizard,
    mode: PromptMode,
    language: Language,
) -> Result<Option<NaiveDate>, CliError> {
    match mode {
        PromptMode::Interactive => {
            navigation::pick_date_interactive(wizard.today(), wizard.draft().date, language)
        }
        PromptMode::Script => scripted_date(wizard, language),
    }
}

fn scripted_date(
    wizard: &BookingWizard,
    language: Language,
) -> Result<Option<NaiveDate>, CliError> {
    let today = wizard.today();
    let selected = wizard.draft().date;
    let cursor = MonthCursor::from_date(selected.unwrap_or(today));
    println!("\n{}", render_month(cursor, today, selected, language));
    loop {
        match prompts::text(
            PromptMode::Script,
            pick_label(
                language,
                "Appointment date (YYYY-MM-DD)",
                "تاريخ الموعد (YYYY-MM-DD)",
            ),
            false,
        )? {
            None => return Ok(None),
            Some(raw) => match raw.parse::<NaiveDate>() {
                Ok(date) => return Ok(Some(date)),
                Err(_) => output::warning(pick_label(
                    language,
                    "Dates look like 2025-03-20",
                    "التاريخ بصيغة 2025-03-20",
                )),
            },
        }
    }
}

pub fn details_screen(
    wizard: &mut BookingWizard,
    mode: PromptMode,
    language: Language,
) -> Result<ScreenOutcome, CliError> {
    let contact = wizard.draft().contact.clone();

    let full_name = match field_input(
        mode,
        pick_label(language, "Full name", "الاسم الكامل"),
        &contact.full_name,
        false,
    )? {
        Some(value) => value,
        None => return Ok(ScreenOutcome::Back),
    };
    wizard.set_full_name(&full_name)?;

    let phone = match field_input(
        mode,
        pick_label(language, "Phone number", "رقم الهاتف"),
        &contact.phone,
        false,
    )? {
        Some(value) => value,
        None => return Ok(ScreenOutcome::Back),
    };
    wizard.set_phone(&phone)?;

    let email = match field_input(
        mode,
        pick_label(language, "Email (optional)", "البريد الإلكتروني (اختياري)"),
        &contact.email,
        true,
    )? {
        Some(value) => value,
        None => return Ok(ScreenOutcome::Back),
    };
    wizard.set_email(&email)?;

    let notes = match field_input(
        mode,
        pick_label(language, "Notes (optional)", "ملاحظات (اختياري)"),
        &contact.notes,
        true,
    )? {
        Some(value) => value,
        None => return Ok(ScreenOutcome::Back),
    };
    wizard.set_notes(&notes)?;

    let policy_default = wizard.draft().policy_agreed;
    match prompts::confirm(
        mode,
        pick_label(
            language,
            "I agree to the booking policy",
            "أوافق على سياسة الحجز",
        ),
        policy_default,
    )? {
        None => return Ok(ScreenOutcome::Back),
        Some(agreed) => wizard.set_policy_agreed(agreed)?,
    }

    output::blank_line();
    println!("{}", render_summary(&wizard.summary(language), language));

    let items: Vec<String> = [
        pick_label(language, "Confirm booking", "تأكيد الحجز"),
        pick_label(language, "Edit branch", "تعديل الفرع"),
        pick_label(language, "Edit service", "تعديل الخدمة"),
        pick_label(language, "Edit date & time", "تعديل التاريخ والوقت"),
        pick_label(language, "Cancel booking", "إلغاء الحجز"),
    ]
    .iter()
    .map(|label| label.to_string())
    .collect();
    match prompts::select(
        mode,
        pick_label(language, "Everything correct?", "هل كل شيء صحيح؟"),
        &items,
    )? {
        Some(0) => Ok(ScreenOutcome::Continue),
        Some(1) => Ok(ScreenOutcome::Jump(Step::Branch)),
        Some(2) => Ok(ScreenOutcome::Jump(Step::Service)),
        Some(3) => Ok(ScreenOutcome::Jump(Step::DateTime)),
        Some(_) => Ok(ScreenOutcome::Cancel),
        None => Ok(ScreenOutcome::Back),
    }
}

// Blank input keeps whatever the draft already holds, which makes
// revisiting the details step cheap.
fn field_input(
    mode: PromptMode,
    label: &str,
    current: &str,
    allow_empty: bool,
) -> Result<Option<String>, CliError> {
    let current = current.trim();
    let prompt = if current.is_empty() {
        label.to_string()
    } else {
        format!("{label} [{current}]")
    };
    let allow = allow_empty || !current.is_empty();
    match prompts::text(mode, &prompt, allow)? {
        None => Ok(None),
        Some(value) if value.is_empty() && !current.is_empty() => Ok(Some(current.to_string())),
        Some(value) => Ok(Some(value)),
    }
}
