mod common;

use insta::assert_snapshot;
use regex::Regex;

use booking_core::catalog::{Catalog, Language};
use booking_core::cli::screens::{render_confirmation, render_month, render_summary};
use booking_core::wizard::slots::find_slot;
use booking_core::wizard::{summary, MonthCursor, SelectionDraft, Step, StepOutcome};

use common::{date, draft_to_details, sample_wizard};

fn detailed_draft() -> SelectionDraft {
    let catalog = Catalog::sample();
    let mut draft = SelectionDraft::new();
    draft.branch = catalog.branch("olaya").cloned();
    draft.service = catalog.service("hydrafacial").cloned();
    draft.date = Some(date(2025, 3, 20));
    draft.time = find_slot("09:30");
    draft.contact.full_name = "Sara Youssef".into();
    draft.contact.phone = "+966 55 123 4567".into();
    draft
}

#[test]
fn month_grid_layout() {
    let rendered = render_month(
        MonthCursor::new(2025, 3),
        date(2025, 3, 14),
        Some(date(2025, 3, 20)),
        Language::En,
    );
    assert_snapshot!("month_march_2025", rendered);
}

#[test]
fn summary_panel_english() {
    let view = summary::project(&detailed_draft(), Step::Details, false, Language::En);
    assert_snapshot!("summary_details_en", render_summary(&view, Language::En));
}

#[test]
fn summary_panel_arabic() {
    let view = summary::project(&detailed_draft(), Step::Details, false, Language::Ar);
    assert_snapshot!("summary_details_ar", render_summary(&view, Language::Ar));
}

#[test]
fn confirmation_panel_english() {
    let mut wizard = sample_wizard();
    draft_to_details(&mut wizard);
    let confirmation = match wizard.next().expect("submit") {
        StepOutcome::Confirmed(confirmation) => confirmation,
        other => panic!("expected a confirmation, got {other:?}"),
    };
    let rendered = render_confirmation(&confirmation, Language::En);
    let scrubbed = Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("uuid pattern")
        .replace_all(&rendered, "[BOOKING-ID]");
    assert_snapshot!("confirmation_en", scrubbed);
}
