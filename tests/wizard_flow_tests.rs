mod common;

use booking_core::api::InMemoryBookingApi;
use booking_core::catalog::{Catalog, Language};
use booking_core::errors::{SelectionError, SubmissionError, TransitionError, WizardError};
use booking_core::wizard::{BookingWizard, Step, StepOutcome};

use common::{date, draft_to_details, sample_wizard, today};

#[test]
fn full_walk_reaches_confirmation_and_sends_once() {
    let api = InMemoryBookingApi::new();
    let log = api.log();
    let mut wizard = BookingWizard::new(Catalog::sample(), today(), Box::new(api));

    draft_to_details(&mut wizard);
    let outcome = wizard.next().expect("submit");
    match outcome {
        StepOutcome::Confirmed(confirmation) => {
            assert_eq!(confirmation.status, "pending");
            assert_eq!(confirmation.branch.id, "olaya");
            assert_eq!(confirmation.service.id, "hydrafacial");
            assert_eq!(confirmation.time.as_str(), "09:30");
        }
        other => panic!("expected a confirmation, got {other:?}"),
    }
    assert!(wizard.is_confirmed());

    let sent = log.lock().expect("request log");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].branch_id, "olaya");
    assert_eq!(sent[0].service_id, "hydrafacial");
    assert_eq!(sent[0].time, "09:30");
}

#[test]
fn summary_fills_in_as_the_visitor_advances() {
    let mut wizard = sample_wizard();
    let view = wizard.summary(Language::En);
    assert!(view.entries.iter().all(|entry| entry.value.is_none()));
    assert!(view.entries.iter().all(|entry| !entry.editable));

    wizard.select_branch("nakheel").expect("select branch");
    wizard.next().expect("advance");

    let view = wizard.summary(Language::En);
    let branch = view.entry(Step::Branch).expect("branch entry");
    assert_eq!(branch.value.as_deref(), Some("Al Nakheel Clinic"));
    assert!(branch.editable, "passed steps can be edited");
    let service = view.entry(Step::Service).expect("service entry");
    assert_eq!(service.value, None);
    assert!(!service.editable);
}

#[test]
fn branch_switch_drops_service_the_new_branch_lacks() {
    let mut wizard = sample_wizard();
    wizard.select_branch("khobar").expect("select branch");
    wizard.next().expect("advance");
    wizard.select_service("whitening").expect("select service");
    wizard.next().expect("advance");
    wizard.select_date(date(2025, 3, 21)).expect("select date");
    wizard.select_slot("17:00").expect("select slot");
    wizard.next().expect("advance");

    wizard.jump_to(Step::Branch).expect("jump back");
    wizard.select_branch("olaya").expect("switch branch");

    assert!(
        wizard.draft().service.is_none(),
        "whitening is not offered at olaya"
    );
    assert_eq!(wizard.draft().date, Some(date(2025, 3, 21)));
    assert!(wizard.draft().time.is_some(), "slot survives the switch");

    wizard.next().expect("branch step still passes");
    let err = wizard.next().expect_err("service step must block");
    match err {
        WizardError::Transition(TransitionError::Blocked { step, issues }) => {
            assert_eq!(step, Step::Service);
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].field, "service");
        }
        other => panic!("expected a blocked transition, got {other:?}"),
    }
}

#[test]
fn backward_jump_edits_a_slot_then_resubmits() {
    let api = InMemoryBookingApi::new();
    let log = api.log();
    let mut wizard = BookingWizard::new(Catalog::sample(), today(), Box::new(api));
    draft_to_details(&mut wizard);

    wizard.jump_to(Step::DateTime).expect("jump back");
    let err = wizard.jump_to(Step::Details).expect_err("no forward jumps");
    assert!(matches!(err, TransitionError::ForwardJump { .. }));

    wizard.select_slot("11:00").expect("new slot");
    assert_eq!(
        wizard.next().expect("forward again"),
        StepOutcome::Moved(Step::Details)
    );

    let outcome = wizard.next().expect("submit");
    assert!(matches!(outcome, StepOutcome::Confirmed(_)));
    let sent = log.lock().expect("request log");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].time, "11:00");
}

#[test]
fn failed_submission_keeps_the_draft_for_retry() {
    let mut api = InMemoryBookingApi::new();
    let log = api.log();
    api.fail_next(SubmissionError::Transport("connection reset".into()));
    let mut wizard = BookingWizard::new(Catalog::sample(), today(), Box::new(api));
    draft_to_details(&mut wizard);

    let err = wizard.next().expect_err("first send fails");
    assert!(matches!(
        err,
        WizardError::Submission(SubmissionError::Transport(_))
    ));
    assert_eq!(wizard.step(), Step::Details);
    assert!(!wizard.is_confirmed());
    assert_eq!(wizard.draft().contact.full_name, "Sara Youssef");

    let outcome = wizard.next().expect("retry succeeds");
    assert!(matches!(outcome, StepOutcome::Confirmed(_)));
    assert_eq!(log.lock().expect("request log").len(), 1);
}

#[test]
fn confirmed_wizard_refuses_further_changes() {
    let mut wizard = sample_wizard();
    draft_to_details(&mut wizard);
    wizard.next().expect("submit");

    assert!(matches!(
        wizard.next().expect_err("next after confirm"),
        WizardError::Transition(TransitionError::Confirmed)
    ));
    assert!(matches!(
        wizard.back().expect_err("back after confirm"),
        TransitionError::Confirmed
    ));
    assert!(matches!(
        wizard.select_branch("nakheel").expect_err("edit after confirm"),
        SelectionError::Confirmed
    ));

    let view = wizard.summary(Language::En);
    assert!(view.entries.iter().all(|entry| !entry.editable));
}

#[test]
fn dates_and_slots_outside_the_rules_are_refused() {
    let mut wizard = sample_wizard();
    wizard.select_branch("olaya").expect("select branch");
    wizard.next().expect("advance");
    wizard.select_service("consult").expect("select service");
    wizard.next().expect("advance");

    assert!(matches!(
        wizard.select_date(date(2025, 3, 13)).expect_err("yesterday"),
        SelectionError::PastDate(_)
    ));
    wizard.select_date(today()).expect("today is bookable");

    assert!(matches!(
        wizard.select_slot("10:30").expect_err("blocked slot"),
        SelectionError::SlotUnavailable(_)
    ));
    assert!(matches!(
        wizard.select_slot("07:00").expect_err("not on the timetable"),
        SelectionError::SlotUnavailable(_)
    ));
    wizard.select_slot("09:00").expect("open slot");
}

#[test]
fn service_selection_needs_a_branch_that_offers_it() {
    let mut wizard = sample_wizard();
    assert!(matches!(
        wizard.select_service("consult").expect_err("no branch yet"),
        SelectionError::BranchRequired
    ));

    wizard.select_branch("olaya").expect("select branch");
    let err = wizard.select_service("peel").expect_err("olaya lacks peel");
    match err {
        SelectionError::NotOfferedAtBranch { service, branch } => {
            assert_eq!(service, "peel");
            assert_eq!(branch, "olaya");
        }
        other => panic!("expected a not-offered error, got {other:?}"),
    }
}
