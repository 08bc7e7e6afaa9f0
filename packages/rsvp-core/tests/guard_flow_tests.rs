//! End-to-end flows through the submission guard, with the store and
//! the network send replaced by in-memory fakes.

use rsvp_core::{
    FieldErrors, MemoryStore, Phase, RsvpForm, RsvpSubmission, SubmissionGuard, SubmissionStore,
    SubmitDecision,
};

fn valid_form() -> RsvpForm {
    RsvpForm {
        name: "Ana Souza".to_string(),
        children: "2".to_string(),
        adults: "1".to_string(),
    }
}

/// Stand-in for the webhook: records what would have been sent.
#[derive(Default)]
struct SentLog {
    sent: Vec<RsvpSubmission>,
}

impl SentLog {
    fn send(&mut self, submission: RsvpSubmission) {
        self.sent.push(submission);
    }
}

#[test]
fn first_time_flow_sends_once_and_sets_the_flag() {
    let store = MemoryStore::new();
    let mut guard = SubmissionGuard::new(store.clone());
    let mut log = SentLog::default();

    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    match guard.attempt_submit(staged) {
        SubmitDecision::Send(sub) => log.send(sub),
        SubmitDecision::ConfirmFirst => panic!("no prior submission, should send immediately"),
    }

    // 2xx response
    guard.record_success();

    assert_eq!(log.sent.len(), 1);
    assert!(store.has_submitted());
    assert_eq!(guard.phase(), Phase::Idle);
}

#[test]
fn second_attempt_after_a_success_prompts_for_confirmation() {
    let mut guard = SubmissionGuard::new(MemoryStore::new());

    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    assert!(matches!(
        guard.attempt_submit(staged),
        SubmitDecision::Send(_)
    ));
    guard.record_success();

    // Same session, same browser: the prompt appears before any send.
    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    assert_eq!(guard.attempt_submit(staged), SubmitDecision::ConfirmFirst);
}

#[test]
fn duplicate_flow_sends_nothing_until_confirmed() {
    let store = MemoryStore::new();
    store.mark_submitted();
    let mut guard = SubmissionGuard::new(store);
    let mut log = SentLog::default();

    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    match guard.attempt_submit(staged.clone()) {
        SubmitDecision::Send(_) => panic!("must not send before confirmation"),
        SubmitDecision::ConfirmFirst => {}
    }
    assert!(log.sent.is_empty());

    let resend = guard.confirm_resubmit().unwrap();
    log.send(resend);
    guard.record_success();

    assert_eq!(log.sent, vec![staged]);
}

#[test]
fn confirmation_resends_the_staged_data_not_later_edits() {
    let store = MemoryStore::new();
    store.mark_submitted();
    let mut guard = SubmissionGuard::new(store);

    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    guard.attempt_submit(staged.clone());

    // The guest edits the form while the dialog is open; those edits
    // were never validated and must not leak into the resend.
    let resend = guard.confirm_resubmit().unwrap();
    assert_eq!(resend, staged);
    assert_eq!(resend.name, "Ana Souza");
    assert_eq!(resend.children, 2);
    assert_eq!(resend.adults, 1);
}

#[test]
fn failed_send_leaves_the_flag_unset_and_the_next_attempt_first_time() {
    let store = MemoryStore::new();
    let mut guard = SubmissionGuard::new(store.clone());

    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    assert!(matches!(
        guard.attempt_submit(staged),
        SubmitDecision::Send(_)
    ));

    // non-2xx response
    guard.record_failure();
    assert!(!store.has_submitted());
    assert_eq!(guard.phase(), Phase::Idle);

    // Retry is treated as first-time: no confirmation prompt.
    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    assert!(matches!(
        guard.attempt_submit(staged),
        SubmitDecision::Send(_)
    ));
}

#[test]
fn cancelling_the_prompt_keeps_the_session_reusable() {
    let store = MemoryStore::new();
    store.mark_submitted();
    let mut guard = SubmissionGuard::new(store);

    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    guard.attempt_submit(staged);
    guard.cancel();
    assert_eq!(guard.phase(), Phase::Idle);

    // A fresh attempt still works and still prompts.
    let staged = guard.validate_and_stage(&valid_form()).unwrap();
    assert_eq!(guard.attempt_submit(staged), SubmitDecision::ConfirmFirst);
}

#[test]
fn a_new_attempt_overwrites_the_staged_submission() {
    let store = MemoryStore::new();
    store.mark_submitted();
    let mut guard = SubmissionGuard::new(store);

    let first = guard.validate_and_stage(&valid_form()).unwrap();
    guard.attempt_submit(first);
    guard.cancel();

    let edited = RsvpForm {
        name: "Ana Souza".to_string(),
        children: "3".to_string(),
        adults: "2".to_string(),
    };
    let second = guard.validate_and_stage(&edited).unwrap();
    guard.attempt_submit(second.clone());

    let resend = guard.confirm_resubmit().unwrap();
    assert_eq!(resend, second);
    assert_eq!(resend.children, 3);
}

#[test]
fn validation_errors_block_the_attempt_entirely() {
    let mut guard = SubmissionGuard::new(MemoryStore::new());
    let form = RsvpForm {
        name: "  a ".to_string(),
        children: "nan".to_string(),
        adults: "51".to_string(),
    };

    let errors: FieldErrors = guard.validate_and_stage(&form).unwrap_err();
    assert!(errors.name.is_some());
    assert!(errors.children.is_some());
    assert!(errors.adults.is_some());
    assert_eq!(guard.phase(), Phase::Idle);
}

#[test]
fn wire_shape_matches_the_webhook_contract() {
    let mut guard = SubmissionGuard::new(MemoryStore::new());
    let staged = guard.validate_and_stage(&valid_form()).unwrap();

    let json = serde_json::to_value(&staged).unwrap();
    assert_eq!(json["nome"], "Ana Souza");
    assert_eq!(json["criancas"], 2);
    assert_eq!(json["adultos"], 1);
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(
        timestamp.parse::<chrono::DateTime<chrono::Utc>>().is_ok(),
        "timestamp should be RFC 3339, got {timestamp}"
    );
}
