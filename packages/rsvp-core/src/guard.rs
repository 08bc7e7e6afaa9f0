//! Submission guard: the state machine behind the submit button.
//!
//! The guard enforces a soft "one submission per browser" policy. A
//! first-time submission goes straight out; once the persisted flag is
//! set, the next attempt is intercepted and the user must confirm that
//! the new response supersedes the earlier one. The guard never touches
//! the network itself: it hands out decisions and the caller performs
//! the send, then reports the outcome back.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::store::SubmissionStore;
use crate::submission::{FieldErrors, RsvpForm, RsvpSubmission};

/// Where the current attempt stands. Every attempt ends back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    AwaitingConfirmation,
    Sending,
}

/// Outcome of [`SubmissionGuard::attempt_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// No prior submission recorded: send this now.
    Send(RsvpSubmission),
    /// A prior submission is recorded: ask the user before sending.
    ConfirmFirst,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    /// Resubmission was confirmed but nothing validated is staged.
    /// Only reachable through an inconsistent UI state; the fix is to
    /// fill the form in again, never to send a partial record.
    #[error("no staged submission to resend")]
    InconsistentState,
}

/// Per-session guard over the submit flow.
///
/// Holds the most recently validated submission so a confirmed
/// resubmission sends exactly what was validated, never whatever the
/// form controls happen to contain by then.
#[derive(Debug)]
pub struct SubmissionGuard<S> {
    store: S,
    staged: Option<RsvpSubmission>,
    phase: Phase,
    submitted: bool,
}

impl<S: SubmissionStore> SubmissionGuard<S> {
    /// The persisted flag is read once here to seed the session; all
    /// later checks use the cached value.
    pub fn new(store: S) -> Self {
        let submitted = store.has_submitted();
        Self {
            store,
            staged: None,
            phase: Phase::Idle,
            submitted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// Validate raw form input and stage the result for this attempt.
    ///
    /// On success the staged submission (stamped with the current time)
    /// is returned for [`Self::attempt_submit`]; any previous staged
    /// data is overwritten. On failure the guard drops back to `Idle`
    /// and the per-field messages are returned for inline display.
    pub fn validate_and_stage(&mut self, form: &RsvpForm) -> Result<RsvpSubmission, FieldErrors> {
        self.phase = Phase::Validating;
        match form.validate(Utc::now()) {
            Ok(submission) => {
                self.staged = Some(submission.clone());
                Ok(submission)
            }
            Err(errors) => {
                self.phase = Phase::Idle;
                Err(errors)
            }
        }
    }

    /// Decide whether a validated submission may go out immediately.
    ///
    /// With the persisted flag unset this enters `Sending` and returns
    /// the submission; with it set, the flow suspends in
    /// `AwaitingConfirmation` and no network call may happen until
    /// [`Self::confirm_resubmit`].
    pub fn attempt_submit(&mut self, submission: RsvpSubmission) -> SubmitDecision {
        if self.submitted {
            info!("prior RSVP recorded for this browser, asking for confirmation");
            self.phase = Phase::AwaitingConfirmation;
            SubmitDecision::ConfirmFirst
        } else {
            self.phase = Phase::Sending;
            SubmitDecision::Send(submission)
        }
    }

    /// Confirm the resubmission and release the staged data for sending.
    pub fn confirm_resubmit(&mut self) -> Result<RsvpSubmission, GuardError> {
        match self.staged.clone() {
            Some(submission) => {
                self.phase = Phase::Sending;
                Ok(submission)
            }
            None => {
                warn!("resubmission confirmed with nothing staged");
                self.phase = Phase::Idle;
                Err(GuardError::InconsistentState)
            }
        }
    }

    /// Back out of the confirmation prompt without sending.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// The send came back 2xx: persist the flag and return to `Idle`.
    pub fn record_success(&mut self) {
        self.submitted = true;
        self.store.mark_submitted();
        self.phase = Phase::Idle;
    }

    /// The send failed. The flag is left untouched so a failed attempt
    /// neither marks the guest as RSVP'd nor triggers the confirmation
    /// prompt on the next try.
    pub fn record_failure(&mut self) {
        self.phase = Phase::Idle;
    }
}
