//! Core logic for the party RSVP page.
//!
//! Everything that can be tested without a browser lives here: form
//! validation, the submission guard that enforces the soft
//! "one submission per browser" policy, and the store abstraction
//! behind the persisted already-submitted flag.

pub mod guard;
pub mod store;
pub mod submission;

// Re-export commonly used types
pub use guard::{GuardError, Phase, SubmissionGuard, SubmitDecision};
pub use store::{MemoryStore, SubmissionStore};
pub use submission::{FieldErrors, RsvpForm, RsvpSubmission};
