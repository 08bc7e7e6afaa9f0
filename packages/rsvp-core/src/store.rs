//! Persisted "already submitted" flag behind a seam trait.
//!
//! The real page backs this with browser `localStorage`; tests use
//! [`MemoryStore`]. The flag is write-once: nothing in the system ever
//! clears it.

use std::cell::Cell;
use std::rc::Rc;

/// Store for the single boolean "this browser has already RSVP'd" flag.
pub trait SubmissionStore {
    fn has_submitted(&self) -> bool;

    /// Record a confirmed successful submission. Idempotent.
    fn mark_submitted(&self);
}

/// In-memory store. Clones share the same flag, so a test can keep a
/// handle while the guard owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    submitted: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionStore for MemoryStore {
    fn has_submitted(&self) -> bool {
        self.submitted.get()
    }

    fn mark_submitted(&self) {
        self.submitted.set(true);
    }
}
