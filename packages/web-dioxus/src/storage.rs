//! Browser-local persistence for the already-submitted flag.

use rsvp_core::SubmissionStore;
use tracing::warn;
use web_sys::Storage;

/// localStorage key for the flag. The stored value is the string
/// `"true"`; it is never cleared once set.
pub const SUBMITTED_KEY: &str = "rsvp_submitted";

/// [`SubmissionStore`] backed by the browser's localStorage.
///
/// Storage can be unavailable (private browsing, blocked cookies); that
/// degrades to "never submitted" with a warning rather than breaking
/// the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFlagStore;

impl LocalFlagStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SubmissionStore for LocalFlagStore {
    fn has_submitted(&self) -> bool {
        match Self::storage() {
            Some(storage) => matches!(
                storage.get_item(SUBMITTED_KEY),
                Ok(Some(value)) if value == "true"
            ),
            None => {
                warn!("localStorage unavailable, treating browser as not submitted");
                false
            }
        }
    }

    fn mark_submitted(&self) {
        let Some(storage) = Self::storage() else {
            warn!("localStorage unavailable, submission flag not persisted");
            return;
        };
        if storage.set_item(SUBMITTED_KEY, "true").is_err() {
            warn!("failed to persist submission flag");
        }
    }
}
