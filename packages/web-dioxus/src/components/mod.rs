//! Shared UI components

mod confirm_dialog;
mod toast;

pub use confirm_dialog::ConfirmDialog;
pub use toast::{use_toast, ToastProvider};
