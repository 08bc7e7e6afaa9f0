//! Toast notifications
//!
//! A single transient toast provided through a context, in the spirit of
//! the auth context provider: a struct of signals, a provider component
//! and a `use_*` accessor hook.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Toast context: at most one toast on screen at a time.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toast: Signal<Option<Toast>>,
}

impl ToastContext {
    pub fn success(self, title: impl Into<String>, message: impl Into<String>) {
        self.show(Toast {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn error(self, title: impl Into<String>, message: impl Into<String>) {
        self.show(Toast {
            kind: ToastKind::Error,
            title: title.into(),
            message: message.into(),
        });
    }

    fn show(mut self, toast: Toast) {
        self.toast.set(Some(toast.clone()));

        // Auto-dismiss, but only if a newer toast has not replaced this one.
        spawn(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            if *self.toast.peek() == Some(toast) {
                self.toast.set(None);
            }
        });
    }
}

/// Provider component: makes the context available and renders the
/// toast viewport above the page content.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toast = use_signal(|| None::<Toast>);
    use_context_provider(|| ToastContext { toast });

    rsx! {
        {children}

        if let Some(current) = toast() {
            div {
                class: "fixed bottom-4 right-4 z-50 max-w-sm w-full",
                div {
                    class: match current.kind {
                        ToastKind::Success => "bg-green-50 border border-green-200 text-green-800 p-4 rounded-lg shadow-lg",
                        ToastKind::Error => "bg-red-50 border border-red-200 text-red-800 p-4 rounded-lg shadow-lg",
                    },
                    p { class: "font-semibold", "{current.title}" }
                    p { class: "text-sm mt-1", "{current.message}" }
                }
            }
        }
    }
}

/// Hook to access the toast context
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}
