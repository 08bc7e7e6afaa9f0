//! Confirmation dialog

use dioxus::prelude::*;

/// Modal confirmation dialog with confirm/cancel actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/50 px-4",
            div {
                class: "bg-white rounded-lg shadow-xl max-w-md w-full p-6 space-y-4",
                h2 { class: "text-xl font-bold text-gray-900", "{title}" }
                p { class: "text-gray-600", "{message}" }
                div {
                    class: "flex justify-end gap-3 pt-2",
                    button {
                        r#type: "button",
                        class: "px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50 transition-colors",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    button {
                        r#type: "button",
                        class: "px-4 py-2 rounded-lg bg-pink-600 text-white hover:bg-pink-700 transition-colors font-medium",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
