//! Root application component

use dioxus::prelude::*;

use crate::components::ToastProvider;
use crate::pages::Rsvp;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Toast context wraps the single page
        ToastProvider {
            Rsvp {}
        }
    }
}
