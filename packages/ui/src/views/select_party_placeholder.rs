use dioxus::prelude::*;

/// Empty state shown when no party is selected.
#[component]
pub fn SelectPartyPlaceholder() -> Element {
    rsx! {
        p { class: "placeholder", "Please select a party to learn more." }
    }
}
