use dioxus::prelude::*;
use store::Guest;

/// Guests attending the selected party.
#[component]
pub fn GuestList(guests: Vec<Guest>) -> Element {
    rsx! {
        ul {
            class: "guests",
            for guest in guests {
                li { key: "{guest.id}", "{guest.name}" }
            }
        }
    }
}
