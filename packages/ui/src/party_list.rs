use dioxus::prelude::*;
use store::{PartyEntry, PartyId};

/// Names of all parties; clicking one asks for its details.
#[component]
pub fn PartyList(entries: Vec<PartyEntry>, on_select: EventHandler<PartyId>) -> Element {
    rsx! {
        ul {
            class: "parties",
            for entry in entries {
                li {
                    key: "{entry.id}",
                    class: if entry.selected { "selected" },
                    onclick: move |_| on_select.call(entry.id),
                    a { href: "#selected", "{entry.name}" }
                }
            }
        }
    }
}
