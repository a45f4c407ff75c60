use dioxus::prelude::*;
use store::{PartyDetail, PartyId};

use crate::views::SelectPartyPlaceholder;
use crate::GuestList;

/// Detailed information about the selected party, or a prompt to pick one.
#[component]
pub fn PartyDetailPane(detail: PartyDetail, on_delete: EventHandler<PartyId>) -> Element {
    let PartyDetail::Party { party, guests } = detail else {
        return rsx! {
            SelectPartyPlaceholder {}
        };
    };

    let id = party.id;
    let day = party.day().to_string();

    rsx! {
        section {
            h3 { "{party.name} #{party.id}" }
            time { "datetime": "{party.date}", "{day}" }
            address { "{party.location}" }
            p { "{party.description}" }
            GuestList { guests }
            button {
                class: "delete",
                "data-action": "delete",
                "data-id": "{id}",
                onclick: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    on_delete.call(id);
                },
                "Delete Party"
            }
        }
    }
}
