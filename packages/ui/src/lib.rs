//! This crate contains all shared UI for the party planner.

pub mod planner;
pub use planner::{
    add_party, initialize, refresh_guests, refresh_parties, refresh_rsvps, remove_party,
    select_party, use_events_api, use_planner, PlannerCell, PlannerProvider,
};

pub mod views;

mod party_list;
pub use party_list::PartyList;

mod party_detail;
pub use party_detail::PartyDetailPane;

mod guest_list;
pub use guest_list::GuestList;

mod add_party_form;
pub use add_party_form::{AddPartyForm, PartyFormFields};

/// Render a root component to static HTML.
#[cfg(test)]
pub(crate) fn render_to_string(app: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
