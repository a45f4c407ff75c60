use dioxus::prelude::*;
use store::{NewParty, PartyId};

use crate::planner::{add_party, remove_party, select_party, use_events_api, use_planner};
use crate::{AddPartyForm, PartyDetailPane, PartyList};

const PLANNER_CSS: Asset = asset!("/assets/planner.css");

/// The whole application view.
///
/// Rebuilt from the planner state on every change; the list, the detail pane
/// and the form each get a fresh snapshot.
#[component]
pub fn PartyPlannerView() -> Element {
    let planner = use_planner();
    let api = use_events_api();

    let state = planner();
    let entries = state.party_entries();
    let detail = state.detail();

    let on_select = {
        let api = api.clone();
        move |id: PartyId| {
            let api = api.clone();
            let mut planner = planner;
            spawn(async move {
                select_party(&api, &mut planner, id).await;
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        move |id: PartyId| {
            let api = api.clone();
            let mut planner = planner;
            spawn(async move {
                remove_party(&api, &mut planner, id).await;
            });
        }
    };

    let on_submit = move |party: NewParty| {
        let api = api.clone();
        let mut planner = planner;
        spawn(async move {
            add_party(&api, &mut planner, &party).await;
        });
    };

    rsx! {
        document::Stylesheet { href: PLANNER_CSS }

        h1 { "Party Planner" }
        main {
            section {
                h2 { "Upcoming Parties" }
                PartyList { entries, on_select }
            }
            section {
                id: "selected",
                h2 { "Party Details" }
                PartyDetailPane { detail, on_delete }
            }
            section {
                id: "add-event",
                h2 { "Add a new party" }
                AddPartyForm { on_submit }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_to_string, PlannerProvider};
    use api::{EventsClient, MemoryApi};
    use store::{Guest, Party, PlannerState, Rsvp};

    fn party(id: PartyId, name: &str) -> Party {
        Party {
            id,
            name: name.to_string(),
            description: format!("{name} all night"),
            date: "2025-06-01T00:00:00.000Z".to_string(),
            location: "Riverside".to_string(),
        }
    }

    fn guest(id: i64, name: &str) -> Guest {
        Guest {
            id,
            name: name.to_string(),
        }
    }

    /// Picnic (#1) selected; Ada and Cy are going to it, Bob to the gala.
    fn picnic_selected() -> PlannerState {
        let mut state = PlannerState::new();
        state.set_parties(vec![party(1, "Picnic"), party(2, "Gala")]);
        state.set_guests(vec![guest(10, "Ada"), guest(11, "Bob"), guest(12, "Cy")]);
        state.set_rsvps(vec![
            Rsvp { guest_id: 10, event_id: 1 },
            Rsvp { guest_id: 11, event_id: 2 },
            Rsvp { guest_id: 12, event_id: 1 },
        ]);
        state.set_selected(party(1, "Picnic"));
        state
    }

    fn app_fresh() -> Element {
        rsx! {
            PlannerProvider {
                api: EventsClient::from(MemoryApi::new()),
                PartyPlannerView {}
            }
        }
    }

    fn app_with_selection() -> Element {
        use_context_provider(|| EventsClient::from(MemoryApi::new()));
        use_context_provider(|| Signal::new(picnic_selected()));
        rsx! {
            PartyPlannerView {}
        }
    }

    #[test]
    fn test_fresh_planner_renders_empty_list_and_placeholder() {
        let html = render_to_string(app_fresh);
        assert!(html.contains("<h1>Party Planner</h1>"));
        assert!(html.contains("Upcoming Parties"));
        assert!(html.contains(r#"id="selected""#));
        assert!(html.contains(r#"id="add-event""#));
        assert_eq!(html.matches("<li").count(), 0);
        assert!(html.contains("Please select a party to learn more."));
        assert!(html.contains("Add Party"));
    }

    #[test]
    fn test_selected_party_is_marked_and_shows_its_guests() {
        let html = render_to_string(app_with_selection);
        assert_eq!(html.matches(r#"class="selected""#).count(), 1);
        assert!(html.contains("Picnic #1"));
        assert!(!html.contains("Please select a party"));

        let guests = &html[html.find(r#"class="guests""#).unwrap()..];
        assert!(guests.contains("Ada"));
        assert!(guests.contains("Cy"));
        assert!(!html.contains("Bob"));
        // two parties plus two guests
        assert_eq!(html.matches("<li").count(), 4);
    }
}
