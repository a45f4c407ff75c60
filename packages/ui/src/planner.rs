//! Planner state context and the actions that feed it.
//!
//! Every action talks to an [`EventsApi`], then writes the result into a
//! [`PlannerCell`]. A failed request is logged and leaves the state as it
//! was; nothing is propagated to the caller. In the running app the cell is
//! the `Signal<PlannerState>` provided by [`PlannerProvider`], so each write
//! re-renders the view.

use api::{ApiError, EventsApi, EventsClient};
use dioxus::prelude::*;
use store::{NewParty, PartyId, PlannerState};

/// Something that holds a [`PlannerState`] and lets actions update it.
///
/// Updates are synchronous; no borrow of the state outlives `update`, so
/// callers never hold it across an `.await`.
pub trait PlannerCell {
    fn update(&mut self, f: impl FnOnce(&mut PlannerState));
}

impl PlannerCell for PlannerState {
    fn update(&mut self, f: impl FnOnce(&mut PlannerState)) {
        f(self)
    }
}

impl PlannerCell for Signal<PlannerState> {
    fn update(&mut self, f: impl FnOnce(&mut PlannerState)) {
        let mut state = self.write();
        f(&mut *state);
    }
}

/// Apply `result` to the state, or log and leave the state untouched.
fn apply<T, C: PlannerCell>(
    cell: &mut C,
    what: &str,
    result: Result<T, ApiError>,
    set: impl FnOnce(&mut PlannerState, T),
) {
    match result {
        Ok(value) => cell.update(|state| set(state, value)),
        Err(e) => tracing::error!("Failed to load {what}: {e}"),
    }
}

pub async fn refresh_parties<A: EventsApi, C: PlannerCell>(api: &A, cell: &mut C) {
    let result = api.list_parties().await;
    apply(cell, "parties", result, PlannerState::set_parties);
}

pub async fn refresh_rsvps<A: EventsApi, C: PlannerCell>(api: &A, cell: &mut C) {
    let result = api.list_rsvps().await;
    apply(cell, "rsvps", result, PlannerState::set_rsvps);
}

pub async fn refresh_guests<A: EventsApi, C: PlannerCell>(api: &A, cell: &mut C) {
    let result = api.list_guests().await;
    apply(cell, "guests", result, PlannerState::set_guests);
}

/// Fetch one party and make it the selection.
pub async fn select_party<A: EventsApi, C: PlannerCell>(api: &A, cell: &mut C, id: PartyId) {
    let result = api.get_party(id).await;
    apply(cell, &format!("party #{id}"), result, PlannerState::set_selected);
}

/// Create a party, then reload the party list.
pub async fn add_party<A: EventsApi, C: PlannerCell>(api: &A, cell: &mut C, party: &NewParty) {
    match api.create_party(party).await {
        Ok(created) => {
            tracing::info!("Created party {} #{}", created.name, created.id);
            refresh_parties(api, cell).await;
        }
        Err(e) => tracing::error!("Failed to create party {:?}: {e}", party.name),
    }
}

/// Delete a party once the server confirms, then reload the party list.
pub async fn remove_party<A: EventsApi, C: PlannerCell>(api: &A, cell: &mut C, id: PartyId) {
    match api.delete_party(id).await {
        Ok(()) => {
            tracing::info!("Deleted party #{id}");
            cell.update(|state| {
                state.clear_selection_if(id);
            });
            refresh_parties(api, cell).await;
        }
        Err(e) => tracing::error!("Failed to delete party #{id}: {e}"),
    }
}

/// Initial load: parties, RSVPs and guests are fetched concurrently.
pub async fn initialize<A: EventsApi, C: PlannerCell>(api: &A, cell: &mut C) {
    let (parties, rsvps, guests) =
        futures::join!(api.list_parties(), api.list_rsvps(), api.list_guests());

    apply(cell, "parties", parties, PlannerState::set_parties);
    apply(cell, "rsvps", rsvps, PlannerState::set_rsvps);
    apply(cell, "guests", guests, PlannerState::set_guests);
}

/// Consume the `Signal<PlannerState>` from context.
pub fn use_planner() -> Signal<PlannerState> {
    use_context::<Signal<PlannerState>>()
}

/// Consume the API client from context.
pub fn use_events_api() -> EventsClient {
    use_context::<EventsClient>()
}

/// Provides the planner state and `api`, and runs the initial load.
#[component]
pub fn PlannerProvider(api: EventsClient, children: Element) -> Element {
    let planner = use_context_provider(|| Signal::new(PlannerState::new()));
    let api = use_context_provider(|| api);

    let _loader = use_resource(move || {
        let api = api.clone();
        let mut planner = planner;
        async move {
            initialize(&api, &mut planner).await;
        }
    });

    rsx! {
        {children}
    }
}
