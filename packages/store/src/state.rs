//! Application state for the party planner.
//!
//! [`PlannerState`] holds the last snapshot of every collection fetched from
//! the API plus the currently selected party. Slots are replaced wholesale on
//! each successful fetch; nothing is patched in place. The UI never reads the
//! raw slots for rendering; it goes through the derived models
//! ([`PlannerState::party_entries`], [`PlannerState::detail`]).

use std::collections::HashSet;

use crate::models::{Guest, Party, PartyId, Rsvp};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlannerState {
    pub parties: Vec<Party>,
    pub selected: Option<Party>,
    pub rsvps: Vec<Rsvp>,
    pub guests: Vec<Guest>,
}

/// One row of the party list.
#[derive(Clone, Debug, PartialEq)]
pub struct PartyEntry {
    pub id: PartyId,
    pub name: String,
    pub selected: bool,
}

/// What the detail pane shows.
#[derive(Clone, Debug, PartialEq)]
pub enum PartyDetail {
    /// Nothing selected yet.
    Placeholder,
    Party { party: Party, guests: Vec<Guest> },
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parties(&mut self, parties: Vec<Party>) {
        self.parties = parties;
    }

    pub fn set_selected(&mut self, party: Party) {
        self.selected = Some(party);
    }

    pub fn set_rsvps(&mut self, rsvps: Vec<Rsvp>) {
        self.rsvps = rsvps;
    }

    pub fn set_guests(&mut self, guests: Vec<Guest>) {
        self.guests = guests;
    }

    pub fn selected_id(&self) -> Option<PartyId> {
        self.selected.as_ref().map(|p| p.id)
    }

    pub fn is_selected(&self, id: PartyId) -> bool {
        self.selected_id() == Some(id)
    }

    /// Drop the selection if it points at `id`. Returns whether it did.
    pub fn clear_selection_if(&mut self, id: PartyId) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }

    pub fn party_entries(&self) -> Vec<PartyEntry> {
        self.parties
            .iter()
            .map(|p| PartyEntry {
                id: p.id,
                name: p.name.clone(),
                selected: self.is_selected(p.id),
            })
            .collect()
    }

    /// Guests with an RSVP for `party_id`, in guest-list order.
    pub fn guests_at(&self, party_id: PartyId) -> Vec<&Guest> {
        let attending: HashSet<i64> = self
            .rsvps
            .iter()
            .filter(|r| r.event_id == party_id)
            .map(|r| r.guest_id)
            .collect();

        self.guests
            .iter()
            .filter(|g| attending.contains(&g.id))
            .collect()
    }

    pub fn detail(&self) -> PartyDetail {
        match &self.selected {
            None => PartyDetail::Placeholder,
            Some(party) => PartyDetail::Party {
                party: party.clone(),
                guests: self.guests_at(party.id).into_iter().cloned().collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(id: PartyId, name: &str) -> Party {
        Party {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            date: "2025-05-01T18:00:00.000Z".to_string(),
            location: "Backyard".to_string(),
        }
    }

    fn guest(id: i64, name: &str) -> Guest {
        Guest {
            id,
            name: name.to_string(),
        }
    }

    fn rsvp(guest_id: i64, event_id: PartyId) -> Rsvp {
        Rsvp { guest_id, event_id }
    }

    fn sample() -> PlannerState {
        let mut state = PlannerState::new();
        state.set_parties(vec![party(1, "Picnic"), party(2, "Gala"), party(3, "Wake")]);
        state.set_guests(vec![guest(10, "Ada"), guest(11, "Bob"), guest(12, "Cy")]);
        state.set_rsvps(vec![rsvp(12, 2), rsvp(10, 2), rsvp(11, 1), rsvp(10, 2)]);
        state
    }

    #[test]
    fn test_no_entry_selected_initially() {
        let state = sample();
        assert!(state.party_entries().iter().all(|e| !e.selected));
        assert_eq!(state.detail(), PartyDetail::Placeholder);
    }

    #[test]
    fn test_exactly_one_entry_selected() {
        let mut state = sample();
        state.set_selected(party(2, "Gala"));

        let entries = state.party_entries();
        let selected: Vec<_> = entries.iter().filter(|e| e.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, 2);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_guest_join_follows_guest_order_without_duplicates() {
        let state = sample();
        let names: Vec<_> = state.guests_at(2).iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Cy"]);
    }

    #[test]
    fn test_guest_join_empty_without_rsvps() {
        let state = sample();
        assert!(state.guests_at(3).is_empty());
        assert!(state.guests_at(99).is_empty());
    }

    #[test]
    fn test_detail_carries_joined_guests() {
        let mut state = sample();
        state.set_selected(party(1, "Picnic"));

        match state.detail() {
            PartyDetail::Party { party, guests } => {
                assert_eq!(party.name, "Picnic");
                assert_eq!(guests, vec![guest(11, "Bob")]);
            }
            PartyDetail::Placeholder => panic!("expected a selected party"),
        }
    }

    #[test]
    fn test_clear_selection_only_for_matching_party() {
        let mut state = sample();
        state.set_selected(party(1, "Picnic"));

        assert!(!state.clear_selection_if(2));
        assert_eq!(state.selected_id(), Some(1));

        assert!(state.clear_selection_if(1));
        assert!(state.selected.is_none());
    }
}
