use std::sync::{Arc, Mutex};

use store::{Guest, NewParty, Party, PartyId, Rsvp};

use crate::{ApiError, EventsApi};

/// In-memory EventsApi for testing.
///
/// Clones share the same data, so a test can keep a handle to seed or
/// inspect the "server" while the code under test owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    data: Arc<Mutex<MemoryData>>,
}

#[derive(Debug, Default)]
struct MemoryData {
    parties: Vec<Party>,
    guests: Vec<Guest>,
    rsvps: Vec<Rsvp>,
    last_id: i64,
    unavailable: bool,
    /// Bodies received by `create_party`, oldest first.
    posted: Vec<NewParty>,
}

impl MemoryData {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn insert_party(&mut self, party: &NewParty) -> Party {
        let party = Party {
            id: self.next_id(),
            name: party.name.clone(),
            description: party.description.clone(),
            date: party.date.clone(),
            location: party.location.clone(),
        };
        self.parties.push(party.clone());
        party
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.unavailable {
            Err(ApiError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a party directly, bypassing availability.
    pub fn insert_party(&self, party: &NewParty) -> Party {
        self.data.lock().unwrap().insert_party(party)
    }

    pub fn insert_guest(&self, name: &str) -> Guest {
        let mut data = self.data.lock().unwrap();
        let guest = Guest {
            id: data.next_id(),
            name: name.to_string(),
        };
        data.guests.push(guest.clone());
        guest
    }

    pub fn insert_rsvp(&self, guest_id: i64, event_id: PartyId) {
        self.data
            .lock()
            .unwrap()
            .rsvps
            .push(Rsvp { guest_id, event_id });
    }

    /// While unavailable every trait call fails with [`ApiError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.data.lock().unwrap().unavailable = unavailable;
    }

    /// Bodies received through `create_party`.
    pub fn posted(&self) -> Vec<NewParty> {
        self.data.lock().unwrap().posted.clone()
    }
}

/// Handles are equal when they share the same data.
impl PartialEq for MemoryApi {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl EventsApi for MemoryApi {
    async fn list_parties(&self) -> Result<Vec<Party>, ApiError> {
        let data = self.data.lock().unwrap();
        data.check()?;
        Ok(data.parties.clone())
    }

    async fn get_party(&self, id: PartyId) -> Result<Party, ApiError> {
        let data = self.data.lock().unwrap();
        data.check()?;
        data.parties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::UnknownEvent(id))
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, ApiError> {
        let data = self.data.lock().unwrap();
        data.check()?;
        Ok(data.rsvps.clone())
    }

    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError> {
        let data = self.data.lock().unwrap();
        data.check()?;
        Ok(data.guests.clone())
    }

    async fn create_party(&self, party: &NewParty) -> Result<Party, ApiError> {
        let mut data = self.data.lock().unwrap();
        data.check()?;
        data.posted.push(party.clone());
        Ok(data.insert_party(party))
    }

    async fn delete_party(&self, id: PartyId) -> Result<(), ApiError> {
        let mut data = self.data.lock().unwrap();
        data.check()?;
        let before = data.parties.len();
        data.parties.retain(|p| p.id != id);
        if data.parties.len() == before {
            return Err(ApiError::UnknownEvent(id));
        }
        data.rsvps.retain(|r| r.event_id != id);
        Ok(())
    }
}
