use store::{Guest, NewParty, Party, PartyId, Rsvp};

use crate::{ApiError, EventsApi, HttpApi, MemoryApi};

/// The client the UI holds in context: the real server or the in-process fake.
#[derive(Clone, Debug, PartialEq)]
pub enum EventsClient {
    Http(HttpApi),
    Memory(MemoryApi),
}

impl From<HttpApi> for EventsClient {
    fn from(api: HttpApi) -> Self {
        Self::Http(api)
    }
}

impl From<MemoryApi> for EventsClient {
    fn from(api: MemoryApi) -> Self {
        Self::Memory(api)
    }
}

impl EventsApi for EventsClient {
    async fn list_parties(&self) -> Result<Vec<Party>, ApiError> {
        match self {
            Self::Http(api) => api.list_parties().await,
            Self::Memory(api) => api.list_parties().await,
        }
    }

    async fn get_party(&self, id: PartyId) -> Result<Party, ApiError> {
        match self {
            Self::Http(api) => api.get_party(id).await,
            Self::Memory(api) => api.get_party(id).await,
        }
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, ApiError> {
        match self {
            Self::Http(api) => api.list_rsvps().await,
            Self::Memory(api) => api.list_rsvps().await,
        }
    }

    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError> {
        match self {
            Self::Http(api) => api.list_guests().await,
            Self::Memory(api) => api.list_guests().await,
        }
    }

    async fn create_party(&self, party: &NewParty) -> Result<Party, ApiError> {
        match self {
            Self::Http(api) => api.create_party(party).await,
            Self::Memory(api) => api.create_party(party).await,
        }
    }

    async fn delete_party(&self, id: PartyId) -> Result<(), ApiError> {
        match self {
            Self::Http(api) => api.delete_party(id).await,
            Self::Memory(api) => api.delete_party(id).await,
        }
    }
}
