//! reqwest-backed [`EventsApi`].

use reqwest::Client;
use serde::de::DeserializeOwned;
use store::{ApiConfig, Envelope, Guest, NewParty, Party, PartyId, Rsvp};

use crate::{ApiError, EventsApi};

/// HTTP client bound to one cohort endpoint.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    endpoint: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {url}");
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        decode(&body)
    }
}

/// Clients are interchangeable when they target the same endpoint.
impl PartialEq for HttpApi {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
    }
}

/// Unwrap the `{"data": ...}` envelope.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.data)
}

impl EventsApi for HttpApi {
    async fn list_parties(&self) -> Result<Vec<Party>, ApiError> {
        self.get_data("events").await
    }

    async fn get_party(&self, id: PartyId) -> Result<Party, ApiError> {
        self.get_data(&format!("events/{id}")).await
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, ApiError> {
        self.get_data("rsvps").await
    }

    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError> {
        self.get_data("guests").await
    }

    async fn create_party(&self, party: &NewParty) -> Result<Party, ApiError> {
        let url = self.url("events");
        tracing::debug!("POST {url}");
        let body = self
            .client
            .post(&url)
            .json(party)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        decode(&body)
    }

    async fn delete_party(&self, id: PartyId) -> Result<(), ApiError> {
        let url = self.url(&format!("events/{id}"));
        tracing::debug!("DELETE {url}");
        self.client.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }
}
