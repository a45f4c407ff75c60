//! # API crate — client for the events REST service
//!
//! Every screen of the party planner is fed from one remote service that
//! exposes parties (`/events`), guests (`/guests`) and RSVPs (`/rsvps`). This
//! crate wraps that service behind the [`EventsApi`] trait so the UI can run
//! against the real server or against an in-process fake.
//!
//! ## Implementations
//!
//! | Type | Backing |
//! |------|---------|
//! | [`HttpApi`] | `reqwest` against `{base_url}/{cohort}`. Works natively and on `wasm32` (browser `fetch`). |
//! | [`MemoryApi`] | In-process collections with server-style id assignment. Used by tests. |
//!
//! [`EventsClient`] wraps either one; it is what the UI keeps in context.
//!
//! All operations report failures as [`ApiError`]. Callers treat every variant
//! the same way: the request failed.

use std::future::Future;

use store::{Guest, NewParty, Party, PartyId, Rsvp};

mod client;
mod error;
mod http;
mod memory;

pub use client::EventsClient;
pub use error::ApiError;
pub use http::HttpApi;
pub use memory::MemoryApi;

/// Async interface to the events service.
///
/// Futures carry no `Send` bound: in the browser everything runs on the
/// single event-loop thread.
pub trait EventsApi {
    /// `GET /events`
    fn list_parties(&self) -> impl Future<Output = Result<Vec<Party>, ApiError>>;
    /// `GET /events/:id`
    fn get_party(&self, id: PartyId) -> impl Future<Output = Result<Party, ApiError>>;
    /// `GET /rsvps`
    fn list_rsvps(&self) -> impl Future<Output = Result<Vec<Rsvp>, ApiError>>;
    /// `GET /guests`
    fn list_guests(&self) -> impl Future<Output = Result<Vec<Guest>, ApiError>>;
    /// `POST /events`
    fn create_party(&self, party: &NewParty) -> impl Future<Output = Result<Party, ApiError>>;
    /// `DELETE /events/:id`
    fn delete_party(&self, id: PartyId) -> impl Future<Output = Result<(), ApiError>>;
}
