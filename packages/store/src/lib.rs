pub mod config;
pub mod models;
pub mod state;

pub use config::{ApiConfig, PlannerConfig};
pub use models::{Envelope, FormError, Guest, NewParty, Party, PartyId, Rsvp};
pub use state::{PartyDetail, PartyEntry, PlannerState};
