//! # Domain models for parties, guests and RSVPs
//!
//! These are the records exchanged with the events REST API. Every read
//! endpoint wraps its payload in an [`Envelope`] (`{"data": ...}`), and the
//! wire format uses camelCase field names (`guestId`, `eventId`).
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Party`] | A planned gathering. `date` is kept as the ISO-8601 string the server sends. |
//! | [`Guest`] | A person, independent of any party. |
//! | [`Rsvp`] | Join record: guest `guest_id` attends party `event_id`. |
//! | [`NewParty`] | Body of `POST /events`, built from the add-party form by [`NewParty::from_form`]. |

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned identifier of a party.
pub type PartyId = i64;

/// The `{"data": ...}` wrapper around every API response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A party (called an "event" by the API).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub description: String,
    /// ISO-8601 timestamp, e.g. "2024-01-01T00:00:00.000Z"
    pub date: String,
    pub location: String,
}

impl Party {
    /// The `YYYY-MM-DD` part of the party date.
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub guest_id: i64,
    pub event_id: PartyId,
}

/// Validation failures for the add-party form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

/// Fields sent to `POST /events`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewParty {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

impl NewParty {
    /// Build a party from raw form input.
    ///
    /// All fields are required. `date` comes from an `<input type="date">`
    /// (`YYYY-MM-DD`) and is sent as midnight UTC with millisecond precision.
    pub fn from_form(
        name: &str,
        description: &str,
        date: &str,
        location: &str,
    ) -> Result<Self, FormError> {
        let name = required("name", name)?;
        let description = required("description", description)?;
        let date = required("date", date)?;
        let location = required("location", location)?;

        let date = iso_timestamp(date.trim()).ok_or(FormError::InvalidDate(date))?;

        Ok(Self {
            name,
            description,
            date,
            location,
        })
    }
}

/// Values are sent as typed; blank input counts as missing.
fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Normalise a calendar day or an RFC 3339 timestamp to `YYYY-MM-DDTHH:MM:SS.sssZ`.
fn iso_timestamp(raw: &str) -> Option<String> {
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = day.and_hms_opt(0, 0, 0)?.and_utc();
        return Some(midnight.to_rfc3339_opts(SecondsFormat::Millis, true));
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_date_becomes_iso_midnight() {
        let party = NewParty::from_form("A", "B", "2024-01-01", "C").unwrap();
        assert_eq!(party.name, "A");
        assert_eq!(party.description, "B");
        assert_eq!(party.date, "2024-01-01T00:00:00.000Z");
        assert_eq!(party.location, "C");
    }

    #[test]
    fn test_form_accepts_rfc3339_with_offset() {
        let party = NewParty::from_form("A", "B", "2024-06-30T22:30:00-02:00", "C").unwrap();
        assert_eq!(party.date, "2024-07-01T00:30:00.000Z");
    }

    #[test]
    fn test_form_sends_text_as_typed() {
        let party = NewParty::from_form(" A ", "B\n", " 2024-01-01 ", "  C").unwrap();
        assert_eq!(party.name, " A ");
        assert_eq!(party.description, "B\n");
        assert_eq!(party.date, "2024-01-01T00:00:00.000Z");
        assert_eq!(party.location, "  C");
    }

    #[test]
    fn test_form_rejects_blank_fields() {
        assert_eq!(
            NewParty::from_form("  ", "B", "2024-01-01", "C"),
            Err(FormError::MissingField("name"))
        );
        assert_eq!(
            NewParty::from_form("A", "B", "2024-01-01", ""),
            Err(FormError::MissingField("location"))
        );
    }

    #[test]
    fn test_form_rejects_bad_date() {
        assert_eq!(
            NewParty::from_form("A", "B", "2024-13-01", "C"),
            Err(FormError::InvalidDate("2024-13-01".to_string()))
        );
    }

    #[test]
    fn test_rsvp_wire_format_is_camel_case() {
        let rsvps: Envelope<Vec<Rsvp>> =
            serde_json::from_str(r#"{"data":[{"id":9,"guestId":3,"eventId":7}]}"#).unwrap();
        assert_eq!(
            rsvps.data,
            vec![Rsvp {
                guest_id: 3,
                event_id: 7
            }]
        );
    }

    #[test]
    fn test_party_ignores_unknown_fields() {
        let body = r#"{"success":true,"data":{"id":1,"name":"Gala","description":"Black tie",
            "date":"2025-03-14T19:00:00.000Z","location":"Hall","cohortId":42}}"#;
        let party: Envelope<Party> = serde_json::from_str(body).unwrap();
        assert_eq!(party.data.name, "Gala");
        assert_eq!(party.data.day(), "2025-03-14");
    }

    #[test]
    fn test_day_of_short_date() {
        let party = Party {
            id: 1,
            name: "x".into(),
            description: "y".into(),
            date: "2025".into(),
            location: "z".into(),
        };
        assert_eq!(party.day(), "2025");
    }
}
