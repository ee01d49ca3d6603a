//! Export of stored itineraries to an external calendar.
//!
//! [`CalendarExporter`] is the seam between the planner and a calendar
//! provider. The planner turns each stored event into a [`CalendarEvent`] and
//! hands it to the exporter, which registers it and returns the provider's
//! [`EventReference`]. Authorization is obtained out of band; exporters are
//! constructed with a ready-to-use access token.
//!
//! [`GoogleCalendar`] talks to the Google Calendar v3 REST API.

use std::future::Future;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{StoredEvent, StoredItinerary},
};

pub mod google;

pub use google::{GoogleCalendar, UpcomingEvent};

/// An event ready to be sent to a calendar provider.
///
/// Start and end are wall-clock times interpreted in `time_zone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub location: Option<String>,
    pub start: DateTime,
    pub end: DateTime,
    pub time_zone: String,
}

impl CalendarEvent {
    /// Builds the calendar entry for one event of a stored itinerary.
    pub fn from_stored(
        itinerary: &StoredItinerary,
        event: &StoredEvent,
        time_zone: impl Into<String>,
    ) -> Self {
        let day_number = itinerary
            .days
            .iter()
            .find(|day| day.id == event.day_id)
            .map_or(1, |day| day.position + 1);

        let description = match &itinerary.destination {
            Some(destination) => {
                format!("Day {day_number} of itinerary {} ({destination})", itinerary.id)
            }
            None => format!("Day {day_number} of itinerary {}", itinerary.id),
        };

        Self {
            summary: event.activity.clone(),
            description,
            location: itinerary.destination.clone(),
            start: event.starts_at(),
            end: event.ends_at(),
            time_zone: time_zone.into(),
        }
    }
}

/// Provider-assigned handle for an exported event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}

/// A calendar provider able to register events.
pub trait CalendarExporter: Send + Sync {
    /// Zone name attached to events this exporter creates.
    fn time_zone(&self) -> &str;

    /// Registers one event and returns the provider's reference to it.
    fn insert_event(
        &self,
        event: &CalendarEvent,
    ) -> impl Future<Output = Result<EventReference>> + Send;
}
