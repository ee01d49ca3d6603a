//! Persisted itinerary records as read back from the database.

use jiff::{
    Timestamp,
    civil::{Date, DateTime, Time},
};
use serde::{Deserialize, Serialize};

/// A scheduled event row belonging to one stored day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvent {
    /// Unique identifier for the event
    pub id: u64,
    /// ID of the parent day row
    pub day_id: u64,
    /// Date of the parent day, denormalised for display and export
    pub date: Date,
    pub activity: String,
    pub start_time: Time,
    pub end_time: Time,
    /// Position of the event within its day (0-indexed)
    pub position: u32,
}

impl StoredEvent {
    pub fn starts_at(&self) -> DateTime {
        self.date.to_datetime(self.start_time)
    }

    pub fn ends_at(&self) -> DateTime {
        self.date.to_datetime(self.end_time)
    }
}

/// A stored day of an itinerary with its events eagerly loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDay {
    pub id: u64,
    pub itinerary_id: u64,
    pub date: Date,
    /// Position of the day within the trip (0-indexed)
    pub position: u32,
    #[serde(default)]
    pub events: Vec<StoredEvent>,
}

/// A persisted itinerary with its generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItinerary {
    /// Unique identifier assigned on creation
    pub id: u64,

    /// Owning user, when the itinerary was created in a scoped context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    pub start_date: Date,

    pub end_date: Date,

    /// Timestamp when the itinerary was stored (UTC)
    pub created_at: Timestamp,

    /// Associated days (eagerly loaded)
    #[serde(default)]
    pub days: Vec<StoredDay>,
}

impl StoredItinerary {
    /// Total number of events across all days.
    pub fn event_count(&self) -> usize {
        self.days.iter().map(|day| day.events.len()).sum()
    }

    /// Iterates every event in day, then position, order.
    pub fn events(&self) -> impl Iterator<Item = &StoredEvent> {
        self.days.iter().flat_map(|day| day.events.iter())
    }

    /// Finds an event of this itinerary by ID.
    pub fn event(&self, id: u64) -> Option<&StoredEvent> {
        self.events().find(|event| event.id == id)
    }
}
