//! Itinerary summary types used by listings.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::StoredItinerary;

/// Summary information about a stored itinerary with day and event counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItinerarySummary {
    /// Itinerary ID
    pub id: u64,
    /// Owning user, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Trip destination, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// First day of the trip
    pub start_date: Date,
    /// Last day of the trip
    pub end_date: Date,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of stored days
    pub day_count: u32,
    /// Number of stored events
    pub event_count: u32,
}

impl From<&StoredItinerary> for ItinerarySummary {
    fn from(itinerary: &StoredItinerary) -> Self {
        Self {
            id: itinerary.id,
            user_id: itinerary.user_id.clone(),
            destination: itinerary.destination.clone(),
            start_date: itinerary.start_date,
            end_date: itinerary.end_date,
            created_at: itinerary.created_at,
            day_count: itinerary.days.len() as u32,
            event_count: itinerary.event_count() as u32,
        }
    }
}
