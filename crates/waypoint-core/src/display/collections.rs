//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use serde::Serialize;

use crate::models::ItinerarySummary;

/// Newtype wrapper for displaying a listing of itinerary summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::{Timestamp, civil::date};
/// use waypoint_core::{display::ItinerarySummaries, models::ItinerarySummary};
///
/// let summary = ItinerarySummary {
///     id: 1,
///     user_id: None,
///     destination: Some("Lisbon".to_string()),
///     start_date: date(2023, 10, 1),
///     end_date: date(2023, 10, 2),
///     created_at: Timestamp::now(),
///     day_count: 2,
///     event_count: 8,
/// };
///
/// let output = ItinerarySummaries(vec![summary]).to_string();
/// assert!(output.contains("Lisbon (ID: 1)"));
/// assert_eq!(ItinerarySummaries(vec![]).to_string(), "No itineraries found.\n");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ItinerarySummaries(pub Vec<ItinerarySummary>);

impl fmt::Display for ItinerarySummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No itineraries found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
