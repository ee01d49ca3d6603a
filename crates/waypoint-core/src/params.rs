//! Parameter structures for Waypoint operations
//!
//! These structures are shared by every interface (CLI, MCP, HTTP). They carry
//! only serde derives, plus `schemars::JsonSchema` when the `schema` feature is
//! enabled, so the core stays free of interface frameworks. Each interface
//! wraps or converts into them:
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct GenerateArgs { /* clap attributes */ }
//!
//! impl GenerateArgs {
//!     pub fn into_params(self, user_id: Option<String>) -> GenerateItinerary { /* ... */ }
//! }
//!
//! // In the MCP server
//! async fn generate_itinerary(&self, Parameters(params): Parameters<GenerateItinerary>)
//! ```
//!
//! Optional `user_id` fields scope an operation to one owner. When absent the
//! operation sees every itinerary.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TripError},
    models::{ActivityList, TripWindow, trip::DATE_FORMAT},
};

/// Parameters for generating (and optionally storing) an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateItinerary {
    /// Optional destination name, e.g. "Lisbon"
    #[serde(default)]
    pub destination: Option<String>,
    /// First day of the trip, YYYY-MM-DD
    pub start_date: String,
    /// Last day of the trip (inclusive), YYYY-MM-DD
    pub end_date: String,
    /// Activities in rotation order; must not be empty
    pub activities: Vec<String>,
    /// Owner of the stored itinerary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl GenerateItinerary {
    /// Parses and validates the trip window and activity list, allowing at
    /// most `max_trip_days` days.
    ///
    /// Activities are checked first so an empty list is reported even when
    /// the dates are also wrong.
    ///
    /// # Errors
    ///
    /// * `TripError::InvalidInput` - When the activity list is empty or holds
    ///   a blank entry
    /// * `TripError::InvalidInput` - When a date is not `YYYY-MM-DD`, the
    ///   end date precedes the start date or the trip is too long
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::params::GenerateItinerary;
    ///
    /// let params = GenerateItinerary {
    ///     start_date: "2023-10-01".to_string(),
    ///     end_date: "2023-10-02".to_string(),
    ///     activities: vec!["A".to_string(), "B".to_string()],
    ///     ..Default::default()
    /// };
    /// let (window, activities) = params.validate(30)?;
    /// assert_eq!(window.day_count(), 2);
    /// assert_eq!(activities.len(), 2);
    ///
    /// let empty = GenerateItinerary { activities: vec![], ..params };
    /// assert!(empty.validate(30).is_err());
    /// # Ok::<(), waypoint_core::TripError>(())
    /// ```
    pub fn validate(&self, max_trip_days: usize) -> Result<(TripWindow, ActivityList)> {
        let activities = ActivityList::new(self.activities.clone())?;
        let window = TripWindow::parse(&self.start_date, &self.end_date)?;
        window.check_max_days(max_trip_days)?;
        Ok((window, activities))
    }

    /// Destination with surrounding whitespace removed; blank counts as none.
    pub fn destination(&self) -> Option<&str> {
        self.destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Parameters for looking up a stored itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ItineraryLookup {
    /// The ID of the itinerary
    pub id: u64,
    /// Restrict the lookup to this owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Parameters for listing stored itineraries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListItineraries {
    /// Only list itineraries of this owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Parameters for operations on a single scheduled event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EventLookup {
    /// The ID of the event
    pub id: u64,
    /// Restrict the lookup to events of this owner's itineraries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Parameters for permanently deleting an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteItinerary {
    /// The ID of the itinerary to delete
    pub id: u64,
    /// Restrict the deletion to this owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Must be true; deletion removes every day and event and cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for exporting a stored itinerary to a calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExportItinerary {
    /// The ID of the itinerary to export
    pub id: u64,
    /// Restrict the export to this owner's itinerary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Only export events on this day, YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ExportItinerary {
    /// Parses the optional day filter.
    pub fn date_filter(&self) -> Result<Option<Date>> {
        self.date
            .as_deref()
            .map(|raw| {
                Date::strptime(DATE_FORMAT, raw.trim()).map_err(|e| {
                    TripError::invalid_input("date")
                        .with_reason(format!("'{raw}' is not a YYYY-MM-DD date: {e}"))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::scheduler::DEFAULT_MAX_TRIP_DAYS;

    fn generate(start: &str, end: &str, activities: &[&str]) -> GenerateItinerary {
        GenerateItinerary {
            destination: None,
            start_date: start.to_string(),
            end_date: end.to_string(),
            activities: activities.iter().map(ToString::to_string).collect(),
            user_id: None,
        }
    }

    #[test]
    fn test_generate_validate_valid() {
        let (window, activities) = generate("2023-10-01", "2023-10-03", &["A", "B"])
            .validate(DEFAULT_MAX_TRIP_DAYS)
            .unwrap();

        assert_eq!(window.start_date(), date(2023, 10, 1));
        assert_eq!(window.end_date(), date(2023, 10, 3));
        assert_eq!(activities.get(0), Some("A"));
    }

    #[test]
    fn test_generate_validate_empty_activities() {
        match generate("2023-10-01", "2023-10-03", &[]).validate(DEFAULT_MAX_TRIP_DAYS).unwrap_err() {
            TripError::InvalidInput { field, .. } => assert_eq!(field, "activities"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_validate_empty_activities_reported_before_dates() {
        let err = generate("2023-10-05", "2023-10-01", &[]).validate(DEFAULT_MAX_TRIP_DAYS).unwrap_err();
        assert!(matches!(err, TripError::InvalidInput { ref field, .. } if field == "activities"));
    }

    #[test]
    fn test_generate_validate_inverted_range() {
        match generate("2023-10-05", "2023-10-01", &["A"]).validate(DEFAULT_MAX_TRIP_DAYS).unwrap_err() {
            TripError::InvalidInput { field, .. } => assert_eq!(field, "end_date"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_validate_unparsable_date() {
        match generate("10/01/2023", "2023-10-01", &["A"]).validate(DEFAULT_MAX_TRIP_DAYS).unwrap_err() {
            TripError::InvalidInput { field, .. } => assert_eq!(field, "start_date"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_validate_trip_length_limit() {
        let year = generate("2024-01-01", "2024-12-31", &["A"]);
        assert_eq!(year.validate(366).unwrap().0.day_count(), 366);

        match year.validate(365).unwrap_err() {
            TripError::InvalidInput { field, reason } => {
                assert_eq!(field, "end_date");
                assert!(reason.contains("366 days"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }

        let millennium = generate("2000-01-01", "2999-12-31", &["A"]);
        assert!(millennium.validate(DEFAULT_MAX_TRIP_DAYS).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_blank_destination_is_none() {
        let mut params = generate("2023-10-01", "2023-10-01", &["A"]);
        params.destination = Some("   ".to_string());
        assert_eq!(params.destination(), None);

        params.destination = Some(" Porto ".to_string());
        assert_eq!(params.destination(), Some("Porto"));
    }

    #[test]
    fn test_generate_deserializes_without_optional_fields() {
        let params: GenerateItinerary = serde_json::from_str(
            r#"{"start_date": "2023-10-01", "end_date": "2023-10-02", "activities": ["A"]}"#,
        )
        .unwrap();

        assert!(params.destination.is_none());
        assert!(params.user_id.is_none());
    }

    #[test]
    fn test_export_date_filter() {
        let mut params = ExportItinerary {
            id: 1,
            ..Default::default()
        };
        assert_eq!(params.date_filter().unwrap(), None);

        params.date = Some("2023-10-02".to_string());
        assert_eq!(params.date_filter().unwrap(), Some(date(2023, 10, 2)));

        params.date = Some("tomorrow".to_string());
        assert!(params.date_filter().unwrap_err().is_invalid_input());
    }
}
