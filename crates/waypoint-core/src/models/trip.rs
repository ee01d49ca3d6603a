//! Trip inputs: the inclusive date window and the rotation list of activities.

use jiff::{ToSpan, civil::Date};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// Date format accepted for trip boundaries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of calendar dates covered by a trip.
///
/// The constructor guarantees `start_date <= end_date`; the fields are private
/// so the invariant cannot be broken after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTripWindow")]
pub struct TripWindow {
    start_date: Date,
    end_date: Date,
}

#[derive(Deserialize)]
struct RawTripWindow {
    start_date: Date,
    end_date: Date,
}

impl TryFrom<RawTripWindow> for TripWindow {
    type Error = TripError;

    fn try_from(raw: RawTripWindow) -> Result<Self> {
        Self::new(raw.start_date, raw.end_date)
    }
}

impl TripWindow {
    /// Creates a window, rejecting an end date that precedes the start date.
    pub fn new(start_date: Date, end_date: Date) -> Result<Self> {
        if end_date < start_date {
            return Err(TripError::invalid_input("end_date").with_reason(format!(
                "end date {end_date} is before start date {start_date}"
            )));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Parses `YYYY-MM-DD` boundaries and builds the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::models::TripWindow;
    ///
    /// let window = TripWindow::parse("2023-10-01", "2023-10-02").unwrap();
    /// assert_eq!(window.day_count(), 2);
    ///
    /// assert!(TripWindow::parse("2023-10-02", "2023-10-01").is_err());
    /// assert!(TripWindow::parse("10/01/2023", "2023-10-02").is_err());
    /// ```
    pub fn parse(start_date: &str, end_date: &str) -> Result<Self> {
        let start = parse_date("start_date", start_date)?;
        let end = parse_date("end_date", end_date)?;
        Self::new(start, end)
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Every date in the window, in order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + use<> {
        let end = self.end_date;
        self.start_date
            .series(1.day())
            .take_while(move |date| *date <= end)
    }

    /// Number of calendar days in the window (always at least one).
    pub fn day_count(&self) -> usize {
        let span = self.end_date - self.start_date;
        span.get_days() as usize + 1
    }

    /// Rejects windows longer than `max_days`.
    pub fn check_max_days(&self, max_days: usize) -> Result<()> {
        let days = self.day_count();
        if days > max_days {
            return Err(TripError::invalid_input("end_date").with_reason(format!(
                "trip spans {days} days; at most {max_days} are allowed"
            )));
        }
        Ok(())
    }
}

fn parse_date(field: &str, value: &str) -> Result<Date> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TripError::invalid_input(field).with_reason("date is required"));
    }
    Date::strptime(DATE_FORMAT, trimmed).map_err(|e| {
        TripError::invalid_input(field)
            .with_reason(format!("'{value}' is not a YYYY-MM-DD date: {e}"))
    })
}

/// Ordered, non-empty list of activity identifiers.
///
/// Order defines the rotation sequence used by the scheduler, not priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ActivityList(Vec<String>);

impl TryFrom<Vec<String>> for ActivityList {
    type Error = TripError;

    fn try_from(activities: Vec<String>) -> Result<Self> {
        Self::new(activities)
    }
}

impl From<ActivityList> for Vec<String> {
    fn from(list: ActivityList) -> Self {
        list.0
    }
}

impl ActivityList {
    /// Builds the list, rejecting an empty list or blank identifiers.
    pub fn new(activities: Vec<String>) -> Result<Self> {
        if activities.is_empty() {
            return Err(TripError::invalid_input("activities")
                .with_reason("at least one activity is required"));
        }
        if let Some(position) = activities.iter().position(|a| a.trim().is_empty()) {
            return Err(TripError::invalid_input("activities")
                .with_reason(format!("activity at position {position} is blank")));
        }
        Ok(Self(activities))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ActivityList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
