//! Daily slot layout and rotation policy used by the scheduler.

use std::{fmt, str::FromStr};

use jiff::{
    SignedDuration,
    civil::{Time, time},
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// How activities are assigned once the trip has more slots than activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    /// Wrap around to the first activity; every slot is filled.
    #[default]
    Cycle,
    /// Use each activity once; remaining slots are left out.
    Truncate,
}

impl RotationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationPolicy::Cycle => "cycle",
            RotationPolicy::Truncate => "truncate",
        }
    }
}

impl FromStr for RotationPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cycle" | "cyclic" => Ok(RotationPolicy::Cycle),
            "truncate" | "sequential" => Ok(RotationPolicy::Truncate),
            _ => Err(format!("Invalid rotation policy: {s}")),
        }
    }
}

impl fmt::Display for RotationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Longest trip accepted unless configured otherwise.
pub const DEFAULT_MAX_TRIP_DAYS: usize = 366;

/// Half-open `[start, end)` window of one slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    pub start: Time,
    pub end: Time,
}

/// Validated scheduler settings.
///
/// The per-day slot template is computed once here so that building an
/// itinerary cannot fail. A slot is emitted whenever its *start* is before
/// `day_end`, so the last slot may end after `day_end` when the duration does
/// not divide the window evenly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    day_start: Time,
    day_end: Time,
    slot_duration: SignedDuration,
    rotation: RotationPolicy,
    max_trip_days: usize,
    slots: Vec<SlotWindow>,
}

impl SchedulerConfig {
    /// Builds a configuration, rejecting empty windows, non-positive slot
    /// durations and slots that would run past midnight.
    pub fn new(
        day_start: Time,
        day_end: Time,
        slot_duration: SignedDuration,
        rotation: RotationPolicy,
    ) -> Result<Self> {
        if !slot_duration.is_positive() {
            return Err(TripError::invalid_input("slot_duration")
                .with_reason("slot duration must be positive"));
        }
        if day_start >= day_end {
            return Err(TripError::invalid_input("day_end").with_reason(format!(
                "day end {day_end} must be after day start {day_start}"
            )));
        }

        let mut slots = Vec::new();
        let mut cursor = day_start;
        while cursor < day_end {
            let end = cursor.checked_add(slot_duration).map_err(|_| {
                TripError::invalid_input("slot_duration").with_reason(format!(
                    "slot starting at {cursor} would end after midnight"
                ))
            })?;
            slots.push(SlotWindow { start: cursor, end });
            cursor = end;
        }

        Ok(Self {
            day_start,
            day_end,
            slot_duration,
            rotation,
            max_trip_days: DEFAULT_MAX_TRIP_DAYS,
            slots,
        })
    }

    /// Returns a copy using a different rotation policy.
    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy accepting trips of at most `days` days.
    pub fn with_max_trip_days(mut self, days: usize) -> Result<Self> {
        if days == 0 {
            return Err(TripError::invalid_input("max_trip_days")
                .with_reason("at least one day must be allowed"));
        }
        self.max_trip_days = days;
        Ok(self)
    }

    pub fn day_start(&self) -> Time {
        self.day_start
    }

    pub fn day_end(&self) -> Time {
        self.day_end
    }

    pub fn slot_duration(&self) -> SignedDuration {
        self.slot_duration
    }

    pub fn rotation(&self) -> RotationPolicy {
        self.rotation
    }

    pub fn max_trip_days(&self) -> usize {
        self.max_trip_days
    }

    /// The slot windows every day of a trip is divided into.
    pub fn slot_windows(&self) -> &[SlotWindow] {
        &self.slots
    }

    /// Number of slots per day.
    pub fn slots_per_day(&self) -> usize {
        self.slots.len()
    }
}

impl Default for SchedulerConfig {
    /// 09:00 to 17:00 in two-hour slots, cycling through activities.
    fn default() -> Self {
        let day_start = time(9, 0, 0, 0);
        let slot_duration = SignedDuration::from_hours(2);
        let slots = [9, 11, 13, 15]
            .into_iter()
            .map(|hour| SlotWindow {
                start: time(hour, 0, 0, 0),
                end: time(hour + 2, 0, 0, 0),
            })
            .collect();

        Self {
            day_start,
            day_end: time(17, 0, 0, 0),
            slot_duration,
            rotation: RotationPolicy::Cycle,
            max_trip_days: DEFAULT_MAX_TRIP_DAYS,
            slots,
        }
    }
}
