//! Scheduler output: slots, day plans and the itinerary that holds them.

use jiff::civil::{Date, DateTime, Time};
use serde::{Deserialize, Serialize};

use super::TripWindow;

/// One activity occupying a fixed time window on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    /// Calendar date of the slot
    pub date: Date,
    /// Inclusive start of the slot
    pub start_time: Time,
    /// Exclusive end of the slot
    pub end_time: Time,
    /// Activity identifier taken from the trip's activity list
    pub activity: String,
}

impl DaySlot {
    /// Local start instant of the slot.
    pub fn starts_at(&self) -> DateTime {
        self.date.to_datetime(self.start_time)
    }

    /// Local end instant of the slot.
    pub fn ends_at(&self) -> DateTime {
        self.date.to_datetime(self.end_time)
    }
}

/// All slots scheduled on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: Date,
    /// Slots in start-time order; empty once a truncating rotation runs out
    pub slots: Vec<DaySlot>,
}

/// Complete multi-day plan produced for one trip request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub trip_window: TripWindow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// One entry per date of the trip window, in date order
    pub day_plans: Vec<DayPlan>,
}

impl Itinerary {
    /// Total number of scheduled slots across all days.
    pub fn slot_count(&self) -> usize {
        self.day_plans.iter().map(|day| day.slots.len()).sum()
    }

    /// Iterates every slot of the trip in chronological order.
    pub fn slots(&self) -> impl Iterator<Item = &DaySlot> {
        self.day_plans.iter().flat_map(|day| day.slots.iter())
    }
}
