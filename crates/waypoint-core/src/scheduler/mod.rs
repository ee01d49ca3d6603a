//! Itinerary generation.
//!
//! The [`Scheduler`] is a pure function of its inputs: it maps a
//! [`TripWindow`] and an [`ActivityList`] onto one [`DayPlan`] per calendar
//! day, each divided into the fixed slot windows of its [`SchedulerConfig`].
//! It performs no I/O, keeps no state between calls and may be shared freely
//! across threads.
//!
//! # Rotation
//!
//! A single activity cursor runs across the whole trip; it does not restart
//! each day. With [`RotationPolicy::Cycle`] the k-th slot of the trip is
//! assigned `activities[k % len]`. With [`RotationPolicy::Truncate`] the k-th
//! slot is assigned `activities[k]` and no further slots are emitted once the
//! list is exhausted, so trailing days keep their [`DayPlan`] with an empty
//! slot list.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::{date, time};
//! use waypoint_core::scheduler::Scheduler;
//!
//! let scheduler = Scheduler::default();
//! let itinerary = scheduler
//!     .generate(
//!         date(2023, 10, 1),
//!         date(2023, 10, 2),
//!         vec!["A".into(), "B".into(), "C".into()],
//!         Some("Kyoto"),
//!     )
//!     .unwrap();
//!
//! let first_day: Vec<_> = itinerary.day_plans[0]
//!     .slots
//!     .iter()
//!     .map(|slot| slot.activity.as_str())
//!     .collect();
//! assert_eq!(first_day, ["A", "B", "C", "A"]);
//! assert_eq!(itinerary.day_plans[0].slots[3].start_time, time(15, 0, 0, 0));
//! ```

use jiff::civil::Date;

pub mod config;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_MAX_TRIP_DAYS, RotationPolicy, SchedulerConfig, SlotWindow};

use crate::{
    error::Result,
    models::{ActivityList, DayPlan, DaySlot, Itinerary, TripWindow},
};

/// Builds day-by-day, slot-by-slot itineraries.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Validates raw trip parameters and builds the itinerary.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` when `activities` is empty,
    /// `end_date` precedes `start_date` or the trip is longer than the
    /// configured maximum.
    pub fn generate(
        &self,
        start_date: Date,
        end_date: Date,
        activities: Vec<String>,
        destination: Option<&str>,
    ) -> Result<Itinerary> {
        let activities = ActivityList::new(activities)?;
        let window = TripWindow::new(start_date, end_date)?;
        window.check_max_days(self.config.max_trip_days())?;
        Ok(self.build(&window, &activities, destination))
    }

    /// Builds the itinerary for already validated inputs.
    pub fn build(
        &self,
        window: &TripWindow,
        activities: &ActivityList,
        destination: Option<&str>,
    ) -> Itinerary {
        let mut cursor = 0usize;

        let day_plans = window
            .dates()
            .map(|date| {
                let mut slots = Vec::with_capacity(self.config.slots_per_day());
                for slot in self.config.slot_windows() {
                    let Some(activity) = self.pick(activities, cursor) else {
                        break;
                    };
                    slots.push(DaySlot {
                        date,
                        start_time: slot.start,
                        end_time: slot.end,
                        activity: activity.to_string(),
                    });
                    cursor += 1;
                }
                DayPlan { date, slots }
            })
            .collect();

        Itinerary {
            trip_window: *window,
            destination: destination.map(String::from),
            day_plans,
        }
    }

    /// Activity for the trip-wide slot index under the configured policy.
    fn pick<'a>(&self, activities: &'a ActivityList, index: usize) -> Option<&'a str> {
        match self.config.rotation() {
            RotationPolicy::Cycle => activities.get(index % activities.len()),
            RotationPolicy::Truncate => activities.get(index),
        }
    }
}
