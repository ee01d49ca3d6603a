//! Data models for trips, itineraries and their stored records.
//!
//! The models fall into three groups:
//!
//! - **Inputs** ([`trip`]): [`TripWindow`] and [`ActivityList`], validated on
//!   construction so the scheduler never sees an inverted window or an empty
//!   rotation list.
//! - **Scheduler output** ([`itinerary`]): [`Itinerary`], [`DayPlan`] and
//!   [`DaySlot`] value objects. They carry no identifiers and are created fresh
//!   on every scheduler run.
//! - **Stored records** ([`stored`], [`summary`]): the same data after the
//!   persistence adapter assigned identifiers, plus listing summaries.
//!
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{ActivityList, TripWindow};
//!
//! let window = TripWindow::parse("2023-10-01", "2023-10-03").unwrap();
//! let activities = ActivityList::new(vec!["Museum".into(), "Hike".into()]).unwrap();
//!
//! assert_eq!(window.day_count(), 3);
//! assert_eq!(activities.get(1), Some("Hike"));
//! ```

pub mod itinerary;
pub mod stored;
pub mod summary;
pub mod trip;

#[cfg(test)]
mod tests;

pub use itinerary::{DayPlan, DaySlot, Itinerary};
pub use stored::{StoredDay, StoredEvent, StoredItinerary};
pub use summary::ItinerarySummary;
pub use trip::{ActivityList, TripWindow};
