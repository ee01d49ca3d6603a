//! Core library for the Waypoint itinerary planner.
//!
//! Given a date range and an ordered list of activities, the [`scheduler`]
//! produces a day-by-day plan with fixed time slots. The rest of the crate
//! stores those plans in SQLite ([`db`]), exports them to an external calendar
//! ([`calendar`]) and formats them as markdown ([`display`]). [`TripPlanner`]
//! is the async entry point used by the CLI, MCP and HTTP interfaces.
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{TripPlannerBuilder, params::{GenerateItinerary, ListItineraries}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let itinerary = planner
//!     .generate_itinerary(&GenerateItinerary {
//!         destination: Some("Porto".to_string()),
//!         start_date: "2024-05-10".to_string(),
//!         end_date: "2024-05-12".to_string(),
//!         activities: vec!["Ribeira walk".to_string(), "Port cellars".to_string()],
//!         user_id: None,
//!     })
//!     .await?;
//! println!("{itinerary}");
//!
//! for summary in &planner.list_itineraries_summary(&ListItineraries::default()).await?.0 {
//!     println!("{} ({} events)", summary.id, summary.event_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod scheduler;

pub use calendar::{CalendarEvent, CalendarExporter, EventReference, GoogleCalendar};
pub use config::Settings;
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, ExportResult, ItinerarySummaries, LocalDateTime, OperationStatus,
};
pub use error::{Result, TripError};
pub use models::{
    ActivityList, DayPlan, DaySlot, Itinerary, ItinerarySummary, StoredDay, StoredEvent,
    StoredItinerary, TripWindow,
};
pub use params::{
    DeleteItinerary, EventLookup, ExportItinerary, GenerateItinerary, ItineraryLookup,
    ListItineraries,
};
pub use planner::{TripPlanner, TripPlannerBuilder};
pub use scheduler::{RotationPolicy, Scheduler, SchedulerConfig};
