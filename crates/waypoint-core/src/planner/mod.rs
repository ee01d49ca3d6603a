//! High-level async API for generating and managing itineraries.
//!
//! [`TripPlanner`] ties the pure [`Scheduler`](crate::scheduler::Scheduler) to
//! the SQLite persistence layer and the calendar exporters. Every database
//! call opens its own connection on a blocking worker thread, so the planner
//! itself holds no connection and can be shared freely between tasks.
//!
//! ```text
//! ┌─────────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Handlers       │    │   Operations    │    │    Database     │
//! │ (itinerary_handlers)│───▶│ (itinerary_ops) │───▶│   (via db/)     │
//! └─────────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: [`TripPlannerBuilder`], database path and scheduler setup
//! - [`itinerary_ops`]: one async method per database operation
//! - [`itinerary_handlers`]: generation, confirmation-guarded deletion,
//!   listing wrappers and calendar export
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::{TripPlannerBuilder, params::GenerateItinerary};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new()
//!     .with_database_path(Some("/tmp/waypoint-example.db"))
//!     .build()
//!     .await?;
//!
//! let params = GenerateItinerary {
//!     destination: Some("Lisbon".to_string()),
//!     start_date: "2023-10-01".to_string(),
//!     end_date: "2023-10-02".to_string(),
//!     activities: vec!["A".to_string(), "B".to_string(), "C".to_string()],
//!     user_id: None,
//! };
//!
//! // Preview without storing
//! let preview = planner.preview_itinerary(&params)?;
//! assert_eq!(preview.day_plans.len(), 2);
//!
//! // Generate and store
//! let stored = planner.generate_itinerary(&params).await?;
//! println!("{stored}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::scheduler::Scheduler;

pub mod builder;
pub mod itinerary_handlers;
pub mod itinerary_ops;


pub use builder::TripPlannerBuilder;

/// Main interface for generating, storing and exporting itineraries.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    pub(crate) db_path: PathBuf,
    pub(crate) scheduler: Scheduler,
}

impl TripPlanner {
    pub(crate) fn new(db_path: PathBuf, scheduler: Scheduler) -> Self {
        Self { db_path, scheduler }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}
