//! Markdown formatting for models and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections and
//! operation outcomes are wrapped in newtypes so each interface prints the same
//! text. The CLI renders it with termimad, the MCP server returns it verbatim.
//!
//! - [`collections`]: [`ItinerarySummaries`]
//! - [`results`]: [`CreateResult`], [`DeleteResult`], [`ExportResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`] and [`ClockTime`]
//!
//! ```rust
//! use waypoint_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Deleted event 4".to_string());
//! assert_eq!(status.to_string(), "Success: Deleted event 4\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::ItinerarySummaries;
pub use datetime::{ClockTime, LocalDateTime};
pub use results::{CreateResult, DeleteResult, ExportResult};
pub use status::OperationStatus;
