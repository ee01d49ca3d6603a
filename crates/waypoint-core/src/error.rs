//! Error types for the itinerary library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by every layer of the core crate.
#[derive(Error, Debug)]
pub enum TripError {
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No itinerary with this ID, or one owned by another user
    #[error("Itinerary with ID {id} not found")]
    ItineraryNotFound { id: u64 },
    /// No event with this ID, or one in another user's itinerary
    #[error("Event with ID {id} not found")]
    EventNotFound { id: u64 },
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Empty or blank activities, unparsable or inverted dates, malformed
    /// schedule settings, unconfirmed deletion
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The calendar provider could not be reached or refused a request
    #[error("Calendar error: {message}")]
    Calendar {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

/// Names the offending field before the reason is known.
///
/// ```rust
/// use waypoint_core::TripError;
///
/// let err = TripError::invalid_input("end_date").with_reason("precedes start_date");
/// assert!(err.is_invalid_input());
/// ```
pub struct InvalidField {
    field: String,
}

impl InvalidField {
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    pub fn invalid_input(field: impl Into<String>) -> InvalidField {
        InvalidField {
            field: field.into(),
        }
    }

    pub fn calendar(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Calendar {
            message: message.into(),
            source,
        }
    }

    /// True for errors caused by the caller's input rather than by storage
    /// or the calendar provider.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ItineraryNotFound { .. } | Self::EventNotFound { .. }
        )
    }
}

/// Attaches a message to rusqlite failures.
pub trait DatabaseResultExt<T> {
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| TripError::Database {
            message: message.to_string(),
            source,
        })
    }
}

/// A blocking database task panicked or was cancelled.
pub(crate) fn join_error(e: tokio::task::JoinError) -> TripError {
    TripError::Configuration {
        message: format!("Database task failed: {e}"),
    }
}

pub type Result<T> = std::result::Result<T, TripError>;
