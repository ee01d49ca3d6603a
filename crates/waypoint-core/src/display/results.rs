//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use serde::Serialize;

use crate::{
    calendar::EventReference,
    models::{StoredEvent, StoredItinerary},
};

/// Wrapper for displaying a newly stored resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<StoredItinerary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created itinerary with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for displaying a deleted resource, identified by the details it
/// had before deletion.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<StoredItinerary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted itinerary '{}' (ID: {}) with {} events",
            self.resource.destination.as_deref().unwrap_or("Trip"),
            self.resource.id,
            self.resource.event_count()
        )
    }
}

impl fmt::Display for DeleteResult<StoredEvent> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted event '{}' on {} (ID: {})",
            self.resource.activity, self.resource.date, self.resource.id
        )
    }
}

/// Outcome of exporting an itinerary to a calendar.
#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    pub itinerary_id: u64,
    pub references: Vec<EventReference>,
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.references.is_empty() {
            return writeln!(f, "No events to export for itinerary {}.", self.itinerary_id);
        }

        writeln!(
            f,
            "Exported {} events from itinerary {}",
            self.references.len(),
            self.itinerary_id
        )?;
        writeln!(f)?;
        for reference in &self.references {
            match &reference.html_link {
                Some(link) => writeln!(f, "- {}: {link}", reference.id)?,
                None => writeln!(f, "- {}", reference.id)?,
            }
        }
        Ok(())
    }
}
