//! Itinerary and event operations for the TripPlanner.
//!
//! Each method opens a database connection on a blocking worker thread,
//! performs one operation and closes it again.

use log::debug;
use tokio::task;

use super::TripPlanner;
use crate::{
    db::Database,
    error::{Result, join_error},
    models::{Itinerary, ItinerarySummary, StoredEvent, StoredItinerary},
    params::{EventLookup, ItineraryLookup, ListItineraries},
};

impl TripPlanner {
    /// Stores an already generated itinerary for the given owner.
    pub async fn create_itinerary(
        &self,
        user_id: Option<&str>,
        itinerary: Itinerary,
    ) -> Result<StoredItinerary> {
        let db_path = self.db_path.clone();
        let user_id = user_id.map(String::from);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_itinerary(user_id.as_deref(), &itinerary)
        })
        .await
        .map_err(join_error)?
    }

    /// Retrieves an itinerary with its days and events.
    pub async fn get_itinerary(&self, params: &ItineraryLookup) -> Result<Option<StoredItinerary>> {
        let db_path = self.db_path.clone();
        let ItineraryLookup { id, user_id } = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_itinerary(id, user_id.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    /// Lists itinerary summaries, newest first.
    pub async fn list_itineraries(
        &self,
        params: &ListItineraries,
    ) -> Result<Vec<ItinerarySummary>> {
        let db_path = self.db_path.clone();
        let user_id = params.user_id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_itineraries(user_id.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    /// Retrieves a single scheduled event.
    pub async fn get_event(&self, params: &EventLookup) -> Result<Option<StoredEvent>> {
        let db_path = self.db_path.clone();
        let EventLookup { id, user_id } = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_event(id, user_id.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    /// Deletes a single event. Returns false when nothing matched.
    pub async fn delete_event_by_id(&self, params: &EventLookup) -> Result<bool> {
        let db_path = self.db_path.clone();
        let EventLookup { id, user_id } = params.clone();

        debug!("Deleting event {id}");
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_event(id, user_id.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    /// Permanently deletes an itinerary with its days and events. Returns
    /// false when nothing matched.
    pub async fn delete_itinerary_by_id(&self, params: &ItineraryLookup) -> Result<bool> {
        let db_path = self.db_path.clone();
        let ItineraryLookup { id, user_id } = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_itinerary(id, user_id.as_deref())
        })
        .await
        .map_err(join_error)?
    }
}
