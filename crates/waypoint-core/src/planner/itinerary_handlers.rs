//! Itinerary handler operations shared by the CLI, MCP and HTTP interfaces.

use log::info;

use super::TripPlanner;
use crate::{
    calendar::{CalendarEvent, CalendarExporter},
    display::{ExportResult, ItinerarySummaries},
    error::{Result, TripError},
    models::{Itinerary, StoredEvent, StoredItinerary},
    params::{
        DeleteItinerary, EventLookup, ExportItinerary, GenerateItinerary, ItineraryLookup,
        ListItineraries,
    },
};

impl TripPlanner {
    /// Validates the parameters and builds an itinerary without storing it.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` for an empty or blank activity list,
    /// an unparsable date, an inverted date range or a trip longer than the
    /// scheduler's `max_trip_days`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use waypoint_core::{params::GenerateItinerary, TripPlannerBuilder};
    /// # async {
    /// let planner = TripPlannerBuilder::new().build().await?;
    /// let params = GenerateItinerary {
    ///     start_date: "2023-10-01".to_string(),
    ///     end_date: "2023-10-02".to_string(),
    ///     activities: vec!["A".to_string(), "B".to_string(), "C".to_string()],
    ///     ..Default::default()
    /// };
    /// let itinerary = planner.preview_itinerary(&params)?;
    /// assert_eq!(itinerary.day_plans[0].slots[3].activity, "A");
    /// # Result::<(), waypoint_core::TripError>::Ok(())
    /// # };
    /// ```
    pub fn preview_itinerary(&self, params: &GenerateItinerary) -> Result<Itinerary> {
        let (window, activities) = params.validate(self.scheduler.config().max_trip_days())?;
        Ok(self
            .scheduler
            .build(&window, &activities, params.destination()))
    }

    /// Generates an itinerary and stores it under the caller's user ID.
    pub async fn generate_itinerary(&self, params: &GenerateItinerary) -> Result<StoredItinerary> {
        let itinerary = self.preview_itinerary(params)?;
        let stored = self
            .create_itinerary(params.user_id.as_deref(), itinerary)
            .await?;

        info!(
            "Created itinerary {} ({} to {}, {} events)",
            stored.id,
            stored.start_date,
            stored.end_date,
            stored.event_count()
        );
        Ok(stored)
    }

    /// Lists itineraries wrapped for display.
    pub async fn list_itineraries_summary(
        &self,
        params: &ListItineraries,
    ) -> Result<ItinerarySummaries> {
        Ok(ItinerarySummaries(self.list_itineraries(params).await?))
    }

    /// Deletes a single event, returning its details for confirmation, or
    /// `None` when no event matched.
    pub async fn delete_event(&self, params: &EventLookup) -> Result<Option<StoredEvent>> {
        let event = self.get_event(params).await?;

        if event.is_some() {
            self.delete_event_by_id(params).await?;
            info!("Deleted event {}", params.id);
        }

        Ok(event)
    }

    /// Permanently deletes an itinerary after explicit confirmation.
    ///
    /// Uses get-before-delete so the removed itinerary can be shown to the
    /// caller. Returns `None` when no itinerary matched.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` if `confirmed` is false.
    pub async fn delete_itinerary(
        &self,
        params: &DeleteItinerary,
    ) -> Result<Option<StoredItinerary>> {
        if !params.confirmed {
            return Err(TripError::invalid_input("confirmed").with_reason(
                "Itinerary deletion requires explicit confirmation. Set 'confirmed' to true to permanently delete it with all of its days and events.",
            ));
        }

        let lookup = ItineraryLookup {
            id: params.id,
            user_id: params.user_id.clone(),
        };
        let itinerary = self.get_itinerary(&lookup).await?;

        if itinerary.is_some() {
            self.delete_itinerary_by_id(&lookup).await?;
            info!("Deleted itinerary {}", params.id);
        }

        Ok(itinerary)
    }

    /// Registers every event of a stored itinerary with a calendar,
    /// optionally only those on one date.
    ///
    /// Events are sent one at a time in trip order; the first failure stops
    /// the export.
    ///
    /// # Errors
    ///
    /// Returns `TripError::ItineraryNotFound` when the itinerary does not
    /// exist for the caller, `TripError::InvalidInput` for a malformed date
    /// filter and `TripError::Calendar` when the provider rejects an event.
    pub async fn export_itinerary<C: CalendarExporter>(
        &self,
        exporter: &C,
        params: &ExportItinerary,
    ) -> Result<ExportResult> {
        let only_date = params.date_filter()?;
        let lookup = ItineraryLookup {
            id: params.id,
            user_id: params.user_id.clone(),
        };
        let itinerary = self
            .get_itinerary(&lookup)
            .await?
            .ok_or(TripError::ItineraryNotFound { id: params.id })?;

        let mut references = Vec::new();
        for event in itinerary
            .events()
            .filter(|event| only_date.is_none_or(|date| event.date == date))
        {
            let calendar_event = CalendarEvent::from_stored(&itinerary, event, exporter.time_zone());
            references.push(exporter.insert_event(&calendar_event).await?);
        }

        info!(
            "Exported {} events of itinerary {}",
            references.len(),
            itinerary.id
        );
        Ok(ExportResult {
            itinerary_id: itinerary.id,
            references,
        })
    }
}
