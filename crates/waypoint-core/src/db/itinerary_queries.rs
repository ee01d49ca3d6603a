//! Itinerary create, lookup, listing and deletion.

use jiff::Timestamp;
use log::debug;
use rusqlite::{OptionalExtension, params};

use super::parse_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Itinerary, ItinerarySummary, StoredDay, StoredEvent, StoredItinerary},
};

const INSERT_ITINERARY_SQL: &str = "INSERT INTO itineraries (user_id, destination, start_date, end_date, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_DAY_SQL: &str = "INSERT INTO days (itinerary_id, date, position) VALUES (?1, ?2, ?3)";
const INSERT_EVENT_SQL: &str = "INSERT INTO day_events (day_id, activity, start_time, end_time, position) VALUES (?1, ?2, ?3, ?4, ?5)";
// ?2 IS NULL makes the lookup unscoped when no user ID is supplied
const SELECT_ITINERARY_SQL: &str = "SELECT id, user_id, destination, start_date, end_date, created_at FROM itineraries WHERE id = ?1 AND (?2 IS NULL OR user_id = ?2)";
const LIST_SUMMARIES_SQL: &str = "SELECT id, user_id, destination, start_date, end_date, created_at, day_count, event_count FROM itinerary_summaries WHERE (?1 IS NULL OR user_id = ?1) ORDER BY id DESC";
const DELETE_ITINERARY_SQL: &str =
    "DELETE FROM itineraries WHERE id = ?1 AND (?2 IS NULL OR user_id = ?2)";

impl super::Database {
    /// Stores a generated itinerary and returns it with its new identifiers.
    ///
    /// The itinerary row, its day rows and its event rows are written in one
    /// transaction.
    pub fn create_itinerary(
        &mut self,
        user_id: Option<&str>,
        itinerary: &Itinerary,
    ) -> Result<StoredItinerary> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let start_date = itinerary.trip_window.start_date();
        let end_date = itinerary.trip_window.end_date();

        tx.execute(
            INSERT_ITINERARY_SQL,
            params![
                user_id,
                itinerary.destination.as_deref(),
                start_date.to_string(),
                end_date.to_string(),
                now.to_string()
            ],
        )
        .db_context("Failed to insert itinerary")?;
        let itinerary_id = tx.last_insert_rowid() as u64;

        let mut days = Vec::with_capacity(itinerary.day_plans.len());
        for (day_position, plan) in itinerary.day_plans.iter().enumerate() {
            tx.execute(
                INSERT_DAY_SQL,
                params![
                    itinerary_id as i64,
                    plan.date.to_string(),
                    day_position as i64
                ],
            )
            .db_context("Failed to insert day")?;
            let day_id = tx.last_insert_rowid() as u64;

            let mut events = Vec::with_capacity(plan.slots.len());
            for (event_position, slot) in plan.slots.iter().enumerate() {
                tx.execute(
                    INSERT_EVENT_SQL,
                    params![
                        day_id as i64,
                        &slot.activity,
                        slot.start_time.to_string(),
                        slot.end_time.to_string(),
                        event_position as i64
                    ],
                )
                .db_context("Failed to insert day event")?;

                events.push(StoredEvent {
                    id: tx.last_insert_rowid() as u64,
                    day_id,
                    date: plan.date,
                    activity: slot.activity.clone(),
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                    position: event_position as u32,
                });
            }

            days.push(StoredDay {
                id: day_id,
                itinerary_id,
                date: plan.date,
                position: day_position as u32,
                events,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!(
            "Stored itinerary {itinerary_id} with {} days and {} events",
            days.len(),
            itinerary.slot_count()
        );

        Ok(StoredItinerary {
            id: itinerary_id,
            user_id: user_id.map(String::from),
            destination: itinerary.destination.clone(),
            start_date,
            end_date,
            created_at: now,
            days,
        })
    }

    /// Retrieves an itinerary with its days and events.
    ///
    /// With a `user_id` the lookup only matches itineraries owned by that
    /// user; without one any itinerary matches.
    pub fn get_itinerary(&self, id: u64, user_id: Option<&str>) -> Result<Option<StoredItinerary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITINERARY_SQL)
            .db_context("Failed to prepare query")?;

        let mut itinerary = stmt
            .query_row(params![id as i64, user_id], |row| {
                Ok(StoredItinerary {
                    id: row.get::<_, i64>(0)? as u64,
                    user_id: row.get(1)?,
                    destination: row.get(2)?,
                    start_date: parse_column(row, 3)?,
                    end_date: parse_column(row, 4)?,
                    created_at: parse_column(row, 5)?,
                    days: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query itinerary")?;

        // Eagerly load days and events if the itinerary exists
        if let Some(ref mut itinerary) = itinerary {
            itinerary.days = self.get_days(itinerary.id)?;
        }

        Ok(itinerary)
    }

    /// Lists itinerary summaries, newest first.
    pub fn list_itineraries(&self, user_id: Option<&str>) -> Result<Vec<ItinerarySummary>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map(params![user_id], |row| {
                Ok(ItinerarySummary {
                    id: row.get::<_, i64>(0)? as u64,
                    user_id: row.get(1)?,
                    destination: row.get(2)?,
                    start_date: parse_column(row, 3)?,
                    end_date: parse_column(row, 4)?,
                    created_at: parse_column(row, 5)?,
                    day_count: row.get::<_, i64>(6)? as u32,
                    event_count: row.get::<_, i64>(7)? as u32,
                })
            })
            .db_context("Failed to query itineraries")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch itineraries")?;

        Ok(summaries)
    }

    /// Permanently deletes an itinerary with its days and events.
    ///
    /// Returns false when no itinerary matched the ID (and scope).
    pub fn delete_itinerary(&mut self, id: u64, user_id: Option<&str>) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_ITINERARY_SQL, params![id as i64, user_id])
            .db_context("Failed to delete itinerary")?;

        debug!("Deleted itinerary {id}: {rows_affected} row(s)");
        Ok(rows_affected > 0)
    }
}
