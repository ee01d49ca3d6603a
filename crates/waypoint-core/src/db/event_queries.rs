//! Day and event queries.

use rusqlite::{OptionalExtension, Row, params};

use super::parse_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{StoredDay, StoredEvent},
};

const SELECT_DAYS_SQL: &str =
    "SELECT id, itinerary_id, date, position FROM days WHERE itinerary_id = ?1 ORDER BY position";
const SELECT_EVENT_SQL: &str = "SELECT e.id, e.day_id, d.date, e.activity, e.start_time, e.end_time, e.position FROM day_events e JOIN days d ON d.id = e.day_id JOIN itineraries i ON i.id = d.itinerary_id WHERE e.id = ?1 AND (?2 IS NULL OR i.user_id = ?2)";
const SELECT_ITINERARY_EVENTS_SQL: &str = "SELECT e.id, e.day_id, d.date, e.activity, e.start_time, e.end_time, e.position FROM day_events e JOIN days d ON d.id = e.day_id WHERE d.itinerary_id = ?1 ORDER BY d.position, e.position";
const DELETE_EVENT_SQL: &str = "DELETE FROM day_events WHERE id = ?1 AND day_id IN (SELECT d.id FROM days d JOIN itineraries i ON i.id = d.itinerary_id WHERE ?2 IS NULL OR i.user_id = ?2)";

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<StoredEvent> {
    Ok(StoredEvent {
        id: row.get::<_, i64>(0)? as u64,
        day_id: row.get::<_, i64>(1)? as u64,
        date: parse_column(row, 2)?,
        activity: row.get(3)?,
        start_time: parse_column(row, 4)?,
        end_time: parse_column(row, 5)?,
        position: row.get::<_, i64>(6)? as u32,
    })
}

impl super::Database {
    /// Loads the days of an itinerary in trip order, each with its events.
    pub fn get_days(&self, itinerary_id: u64) -> Result<Vec<StoredDay>> {
        let mut day_stmt = self
            .connection
            .prepare(SELECT_DAYS_SQL)
            .db_context("Failed to prepare query")?;
        let mut days = day_stmt
            .query_map(params![itinerary_id as i64], |row| {
                Ok(StoredDay {
                    id: row.get::<_, i64>(0)? as u64,
                    itinerary_id: row.get::<_, i64>(1)? as u64,
                    date: parse_column(row, 2)?,
                    position: row.get::<_, i64>(3)? as u32,
                    events: Vec::new(),
                })
            })
            .db_context("Failed to query days")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch days")?;

        let mut event_stmt = self
            .connection
            .prepare(SELECT_ITINERARY_EVENTS_SQL)
            .db_context("Failed to prepare query")?;
        let events = event_stmt
            .query_map(params![itinerary_id as i64], event_from_row)
            .db_context("Failed to query day events")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch day events")?;

        for event in events {
            if let Some(day) = days.iter_mut().find(|day| day.id == event.day_id) {
                day.events.push(event);
            }
        }

        Ok(days)
    }

    /// Retrieves a single event, optionally scoped to the owner of its
    /// itinerary.
    pub fn get_event(&self, id: u64, user_id: Option<&str>) -> Result<Option<StoredEvent>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_EVENT_SQL)
            .db_context("Failed to prepare query")?;

        let event = stmt
            .query_row(params![id as i64, user_id], event_from_row)
            .optional()
            .db_context("Failed to query event")?;

        Ok(event)
    }

    /// Deletes a single event. Returns false when no event matched the ID
    /// (and scope).
    pub fn delete_event(&mut self, id: u64, user_id: Option<&str>) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_EVENT_SQL, params![id as i64, user_id])
            .db_context("Failed to delete event")?;

        Ok(rows_affected > 0)
    }
}
