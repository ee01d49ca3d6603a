//! Display implementations for domain models.
//!
//! Every model renders as markdown. Slot times are shown as `HH:MM`; stored
//! records include their IDs so they can be passed to `show`, `delete-event`
//! and `export`.

use std::fmt;

use super::datetime::{ClockTime, LocalDateTime};
use crate::models::{
    DayPlan, DaySlot, Itinerary, ItinerarySummary, StoredDay, StoredEvent, StoredItinerary,
};

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}-{} {}",
            ClockTime(self.start_time),
            ClockTime(self.end_time),
            self.activity
        )
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.date)?;
        writeln!(f)?;

        if self.slots.is_empty() {
            writeln!(f, "No activities scheduled.")?;
        } else {
            for slot in &self.slots {
                write!(f, "{slot}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Itinerary: {}",
            self.destination.as_deref().unwrap_or("Trip")
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Dates: {} to {} ({})",
            self.trip_window.start_date(),
            self.trip_window.end_date(),
            plural(self.day_plans.len(), "day")
        )?;
        writeln!(f, "- Scheduled: {}", plural(self.slot_count(), "activity slot"))?;
        writeln!(f)?;

        for day in &self.day_plans {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StoredEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}-{} {} (event {})",
            ClockTime(self.start_time),
            ClockTime(self.end_time),
            self.activity,
            self.id
        )
    }
}

impl fmt::Display for StoredDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}: {}", self.position + 1, self.date)?;
        writeln!(f)?;

        if self.events.is_empty() {
            writeln!(f, "No activities scheduled.")?;
        } else {
            for event in &self.events {
                write!(f, "{event}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for StoredItinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {}. {}",
            self.id,
            self.destination.as_deref().unwrap_or("Trip")
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "- Dates: {} to {} ({})",
            self.start_date,
            self.end_date,
            plural(self.days.len(), "day")
        )?;
        if let Some(user_id) = &self.user_id {
            writeln!(f, "- Owner: {user_id}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        for day in &self.days {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ItinerarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {})",
            self.destination.as_deref().unwrap_or("Trip"),
            self.id
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Dates**: {} to {} ({}, {})",
            self.start_date,
            self.end_date,
            plural(self.day_count as usize, "day"),
            plural(self.event_count as usize, "event")
        )?;
        if let Some(user_id) = &self.user_id {
            writeln!(f, "- **Owner**: {user_id}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{
        Timestamp,
        civil::{date, time},
    };

    use super::*;
    use crate::models::TripWindow;

    fn slot(day: i8, hour: i8, activity: &str) -> DaySlot {
        DaySlot {
            date: date(2023, 10, day),
            start_time: time(hour, 0, 0, 0),
            end_time: time(hour + 2, 0, 0, 0),
            activity: activity.to_string(),
        }
    }

    #[test]
    fn test_itinerary_markdown() {
        let itinerary = Itinerary {
            trip_window: TripWindow::new(date(2023, 10, 1), date(2023, 10, 2)).unwrap(),
            destination: Some("Lisbon".to_string()),
            day_plans: vec![
                DayPlan {
                    date: date(2023, 10, 1),
                    slots: vec![slot(1, 9, "A"), slot(1, 11, "B")],
                },
                DayPlan {
                    date: date(2023, 10, 2),
                    slots: vec![],
                },
            ],
        };

        let output = itinerary.to_string();
        assert!(output.starts_with("# Itinerary: Lisbon\n"));
        assert!(output.contains("- Dates: 2023-10-01 to 2023-10-02 (2 days)"));
        assert!(output.contains("- Scheduled: 2 activity slots"));
        assert!(output.contains("## 2023-10-01\n\n- 09:00-11:00 A\n- 11:00-13:00 B\n"));
        assert!(output.contains("## 2023-10-02\n\nNo activities scheduled."));
    }

    #[test]
    fn test_stored_itinerary_markdown() {
        let itinerary = StoredItinerary {
            id: 3,
            user_id: Some("alice".to_string()),
            destination: None,
            start_date: date(2023, 10, 1),
            end_date: date(2023, 10, 1),
            created_at: Timestamp::UNIX_EPOCH,
            days: vec![StoredDay {
                id: 10,
                itinerary_id: 3,
                date: date(2023, 10, 1),
                position: 0,
                events: vec![StoredEvent {
                    id: 21,
                    day_id: 10,
                    date: date(2023, 10, 1),
                    activity: "Museum".to_string(),
                    start_time: time(9, 0, 0, 0),
                    end_time: time(11, 0, 0, 0),
                    position: 0,
                }],
            }],
        };

        let output = itinerary.to_string();
        assert!(output.starts_with("# 3. Trip\n"));
        assert!(output.contains("(1 day)"));
        assert!(output.contains("- Owner: alice"));
        assert!(output.contains("## Day 1: 2023-10-01"));
        assert!(output.contains("- 09:00-11:00 Museum (event 21)"));
    }

    #[test]
    fn test_summary_markdown() {
        let summary = ItinerarySummary {
            id: 4,
            user_id: None,
            destination: Some("Kyoto".to_string()),
            start_date: date(2024, 4, 1),
            end_date: date(2024, 4, 3),
            created_at: Timestamp::UNIX_EPOCH,
            day_count: 3,
            event_count: 1,
        };

        let output = summary.to_string();
        assert!(output.starts_with("## Kyoto (ID: 4)"));
        assert!(output.contains("(3 days, 1 event)"));
        assert!(!output.contains("Owner"));
    }
}
