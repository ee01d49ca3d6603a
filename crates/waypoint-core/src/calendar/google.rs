//! Google Calendar v3 client.

use jiff::Timestamp;
use log::{debug, info};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use super::{CalendarEvent, CalendarExporter, EventReference};
use crate::{
    config::CalendarSettings,
    error::{Result, TripError},
};

/// Wire format of an event insert request.
#[derive(Debug, Serialize)]
struct EventBody<'a> {
    summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    description: &'a str,
    start: EventTime<'a>,
    end: EventTime<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventTime<'a> {
    date_time: String,
    time_zone: &'a str,
}

impl<'a> From<&'a CalendarEvent> for EventBody<'a> {
    fn from(event: &'a CalendarEvent) -> Self {
        Self {
            summary: &event.summary,
            location: event.location.as_deref(),
            description: &event.description,
            start: EventTime {
                date_time: event.start.to_string(),
                time_zone: &event.time_zone,
            },
            end: EventTime {
                date_time: event.end.to_string(),
                time_zone: &event.time_zone,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsertedEvent {
    id: String,
    html_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<ListedEvent>,
}

#[derive(Debug, Deserialize)]
struct ListedEvent {
    #[serde(default)]
    summary: String,
    start: ListedTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListedTime {
    date_time: Option<String>,
    date: Option<String>,
}

/// Summary of an event already on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    /// `dateTime` for timed events, `date` for all-day events
    pub start: String,
    pub summary: String,
}

/// Client for one Google calendar, authenticated with a bearer token.
#[derive(Debug, Clone)]
pub struct GoogleCalendar {
    client: Client,
    base_url: String,
    calendar_id: String,
    time_zone: String,
    access_token: String,
}

impl GoogleCalendar {
    pub fn new(
        base_url: impl Into<String>,
        calendar_id: impl Into<String>,
        time_zone: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            calendar_id: calendar_id.into(),
            time_zone: time_zone.into(),
            access_token: access_token.into(),
        }
    }

    /// Builds a client from the `[calendar]` settings.
    ///
    /// # Errors
    ///
    /// Returns `TripError::Configuration` when no access token is configured
    /// in the settings file or the environment.
    pub fn from_settings(settings: &CalendarSettings) -> Result<Self> {
        let token = settings
            .resolve_access_token()
            .ok_or_else(|| TripError::Configuration {
                message: format!(
                    "No calendar access token configured; set calendar.access_token or {}",
                    crate::config::CALENDAR_TOKEN_ENV
                ),
            })?;

        Ok(Self::new(
            &settings.base_url,
            &settings.calendar_id,
            &settings.time_zone,
            token,
        ))
    }

    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    /// `{base_url}/calendars/{calendar_id}/events`, with the calendar ID
    /// percent-encoded as a single path segment.
    fn events_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| TripError::Configuration {
            message: format!("Invalid calendar base URL '{}': {e}", self.base_url),
        })?;

        url.path_segments_mut()
            .map_err(|()| TripError::Configuration {
                message: format!("Calendar base URL '{}' cannot hold a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(["calendars", self.calendar_id.as_str(), "events"]);

        Ok(url)
    }

    /// Lists events starting from now, soonest first.
    pub async fn list_upcoming(&self, max_results: u32) -> Result<Vec<UpcomingEvent>> {
        let url = self.events_url()?;
        let time_min = Timestamp::now().to_string();
        let max_results = max_results.to_string();

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("timeMin", time_min.as_str()),
                ("maxResults", max_results.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ])
            .send()
            .await
            .map_err(|e| TripError::calendar("Failed to list calendar events", Some(e)))?
            .error_for_status()
            .map_err(|e| TripError::calendar("Calendar rejected the listing request", Some(e)))?;

        let list: EventList = response
            .json()
            .await
            .map_err(|e| TripError::calendar("Malformed calendar listing", Some(e)))?;

        debug!("Listed {} upcoming events", list.items.len());
        Ok(list
            .items
            .into_iter()
            .map(|event| UpcomingEvent {
                start: event.start.date_time.or(event.start.date).unwrap_or_default(),
                summary: event.summary,
            })
            .collect())
    }
}

impl CalendarExporter for GoogleCalendar {
    fn time_zone(&self) -> &str {
        &self.time_zone
    }

    async fn insert_event(&self, event: &CalendarEvent) -> Result<EventReference> {
        let url = self.events_url()?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&EventBody::from(event))
            .send()
            .await
            .map_err(|e| TripError::calendar("Failed to send calendar event", Some(e)))?
            .error_for_status()
            .map_err(|e| TripError::calendar("Calendar rejected the event", Some(e)))?;

        let inserted: InsertedEvent = response
            .json()
            .await
            .map_err(|e| TripError::calendar("Malformed calendar response", Some(e)))?;

        info!("Event created: {}", inserted.html_link.as_deref().unwrap_or(inserted.id.as_str()));
        Ok(EventReference {
            id: inserted.id,
            html_link: inserted.html_link,
        })
    }
}
