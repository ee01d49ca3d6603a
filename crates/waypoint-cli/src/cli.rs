//! Command handlers and their clap argument wrappers.
//!
//! Each subcommand has an argument struct with clap derives that converts
//! into the matching core parameter type, so clap attributes never leak into
//! `waypoint-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner
//! ```
//!
//! The global `--user` flag is not part of the per-command structs; it is
//! supplied when converting, which is why the conversions are `into_params`
//! methods rather than `From` impls.

use anyhow::{Context, Result};
use clap::Args;
use waypoint_core::{
    GoogleCalendar, TripError, TripPlanner,
    config::CalendarSettings,
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{
        DeleteItinerary, EventLookup, ExportItinerary, GenerateItinerary, ItineraryLookup,
        ListItineraries,
    },
};

use crate::renderer::TerminalRenderer;

/// Trip parameters shared by `generate` and `preview`
#[derive(Args)]
pub struct GenerateArgs {
    /// First day of the trip (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    pub end_date: String,
    /// Activities in rotation order
    #[arg(help = "Activities in the order they should rotate through the time slots")]
    pub activities: Vec<String>,
    /// Destination shown with the itinerary
    #[arg(short, long)]
    pub destination: Option<String>,
}

impl GenerateArgs {
    pub fn into_params(self, user_id: Option<String>) -> GenerateItinerary {
        GenerateItinerary {
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            activities: self.activities,
            user_id,
        }
    }
}

#[derive(Args)]
pub struct ShowArgs {
    /// ID of the itinerary to display
    pub id: u64,
}

impl ShowArgs {
    pub fn into_params(self, user_id: Option<String>) -> ItineraryLookup {
        ItineraryLookup {
            id: self.id,
            user_id,
        }
    }
}

#[derive(Args)]
pub struct DeleteItineraryArgs {
    /// ID of the itinerary to delete
    pub id: u64,
    /// Confirm the permanent deletion of the itinerary and all of its events
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl DeleteItineraryArgs {
    pub fn into_params(self, user_id: Option<String>) -> DeleteItinerary {
        DeleteItinerary {
            id: self.id,
            user_id,
            confirmed: self.yes,
        }
    }
}

#[derive(Args)]
pub struct DeleteEventArgs {
    /// ID of the event to delete
    pub id: u64,
}

impl DeleteEventArgs {
    pub fn into_params(self, user_id: Option<String>) -> EventLookup {
        EventLookup {
            id: self.id,
            user_id,
        }
    }
}

#[derive(Args)]
pub struct ExportArgs {
    /// ID of the itinerary to export
    pub id: u64,
    /// Only export the events of this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

impl ExportArgs {
    pub fn into_params(self, user_id: Option<String>) -> ExportItinerary {
        ExportItinerary {
            id: self.id,
            user_id,
            date: self.date,
        }
    }
}

#[derive(Args)]
pub struct UpcomingArgs {
    /// Maximum number of events to list
    #[arg(long, short = 'n', default_value_t = 10)]
    pub max_results: u32,
}

#[derive(Args)]
pub struct HttpArgs {
    /// Address to listen on; overrides `[http] bind` from the configuration
    #[arg(long)]
    pub bind: Option<String>,
}

/// Runs one CLI command against the planner and renders its output.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
    user_id: Option<String>,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer, user_id: Option<String>) -> Self {
        Self {
            planner,
            renderer,
            user_id,
        }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let params = args.into_params(self.user_id.clone());
        let stored = self
            .planner
            .generate_itinerary(&params)
            .await
            .context("Failed to generate itinerary")?;

        self.renderer.render(&CreateResult::new(stored).to_string())
    }

    pub fn preview(&self, args: GenerateArgs) -> Result<()> {
        let params = args.into_params(self.user_id.clone());
        let itinerary = self
            .planner
            .preview_itinerary(&params)
            .context("Failed to generate itinerary")?;

        self.renderer.render(&itinerary.to_string())
    }

    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let id = args.id;
        let itinerary = self
            .planner
            .get_itinerary(&args.into_params(self.user_id.clone()))
            .await
            .context("Failed to load itinerary")?
            .ok_or(TripError::ItineraryNotFound { id })?;

        self.renderer.render(&itinerary.to_string())
    }

    pub async fn list(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_itineraries_summary(&ListItineraries {
                user_id: self.user_id.clone(),
            })
            .await
            .context("Failed to list itineraries")?;

        self.renderer.render(&summaries.to_string())
    }

    pub async fn delete(&self, args: DeleteItineraryArgs) -> Result<()> {
        let id = args.id;
        let deleted = self
            .planner
            .delete_itinerary(&args.into_params(self.user_id.clone()))
            .await
            .context("Failed to delete itinerary")?
            .ok_or(TripError::ItineraryNotFound { id })?;

        self.renderer.render(&DeleteResult::new(deleted).to_string())
    }

    pub async fn delete_event(&self, args: DeleteEventArgs) -> Result<()> {
        let id = args.id;
        let deleted = self
            .planner
            .delete_event(&args.into_params(self.user_id.clone()))
            .await
            .context("Failed to delete event")?
            .ok_or(TripError::EventNotFound { id })?;

        self.renderer.render(&DeleteResult::new(deleted).to_string())
    }

    pub async fn export(&self, args: ExportArgs, calendar: &CalendarSettings) -> Result<()> {
        let exporter = GoogleCalendar::from_settings(calendar)?;
        let result = self
            .planner
            .export_itinerary(&exporter, &args.into_params(self.user_id.clone()))
            .await
            .context("Failed to export itinerary")?;

        self.renderer.render(&result.to_string())
    }

    pub async fn upcoming(&self, args: UpcomingArgs, calendar: &CalendarSettings) -> Result<()> {
        let client = GoogleCalendar::from_settings(calendar)?;
        let events = client
            .list_upcoming(args.max_results)
            .await
            .context("Failed to list upcoming events")?;

        if events.is_empty() {
            return self.renderer.render(
                &OperationStatus::success(format!(
                    "No upcoming events on calendar '{}'",
                    client.calendar_id()
                ))
                .to_string(),
            );
        }

        let mut output = format!("# Upcoming events on {}\n\n", client.calendar_id());
        for event in events {
            output.push_str(&format!("- {} {}\n", event.start, event.summary));
        }
        self.renderer.render(&output)
    }
}
