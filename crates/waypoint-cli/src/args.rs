use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    DeleteEventArgs, DeleteItineraryArgs, ExportArgs, GenerateArgs, HttpArgs, ShowArgs,
    UpcomingArgs,
};

/// Day-by-day travel itinerary planner
///
/// Waypoint spreads an ordered list of activities over the days of a trip,
/// one activity per time slot, stores the result in a local SQLite database
/// and can export it to a calendar. It runs as a command-line tool, as an MCP
/// (Model Context Protocol) server on stdio, or as an HTTP JSON API.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a TOML configuration file. Defaults to
    /// $XDG_CONFIG_HOME/waypoint/config.toml when it exists
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Owner of the itineraries being created or looked up. Without it every
    /// itinerary is visible
    #[arg(long, short, global = true)]
    pub user: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an itinerary and store it
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Generate an itinerary without storing it
    #[command(alias = "p")]
    Preview(GenerateArgs),
    /// Show a stored itinerary with all of its days and events
    #[command(alias = "s")]
    Show(ShowArgs),
    /// List stored itineraries, newest first
    #[command(alias = "ls")]
    List,
    /// Permanently delete an itinerary
    Delete(DeleteItineraryArgs),
    /// Delete a single scheduled event
    DeleteEvent(DeleteEventArgs),
    /// Export a stored itinerary to the configured calendar
    Export(ExportArgs),
    /// List upcoming events on the configured calendar
    Upcoming(UpcomingArgs),
    /// Start the MCP server on stdio
    Serve,
    /// Start the HTTP JSON API
    Http(HttpArgs),
}
