//! Waypoint CLI application
//!
//! Command-line, MCP and HTTP front ends for the waypoint itinerary planner.

mod args;
mod cli;
mod http;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{WaypointMcpServer, run_stdio_server};
use renderer::TerminalRenderer;
use waypoint_core::{Settings, TripPlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        config,
        user,
        no_color,
        command,
    } = Args::parse();

    let settings = Settings::load(config.as_deref()).context("Failed to load configuration")?;
    let scheduler_config = settings
        .schedule
        .to_scheduler_config()
        .context("Invalid [schedule] configuration")?;

    let planner = TripPlannerBuilder::new()
        .with_database_path(database_file.or_else(|| settings.database.path.clone()))
        .with_scheduler_config(scheduler_config)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Waypoint started with database {}", planner.database_path().display());

    let cli = Cli::new(planner.clone(), TerminalRenderer::new(!no_color), user);

    match command {
        Some(Generate(args)) => cli.generate(args).await,
        Some(Preview(args)) => cli.preview(args),
        Some(Show(args)) => cli.show(args).await,
        Some(List) | None => cli.list().await,
        Some(Delete(args)) => cli.delete(args).await,
        Some(DeleteEvent(args)) => cli.delete_event(args).await,
        Some(Export(args)) => cli.export(args, &settings.calendar).await,
        Some(Upcoming(args)) => cli.upcoming(args, &settings.calendar).await,
        Some(Serve) => {
            info!("Starting Waypoint MCP server");
            run_stdio_server(WaypointMcpServer::new(planner, settings.calendar))
                .await
                .context("MCP server failed")
        }
        Some(Http(args)) => {
            let bind = args.bind.unwrap_or(settings.http.bind);
            http::serve(planner, &bind).await.context("HTTP server failed")
        }
    }
}
