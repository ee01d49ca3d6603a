//! MCP server for Waypoint
//!
//! Exposes itinerary generation and storage as Model Context Protocol tools
//! over stdio. Tool parameters are the core parameter types; their JSON
//! schemas come from the `schema` feature of `waypoint-core`.

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};
use waypoint_core::{
    GoogleCalendar, TripError, TripPlanner,
    config::CalendarSettings,
    display::{CreateResult, DeleteResult},
    params::{
        DeleteItinerary, EventLookup, ExportItinerary, GenerateItinerary, ItineraryLookup,
        ListItineraries,
    },
};

pub mod errors;

use errors::{not_found, to_mcp_error};

pub type McpResult = Result<CallToolResult, McpError>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    planner: TripPlanner,
    calendar: CalendarSettings,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    pub fn new(planner: TripPlanner, calendar: CalendarSettings) -> Self {
        Self {
            planner,
            calendar,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "preview_itinerary",
        description = "Generate a day-by-day itinerary without storing it. Provide start_date and end_date (YYYY-MM-DD, inclusive) and a non-empty, ordered list of activities. Activities rotate through fixed daily time slots. Returns the plan as markdown."
    )]
    async fn preview_itinerary(
        &self,
        Parameters(params): Parameters<GenerateItinerary>,
    ) -> McpResult {
        debug!("preview_itinerary: {params:?}");

        let itinerary = self
            .planner
            .preview_itinerary(&params)
            .map_err(|e| to_mcp_error("Failed to generate itinerary", &e))?;

        text_result(itinerary.to_string())
    }

    #[tool(
        name = "generate_itinerary",
        description = "Generate a day-by-day itinerary and store it. Same parameters as preview_itinerary plus an optional destination and user_id owner. Returns the stored itinerary with its ID and the IDs of every scheduled event."
    )]
    async fn generate_itinerary(
        &self,
        Parameters(params): Parameters<GenerateItinerary>,
    ) -> McpResult {
        debug!("generate_itinerary: {params:?}");

        let stored = self
            .planner
            .generate_itinerary(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to generate itinerary", &e))?;

        text_result(CreateResult::new(stored).to_string())
    }

    #[tool(
        name = "show_itinerary",
        description = "Display a stored itinerary with all of its days and scheduled events. Pass user_id to only match itineraries owned by that user."
    )]
    async fn show_itinerary(&self, Parameters(params): Parameters<ItineraryLookup>) -> McpResult {
        debug!("show_itinerary: {params:?}");

        let itinerary = self
            .planner
            .get_itinerary(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to load itinerary", &e))?
            .ok_or_else(|| not_found(TripError::ItineraryNotFound { id: params.id }))?;

        text_result(itinerary.to_string())
    }

    #[tool(
        name = "list_itineraries",
        description = "List stored itineraries, newest first, with their dates and day and event counts. Pass user_id to only list that user's itineraries."
    )]
    async fn list_itineraries(
        &self,
        Parameters(params): Parameters<ListItineraries>,
    ) -> McpResult {
        debug!("list_itineraries: {params:?}");

        let summaries = self
            .planner
            .list_itineraries_summary(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to list itineraries", &e))?;

        text_result(format!("# Itineraries\n\n{summaries}"))
    }

    #[tool(
        name = "delete_itinerary",
        description = "Permanently delete a stored itinerary with all of its days and events. This cannot be undone; confirmed must be true."
    )]
    async fn delete_itinerary(
        &self,
        Parameters(params): Parameters<DeleteItinerary>,
    ) -> McpResult {
        debug!("delete_itinerary: {params:?}");

        let deleted = self
            .planner
            .delete_itinerary(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete itinerary", &e))?
            .ok_or_else(|| not_found(TripError::ItineraryNotFound { id: params.id }))?;

        text_result(DeleteResult::new(deleted).to_string())
    }

    #[tool(
        name = "delete_event",
        description = "Delete a single scheduled event by its ID. The rest of the itinerary is kept."
    )]
    async fn delete_event(&self, Parameters(params): Parameters<EventLookup>) -> McpResult {
        debug!("delete_event: {params:?}");

        let deleted = self
            .planner
            .delete_event(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete event", &e))?
            .ok_or_else(|| not_found(TripError::EventNotFound { id: params.id }))?;

        text_result(DeleteResult::new(deleted).to_string())
    }

    #[tool(
        name = "export_itinerary",
        description = "Export the events of a stored itinerary to the configured calendar. Pass date (YYYY-MM-DD) to export a single day. Requires a calendar access token in the server configuration."
    )]
    async fn export_itinerary(
        &self,
        Parameters(params): Parameters<ExportItinerary>,
    ) -> McpResult {
        debug!("export_itinerary: {params:?}");

        let exporter = GoogleCalendar::from_settings(&self.calendar)
            .map_err(|e| to_mcp_error("Calendar export unavailable", &e))?;
        let result = self
            .planner
            .export_itinerary(&exporter, &params)
            .await
            .map_err(|e| to_mcp_error("Failed to export itinerary", &e))?;

        text_result(result.to_string())
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "waypoint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Waypoint builds day-by-day travel itineraries.

## Core Concepts
- **Itinerary**: a trip between two dates (inclusive) with an optional destination
- **Day**: one calendar date of the trip
- **Event**: one activity placed in a fixed time slot of a day

Activities are assigned in the order given, one per slot, moving on to the next day when a day's slots are full.

## Workflow
1. Try a plan with `preview_itinerary`
2. Store it with `generate_itinerary` and note the returned ID
3. Review with `show_itinerary` or `list_itineraries`
4. Remove single events with `delete_event`, or whole itineraries with `delete_itinerary` (confirmed=true)
5. Push the events to a calendar with `export_itinerary`

Dates are always YYYY-MM-DD. Pass user_id to keep itineraries of different users apart."#
                .to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Waypoint MCP server on stdio");
    debug!("Server created with {} tools", server.tool_router.list_all().len());

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(reason) => info!("MCP server stopped: {reason:?}"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_info_advertises_tools() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let planner = waypoint_core::TripPlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .unwrap();
        let server = WaypointMcpServer::new(planner, CalendarSettings::default());

        let info = server.get_info();
        assert_eq!(info.server_info.name, "waypoint");
        assert!(info.capabilities.tools.is_some());
        assert_eq!(server.tool_router.list_all().len(), 7);
    }
}
