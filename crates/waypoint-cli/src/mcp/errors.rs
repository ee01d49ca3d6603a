//! Conversion of planner errors into MCP error responses.

use rmcp::ErrorData;
use waypoint_core::TripError;

/// Maps a planner error to an MCP error, prefixing `message`.
///
/// Caller mistakes become `invalid_params`; everything else is reported as
/// an internal error.
pub fn to_mcp_error(message: &str, error: &TripError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_invalid_input() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

pub fn not_found(error: TripError) -> ErrorData {
    ErrorData::invalid_params(error.to_string(), None)
}
