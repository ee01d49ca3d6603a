use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde_json::json;
use thiserror::Error;
use waypoint_core::TripError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Trip(#[from] TripError),

    #[error("Malformed payload: {message}")]
    MalformedPayload { status: StatusCode, message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { status: StatusCode, message: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedPayload {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Trip(e) if e.is_invalid_input() => StatusCode::BAD_REQUEST,
            Self::Trip(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Trip(TripError::Calendar { .. }) => StatusCode::BAD_GATEWAY,
            Self::Trip(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MalformedPayload { status, .. } | Self::InvalidPath { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {self}");
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let invalid: ApiError = TripError::invalid_input("activities")
            .with_reason("empty")
            .into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let missing: ApiError = TripError::EventNotFound { id: 3 }.into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let calendar: ApiError = TripError::calendar("rejected", None).into();
        assert_eq!(calendar.status(), StatusCode::BAD_GATEWAY);

        let config: ApiError = TripError::Configuration {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let path = ApiError::InvalidPath {
            status: StatusCode::BAD_REQUEST,
            message: "Cannot parse `abc` to a `u64`".to_string(),
        };
        assert_eq!(path.status(), StatusCode::BAD_REQUEST);
        assert_eq!(path.to_string(), "Invalid path: Cannot parse `abc` to a `u64`");
    }

    #[test]
    fn test_detail_is_the_error_message() {
        let err: ApiError = TripError::ItineraryNotFound { id: 12 }.into();
        assert_eq!(err.to_string(), "Itinerary with ID 12 not found");
    }
}
