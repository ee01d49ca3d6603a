use std::convert::Infallible;

use axum::{
    Json,
    extract::{
        FromRequestParts, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, request::Parts},
};
use log::info;
use serde_json::{Value, json};
use waypoint_core::{
    TripError,
    display::DeleteResult,
    params::{DeleteItinerary, EventLookup, GenerateItinerary, ItineraryLookup, ListItineraries},
};

use super::{
    AppState,
    error::ApiError,
    responses::{DeletedEvent, DeletedItinerary, ItineraryBody, ItineraryListBody, PreviewDay},
};

pub const USER_HEADER: &str = "x-user-id";

/// Owner scope taken from the `X-User-Id` header; absent or blank means
/// unscoped.
pub struct UserScope(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for UserScope {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from);

        Ok(Self(user))
    }
}

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type IdPath = Result<Path<u64>, PathRejection>;

pub async fn home() -> Json<Value> {
    Json(json!({ "response": "Hello from Waypoint!" }))
}

pub async fn preview_itinerary(
    State(state): State<AppState>,
    payload: JsonBody<GenerateItinerary>,
) -> Result<Json<Vec<PreviewDay>>, ApiError> {
    let Json(params) = payload?;
    let itinerary = state.planner.preview_itinerary(&params)?;

    Ok(Json(PreviewDay::from_itinerary(&itinerary)))
}

/// Stores a new itinerary owned by the `X-User-Id` caller; a `user_id` in
/// the body is ignored so creation and lookups share one scope.
pub async fn create_itinerary(
    State(state): State<AppState>,
    UserScope(user): UserScope,
    payload: JsonBody<GenerateItinerary>,
) -> Result<(StatusCode, Json<ItineraryBody>), ApiError> {
    let Json(mut params) = payload?;
    params.user_id = user;

    let stored = state.planner.generate_itinerary(&params).await?;
    info!("Created itinerary {} over HTTP", stored.id);

    Ok((StatusCode::CREATED, Json(stored.into())))
}

pub async fn list_itineraries(
    State(state): State<AppState>,
    UserScope(user_id): UserScope,
) -> Result<Json<ItineraryListBody>, ApiError> {
    let summaries = state
        .planner
        .list_itineraries_summary(&ListItineraries { user_id })
        .await?;

    Ok(Json(summaries.0.into_iter().collect()))
}

pub async fn show_itinerary(
    State(state): State<AppState>,
    UserScope(user_id): UserScope,
    path: IdPath,
) -> Result<Json<ItineraryBody>, ApiError> {
    let Path(id) = path?;
    let itinerary = state
        .planner
        .get_itinerary(&ItineraryLookup { id, user_id })
        .await?
        .ok_or(TripError::ItineraryNotFound { id })?;

    Ok(Json(itinerary.into()))
}

/// Deletes without a separate confirmation step; the DELETE verb is the
/// confirmation.
pub async fn delete_itinerary(
    State(state): State<AppState>,
    UserScope(user_id): UserScope,
    path: IdPath,
) -> Result<Json<DeletedItinerary>, ApiError> {
    let Path(id) = path?;
    let deleted = state
        .planner
        .delete_itinerary(&DeleteItinerary {
            id,
            user_id,
            confirmed: true,
        })
        .await?
        .ok_or(TripError::ItineraryNotFound { id })?;

    let summary = (&deleted).into();
    Ok(Json(DeletedItinerary::new(
        DeleteResult::new(deleted).to_string(),
        summary,
    )))
}

pub async fn delete_event(
    State(state): State<AppState>,
    UserScope(user_id): UserScope,
    path: IdPath,
) -> Result<Json<DeletedEvent>, ApiError> {
    let Path(id) = path?;
    let deleted = state
        .planner
        .delete_event(&EventLookup { id, user_id })
        .await?
        .ok_or(TripError::EventNotFound { id })?;

    let detail = DeleteResult::new(deleted.clone()).to_string();
    Ok(Json(DeletedEvent::new(detail, deleted)))
}
