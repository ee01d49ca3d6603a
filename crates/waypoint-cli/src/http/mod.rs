//! HTTP JSON API
//!
//! Serves the planner over axum. Requests are scoped to an owner by the
//! optional `X-User-Id` header.

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};
use log::{error, info};
use tokio::{
    net::TcpListener,
    signal::{
        self,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::{Any, CorsLayer};
use waypoint_core::TripPlanner;

pub mod error;
pub mod responses;
pub mod routes;


#[derive(Clone)]
pub struct AppState {
    pub planner: TripPlanner,
}

pub fn router(planner: TripPlanner) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home))
        .route("/generate_itinerary", post(routes::preview_itinerary))
        .route(
            "/itineraries",
            get(routes::list_itineraries).post(routes::create_itinerary),
        )
        .route(
            "/itineraries/{id}",
            get(routes::show_itinerary).delete(routes::delete_itinerary),
        )
        .route("/events/{id}", delete(routes::delete_event))
        .layer(middleware::from_fn(log_requests))
        .layer(cors)
        .with_state(AppState { planner })
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!("Before request: {method} {path}");
    let response = next.run(request).await;
    info!("After request: {method} {path} - Status: {}", response.status());

    response
}

/// Serves the API on `bind` until SIGINT or SIGTERM.
pub async fn serve(planner: TripPlanner, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!("HTTP API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(planner))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP API shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
