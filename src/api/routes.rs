//! API route definitions
//!
//! Organizes endpoints for the vitaltrack dashboard:
//! - /api/v1/readings - reading CRUD, latest value, search
//! - /api/v1/stats - window statistics per vital type
//! - /api/v1/dashboard - latest + statistics for every vital type
//! - /api/v1/settings - per-user preferences
//! - /api/v1/export, /api/v1/import - snapshot documents
//! - /api/v1/tools/bmi - stateless BMI calculator

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{self, DashboardState};

/// Create all API routes for the dashboard.
pub fn api_routes(state: DashboardState) -> Router {
    Router::new()
        .route(
            "/readings",
            get(handlers::list_readings).post(handlers::create_reading),
        )
        .route("/readings/latest", get(handlers::latest_reading))
        .route("/readings/search", get(handlers::search_readings))
        .route(
            "/readings/:id",
            patch(handlers::update_reading).delete(handlers::delete_reading),
        )
        .route("/stats", get(handlers::get_statistics))
        .route("/dashboard", get(handlers::get_dashboard))
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        .route("/export", get(handlers::export_data))
        .route("/import", post(handlers::import_data))
        .route("/storage/usage", get(handlers::storage_usage))
        .route("/tools/bmi", get(handlers::bmi_tool))
        .with_state(state)
}

/// Liveness endpoint at root level, outside the versioned API.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(handlers::health_check))
}
