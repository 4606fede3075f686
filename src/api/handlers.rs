//! API request handlers
//!
//! Each handler resolves the user partition from the `X-User-Id` header
//! (identity is authenticated upstream — this service only scopes data),
//! loads what it needs from storage, and runs the pure classifier/analytics
//! core over materialized collections.

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics;
use crate::classifier;
use crate::config;
use crate::storage::{ReadingStore, Snapshot, StorageError};
use crate::types::{
    Reading, ReadingPatch, ReadingValue, SeriesStatistics, Severity, UserSettings, VitalStatus,
    VitalType,
};

use super::envelope::{ApiErrorResponse, ApiResponse};

/// Header carrying the already-authenticated user identity.
const USER_HEADER: &str = "x-user-id";

/// Partition used when no identity header is present (single-user install).
const DEFAULT_USER: &str = "local";

/// Shared state for all dashboard handlers.
#[derive(Clone)]
pub struct DashboardState {
    pub store: ReadingStore,
}

impl DashboardState {
    pub fn new(store: ReadingStore) -> Self {
        Self { store }
    }
}

fn user_id(headers: &HeaderMap) -> String {
    headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_USER)
        .to_string()
}

fn storage_error(err: StorageError) -> Response {
    match err {
        StorageError::NotFound(id) => ApiErrorResponse::not_found(format!("reading {id}")),
        StorageError::InvalidSnapshot(msg) => ApiErrorResponse::bad_request(msg),
        other => {
            tracing::error!(error = %other, "Storage operation failed");
            ApiErrorResponse::internal(other.to_string())
        }
    }
}

fn parse_vital_type(raw: &str) -> Result<VitalType, Response> {
    raw.parse::<VitalType>()
        .map_err(|e| ApiErrorResponse::bad_request(e.to_string()))
}

/// Payload shape must match the vital type: blood pressure takes the
/// composite pair, everything else a plain number.
fn check_value_shape(vital_type: VitalType, value: &ReadingValue) -> Result<(), Response> {
    let ok = match vital_type {
        VitalType::BloodPressure => matches!(value, ReadingValue::Pressure(_)),
        _ => matches!(value, ReadingValue::Scalar(_)),
    };
    if ok {
        Ok(())
    } else {
        Err(ApiErrorResponse::bad_request(format!(
            "value shape does not match vital type {vital_type}"
        )))
    }
}

// ============================================================================
// Health
// ============================================================================

/// Plain liveness probe at `/health` (outside the envelope, for probes).
pub async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "service": "vitaltrack",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ============================================================================
// Readings CRUD
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    vital_type: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

pub async fn list_readings(
    State(state): State<DashboardState>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Response {
    let user = user_id(&headers);
    let readings = match state.store.load_readings(&user) {
        Ok(readings) => readings,
        Err(e) => return storage_error(e),
    };

    let vital_type = match params.vital_type.as_deref().map(parse_vital_type) {
        Some(Ok(ty)) => Some(ty),
        Some(Err(resp)) => return resp,
        None => None,
    };

    let filtered: Vec<&Reading> = match (vital_type, params.start, params.end) {
        (Some(ty), None, None) => analytics::filter_by_type(&readings, ty),
        (None, Some(start), Some(end)) => analytics::filter_by_date_range(&readings, start, end),
        (Some(ty), Some(start), Some(end)) => {
            analytics::filter_by_date_range(&readings, start, end)
                .into_iter()
                .filter(|r| r.vital_type == ty)
                .collect()
        }
        _ => readings.iter().collect(),
    };

    ApiResponse::ok(filtered)
}

#[derive(Debug, Deserialize)]
pub struct NewReadingRequest {
    #[serde(rename = "type")]
    pub vital_type: String,
    pub value: ReadingValue,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

pub async fn create_reading(
    State(state): State<DashboardState>,
    headers: HeaderMap,
    axum::Json(req): axum::Json<NewReadingRequest>,
) -> Response {
    let user = user_id(&headers);

    let vital_type = match parse_vital_type(&req.vital_type) {
        Ok(ty) => ty,
        Err(resp) => return resp,
    };
    if let Err(resp) = check_value_shape(vital_type, &req.value) {
        return resp;
    }

    let settings = match state.store.load_settings(&user) {
        Ok(settings) => settings,
        Err(e) => return storage_error(e),
    };
    let unit = req
        .unit
        .unwrap_or_else(|| vital_type.default_unit(&settings));

    let reading = Reading::new(vital_type, req.value, unit, req.timestamp, req.notes);
    if let Err(e) = state.store.save_reading(&user, &reading) {
        return storage_error(e);
    }

    tracing::debug!(
        user = %user,
        vital = %reading.vital_type,
        status = %reading.status,
        "Saved reading"
    );
    ApiResponse::created(reading)
}

#[derive(Debug, Deserialize)]
pub struct TypeParam {
    #[serde(rename = "type")]
    vital_type: String,
}

pub async fn latest_reading(
    State(state): State<DashboardState>,
    Query(params): Query<TypeParam>,
    headers: HeaderMap,
) -> Response {
    let user = user_id(&headers);
    let vital_type = match parse_vital_type(&params.vital_type) {
        Ok(ty) => ty,
        Err(resp) => return resp,
    };

    let readings = match state.store.load_readings(&user) {
        Ok(readings) => readings,
        Err(e) => return storage_error(e),
    };

    match analytics::latest(&readings, vital_type) {
        Some(reading) => ApiResponse::ok(reading),
        None => ApiErrorResponse::not_found(format!("no {vital_type} readings")),
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: String,
}

pub async fn search_readings(
    State(state): State<DashboardState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Response {
    let user = user_id(&headers);
    match state.store.search(&user, &params.q) {
        Ok(readings) => ApiResponse::ok(readings),
        Err(e) => storage_error(e),
    }
}

pub async fn update_reading(
    State(state): State<DashboardState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    axum::Json(patch): axum::Json<ReadingPatch>,
) -> Response {
    let user = user_id(&headers);
    if patch.is_empty() {
        return ApiErrorResponse::bad_request("empty update");
    }

    match state.store.update_reading(&user, id, &patch) {
        Ok(reading) => ApiResponse::ok(reading),
        Err(e) => storage_error(e),
    }
}

pub async fn delete_reading(
    State(state): State<DashboardState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Response {
    let user = user_id(&headers);
    match state.store.delete_reading(&user, id) {
        Ok(true) => ApiResponse::ok(serde_json::json!({ "deleted": true })),
        Ok(false) => ApiErrorResponse::not_found(format!("reading {id}")),
        Err(e) => storage_error(e),
    }
}

// ============================================================================
// Statistics & Dashboard
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    #[serde(rename = "type")]
    vital_type: String,
    days: Option<u32>,
}

pub async fn get_statistics(
    State(state): State<DashboardState>,
    Query(params): Query<StatsParams>,
    headers: HeaderMap,
) -> Response {
    let user = user_id(&headers);
    let vital_type = match parse_vital_type(&params.vital_type) {
        Ok(ty) => ty,
        Err(resp) => return resp,
    };
    let days = params
        .days
        .unwrap_or_else(|| config::get().analytics.default_window_days);

    let readings = match state.store.load_readings(&user) {
        Ok(readings) => readings,
        Err(e) => return storage_error(e),
    };

    ApiResponse::ok(analytics::statistics(&readings, vital_type, days))
}

/// One vital type's slice of the dashboard summary.
#[derive(Debug, Serialize)]
struct DashboardEntry {
    #[serde(rename = "type")]
    vital_type: VitalType,
    latest: Option<Reading>,
    statistics: SeriesStatistics,
    severity: Option<Severity>,
    recommendation: Option<&'static str>,
}

pub async fn get_dashboard(
    State(state): State<DashboardState>,
    headers: HeaderMap,
) -> Response {
    let user = user_id(&headers);
    let readings = match state.store.load_readings(&user) {
        Ok(readings) => readings,
        Err(e) => return storage_error(e),
    };
    let window = config::get().analytics.default_window_days;

    let entries: Vec<DashboardEntry> = VitalType::ALL
        .into_iter()
        .map(|vital_type| {
            let latest = analytics::latest(&readings, vital_type).cloned();
            let status: Option<VitalStatus> = latest.as_ref().map(|r| r.status);
            DashboardEntry {
                vital_type,
                statistics: analytics::statistics(&readings, vital_type, window),
                severity: status.map(|s| s.severity()),
                recommendation: status.map(|s| classifier::recommendation(vital_type, s)),
                latest,
            }
        })
        .collect();

    ApiResponse::ok(entries)
}

// ============================================================================
// Settings
// ============================================================================

pub async fn get_settings(State(state): State<DashboardState>, headers: HeaderMap) -> Response {
    let user = user_id(&headers);
    match state.store.load_settings(&user) {
        Ok(settings) => ApiResponse::ok(settings),
        Err(e) => storage_error(e),
    }
}

pub async fn put_settings(
    State(state): State<DashboardState>,
    headers: HeaderMap,
    axum::Json(settings): axum::Json<UserSettings>,
) -> Response {
    let user = user_id(&headers);
    match state.store.save_settings(&user, &settings) {
        Ok(()) => ApiResponse::ok(settings),
        Err(e) => storage_error(e),
    }
}

// ============================================================================
// Export / Import / Usage
// ============================================================================

pub async fn export_data(State(state): State<DashboardState>, headers: HeaderMap) -> Response {
    let user = user_id(&headers);
    match state.store.export_snapshot(&user) {
        Ok(snapshot) => ApiResponse::ok(snapshot),
        Err(e) => storage_error(e),
    }
}

pub async fn import_data(
    State(state): State<DashboardState>,
    headers: HeaderMap,
    axum::Json(snapshot): axum::Json<Snapshot>,
) -> Response {
    let user = user_id(&headers);
    match state.store.import_snapshot(&user, &snapshot) {
        Ok(imported) => ApiResponse::ok(serde_json::json!({ "imported": imported })),
        Err(e) => storage_error(e),
    }
}

pub async fn storage_usage(State(state): State<DashboardState>, headers: HeaderMap) -> Response {
    let user = user_id(&headers);
    match state.store.usage(&user) {
        Ok(stats) => ApiResponse::ok(stats),
        Err(e) => storage_error(e),
    }
}

// ============================================================================
// BMI tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BmiParams {
    height: f64,
    weight: f64,
    height_unit: Option<String>,
    weight_unit: Option<String>,
}

/// Stateless BMI calculator backing the client's BMI form: value, status,
/// recommendation, and the healthy-weight interval for the height.
pub async fn bmi_tool(Query(params): Query<BmiParams>) -> Response {
    if params.height <= 0.0 || params.weight <= 0.0 {
        return ApiErrorResponse::bad_request("height and weight must be positive");
    }

    let height_unit = params.height_unit.as_deref().unwrap_or("cm");
    let weight_unit = params.weight_unit.as_deref().unwrap_or("kg");

    let bmi = classifier::calculate_bmi(params.height, params.weight, height_unit, weight_unit);
    let status = classifier::classify_bmi(bmi);

    ApiResponse::ok(serde_json::json!({
        // Display rounding happens here, not in the calculator.
        "bmi": (bmi * 10.0).round() / 10.0,
        "status": status,
        "severity": status.severity(),
        "recommendation": classifier::recommendation(VitalType::Bmi, status),
        "ideal_weight_range": classifier::ideal_weight_range(params.height, height_unit),
    }))
}

