//! Record Routes
//!
//! Proxy endpoints for the record backend. The Next-style rewrite in one
//! pair of handlers: the gateway relays `/api/records` to
//! `{backend}/records` and never stores anything itself.
//!
//! - GET /api/records - Full record set
//! - POST /api/records - Upload a new record

use axum::{extract::State, http::StatusCode, Json};
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::state::AppState;
use crate::record::{NewRecord, Record};

/// GET /api/records
///
/// Fetch the full record set from the backend and relay it as JSON.
/// The body is decoded into typed records so a malformed backend
/// response surfaces as a gateway error instead of reaching the UI.
pub async fn list_records(
    State(state): State<Arc<AppState>>,
) -> GatewayResult<Json<Vec<Record>>> {
    let response = state
        .client
        .get(state.config.backend.records_url())
        .send()
        .await
        .map_err(|e| GatewayError::BackendUnreachable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::BackendStatus {
            status: status.as_u16(),
            body,
        });
    }

    let records: Vec<Record> = response
        .json()
        .await
        .map_err(|e| GatewayError::BackendDecode(e.to_string()))?;

    tracing::debug!(count = records.len(), "Relayed record set from backend");

    Ok(Json(records))
}

/// POST /api/records
///
/// Validate an upload and forward it to the backend. The created record
/// (with its server-assigned id) is relayed back to the caller.
pub async fn create_record(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewRecord>,
) -> GatewayResult<(StatusCode, Json<Record>)> {
    validate_new_record(&req)?;

    let response = state
        .client
        .post(state.config.backend.records_url())
        .json(&req)
        .send()
        .await
        .map_err(|e| GatewayError::BackendUnreachable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::BackendStatus {
            status: status.as_u16(),
            body,
        });
    }

    let record: Record = response
        .json()
        .await
        .map_err(|e| GatewayError::BackendDecode(e.to_string()))?;

    tracing::info!(
        record_id = record.id,
        sense_type = %record.sense_type,
        "Record uploaded"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// Validate an upload before it is forwarded
fn validate_new_record(req: &NewRecord) -> GatewayResult<()> {
    if req.location.is_empty() {
        return Err(GatewayError::Validation(
            "Location cannot be empty".to_string(),
        ));
    }

    if req.location.len() > 200 {
        return Err(GatewayError::Validation(
            "Location exceeds maximum length of 200 characters".to_string(),
        ));
    }

    if req.sense_type.is_empty() {
        return Err(GatewayError::Validation(
            "Sense type cannot be empty".to_string(),
        ));
    }

    if req.sense_type.len() > 50 {
        return Err(GatewayError::Validation(
            "Sense type exceeds maximum length of 50 characters".to_string(),
        ));
    }

    if req.keyword.len() > 100 {
        return Err(GatewayError::Validation(
            "Keyword exceeds maximum length of 100 characters".to_string(),
        ));
    }

    if req.description.len() > 2000 {
        return Err(GatewayError::Validation(
            "Description exceeds maximum length of 2000 characters".to_string(),
        ));
    }

    if !req.emotion_score.is_finite() {
        return Err(GatewayError::Validation(
            "Emotion score must be a finite number".to_string(),
        ));
    }

    // The backend owns score semantics, but a date far in the future is
    // always an entry mistake
    let horizon = Utc::now().date_naive() + Duration::days(365);
    if req.date > horizon {
        return Err(GatewayError::Validation(
            "Date is more than 1 year in the future".to_string(),
        ));
    }

    Ok(())
}
