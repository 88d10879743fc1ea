//! HTTP API Client
//!
//! Functions for communicating with the gateway's record API.

use gloo_net::http::Request;

use crate::state::global::{NewRecord, Record};

/// Default API base URL (same-origin, served by the gateway)
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("sense_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Extract the error message from a failed response
async fn error_message(response: gloo_net::http::Response) -> String {
    match response.json::<ApiErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("Request failed with status {}", response.status()),
    }
}

// ============ API Functions ============

/// Fetch the full record set
pub async fn fetch_records() -> Result<Vec<Record>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/records", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Upload a new record, returning the created record
pub async fn submit_record(record: &NewRecord) -> Result<Record, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/records", api_base))
        .json(record)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
