//! HTTP API Client
//!
//! Fetches visitor records from the analytics endpoint.

use gloo_net::http::Request;

use crate::analytics::Visitor;
use crate::state::global::{DateRange, ALL_STORES};

/// Default analytics API base URL
pub const DEFAULT_API_BASE: &str = "https://analytics.example.com/api/v1";

/// Bearer token for the analytics endpoint
const API_TOKEN: &str = "7KQD-M3VX-P9TR-A2WF";

/// API base URL, overridable through local storage, trailing slash removed
fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("footfall_api_url").ok().flatten());

    stored
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

#[derive(Debug, serde::Deserialize)]
struct VisitorListResponse {
    visitors: Vec<Visitor>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Fetch visitor records for a store and date range
pub async fn fetch_visitors(store: &str, range: &DateRange) -> Result<Vec<Visitor>, String> {
    let api_base = get_api_base();

    let mut url = format!(
        "{}/visitors?from={}&to={}",
        api_base,
        range.from.format("%Y-%m-%d"),
        range.to.format("%Y-%m-%d"),
    );
    if store != ALL_STORES {
        url.push_str(&format!("&store={}", store));
    }

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", API_TOKEN))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("Request failed with status {}", response.status()),
        });
        return Err(error.error);
    }

    let result: VisitorListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.visitors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Gender;

    #[test]
    fn test_visitor_payload_deserializes() {
        let body = r#"{"visitors":[
            {"age":34,"gender":"female","track_count":3,"store_id":"downtown","seen_at":"2026-03-02"},
            {"age":-1,"gender":"x","track_count":0,"store_id":"harbor","seen_at":"2026-03-03"}
        ]}"#;

        let parsed: VisitorListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.visitors.len(), 2);
        assert_eq!(parsed.visitors[0].gender, Gender::Female);
        assert!(parsed.visitors[0].is_visit());
        assert_eq!(parsed.visitors[1].gender, Gender::Unknown);
        assert!(!parsed.visitors[1].is_visit());
    }

    #[test]
    fn test_error_payload_deserializes() {
        let parsed: ApiError = serde_json::from_str(r#"{"error":"token expired"}"#).unwrap();
        assert_eq!(parsed.error, "token expired");
    }
}
