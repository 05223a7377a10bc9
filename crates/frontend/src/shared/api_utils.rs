//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::{RequestBuilder, Response};

use crate::shared::config::{api_config, ApiConfig};
use crate::shared::error::ApiError;
use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set, otherwise the
/// current window location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = api_config();
    if api.base_url.is_some() {
        return build_api_base(&api, "", "");
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    build_api_base(&api, &protocol, &hostname)
}

fn build_api_base(api: &ApiConfig, protocol: &str, hostname: &str) -> String {
    match api.base_url.as_deref() {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{}//{}:{}", protocol, hostname, api.port),
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/catalogue");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach the bearer token of the current session, if any
pub fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Turn a non-success response into an `ApiError`
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        let api = ApiConfig::default();
        assert_eq!(build_api_base(&api, "https:", "admin.example.com"), "https://admin.example.com:3000");
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let api = ApiConfig {
            port: 8080,
            base_url: Some("https://api.example.com/".into()),
        };
        assert_eq!(build_api_base(&api, "http:", "localhost"), "https://api.example.com");
    }
}
