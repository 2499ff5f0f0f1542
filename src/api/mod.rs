//! HTTP API Client
//!
//! Thin wrapper around gloo-net: resolves the fixed base endpoint, ships
//! browser cookies with every call, and attaches the anti-forgery header
//! plus the bearer token where a call provides them. One attempt per call,
//! no retries, no timeout.

mod auth;
mod tasks;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;

use crate::models::ErrorBody;

// Re-export all public items
pub use auth::*;
pub use tasks::*;

/// Fixed backend endpoint; no environment-based override
pub const API_BASE: &str = "http://localhost:8080/api";

const CSRF_COOKIE: &str = "csrf";
const CSRF_HEADER: &str = "X-CSRF-Token";

/// HTTP method of a planned request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Outcome of a failed API call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure; no HTTP status was produced
    Network(String),
    /// Non-2xx response, with the backend `error` message when present
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    /// User-facing message: the backend-provided one when present, else `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// A fully constructed request: URL, headers, optional JSON body.
///
/// Both auth channels are explicit inputs of [`plan_request`]: the
/// anti-forgery token read from the cookie and the bearer token from the
/// session. Nothing is looked up ambiently, so tests can assert exactly
/// which headers a call carries.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

/// Build a request against the configured base endpoint
pub fn plan_request<T: Serialize>(
    method: Method,
    path: &str,
    csrf_token: Option<&str>,
    bearer_token: Option<&str>,
    body: Option<&T>,
) -> Result<RequestPlan, ApiError> {
    let mut headers: Vec<(&'static str, String)> = Vec::new();

    let body = match body {
        Some(value) => {
            headers.push(("Content-Type", "application/json".to_string()));
            let encoded = serde_json::to_string(value)
                .map_err(|e| ApiError::Network(format!("failed to encode request body: {e}")))?;
            Some(encoded)
        }
        None => None,
    };

    if let Some(csrf) = csrf_token {
        headers.push((CSRF_HEADER, csrf.to_string()));
    }
    if let Some(token) = bearer_token {
        headers.push(("Authorization", format!("Bearer {token}")));
    }

    Ok(RequestPlan {
        method,
        url: format!("{API_BASE}{path}"),
        headers,
        body,
    })
}

/// Response body plus status, as returned by [`send`]
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    body: String,
}

impl ApiResponse {
    /// Decode the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::Network(format!("failed to decode response: {e}")))
    }

    /// Decode the body into a loose JSON value; unparseable bodies become null
    pub fn json_value(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// Execute a plan: a single attempt, cookies always included
pub async fn send(plan: RequestPlan) -> Result<ApiResponse, ApiError> {
    let mut builder = match plan.method {
        Method::Get => Request::get(&plan.url),
        Method::Post => Request::post(&plan.url),
        Method::Put => Request::put(&plan.url),
        Method::Delete => Request::delete(&plan.url),
    }
    .credentials(web_sys::RequestCredentials::Include);

    for (name, value) in &plan.headers {
        builder = builder.header(name, value);
    }

    let response = match plan.body {
        Some(body) => builder
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !(200..=299).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(&body).ok().map(|b| b.error);
        return Err(ApiError::Status { status, message });
    }

    Ok(ApiResponse { status, body })
}

/// Value of the anti-forgery cookie, if the backend has set one
pub fn csrf_cookie() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let raw = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&raw, CSRF_COOKIE).map(str::to_string)
}

/// Extract one cookie's value out of a raw `document.cookie` string
fn cookie_value<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Credentials;

    #[test]
    fn test_plan_carries_both_auth_channels() {
        let plan = plan_request::<()>(Method::Get, "/tasks", Some("csrf_abc"), Some("jwt123"), None)
            .unwrap();

        assert_eq!(plan.url, "http://localhost:8080/api/tasks");
        assert!(plan
            .headers
            .contains(&("X-CSRF-Token", "csrf_abc".to_string())));
        assert!(plan
            .headers
            .contains(&("Authorization", "Bearer jwt123".to_string())));
        assert_eq!(plan.body, None);
    }

    #[test]
    fn test_plan_omits_absent_channels() {
        let plan = plan_request::<()>(Method::Get, "/tasks", None, None, None).unwrap();
        assert!(plan.headers.is_empty());
    }

    #[test]
    fn test_plan_sets_content_type_only_with_body() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        };
        let plan = plan_request(
            Method::Post,
            "/auth/login",
            Some("c"),
            None,
            Some(&credentials),
        )
        .unwrap();

        assert!(plan
            .headers
            .contains(&("Content-Type", "application/json".to_string())));
        let body = plan.body.unwrap();
        assert!(body.contains("\"email\":\"a@b.com\""));

        let bare = plan_request::<()>(Method::Delete, "/tasks/1", Some("c"), Some("t"), None).unwrap();
        assert!(!bare.headers.iter().any(|(name, _)| *name == "Content-Type"));
    }

    #[test]
    fn test_cookie_value_extraction() {
        let raw = "access_token=aaa; csrf=csrf_abc123; refresh_token=rrr";
        assert_eq!(cookie_value(raw, "csrf"), Some("csrf_abc123"));
        assert_eq!(cookie_value(raw, "access_token"), Some("aaa"));
        assert_eq!(cookie_value(raw, "missing"), None);
    }

    #[test]
    fn test_cookie_value_ignores_name_prefixes() {
        // "xcsrf" and "csrf2" must not satisfy a lookup for "csrf"
        assert_eq!(cookie_value("xcsrf=1; csrf2=2", "csrf"), None);
        assert_eq!(cookie_value("xcsrf=1; csrf=2", "csrf"), Some("2"));
    }
}
