//! HTTP helpers for JSON APIs with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers do not store secrets or
//! tokens; session credentials travel only in cookies attached by the browser.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Response envelope the API wraps every JSON payload in.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, AppError> {
        if self.success {
            self.data
                .ok_or_else(|| AppError::Parse("Response data was missing.".to_string()))
        } else {
            Err(envelope_failure(self.message))
        }
    }

    /// Discards the payload, keeping only the success flag.
    pub fn into_ack(self) -> Result<(), AppError> {
        if self.success {
            Ok(())
        } else {
            Err(envelope_failure(self.message))
        }
    }
}

/// API-level failure reported inside a 2xx transport response.
fn envelope_failure(message: Option<String>) -> AppError {
    AppError::Http {
        status: 200,
        message: message.unwrap_or_else(|| "Request failed.".to_string()),
    }
}

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Validation errors are keyed by field; the backend gives no ordering
/// guarantee, so messages are flattened in this declaration order with any
/// remaining fields sorted lexicographically after them.
const FIELD_MESSAGE_ORDER: [&str; 4] = ["email", "username", "password", "confirmPassword"];

/// Fetches JSON from a public endpoint.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches JSON with cookies for session-authenticated APIs.
pub async fn get_json_with_credentials<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON with cookies and parses a JSON response.
pub async fn post_json_with_credentials<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an empty body with cookies and parses a JSON response, used for the
/// cookie-based session refresh.
pub async fn post_empty_json_with_credentials<T: DeserializeOwned>(
    path: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an empty body with cookies, used to clear a session.
pub async fn post_empty_with_credentials(path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Deletes a resource with cookies.
pub async fn delete_with_credentials(path: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(move |signal| {
        Request::delete(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    classify_request_error(&err.to_string())
}

/// Aborted requests come from the timeout controller and read as timeouts;
/// everything else is a reachability problem.
fn classify_request_error(message: &str) -> AppError {
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with extracted messages.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: extract_error_message(&body),
        })
    }
}

/// Handles empty responses and returns extracted HTTP errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: extract_error_message(&body),
        })
    }
}

/// Pulls a user-facing message out of an error body. The API reports either a
/// top-level `message` or field-level validation `errors`; anything else falls
/// back to the sanitized raw body.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.trim().is_empty() {
                return message.trim().to_string();
            }
        }
        if let Some(errors) = value.get("errors").and_then(|e| e.as_object()) {
            let flattened = flatten_validation_errors(errors);
            if !flattened.is_empty() {
                return flattened;
            }
        }
    }
    sanitize_body(body)
}

/// Flattens `{field: [messages]}` validation errors into one string, known
/// auth fields first, remaining fields in lexicographic order.
fn flatten_validation_errors(errors: &serde_json::Map<String, serde_json::Value>) -> String {
    let mut ordered: Vec<(&str, &serde_json::Value)> = Vec::with_capacity(errors.len());
    for field in FIELD_MESSAGE_ORDER {
        if let Some(value) = errors.get(field) {
            ordered.push((field, value));
        }
    }
    let mut remaining: Vec<(&str, &serde_json::Value)> = errors
        .iter()
        .filter(|(key, _)| !FIELD_MESSAGE_ORDER.contains(&key.as_str()))
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    remaining.sort_by_key(|(key, _)| *key);
    ordered.extend(remaining);

    let mut messages: Vec<String> = Vec::new();
    for (_, value) in ordered {
        match value {
            serde_json::Value::String(message) => messages.push(message.clone()),
            serde_json::Value::Array(values) => {
                for value in values {
                    if let Some(message) = value.as_str() {
                        messages.push(message.to_string());
                    }
                }
            }
            _ => {}
        }
    }
    messages.join(", ")
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ApiEnvelope, build_url_with_base, classify_request_error, extract_error_message,
        flatten_validation_errors, sanitize_body,
    };
    use crate::app_lib::AppError;

    #[test]
    fn aborted_requests_classify_as_timeouts() {
        let aborted = classify_request_error("AbortError: The operation was aborted");
        let unreachable = classify_request_error("Failed to fetch");

        assert!(matches!(aborted, AppError::Timeout(_)));
        assert!(matches!(unreachable, AppError::Network(_)));
    }

    #[test]
    fn envelope_defaults_missing_fields() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true}"#).expect("Failed to deserialize");

        assert!(envelope.success);
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn into_data_returns_payload_on_success() {
        let envelope = ApiEnvelope {
            success: true,
            message: None,
            data: Some(7),
        };
        assert_eq!(envelope.into_data(), Ok(7));
    }

    #[test]
    fn into_data_surfaces_envelope_message_on_failure() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: false,
            message: Some("Login failed".to_string()),
            data: None,
        };
        let err = envelope.into_data().expect_err("Failed envelope must error");
        assert_eq!(err.user_message(), "Login failed");
    }

    #[test]
    fn into_data_flags_missing_payload_as_parse_error() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: true,
            message: None,
            data: None,
        };
        let err = envelope.into_data().expect_err("Missing data must error");
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://autostack.dk/api", "/login"),
            "https://autostack.dk/api/login"
        );
        assert_eq!(
            build_url_with_base("https://autostack.dk/api/", "login"),
            "https://autostack.dk/api/login"
        );
        assert_eq!(build_url_with_base("", "/login"), "/login");
    }

    #[test]
    fn extract_error_message_prefers_top_level_message() {
        let body = r#"{"success":false,"message":"Login failed","errors":{"username":["taken"]}}"#;
        assert_eq!(extract_error_message(body), "Login failed");
    }

    #[test]
    fn extract_error_message_falls_back_to_sanitized_body() {
        assert_eq!(extract_error_message("<html>boom</html>"), "<html>boom</html>");
        assert_eq!(extract_error_message("   "), "Request failed.");
    }

    #[test]
    fn validation_errors_flatten_in_declared_field_order() {
        let body = serde_json::json!({
            "confirmPassword": ["Passwords do not match."],
            "email": ["Email is already registered."],
            "password": ["Password is too short.", "Password needs a digit."],
        });
        let errors = body.as_object().expect("Failed to build error map");

        assert_eq!(
            flatten_validation_errors(errors),
            "Email is already registered., Password is too short., Password needs a digit., Passwords do not match."
        );
    }

    #[test]
    fn validation_errors_sort_unknown_fields_after_known_ones() {
        let body = serde_json::json!({
            "zeta": ["last"],
            "alpha": ["first unknown"],
            "username": ["Username is required."],
        });
        let errors = body.as_object().expect("Failed to build error map");

        assert_eq!(
            flatten_validation_errors(errors),
            "Username is required., first unknown, last"
        );
    }

    #[test]
    fn sanitize_body_truncates_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(&long).chars().count(), 200);
    }
}
