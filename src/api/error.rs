//! Failure taxonomy of backend calls and user-facing message extraction.

use serde_json::Value;
use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "An unknown error occurred";
pub const REJECTED_FALLBACK: &str = "API request failed";

/// Errors surfaced by [`ApiClient`](crate::api::ApiClient) and the lifecycle controllers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (DNS, connect, timeout, TLS).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Server returned {status} for '{url}'")]
    Status { url: String, status: u16, body: Value },

    /// The envelope came back with `success = false`.
    #[error("Request rejected: {}", .message.as_deref().unwrap_or(REJECTED_FALLBACK))]
    Rejected { message: Option<String> },

    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}'")]
    InvalidUrl { url: String },

    /// The owning screen cancelled the call before it settled.
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Human-readable message for toasts and inline errors.
    ///
    /// Only a server response carries a usable detail. Everything else,
    /// including a rejected envelope, reads as [`UNKNOWN_ERROR`]; the
    /// envelope's own message stays on the error for logs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => {
                extract_api_message(body.get("detail").unwrap_or(&Value::Null))
            }
            _ => UNKNOWN_ERROR.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

/// Normalises the `detail` payload of an error response into one message.
///
/// - string: used verbatim
/// - array: first element's `msg`, then `detail`, then `message`; empty string otherwise
/// - object: `detail` (string, or array whose first item has a truthy `msg`),
///   then `msg`, then `message`
/// - anything else: [`UNKNOWN_ERROR`]
pub fn extract_api_message(detail: &Value) -> String {
    match detail {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .first()
            .and_then(Value::as_object)
            .and_then(|first| {
                ["msg", "detail", "message"]
                    .iter()
                    .find_map(|key| first.get(*key).and_then(Value::as_str))
            })
            .unwrap_or_default()
            .to_string(),
        Value::Object(map) => {
            if let Some(text) = map.get("detail").and_then(Value::as_str) {
                return text.to_string();
            }
            if let Some(msg) = map
                .get("detail")
                .and_then(Value::as_array)
                .and_then(|items| items.first())
                .and_then(|first| first.get("msg"))
                .filter(|msg| is_truthy(msg))
            {
                return match msg {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
            }
            ["msg", "message"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
        }
        _ => UNKNOWN_ERROR.to_string(),
    }
}

/// JavaScript truthiness, which decides whether a nested `msg` counts.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalisation_table() {
        let cases = [
            (json!("Bad request"), "Bad request"),
            (json!([{"msg": "Name required"}]), "Name required"),
            (json!({"detail": "Not found"}), "Not found"),
            (json!({"detail": [{"msg": "Invalid email"}]}), "Invalid email"),
            (json!({}), UNKNOWN_ERROR),
        ];
        for (input, expected) in cases {
            assert_eq!(extract_api_message(&input), expected, "input {input}");
        }
    }

    #[test]
    fn array_falls_back_to_detail_then_message() {
        assert_eq!(extract_api_message(&json!([{"detail": "d"}])), "d");
        assert_eq!(extract_api_message(&json!([{"message": "m"}])), "m");
        assert_eq!(extract_api_message(&json!([{"other": 1}])), "");
        assert_eq!(extract_api_message(&json!([])), "");
        assert_eq!(extract_api_message(&json!(["plain"])), "");
    }

    #[test]
    fn object_falls_back_to_msg_then_message() {
        assert_eq!(extract_api_message(&json!({"msg": "a", "message": "b"})), "a");
        assert_eq!(extract_api_message(&json!({"message": "b"})), "b");
        assert_eq!(extract_api_message(&json!({"detail": [], "message": "b"})), "b");
    }

    #[test]
    fn scalars_and_null_are_unknown() {
        assert_eq!(extract_api_message(&Value::Null), UNKNOWN_ERROR);
        assert_eq!(extract_api_message(&json!(404)), UNKNOWN_ERROR);
        assert_eq!(extract_api_message(&json!(true)), UNKNOWN_ERROR);
    }

    #[test]
    fn user_message_reads_detail_of_status_body() {
        let err = ApiError::Status {
            url: "http://x/clients/".into(),
            status: 422,
            body: json!({"detail": [{"msg": "field required"}]}),
        };
        assert_eq!(err.user_message(), "field required");
        assert_eq!(err.status(), Some(422));

        let no_detail = ApiError::Status {
            url: "http://x".into(),
            status: 500,
            body: json!({"error": "boom"}),
        };
        assert_eq!(no_detail.user_message(), UNKNOWN_ERROR);
    }

    #[test]
    fn rejected_envelope_reads_as_unknown() {
        let err = ApiError::Rejected {
            message: Some("Quota exceeded".into()),
        };
        assert_eq!(err.user_message(), UNKNOWN_ERROR);
        assert_eq!(err.to_string(), "Request rejected: Quota exceeded");

        let bare = ApiError::Rejected { message: None };
        assert_eq!(bare.user_message(), UNKNOWN_ERROR);
        assert_eq!(bare.to_string(), format!("Request rejected: {REJECTED_FALLBACK}"));
        assert_eq!(ApiError::Cancelled.user_message(), UNKNOWN_ERROR);
    }

    #[test]
    fn nested_detail_msg_accepts_any_truthy_value() {
        assert_eq!(extract_api_message(&json!({"detail": [{"msg": 42}]})), "42");
        assert_eq!(
            extract_api_message(&json!({"detail": [{"msg": ["a"]}]})),
            r#"["a"]"#
        );
        // Falsy values fall through to `msg` and `message`.
        assert_eq!(
            extract_api_message(&json!({"detail": [{"msg": ""}], "message": "m"})),
            "m"
        );
        assert_eq!(
            extract_api_message(&json!({"detail": [{"msg": 0}], "msg": "n"})),
            "n"
        );
        assert_eq!(
            extract_api_message(&json!({"detail": [{"msg": null}]})),
            UNKNOWN_ERROR
        );
    }
}
