//! The request/response contract shared by every endpoint.
//!
//! Paystack wraps every answer in `{"status": bool, "data" | "message": ...}`.
//! Only HTTP 200 counts as success; the payload is then `data`. Any other
//! status code yields the `message` instead.

use std::fmt;

use serde_json::Value;

use crate::config::AUTHORIZATION;
use crate::error::PaystackError;

/// HTTP verbs used by the Paystack API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built outbound request, handed to a [`Transport`](crate::Transport).
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(AUTHORIZATION) {
                    (*key, "Bearer [REDACTED]")
                } else {
                    (*key, value.as_str())
                }
            })
            .collect();

        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("query", &self.query)
            .field("body", &self.body)
            .finish()
    }
}

/// Status code and raw body as returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Builds a response whose body is the serialized `value`.
    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }
}

/// The unpacked envelope: `(true, data)` or `(false, message)`.
///
/// Callers must check [`status`](Self::status) before trusting the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: bool,
    pub payload: Value,
}

impl ApiResponse {
    pub fn success(data: Value) -> Self {
        Self {
            status: true,
            payload: data,
        }
    }

    pub fn failure(message: impl Into<Value>) -> Self {
        Self {
            status: false,
            payload: message.into(),
        }
    }

    /// Unpacks a raw transport response.
    ///
    /// A non-JSON body is a [`PaystackError::Decode`]; an envelope without the
    /// expected key is a [`PaystackError::MissingField`].
    pub fn from_raw(raw: &RawResponse) -> Result<Self, PaystackError> {
        let mut envelope: Value = serde_json::from_slice(&raw.body)?;

        if raw.status == 200 {
            let data = take_field(&mut envelope, "data")?;
            Ok(Self::success(data))
        } else {
            let message = take_field(&mut envelope, "message")?;
            Ok(Self::failure(message))
        }
    }

    pub fn is_success(&self) -> bool {
        self.status
    }

    /// The `data` object of a successful call.
    pub fn data(&self) -> Option<&Value> {
        self.status.then_some(&self.payload)
    }

    /// The human-readable message of a failed call.
    pub fn message(&self) -> Option<&str> {
        if self.status {
            None
        } else {
            self.payload.as_str()
        }
    }

    pub fn into_parts(self) -> (bool, Value) {
        (self.status, self.payload)
    }
}

fn take_field(envelope: &mut Value, key: &'static str) -> Result<Value, PaystackError> {
    envelope
        .as_object_mut()
        .and_then(|map| map.remove(key))
        .ok_or(PaystackError::MissingField(key))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_ok_status_yields_data() {
        let raw = RawResponse::json(
            200,
            &json!({"status": true, "message": "Verification successful", "data": {"id": 42}}),
        );
        let response = ApiResponse::from_raw(&raw).unwrap();
        assert_eq!(response.into_parts(), (true, json!({"id": 42})));
    }

    #[test]
    fn test_client_and_server_errors_are_treated_alike() {
        for status in [400, 401, 404, 422, 500, 502] {
            let raw = RawResponse::json(status, &json!({"status": false, "message": "nope"}));
            let response = ApiResponse::from_raw(&raw).unwrap();
            assert_eq!(response.into_parts(), (false, json!("nope")));
        }
    }

    #[test]
    fn test_created_is_not_success() {
        let raw = RawResponse::json(
            201,
            &json!({"status": true, "message": "Recipient created", "data": {}}),
        );
        let response = ApiResponse::from_raw(&raw).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message(), Some("Recipient created"));
    }

    #[test]
    fn test_null_data_is_kept() {
        let raw = RawResponse::json(200, &json!({"status": true, "data": null}));
        let response = ApiResponse::from_raw(&raw).unwrap();
        assert_eq!(response.data(), Some(&Value::Null));
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let raw = RawResponse::json(200, &json!({"status": true, "message": "ok"}));
        let err = ApiResponse::from_raw(&raw).unwrap_err();
        assert!(matches!(err, PaystackError::MissingField("data")));
    }

    #[test]
    fn test_misspelled_message_key_is_not_accepted() {
        let raw = RawResponse::json(400, &json!({"status": false, "messsage": "typo"}));
        let err = ApiResponse::from_raw(&raw).unwrap_err();
        assert!(matches!(err, PaystackError::MissingField("message")));
    }

    #[test]
    fn test_non_json_body_is_a_decode_error() {
        let raw = RawResponse::new(502, "<html>Bad Gateway</html>");
        let err = ApiResponse::from_raw(&raw).unwrap_err();
        assert!(matches!(err, PaystackError::Decode(_)));
    }

    #[test]
    fn test_accessors_follow_status() {
        let ok = ApiResponse::success(json!({"balance": 100}));
        assert_eq!(ok.data(), Some(&json!({"balance": 100})));
        assert_eq!(ok.message(), None);

        let failed = ApiResponse::failure("Invalid key");
        assert_eq!(failed.data(), None);
        assert_eq!(failed.message(), Some("Invalid key"));
    }

    #[test]
    fn test_request_debug_redacts_authorization() {
        let request = ApiRequest {
            method: HttpMethod::Get,
            url: "https://api.paystack.co/balance".into(),
            headers: vec![("Authorization", "Bearer sk_live_secret".into())],
            query: vec![],
            body: None,
        };
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("sk_live_secret"));
        assert_eq!(request.header("authorization"), Some("Bearer sk_live_secret"));
    }
}
