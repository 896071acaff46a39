//! JSON-RPC line protocol envelopes.
//!
//! One request per input line, one response per output line. Requests
//! are parsed leniently (every field optional) so that a malformed
//! envelope becomes an error response instead of a dropped line; the
//! dispatcher owns the validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound request envelope.
#[derive(Debug, Deserialize)]
pub struct Request {
    pub method: Option<String>,
    pub id: Option<Value>,
    pub params: Option<Map<String, Value>>,
}

impl Request {
    /// The request id coerced to text: strings pass through, anything
    /// else is stringified. Absent id stays absent.
    pub fn id_text(&self) -> Option<String> {
        self.id.as_ref().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// A named parameter coerced to text, `None` when `params` or the
    /// key is missing.
    pub fn param_text(&self, key: &str) -> Option<String> {
        let value = self.params.as_ref()?.get(key)?;
        Some(match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// The optional `limit` parameter. Absent, non-integer, or
    /// otherwise unusable values mean "no limit"; negative values
    /// clamp to zero.
    pub fn param_limit(&self) -> Option<usize> {
        let value = self.params.as_ref()?.get("limit")?;
        let n = match value {
            Value::Number(n) => n.as_i64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        Some(n.max(0) as usize)
    }
}

/// Outbound response envelope. Exactly one of `result`/`error` is
/// set; `id` is always serialized, as null when the request had none.
#[derive(Debug, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

/// The two error shapes on the wire: protocol errors carry a
/// `{"message": ...}` object, gateway errors a bare string.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Message { message: String },
    Text(String),
}

impl Response {
    pub fn result(id: Option<String>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn protocol_error(id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(ErrorPayload::Message {
                message: message.into(),
            }),
        }
    }

    pub fn gateway_error(id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(ErrorPayload::Text(message.into())),
        }
    }

    /// Serialize as a single output line. serde_json never emits raw
    /// newlines, so the line framing holds for any payload.
    pub fn into_line(self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| {
            r#"{"jsonrpc":"2.0","id":null,"error":{"message":"Failed to serialize response"}}"#
                .to_string()
        })
    }
}
