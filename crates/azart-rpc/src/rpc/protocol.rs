//! Wire format and outcome classification.
//!
//! azartd speaks an unversioned JSON-RPC dialect: requests carry `method`,
//! `params` and `id`; responses carry `result`, `error` and `id`, where a
//! non-null `error` always wins over `result`.

use serde_json::Value;

use crate::error::RpcError;
use crate::response::ResponseEnvelope;

use super::{HttpReply, TransportFailure};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct JsonRpcRequest {
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

#[derive(Debug, serde::Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(serde::Deserialize)]
struct DaemonErrorObject {
    code: i64,
    message: String,
}

/// Map one transport outcome to exactly one of envelope, daemon error or
/// transport error.
///
/// The body decides the error kind, not the status: a daemon error object
/// is honoured even when it arrives with HTTP 500.
pub fn classify(outcome: Result<HttpReply, TransportFailure>) -> Result<ResponseEnvelope, RpcError> {
    match outcome {
        Ok(reply) if reply.is_success() => classify_success(reply),
        Ok(reply) => classify_failure(TransportFailure {
            message: format!("HTTP status {}", reply.status),
            response: Some(reply),
        }),
        Err(failure) => classify_failure(failure),
    }
}

fn classify_success(reply: HttpReply) -> Result<ResponseEnvelope, RpcError> {
    let decoded = match decode_response(&reply.body) {
        Some(decoded) => decoded,
        None => {
            let message = if reply.body.is_empty() {
                "empty response body".to_owned()
            } else {
                reply.body
            };
            return Err(RpcError::Transport {
                code: reply.status,
                message,
            });
        }
    };

    if let Some(err) = decoded.error {
        return Err(parse_daemon_error(&err).unwrap_or_else(|| RpcError::Transport {
            code: reply.status,
            message: format!("non-standard JSON-RPC error: {err}"),
        }));
    }

    Ok(ResponseEnvelope::new(decoded.result.unwrap_or(Value::Null)))
}

fn classify_failure(failure: TransportFailure) -> Result<ResponseEnvelope, RpcError> {
    let Some(reply) = failure.response else {
        return Err(RpcError::Transport {
            code: 0,
            message: failure.message,
        });
    };

    if reply.body.trim().is_empty() {
        return Err(RpcError::Transport {
            code: reply.status,
            message: failure.message,
        });
    }

    let daemon_error = decode_response(&reply.body)
        .and_then(|decoded| decoded.error)
        .and_then(|err| parse_daemon_error(&err));
    Err(daemon_error.unwrap_or(RpcError::Transport {
        code: reply.status,
        message: reply.body,
    }))
}

/// Decode a response body. Only a JSON object counts; serde would otherwise
/// also map an array positionally onto the fields.
fn decode_response(body: &str) -> Option<JsonRpcResponse> {
    match serde_json::from_str::<Value>(body).ok()? {
        obj @ Value::Object(_) => serde_json::from_value(obj).ok(),
        _ => None,
    }
}

/// Parse `{"code": <int>, "message": <string>}`; anything else is not a
/// usable daemon error.
fn parse_daemon_error(err: &Value) -> Option<RpcError> {
    if !err.is_object() {
        return None;
    }
    let parsed = serde_json::from_value::<DaemonErrorObject>(err.clone()).ok()?;
    Some(RpcError::Daemon {
        code: parsed.code,
        message: parsed.message,
    })
}
