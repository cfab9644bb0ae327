//! Shared fixtures for `azart-rpc` unit tests.
//!
//! Canned daemon payloads and reply builders live here so that protocol,
//! client and dispatch tests agree on what a daemon answer looks like.

use serde_json::{json, Value};

use crate::rpc::{HttpReply, TransportFailure};

pub const GENESIS_HASH: &str = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
pub const GENESIS_COINBASE_TXID: &str =
    "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

pub const TX_ERROR_CODE: i64 = -5;
pub const TX_ERROR_MESSAGE: &str =
    "The genesis block coinbase is not considered an ordinary transaction and cannot be retrieved";

// ==============================================================================
// Payloads
// ==============================================================================

pub fn block_header_result() -> Value {
    json!({
        "hash": GENESIS_HASH,
        "confirmations": 449162,
        "height": 0,
        "version": 1,
        "versionHex": "00000001",
        "merkleroot": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
        "time": 1231006505,
        "mediantime": 1231006505,
        "nonce": 2083236893,
        "bits": "1d00ffff",
        "difficulty": 1,
        "chainwork": "0000000000000000000000000000000000000000000000000000000100010001",
        "nextblockhash": "00000000839a8e6886ab5951d76f411475428afc90947ee320161bbf18eb6048",
    })
}

pub fn success_body(result: &Value) -> String {
    json!({"result": result, "error": null, "id": 1}).to_string()
}

pub fn tx_error_body() -> String {
    json!({
        "result": null,
        "error": {"code": TX_ERROR_CODE, "message": TX_ERROR_MESSAGE},
        "id": 1,
    })
    .to_string()
}

// ==============================================================================
// Transport Outcomes
// ==============================================================================

pub fn reply(status: u16, body: impl Into<String>) -> Result<HttpReply, TransportFailure> {
    Ok(HttpReply {
        status,
        body: body.into(),
    })
}

/// A failure with the response attached, as the HTTP transport reports
/// non-2xx statuses.
pub fn status_failure(status: u16, body: impl Into<String>) -> Result<HttpReply, TransportFailure> {
    Err(TransportFailure {
        message: format!("HTTP status server error ({status}) for url (http://localhost:9798/)"),
        response: Some(HttpReply {
            status,
            body: body.into(),
        }),
    })
}

/// A failure where no response arrived at all.
pub fn connection_failure(message: &str) -> Result<HttpReply, TransportFailure> {
    Err(TransportFailure {
        message: message.to_owned(),
        response: None,
    })
}
