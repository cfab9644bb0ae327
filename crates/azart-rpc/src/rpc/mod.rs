//! azartd JSON-RPC layer.
//!
//! Defines the [`Transport`] seam, the HTTP implementation
//! ([`HttpTransport`]), the [`Client`] that speaks the wire protocol over
//! it, and the dynamic method dispatcher. Tests swap in `mock::MockTransport`.

mod client;
mod dispatch;
mod http_adapter;
#[cfg(test)]
pub mod mock;
mod pending;
pub mod protocol;

pub use client::Client;
pub use dispatch::{is_async_name, wire_method_name, MethodCall};
pub use http_adapter::HttpTransport;
pub use pending::{Callbacks, PendingResponse};

use async_trait::async_trait;

use crate::config::ClientConfig;

/// Raw HTTP answer: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An exchange that failed below the RPC layer.
///
/// `response` is attached when the server answered with an error status;
/// it is `None` when no answer arrived (refused connection, TLS failure,
/// timeout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub message: String,
    pub response: Option<HttpReply>,
}

/// The HTTP collaborator a [`Client`] sends JSON-RPC bodies through.
///
/// Implementations own connection management, authentication and TLS. They
/// POST `body` to the root of their base URL with a JSON content type and
/// report what came back without interpreting it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Settings this transport was built from (base URL, credentials, CA).
    fn config(&self) -> &ClientConfig;

    async fn post(&self, body: String) -> Result<HttpReply, TransportFailure>;
}
