//! HTTP(S) transport for azartd built on `reqwest`.
//!
//! Handles connection pooling, timeouts, basic auth and optional pinning of
//! TLS verification to a caller-supplied CA bundle.

mod connection;
mod transport;

pub use transport::HttpTransport;
