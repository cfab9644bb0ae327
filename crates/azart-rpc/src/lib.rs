pub mod amount;
pub mod config;
pub mod error;
pub mod response;
pub mod rpc;
#[cfg(test)]
mod test_util;

pub use config::{ClientConfig, DEFAULT_PORT};
pub use error::{AmountError, ConfigError, RpcError};
pub use response::ResponseEnvelope;
pub use rpc::{Callbacks, Client, MethodCall, PendingResponse, Transport};
