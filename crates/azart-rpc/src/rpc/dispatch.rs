//! Invoke any daemon command by name.
//!
//! There is no method catalog: whatever name the caller uses is folded to
//! azartd's lowercase wire name. A trailing `Async` in the name, or an
//! attached handler, runs the call in the background.

use std::future::IntoFuture;

use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;

use crate::error::RpcError;
use crate::response::ResponseEnvelope;

use super::client::Client;
use super::pending::{Callbacks, PendingResponse};

const ASYNC_SUFFIX: &str = "Async";

/// Whether `name` asks for background execution.
pub fn is_async_name(name: &str) -> bool {
    name.len() > ASYNC_SUFFIX.len() && name.ends_with(ASYNC_SUFFIX)
}

/// Map a call name to the daemon method: `getBlockHeaderAsync` → `getblockheader`.
pub fn wire_method_name(name: &str) -> String {
    let base = if is_async_name(name) {
        &name[..name.len() - ASYNC_SUFFIX.len()]
    } else {
        name
    };
    base.to_ascii_lowercase()
}

/// A daemon call under construction. Created by [`Client::call`].
///
/// Awaiting it returns the outcome in either mode; [`MethodCall::spawn`]
/// starts it in the background and hands back the [`PendingResponse`].
#[must_use = "a MethodCall does nothing until awaited or spawned"]
pub struct MethodCall<'a> {
    client: &'a Client,
    name: String,
    params: Vec<Value>,
    callbacks: Callbacks,
}

impl<'a> MethodCall<'a> {
    pub(super) fn new(client: &'a Client, name: &str) -> Self {
        Self {
            client,
            name: name.to_owned(),
            params: Vec::new(),
            callbacks: Callbacks::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.params.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn on_fulfilled(mut self, f: impl FnOnce(&ResponseEnvelope) + Send + 'static) -> Self {
        self.callbacks = self.callbacks.on_fulfilled(f);
        self
    }

    pub fn on_rejected(mut self, f: impl FnOnce(&RpcError) + Send + 'static) -> Self {
        self.callbacks = self.callbacks.on_rejected(f);
        self
    }

    /// Wire name this call is sent under.
    pub fn method(&self) -> String {
        wire_method_name(&self.name)
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn is_async(&self) -> bool {
        is_async_name(&self.name) || !self.callbacks.is_empty()
    }

    /// Start the call in the background regardless of its name.
    pub fn spawn(self) -> PendingResponse {
        let method = self.method();
        self.client
            .request_async(&method, self.params, self.callbacks)
    }
}

impl<'a> IntoFuture for MethodCall<'a> {
    type Output = Result<ResponseEnvelope, RpcError>;
    type IntoFuture = BoxFuture<'a, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        if self.is_async() {
            return self.spawn().boxed();
        }
        let method = self.method();
        let Self { client, params, .. } = self;
        async move { client.request(&method, params).await }.boxed()
    }
}
