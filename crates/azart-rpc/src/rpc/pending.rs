use std::fmt;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tracing::warn;

use crate::error::RpcError;
use crate::response::ResponseEnvelope;

type Outcome = Result<ResponseEnvelope, RpcError>;
type FulfilledFn = Box<dyn FnOnce(&ResponseEnvelope) + Send + 'static>;
type RejectedFn = Box<dyn FnOnce(&RpcError) + Send + 'static>;

/// Optional handlers run when a background request settles.
///
/// At most one of them runs, exactly once, before the outcome reaches the
/// [`PendingResponse`]. A handler that panics does not change that outcome.
#[derive(Default)]
pub struct Callbacks {
    on_fulfilled: Option<FulfilledFn>,
    on_rejected: Option<RejectedFn>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_fulfilled(mut self, f: impl FnOnce(&ResponseEnvelope) + Send + 'static) -> Self {
        self.on_fulfilled = Some(Box::new(f));
        self
    }

    pub fn on_rejected(mut self, f: impl FnOnce(&RpcError) + Send + 'static) -> Self {
        self.on_rejected = Some(Box::new(f));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.on_fulfilled.is_none() && self.on_rejected.is_none()
    }

    /// Run the matching handler. A panicking handler is contained so the
    /// outcome it was given still reaches the [`PendingResponse`].
    fn settle(self, outcome: &Outcome) {
        if catch_unwind(AssertUnwindSafe(|| self.run(outcome))).is_err() {
            warn!(ok = outcome.is_ok(), "rpc completion handler panicked");
        }
    }

    fn run(self, outcome: &Outcome) {
        match outcome {
            Ok(envelope) => {
                if let Some(f) = self.on_fulfilled {
                    f(envelope);
                }
            }
            Err(err) => {
                if let Some(f) = self.on_rejected {
                    f(err);
                }
            }
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_fulfilled", &self.on_fulfilled.is_some())
            .field("on_rejected", &self.on_rejected.is_some())
            .finish()
    }
}

/// Handle to a request running in the background.
///
/// Awaiting it yields the same outcome a blocking
/// [`Client::request`](super::Client::request) would have returned. The
/// request runs to completion whether or not the handle is awaited or kept.
#[derive(Debug)]
pub struct PendingResponse {
    id: u64,
    rx: oneshot::Receiver<Outcome>,
}

impl PendingResponse {
    /// Run `exchange` on the current Tokio runtime.
    ///
    /// Without a runtime the request is never sent; it settles immediately
    /// as a transport error so handlers still run exactly once.
    pub(super) fn spawn<F>(id: u64, exchange: F, callbacks: Callbacks) -> Self
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let outcome = exchange.await;
                    callbacks.settle(&outcome);
                    // The caller may have dropped the handle; the handlers
                    // above already observed the outcome.
                    let _ = tx.send(outcome);
                });
            }
            Err(e) => {
                let outcome = Err(RpcError::Transport {
                    code: 0,
                    message: format!("no Tokio runtime available to run the request: {e}"),
                });
                callbacks.settle(&outcome);
                let _ = tx.send(outcome);
            }
        }
        Self { id, rx }
    }

    /// Id of the JSON-RPC request this handle resolves.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Future for PendingResponse {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                Err(RpcError::Transport {
                    code: 0,
                    message: "request task ended before delivering a result".to_owned(),
                })
            })
        })
    }
}
