use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::ClientConfig;

use super::{HttpReply, Transport, TransportFailure};

type Outcome = Result<HttpReply, TransportFailure>;

/// A mock transport for testing. Replays queued outcomes in order and
/// records every request body it was handed.
pub struct MockTransport {
    config: ClientConfig,
    outcomes: Mutex<VecDeque<Outcome>>,
    requests: Mutex<Vec<serde_json::Value>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            config: ClientConfig::default(),
            outcomes: VecDeque::new(),
        }
    }

    /// Decoded bodies of every request posted so far, oldest first.
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().expect("mock request log poisoned").clone()
    }
}

pub struct MockTransportBuilder {
    config: ClientConfig,
    outcomes: VecDeque<Outcome>,
}

impl MockTransportBuilder {
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcomes.push_back(outcome);
        self
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            config: self.config,
            outcomes: Mutex::new(self.outcomes),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post(&self, body: String) -> Result<HttpReply, TransportFailure> {
        let decoded = serde_json::from_str(&body).expect("client must send valid JSON");
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(decoded);
        self.outcomes
            .lock()
            .expect("mock outcome queue poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportFailure {
                    message: "mock transport has no queued outcome".to_owned(),
                    response: None,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::reply;

    #[tokio::test]
    async fn replays_outcomes_then_fails() {
        let mock = MockTransport::builder()
            .with_config(ClientConfig::from_url("http://mock.local:1").expect("valid url"))
            .with_outcome(reply(200, "{}"))
            .build();
        assert_eq!(mock.config().host, "mock.local");

        let first = mock.post(r#"{"id":1}"#.to_owned()).await;
        assert_eq!(first, reply(200, "{}"));
        let second = mock.post(r#"{"id":2}"#.to_owned()).await;
        assert!(second.is_err());
        assert_eq!(mock.requests().len(), 2);
    }
}
