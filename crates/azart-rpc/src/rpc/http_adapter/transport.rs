use async_trait::async_trait;
use reqwest::{header, Url};

use crate::config::ClientConfig;
use crate::error::ConfigError;

use super::super::{HttpReply, Transport, TransportFailure};
use super::connection::load_ca_bundle;

/// [`Transport`] that POSTs JSON-RPC bodies to azartd over HTTP(S).
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
    config: ClientConfig,
}

impl HttpTransport {
    /// Build a transport for `config`.
    ///
    /// When `config.ca` is set, built-in trust roots are disabled and only
    /// the certificates in that PEM bundle are accepted.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let url = config.base_url()?;

        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true);
        if let Some(ca) = config.verify() {
            builder = builder.tls_built_in_root_certs(false);
            for cert in load_ca_bundle(ca)? {
                builder = builder.add_root_certificate(cert);
            }
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url,
            config,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post(&self, body: String) -> Result<HttpReply, TransportFailure> {
        let mut builder = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some((user, pass)) = self.config.auth() {
            builder = builder.basic_auth(user, Some(pass));
        }

        let response = builder.send().await.map_err(|e| TransportFailure {
            message: e.to_string(),
            response: None,
        })?;
        let status = response.status();
        let status_error = response.error_for_status_ref().err().map(|e| e.to_string());

        let body = response.text().await.map_err(|e| TransportFailure {
            message: format!("read response body: {e}"),
            response: None,
        })?;
        let reply = HttpReply {
            status: status.as_u16(),
            body,
        };

        match status_error {
            Some(message) => Err(TransportFailure {
                message,
                response: Some(reply),
            }),
            None => Ok(reply),
        }
    }
}
