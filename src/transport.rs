//! Transport layer for store requests.
//!
//! A narrow collaborator over [`reqwest`]: it sends one
//! [`StoreRequest`](crate::request::StoreRequest) and returns the raw
//! response body. Connection handling, TLS, redirects, proxying and
//! timeouts live here; no retry or backoff policy is applied.

use reqwest::StatusCode;

use crate::config::RequestConfig;
use crate::error::Error;
use crate::request::{Method, StoreRequest};

/// Client version from Cargo.toml, reported in the User-Agent header.
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Performs the network exchange for the client.
///
/// Holds one connection-pooling [`reqwest::Client`] configured from a
/// [`RequestConfig`]; individual calls share no mutable state.
#[derive(Debug)]
pub(crate) struct Transport {
    client: reqwest::Client,
    config: RequestConfig,
}

impl Transport {
    /// Builds a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the proxy URL is invalid or the
    /// underlying TLS backend cannot be initialized.
    pub fn new(config: RequestConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(format!("chrome-webstore-rs/{CLIENT_VERSION}"));

        if let Some(proxy) = config.proxy() {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Sends a request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] when upstream answers 404 for a request that
    ///   targets a specific listing id
    /// - [`Error::Network`] for connection failures, timeouts and any
    ///   other non-2xx status
    pub async fn send(&self, request: &StoreRequest) -> Result<String, Error> {
        let url = format!("{}{}", self.config.base_url(), request.path);
        tracing::debug!(%url, method = ?request.method, "sending store request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        for (name, value) in self.config.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        let response = builder.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            if let Some(id) = &request.id {
                return Err(Error::NotFound { id: id.clone() });
            }
        }
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }
}

// Verify Transport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Transport>();
};
