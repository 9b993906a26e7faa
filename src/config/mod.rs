//! Configuration for the Chrome Web Store client.
//!
//! This module provides [`RequestConfig`], the generic transport
//! configuration shared by all five operations, plus the default
//! constants for the upstream API.
//!
//! # Overview
//!
//! - [`RequestConfig`]: base URL, extra headers, proxy and timeout,
//!   passed through verbatim to the transport layer
//! - [`RequestConfigBuilder`]: a builder for constructing configs
//! - [`STORE_BASE_URL`], [`DEFAULT_API_VERSION`], [`DEFAULT_LOCALE`],
//!   [`DEFAULT_RESULT_COUNT`]: upstream defaults applied when an option
//!   is omitted
//!
//! # Example
//!
//! ```rust
//! use chrome_webstore::RequestConfig;
//! use std::time::Duration;
//!
//! let config = RequestConfig::builder()
//!     .header("Accept-Language", "en-US")
//!     .timeout(Duration::from_secs(10))
//!     .build();
//!
//! assert_eq!(config.base_url(), "https://chrome.google.com");
//! ```

use std::collections::HashMap;
use std::time::Duration;

/// Base URL of the Chrome Web Store.
pub const STORE_BASE_URL: &str = "https://chrome.google.com";

/// Known-good version of the store's internal API, used when the caller
/// does not supply one. Obtain the currently active value with the
/// `version` operation.
pub const DEFAULT_API_VERSION: &str = "20210820";

/// Locale applied to detail and item-search requests when none is given.
pub const DEFAULT_LOCALE: &str = "en";

/// Number of results returned by list operations when `count` is omitted.
pub const DEFAULT_RESULT_COUNT: u32 = 5;

/// Generic transport configuration for a [`StoreClient`](crate::StoreClient).
///
/// Everything here is passed through to the transport collaborator
/// unchanged; the client itself holds no session, cache or retry policy.
///
/// # Thread Safety
///
/// `RequestConfig` is `Clone`, `Send` and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct RequestConfig {
    base_url: String,
    headers: HashMap<String, String>,
    proxy: Option<String>,
    timeout: Option<Duration>,
}

impl RequestConfig {
    /// Creates a new builder for constructing a `RequestConfig`.
    #[must_use]
    pub fn builder() -> RequestConfigBuilder {
        RequestConfigBuilder::new()
    }

    /// Returns the base URL requests are sent to.
    ///
    /// Defaults to [`STORE_BASE_URL`]; override it to point the client at
    /// a proxy or a mock server in tests.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the extra headers included in every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the HTTP proxy URL, if configured.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Returns the request timeout, if configured.
    ///
    /// When `None`, no timeout is applied at this layer.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`RequestConfig`] instances.
#[derive(Debug, Default)]
pub struct RequestConfigBuilder {
    base_url: Option<String>,
    headers: HashMap<String, String>,
    proxy: Option<String>,
    timeout: Option<Duration>,
}

impl RequestConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Overrides the base URL requests are sent to.
    ///
    /// A trailing slash is stripped so paths can be appended directly.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    /// Adds a single header to include in every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets all extra headers at once, replacing any added so far.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Routes all requests through the given HTTP(S) proxy URL.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`RequestConfig`].
    #[must_use]
    pub fn build(self) -> RequestConfig {
        RequestConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| STORE_BASE_URL.to_string()),
            headers: self.headers,
            proxy: self.proxy,
            timeout: self.timeout,
        }
    }
}
