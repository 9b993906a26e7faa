//! The Chrome Web Store client.
//!
//! [`StoreClient`] exposes the five operations of the store's internal
//! data API. Each call is an independent unit of work running the same
//! linear pipeline: validate options, build the request, await the
//! transport, map the response. Calls share no mutable state, so a single
//! client can serve concurrent tasks.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrome_webstore::{DetailOptions, StoreClient};
//!
//! let client = StoreClient::new();
//! let options = DetailOptions::builder("gighmmpiobklfepjocnamgkkbiglidom")
//!     .related(true)
//!     .build()?;
//! let detail = client.detail(&options).await?;
//! println!("{} by {}", detail.item.title, detail.item.author.name);
//! ```

use crate::config::{RequestConfig, DEFAULT_RESULT_COUNT};
use crate::error::Error;
use crate::options::{DetailOptions, IssuesOptions, ItemsOptions, ReviewsOptions};
use crate::parse;
use crate::request;
use crate::resources::{Detail, Issue, Item, Review};
use crate::transport::Transport;

/// Async client for the Chrome Web Store's internal endpoints.
///
/// The client holds no cache, session or retry policy of its own; every
/// operation is one request/response round trip. Construct once and share
/// freely across tasks.
///
/// # Thread Safety
///
/// `StoreClient` is `Send + Sync`.
#[derive(Debug)]
pub struct StoreClient {
    transport: Transport,
}

// Verify StoreClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreClient>();
};

impl StoreClient {
    /// Creates a client with the default configuration, targeting the
    /// public store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure). Use [`StoreClient::with_config`] to handle
    /// the failure instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RequestConfig::default()).expect("Failed to create HTTP client")
    }

    /// Creates a client with the given transport configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the configuration cannot be applied
    /// (e.g., an invalid proxy URL).
    pub fn with_config(config: RequestConfig) -> Result<Self, Error> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Gets full details about a store listing.
    ///
    /// The result's `related` and `more` lists are present only when the
    /// corresponding flags were set on the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] before any network activity when
    /// the options violate a constraint, [`Error::NotFound`] when the id
    /// does not exist upstream, [`Error::Network`] for transport failures
    /// and [`Error::Parse`] when the payload shape does not match.
    pub async fn detail(&self, options: &DetailOptions) -> Result<Detail, Error> {
        let request = request::detail(options)?;
        tracing::debug!(id = %options.id, "fetching listing detail");
        let body = self.transport.send(&request).await?;
        Ok(parse::detail(&body, options.related, options.more)?)
    }

    /// Lists store items (the summary subset of the detail data).
    ///
    /// Results preserve the upstream ranking order and contain at most
    /// `count` entries (default 5).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`], [`Error::Network`] or
    /// [`Error::Parse`] as for [`detail`](Self::detail).
    pub async fn items(&self, options: &ItemsOptions) -> Result<Vec<Item>, Error> {
        let request = request::items(options)?;
        tracing::debug!(search = ?options.search, category = ?options.category, "listing items");
        let body = self.transport.send(&request).await?;
        let limit = options.count.unwrap_or(DEFAULT_RESULT_COUNT) as usize;
        Ok(parse::items(&body, limit)?)
    }

    /// Lists user reviews for a listing.
    ///
    /// Ordering honors the requested sort as applied upstream; the client
    /// does not re-sort.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`], [`Error::NotFound`],
    /// [`Error::Network`] or [`Error::Parse`] as for
    /// [`detail`](Self::detail).
    pub async fn reviews(&self, options: &ReviewsOptions) -> Result<Vec<Review>, Error> {
        let request = request::reviews(options)?;
        tracing::debug!(id = %options.id, sort = %options.sort, "fetching reviews");
        let body = self.transport.send(&request).await?;
        Ok(parse::reviews(&body)?)
    }

    /// Lists reported issues for a listing.
    ///
    /// When a type filter is given, upstream pre-filters the results; the
    /// client does not re-filter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`], [`Error::NotFound`],
    /// [`Error::Network`] or [`Error::Parse`] as for
    /// [`detail`](Self::detail).
    pub async fn issues(&self, options: &IssuesOptions) -> Result<Vec<Issue>, Error> {
        let request = request::issues(options)?;
        tracing::debug!(id = %options.id, issue_type = ?options.issue_type, "fetching issues");
        let body = self.transport.send(&request).await?;
        Ok(parse::issues(&body)?)
    }

    /// Gets the currently active version of the store's internal API.
    ///
    /// A reduced path of the same pipeline: no options, and no parsing
    /// beyond extracting a single string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] or [`Error::Parse`].
    pub async fn version(&self) -> Result<String, Error> {
        let request = request::version();
        let body = self.transport.send(&request).await?;
        Ok(parse::version(&body)?)
    }
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::new()
    }
}
