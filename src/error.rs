//! Error types for the Chrome Web Store client.
//!
//! This module contains the full error taxonomy of the client. Every
//! operation resolves with a typed result or fails with exactly one of
//! these errors; nothing is swallowed or defaulted.
//!
//! # Error Handling
//!
//! - [`InvalidOptionsError`]: caller-supplied options violate a documented
//!   constraint. Detected before any network activity.
//! - [`Error::Network`]: transport-layer failure (connection refused,
//!   timeout, TLS failure, unexpected upstream status), surfaced unchanged.
//! - [`Error::NotFound`]: upstream reports the requested listing does not
//!   exist, kept distinct from parse failures so callers can branch on
//!   "missing" vs "malformed".
//! - [`ParseError`]: the upstream payload does not match the expected
//!   shape. Carries the section and path that failed, since the upstream
//!   API is unofficial and may change without notice.
//!
//! # Example
//!
//! ```rust
//! use chrome_webstore::{InvalidOptionsError, RatingFilter};
//!
//! let result = RatingFilter::try_from(1);
//! assert!(matches!(result, Err(InvalidOptionsError::InvalidRating { rating: 1 })));
//! ```

use thiserror::Error;

/// Errors raised by option validation, before any request is sent.
///
/// Each variant provides a clear, actionable message describing which
/// constraint was violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidOptionsError {
    /// The listing id is required and cannot be empty.
    #[error("`id` cannot be empty. Provide the listing identifier from the store URL.")]
    EmptyId,

    /// The rating filter for item search only supports 2 through 5 stars.
    ///
    /// The upstream search endpoint does not support filtering by a single
    /// star; this is an upstream quirk, not a client restriction.
    #[error("Invalid rating filter '{rating}'. Item search accepts only 2, 3, 4 or 5 stars.")]
    InvalidRating {
        /// The out-of-range rating that was provided.
        rating: u8,
    },

    /// `offset` for item search requires `category` to be set.
    #[error("`offset` requires `category` to be set when listing items.")]
    OffsetRequiresCategory,
}

/// Error returned when an upstream payload does not match the expected shape.
///
/// The Web Store's internal responses are undocumented nested arrays, so
/// schema drift is an expected failure mode. The error names the response
/// section (`detail`, `items`, `reviews`, `issues` or `version`) and the
/// path within the payload that failed, to aid debugging.
///
/// # Example
///
/// ```rust
/// use chrome_webstore::ParseError;
///
/// let error = ParseError {
///     section: "detail",
///     path: "$[1][6]".to_string(),
///     message: "expected an array".to_string(),
/// };
/// assert!(error.to_string().contains("$[1][6]"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to parse {section} response at {path}: {message}")]
pub struct ParseError {
    /// The response section being parsed when the failure occurred.
    pub section: &'static str,
    /// JSONPath-style location of the element that did not match.
    pub path: String,
    /// Description of the mismatch.
    pub message: String,
}

/// Unified error type for all client operations.
///
/// Use pattern matching to handle specific failure classes.
///
/// # Example
///
/// ```rust,ignore
/// use chrome_webstore::Error;
///
/// match client.detail(&options).await {
///     Ok(detail) => println!("{}", detail.item.title),
///     Err(Error::NotFound { id }) => println!("no listing with id {id}"),
///     Err(Error::InvalidOptions(e)) => println!("bad options: {e}"),
///     Err(Error::Network(e)) => println!("transport failure: {e}"),
///     Err(Error::Parse(e)) => println!("upstream changed shape: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Options validation failed before any request was sent.
    #[error(transparent)]
    InvalidOptions(#[from] InvalidOptionsError),

    /// Network or connection error, including unexpected upstream statuses.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The requested listing does not exist upstream.
    #[error("no Chrome Web Store listing found for id '{id}'")]
    NotFound {
        /// The listing id that was requested.
        id: String,
    },

    /// The upstream payload did not match the expected shape.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
