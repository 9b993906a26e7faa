//! # chrome-webstore
//!
//! A Rust client for the Chrome Web Store's internal (undocumented)
//! endpoints, providing typed access to listing details, search results,
//! user reviews and reported issues.
//!
//! ## Overview
//!
//! This crate provides:
//! - A single async [`StoreClient`] with five operations: [`detail`],
//!   [`items`], [`reviews`], [`issues`] and [`version`]
//! - Typed, validated per-operation options with builders
//! - Plain immutable result records ([`Item`], [`Detail`], [`Review`],
//!   [`Issue`]) with serde support
//! - A closed error taxonomy ([`Error`]) distinguishing invalid options,
//!   transport failures, missing listings and payload drift
//!
//! [`detail`]: StoreClient::detail
//! [`items`]: StoreClient::items
//! [`reviews`]: StoreClient::reviews
//! [`issues`]: StoreClient::issues
//! [`version`]: StoreClient::version
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chrome_webstore::{DetailOptions, ItemsOptions, StoreClient};
//!
//! let client = StoreClient::new();
//!
//! // Full details for one listing
//! let detail = client
//!     .detail(&DetailOptions::builder("gighmmpiobklfepjocnamgkkbiglidom").build()?)
//!     .await?;
//! println!("{} ({} users)", detail.item.title, detail.item.users);
//!
//! // Search listings
//! let items = client
//!     .items(&ItemsOptions::builder().search("dark mode").count(10).build()?)
//!     .await?;
//! for item in items {
//!     println!("{} - {:.1} stars", item.title, item.rating.average);
//! }
//! ```
//!
//! ## Upstream caveats
//!
//! The endpoints this client queries are internal to the store and may
//! change without notice. Shape mismatches surface as [`ParseError`] with
//! the section and path that failed. Two upstream quirks are preserved
//! deliberately:
//!
//! - The item-search rating filter accepts only 2-5 stars; reviews
//!   themselves still carry ratings of 1-5.
//! - `Detail::purchases` is always `None`; upstream stopped reporting it.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed
//!   explicitly
//! - **Fail-fast validation**: options are checked before any network
//!   activity
//! - **Thread-safe**: the client is `Send + Sync` and calls share no
//!   mutable state
//! - **No hidden policy**: no caching, retries or rate limiting; one
//!   request/response round trip per call

pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod resources;

mod parse;
mod request;
mod transport;

// Re-export public types at crate root for convenience
pub use client::StoreClient;
pub use config::{
    RequestConfig, RequestConfigBuilder, DEFAULT_API_VERSION, DEFAULT_LOCALE,
    DEFAULT_RESULT_COUNT, STORE_BASE_URL,
};
pub use error::{Error, InvalidOptionsError, ParseError};
pub use options::{
    DetailOptions, DetailOptionsBuilder, Feature, IssueType, IssuesOptions, IssuesOptionsBuilder,
    ItemsOptions, ItemsOptionsBuilder, RatingFilter, ReviewSort, ReviewsOptions,
    ReviewsOptionsBuilder,
};
pub use resources::{
    Author, Detail, Developer, Issue, Item, ItemAuthor, ItemCategory, ItemImages, ItemRating,
    Review,
};
