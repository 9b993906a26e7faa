//! User reviews of a store listing.

use serde::{Deserialize, Serialize};

use super::common::Author;

/// One user review of an item.
///
/// `rating` is always an integer within `1..=5`; the mapper rejects
/// payloads carrying anything else. Timestamps are epoch milliseconds as
/// reported upstream.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Review {
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Review text.
    pub message: String,
    /// When the review was created (epoch milliseconds).
    pub created: i64,
    /// When the review was last updated (epoch milliseconds).
    pub updated: i64,
    /// The reviewer.
    pub author: Author,
}
