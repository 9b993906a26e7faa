//! The full view of a store listing.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Contact information the developer chose to publish.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Developer {
    /// Support email address.
    pub email: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Privacy policy URL.
    pub policy: Option<String>,
}

/// Full details about a store listing.
///
/// Extends the summary [`Item`] (flattened in serialized form) with the
/// descriptive fields only present on the detail page.
///
/// `related` and `more` are populated only when the corresponding flags
/// were set on [`DetailOptions`]; when not requested they are `None` and
/// absent from the serialized JSON, which keeps "not requested" distinct
/// from "requested but empty".
///
/// [`DetailOptions`]: crate::DetailOptions
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Detail {
    /// The summary fields shared with list results.
    #[serde(flatten)]
    pub item: Item,

    /// Long description of the listing.
    pub description: String,
    /// Listing website URL.
    pub website: String,
    /// Support page URL.
    pub support: String,
    /// Published extension version.
    pub version: String,
    /// Package size as reported upstream (e.g. "1.2MiB").
    pub size: String,
    /// Publication date as reported upstream.
    pub published: String,
    /// In-app purchase count. The store stopped reporting this; it always
    /// maps to `None`.
    pub purchases: Option<u64>,
    /// Languages the listing supports.
    pub languages: Vec<String>,
    /// Developer contact information.
    pub developer: Developer,
    /// Listing type (e.g. "extension", "theme", "app").
    #[serde(rename = "type")]
    pub item_type: String,
    /// The extension manifest, verbatim.
    pub manifest: String,

    /// Related extensions, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<Item>>,

    /// More items from the same developer, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more: Option<Vec<Item>>,
}
