//! The summary view of a store listing.

use serde::{Deserialize, Serialize};

/// The publisher of a listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemAuthor {
    /// Publisher display name.
    pub name: String,
    /// Verified publisher domain, when one is linked.
    pub domain: Option<String>,
    /// Publisher website URL, when one is linked.
    pub url: Option<String>,
}

/// Aggregate user rating of a listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ItemRating {
    /// Average star rating, always within `0.0..=5.0`.
    pub average: f64,
    /// Number of ratings the average is built from.
    pub count: u64,
}

/// The store category a listing belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemCategory {
    /// Human-readable category name (e.g. "Accessibility").
    pub name: String,
    /// Category slug used in store URLs (e.g. "ext/22-accessibility").
    pub slug: String,
}

/// Promotional image variants of a listing.
///
/// The key set is fixed upstream; each variant is independently nullable
/// because publishers upload only some sizes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemImages {
    /// 26x26 icon.
    #[serde(rename = "26x26")]
    pub size_26x26: Option<String>,

    /// 128x128 icon.
    #[serde(rename = "128x128")]
    pub size_128x128: Option<String>,

    /// 141x90 tile.
    #[serde(rename = "141x90")]
    pub size_141x90: Option<String>,

    /// 220x140 tile.
    #[serde(rename = "220x140")]
    pub size_220x140: Option<String>,

    /// 440x280 marquee.
    #[serde(rename = "440x280")]
    pub size_440x280: Option<String>,

    /// 460x340 screenshot.
    #[serde(rename = "460x340")]
    pub size_460x340: Option<String>,
}

/// One store listing, summary view.
///
/// Returned by the `items` operation and embedded in [`Detail`] results
/// (including their `related`/`more` lists).
///
/// [`Detail`]: crate::Detail
///
/// # Example
///
/// ```rust
/// use chrome_webstore::Item;
///
/// let item: Item = serde_json::from_str(r#"{
///     "id": "gighmmpiobklfepjocnamgkkbiglidom",
///     "name": "adblock",
///     "title": "AdBlock",
///     "slug": "adblock",
///     "url": "https://chrome.google.com/webstore/detail/adblock/gighmmpiobklfepjocnamgkkbiglidom",
///     "author": {"name": "AdBlock", "domain": "getadblock.com", "url": "https://getadblock.com"},
///     "users": "10,000,000+",
///     "rating": {"average": 4.5, "count": 290000},
///     "price": null,
///     "category": {"name": "Productivity", "slug": "ext/7-productivity"},
///     "images": {"26x26": null, "128x128": "https://lh3.googleusercontent.com/x=s128",
///                "141x90": null, "220x140": null, "440x280": null, "460x340": null},
///     "status": null
/// }"#).unwrap();
///
/// assert_eq!(item.title, "AdBlock");
/// assert!(item.rating.average <= 5.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Item {
    /// The 32-character listing id.
    pub id: String,
    /// Machine name of the listing.
    pub name: String,
    /// Display title.
    pub title: String,
    /// URL slug of the listing.
    pub slug: String,
    /// Canonical store URL, built from slug and id.
    pub url: String,
    /// The publisher.
    pub author: ItemAuthor,
    /// Approximate user count as reported upstream (e.g. "10,000+").
    pub users: String,
    /// Aggregate rating.
    pub rating: ItemRating,
    /// Price tag, or `None` for free listings.
    pub price: Option<String>,
    /// Store category.
    pub category: ItemCategory,
    /// Promotional image variants.
    pub images: ItemImages,
    /// Badge status (e.g. featured), when present.
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: "gighmmpiobklfepjocnamgkkbiglidom".to_string(),
            name: "adblock".to_string(),
            title: "AdBlock".to_string(),
            slug: "adblock".to_string(),
            url: "https://chrome.google.com/webstore/detail/adblock/gighmmpiobklfepjocnamgkkbiglidom".to_string(),
            author: ItemAuthor {
                name: "AdBlock".to_string(),
                domain: Some("getadblock.com".to_string()),
                url: Some("https://getadblock.com".to_string()),
            },
            users: "10,000,000+".to_string(),
            rating: ItemRating {
                average: 4.5,
                count: 290_000,
            },
            price: None,
            category: ItemCategory {
                name: "Productivity".to_string(),
                slug: "ext/7-productivity".to_string(),
            },
            images: ItemImages {
                size_128x128: Some("https://lh3.googleusercontent.com/x=s128".to_string()),
                ..ItemImages::default()
            },
            status: None,
        }
    }

    #[test]
    fn test_image_keys_serialize_as_dimensions() {
        let item = sample_item();
        let json = serde_json::to_value(&item).unwrap();

        let images = json.get("images").unwrap();
        assert!(images.get("26x26").is_some());
        assert!(images.get("128x128").is_some());
        assert!(images.get("141x90").is_some());
        assert!(images.get("220x140").is_some());
        assert!(images.get("440x280").is_some());
        assert!(images.get("460x340").is_some());
        assert_eq!(
            images["128x128"],
            "https://lh3.googleusercontent.com/x=s128"
        );
        assert_eq!(images["26x26"], serde_json::Value::Null);
    }

    #[test]
    fn test_item_round_trips_through_json() {
        let item = sample_item();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_free_item_price_is_null_not_empty_string() {
        let item = sample_item();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], serde_json::Value::Null);
    }
}
