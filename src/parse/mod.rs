//! Response mapping for the store's internal ajax payloads.
//!
//! Upstream responses are XSSI-guarded (`)]}'` prefix) JSON whose data is
//! positional nested arrays, not keyed objects. The layout is undocumented
//! and may drift, so every extraction goes through a path-tracking
//! [`Cursor`] and any mismatch produces a [`ParseError`] naming the
//! section and the exact path that failed.
//!
//! Payload layout (defined here once, shared by all fixtures):
//!
//! ```text
//! detail:  ["getitemdetailresponse", DETAIL, RELATED?, MORE?]
//! items:   ["getitemlistresponse", [ITEM, ...]]
//! reviews: ["getreviewsresponse", [[rating, message, created, updated, AUTHOR], ...]]
//! issues:  ["getissuesresponse", [[type, status, title, description,
//!                                  browser, version, date, AUTHOR], ...]]
//! version: ["getversionresponse", "20210820"]
//!
//! ITEM:   [id, name, title, slug, [author name, domain, url], users,
//!          [rating average, count], price, [category name, slug],
//!          [6 image urls], status]
//! DETAIL: ITEM ++ [description, website, support, version, size,
//!          published, purchases, [languages], [email, address, policy],
//!          type, manifest]
//! AUTHOR: [id, name, avatar]
//! ```
//!
//! The mapper never re-sorts or re-filters list payloads: upstream
//! ordering is the contract.

use serde_json::Value;

use crate::config::STORE_BASE_URL;
use crate::error::ParseError;
use crate::resources::{
    Author, Detail, Developer, Issue, Item, ItemAuthor, ItemCategory, ItemImages, ItemRating,
    Review,
};

/// Guard prefix Google prepends to ajax responses to defeat XSSI.
const XSSI_PREFIX: &str = ")]}'";

const DETAIL_TAG: &str = "getitemdetailresponse";
const ITEMS_TAG: &str = "getitemlistresponse";
const REVIEWS_TAG: &str = "getreviewsresponse";
const ISSUES_TAG: &str = "getissuesresponse";
const VERSION_TAG: &str = "getversionresponse";

/// A borrowed position inside a payload, carrying the JSONPath-style
/// location used in error reporting.
struct Cursor<'a> {
    value: &'a Value,
    section: &'static str,
    path: String,
}

impl<'a> Cursor<'a> {
    fn root(value: &'a Value, section: &'static str) -> Self {
        Self {
            value,
            section,
            path: "$".to_string(),
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            section: self.section,
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn at(&self, index: usize) -> Result<Cursor<'a>, ParseError> {
        let elements = self
            .value
            .as_array()
            .ok_or_else(|| self.error("expected an array"))?;
        let value = elements.get(index).ok_or_else(|| {
            self.error(format!(
                "missing element {index} (array has {} elements)",
                elements.len()
            ))
        })?;
        Ok(Cursor {
            value,
            section: self.section,
            path: format!("{}[{index}]", self.path),
        })
    }

    fn elements(&self) -> Result<Vec<Cursor<'a>>, ParseError> {
        let elements = self
            .value
            .as_array()
            .ok_or_else(|| self.error("expected an array"))?;
        Ok(elements
            .iter()
            .enumerate()
            .map(|(index, value)| Cursor {
                value,
                section: self.section,
                path: format!("{}[{index}]", self.path),
            })
            .collect())
    }

    fn len(&self) -> Result<usize, ParseError> {
        self.value
            .as_array()
            .map(Vec::len)
            .ok_or_else(|| self.error("expected an array"))
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn string(&self) -> Result<String, ParseError> {
        self.value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.error("expected a string"))
    }

    fn optional_string(&self) -> Result<Option<String>, ParseError> {
        if self.value.is_null() {
            return Ok(None);
        }
        self.string().map(Some).map_err(|_| {
            self.error("expected a string or null")
        })
    }

    fn float(&self) -> Result<f64, ParseError> {
        self.value
            .as_f64()
            .ok_or_else(|| self.error("expected a number"))
    }

    fn unsigned(&self) -> Result<u64, ParseError> {
        self.value
            .as_u64()
            .ok_or_else(|| self.error("expected a non-negative integer"))
    }

    fn integer(&self) -> Result<i64, ParseError> {
        self.value
            .as_i64()
            .ok_or_else(|| self.error("expected an integer"))
    }
}

/// Strips the XSSI guard and parses the body into JSON.
fn payload(body: &str, section: &'static str) -> Result<Value, ParseError> {
    let body = body.trim_start();
    let body = body.strip_prefix(XSSI_PREFIX).unwrap_or(body);
    serde_json::from_str(body).map_err(|err| ParseError {
        section,
        path: "$".to_string(),
        message: format!("body is not valid JSON: {err}"),
    })
}

/// Verifies the response tag at `$[0]` matches the expected endpoint.
fn expect_tag(root: &Cursor<'_>, tag: &'static str) -> Result<(), ParseError> {
    let found = root.at(0)?.string()?;
    if found == tag {
        Ok(())
    } else {
        Err(root
            .at(0)?
            .error(format!("expected response tag '{tag}', found '{found}'")))
    }
}

/// Maps the shared summary record into an [`Item`].
///
/// `url` is not on the wire; it is rebuilt from slug and id.
fn item(record: &Cursor<'_>) -> Result<Item, ParseError> {
    let id = record.at(0)?.string()?;
    let name = record.at(1)?.string()?;
    let title = record.at(2)?.string()?;
    let slug = record.at(3)?.string()?;

    let author = record.at(4)?;
    let author = ItemAuthor {
        name: author.at(0)?.string()?,
        domain: author.at(1)?.optional_string()?,
        url: author.at(2)?.optional_string()?,
    };

    let users = record.at(5)?.string()?;

    let rating = record.at(6)?;
    let average_cursor = rating.at(0)?;
    let average = average_cursor.float()?;
    if !(0.0..=5.0).contains(&average) {
        return Err(average_cursor.error(format!("rating average {average} is outside 0..=5")));
    }
    let rating = ItemRating {
        average,
        count: rating.at(1)?.unsigned()?,
    };

    let price = record.at(7)?.optional_string()?;

    let category = record.at(8)?;
    let category = ItemCategory {
        name: category.at(0)?.string()?,
        slug: category.at(1)?.string()?,
    };

    let images = record.at(9)?;
    let images = ItemImages {
        size_26x26: images.at(0)?.optional_string()?,
        size_128x128: images.at(1)?.optional_string()?,
        size_141x90: images.at(2)?.optional_string()?,
        size_220x140: images.at(3)?.optional_string()?,
        size_440x280: images.at(4)?.optional_string()?,
        size_460x340: images.at(5)?.optional_string()?,
    };

    let status = record.at(10)?.optional_string()?;

    let url = format!("{STORE_BASE_URL}/webstore/detail/{slug}/{id}");

    Ok(Item {
        id,
        name,
        title,
        slug,
        url,
        author,
        users,
        rating,
        price,
        category,
        images,
        status,
    })
}

fn item_list(list: &Cursor<'_>) -> Result<Vec<Item>, ParseError> {
    list.elements()?.iter().map(item).collect()
}

fn author(record: &Cursor<'_>) -> Result<Author, ParseError> {
    Ok(Author {
        id: record.at(0)?.optional_string()?,
        name: record.at(1)?.optional_string()?,
        avatar: record.at(2)?.optional_string()?,
    })
}

/// Maps a `detail` response body into a [`Detail`].
///
/// The embedded related/more lists are parsed only when the request asked
/// for them; otherwise those fields stay absent regardless of what the
/// payload carries.
pub(crate) fn detail(
    body: &str,
    include_related: bool,
    include_more: bool,
) -> Result<Detail, ParseError> {
    let value = payload(body, "detail")?;
    let root = Cursor::root(&value, "detail");
    expect_tag(&root, DETAIL_TAG)?;

    let record = root.at(1)?;
    let summary = item(&record)?;

    let description = record.at(11)?.string()?;
    let website = record.at(12)?.string()?;
    let support = record.at(13)?.string()?;
    let version = record.at(14)?.string()?;
    let size = record.at(15)?.string()?;
    let published = record.at(16)?.string()?;
    // Upstream stopped reporting purchases; the slot is always null.
    let purchases = if record.at(17)?.is_null() {
        None
    } else {
        Some(record.at(17)?.unsigned()?)
    };
    let languages = record
        .at(18)?
        .elements()?
        .iter()
        .map(Cursor::string)
        .collect::<Result<Vec<_>, _>>()?;

    let developer = record.at(19)?;
    let developer = Developer {
        email: developer.at(0)?.optional_string()?,
        address: developer.at(1)?.optional_string()?,
        policy: developer.at(2)?.optional_string()?,
    };

    let item_type = record.at(20)?.string()?;
    let manifest = record.at(21)?.string()?;

    let related = if include_related && root.len()? > 2 && !root.at(2)?.is_null() {
        Some(item_list(&root.at(2)?)?)
    } else {
        None
    };
    let more = if include_more && root.len()? > 3 && !root.at(3)?.is_null() {
        Some(item_list(&root.at(3)?)?)
    } else {
        None
    };

    Ok(Detail {
        item: summary,
        description,
        website,
        support,
        version,
        size,
        published,
        purchases,
        languages,
        developer,
        item_type,
        manifest,
        related,
        more,
    })
}

/// Maps an `items` response body into an ordered list of [`Item`].
///
/// Upstream ranking order is preserved; the list is truncated to the
/// requested count, never re-sorted.
pub(crate) fn items(body: &str, limit: usize) -> Result<Vec<Item>, ParseError> {
    let value = payload(body, "items")?;
    let root = Cursor::root(&value, "items");
    expect_tag(&root, ITEMS_TAG)?;

    let mut results = item_list(&root.at(1)?)?;
    results.truncate(limit);
    Ok(results)
}

/// Maps a `reviews` response body into an ordered list of [`Review`].
pub(crate) fn reviews(body: &str) -> Result<Vec<Review>, ParseError> {
    let value = payload(body, "reviews")?;
    let root = Cursor::root(&value, "reviews");
    expect_tag(&root, REVIEWS_TAG)?;

    root.at(1)?
        .elements()?
        .iter()
        .map(|record| {
            let rating_cursor = record.at(0)?;
            let rating = rating_cursor.unsigned()?;
            if !(1..=5).contains(&rating) {
                return Err(
                    rating_cursor.error(format!("review rating {rating} is outside 1..=5"))
                );
            }
            #[allow(clippy::cast_possible_truncation)]
            let rating = rating as u8;

            Ok(Review {
                rating,
                message: record.at(1)?.string()?,
                created: record.at(2)?.integer()?,
                updated: record.at(3)?.integer()?,
                author: author(&record.at(4)?)?,
            })
        })
        .collect()
}

/// Maps an `issues` response body into an ordered list of [`Issue`].
pub(crate) fn issues(body: &str) -> Result<Vec<Issue>, ParseError> {
    let value = payload(body, "issues")?;
    let root = Cursor::root(&value, "issues");
    expect_tag(&root, ISSUES_TAG)?;

    root.at(1)?
        .elements()?
        .iter()
        .map(|record| {
            Ok(Issue {
                issue_type: record.at(0)?.string()?,
                status: record.at(1)?.string()?,
                title: record.at(2)?.string()?,
                description: record.at(3)?.string()?,
                browser: record.at(4)?.string()?,
                version: record.at(5)?.string()?,
                date: record.at(6)?.integer()?,
                author: author(&record.at(7)?)?,
            })
        })
        .collect()
}

/// Extracts the active API version string from a `version` response body.
pub(crate) fn version(body: &str) -> Result<String, ParseError> {
    let value = payload(body, "version")?;
    let root = Cursor::root(&value, "version");
    expect_tag(&root, VERSION_TAG)?;
    root.at(1)?.string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guard(value: &Value) -> String {
        format!(")]}}'\n{value}")
    }

    fn item_record(id: &str, title: &str) -> Value {
        json!([
            id,
            title.to_lowercase(),
            title,
            title.to_lowercase(),
            ["Publisher", "publisher.example", "https://publisher.example"],
            "10,000+",
            [4.5, 1200],
            null,
            ["Productivity", "ext/7-productivity"],
            [null, "https://img.example/128", null, null, null, null],
            null
        ])
    }

    fn detail_record() -> Value {
        let mut record = item_record("aaaabbbbccccddddeeeeffffgggghhhh", "Sample")
            .as_array()
            .unwrap()
            .clone();
        record.extend([
            json!("A sample extension."),
            json!("https://sample.example"),
            json!("https://sample.example/support"),
            json!("1.2.3"),
            json!("1.2MiB"),
            json!("March 1, 2021"),
            json!(null),
            json!(["English", "Deutsch"]),
            json!(["dev@sample.example", null, "https://sample.example/privacy"]),
            json!("extension"),
            json!("{\"manifest_version\": 2}"),
        ]);
        Value::Array(record)
    }

    #[test]
    fn test_payload_accepts_guarded_and_bare_bodies() {
        let value = json!([VERSION_TAG, "20210820"]);
        assert_eq!(version(&guard(&value)).unwrap(), "20210820");
        assert_eq!(version(&value.to_string()).unwrap(), "20210820");
    }

    #[test]
    fn test_payload_rejects_non_json() {
        let err = version("<html>maintenance</html>").unwrap_err();
        assert_eq!(err.section, "version");
        assert_eq!(err.path, "$");
        assert!(err.message.contains("not valid JSON"));
    }

    #[test]
    fn test_wrong_tag_is_a_parse_error() {
        let body = guard(&json!([ITEMS_TAG, []]));
        let err = version(&body).unwrap_err();
        assert!(err.message.contains(VERSION_TAG));
        assert!(err.message.contains(ITEMS_TAG));
    }

    #[test]
    fn test_item_mapping_builds_store_url() {
        let body = guard(&json!([
            ITEMS_TAG,
            [item_record("aaaabbbbccccddddeeeeffffgggghhhh", "Sample")]
        ]));
        let results = items(&body, 5).unwrap();

        assert_eq!(results.len(), 1);
        let item = &results[0];
        assert_eq!(
            item.url,
            "https://chrome.google.com/webstore/detail/sample/aaaabbbbccccddddeeeeffffgggghhhh"
        );
        assert_eq!(item.author.name, "Publisher");
        assert_eq!(item.rating.average, 4.5);
        assert_eq!(item.rating.count, 1200);
        assert!(item.price.is_none());
        assert_eq!(
            item.images.size_128x128.as_deref(),
            Some("https://img.example/128")
        );
        assert!(item.images.size_26x26.is_none());
    }

    #[test]
    fn test_items_preserve_upstream_order_and_truncate() {
        let body = guard(&json!([
            ITEMS_TAG,
            [
                item_record("a1", "First"),
                item_record("b2", "Second"),
                item_record("c3", "Third"),
            ]
        ]));

        let results = items(&body, 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "First");
        assert_eq!(results[1].title, "Second");
    }

    #[test]
    fn test_items_missing_list_reports_path() {
        let body = guard(&json!([ITEMS_TAG]));
        let err = items(&body, 5).unwrap_err();
        assert_eq!(err.section, "items");
        assert_eq!(err.path, "$");
        assert!(err.message.contains("missing element 1"));
    }

    #[test]
    fn test_rating_average_outside_range_is_rejected() {
        let mut record = item_record("a1", "Broken").as_array().unwrap().clone();
        record[6] = json!([5.4, 10]);
        let body = guard(&json!([ITEMS_TAG, [Value::Array(record)]]));

        let err = items(&body, 5).unwrap_err();
        assert_eq!(err.path, "$[1][0][6][0]");
        assert!(err.message.contains("outside 0..=5"));
    }

    #[test]
    fn test_detail_without_flags_leaves_lists_absent() {
        let body = guard(&json!([DETAIL_TAG, detail_record()]));
        let detail = detail(&body, false, false).unwrap();

        assert_eq!(detail.item.id, "aaaabbbbccccddddeeeeffffgggghhhh");
        assert_eq!(detail.description, "A sample extension.");
        assert_eq!(detail.version, "1.2.3");
        assert_eq!(detail.languages, vec!["English", "Deutsch"]);
        assert_eq!(detail.developer.email.as_deref(), Some("dev@sample.example"));
        assert!(detail.developer.address.is_none());
        assert_eq!(detail.item_type, "extension");
        assert!(detail.purchases.is_none());
        assert!(detail.related.is_none());
        assert!(detail.more.is_none());
    }

    #[test]
    fn test_detail_ignores_embedded_lists_when_not_requested() {
        let body = guard(&json!([
            DETAIL_TAG,
            detail_record(),
            [item_record("r1", "Related")],
            [item_record("m1", "More")]
        ]));
        let detail = detail(&body, false, false).unwrap();

        assert!(detail.related.is_none());
        assert!(detail.more.is_none());
    }

    #[test]
    fn test_detail_parses_requested_lists() {
        let body = guard(&json!([
            DETAIL_TAG,
            detail_record(),
            [item_record("r1", "Related")],
            [item_record("m1", "MoreOne"), item_record("m2", "MoreTwo")]
        ]));
        let detail = detail(&body, true, true).unwrap();

        let related = detail.related.unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].title, "Related");

        let more = detail.more.unwrap();
        assert_eq!(more.len(), 2);
        assert_eq!(more[1].title, "MoreTwo");
    }

    #[test]
    fn test_detail_requested_but_missing_lists_stay_absent() {
        let body = guard(&json!([DETAIL_TAG, detail_record()]));
        let detail = detail(&body, true, true).unwrap();

        assert!(detail.related.is_none());
        assert!(detail.more.is_none());
    }

    #[test]
    fn test_detail_truncated_record_names_failing_field() {
        let record = item_record("a1", "Short"); // summary only, no detail fields
        let body = guard(&json!([DETAIL_TAG, record]));

        let err = detail(&body, false, false).unwrap_err();
        assert_eq!(err.section, "detail");
        assert_eq!(err.path, "$[1]");
        assert!(err.message.contains("missing element 11"));
    }

    #[test]
    fn test_reviews_mapping() {
        let body = guard(&json!([
            REVIEWS_TAG,
            [
                [5, "Love it", 1_617_955_200_000_i64, 1_617_955_200_000_i64, ["7", "Ana", null]],
                [2, "Meh", 1_617_868_800_000_i64, 1_617_872_400_000_i64, [null, null, "https://img.example/a"]]
            ]
        ]));

        let reviews = reviews(&body).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[0].author.name.as_deref(), Some("Ana"));
        assert_eq!(reviews[1].rating, 2);
        assert!(reviews[1].author.id.is_none());
        assert_eq!(
            reviews[1].author.avatar.as_deref(),
            Some("https://img.example/a")
        );
    }

    #[test]
    fn test_review_rating_zero_is_rejected() {
        let body = guard(&json!([
            REVIEWS_TAG,
            [[0, "Broken", 1_i64, 2_i64, [null, null, null]]]
        ]));

        let err = reviews(&body).unwrap_err();
        assert_eq!(err.path, "$[1][0][0]");
        assert!(err.message.contains("outside 1..=5"));
    }

    #[test]
    fn test_issues_mapping() {
        let body = guard(&json!([
            ISSUES_TAG,
            [[
                "problem",
                "open",
                "Crashes",
                "Crashes on startup",
                "Chrome 89",
                "1.2.3",
                1_617_868_800_000_i64,
                ["9", "Lee", null]
            ]]
        ]));

        let issues = issues(&body).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, "problem");
        assert_eq!(issues[0].status, "open");
        assert_eq!(issues[0].browser, "Chrome 89");
        assert_eq!(issues[0].author.name.as_deref(), Some("Lee"));
    }

    #[test]
    fn test_null_where_string_expected_names_both() {
        let mut record = item_record("a1", "Broken").as_array().unwrap().clone();
        record[2] = json!(null); // title
        let body = guard(&json!([ITEMS_TAG, [Value::Array(record)]]));

        let err = items(&body, 5).unwrap_err();
        assert_eq!(err.path, "$[1][0][2]");
        assert_eq!(err.message, "expected a string");
    }
}
