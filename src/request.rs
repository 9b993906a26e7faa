//! Request construction for the store's internal ajax endpoints.
//!
//! Each function here turns a validated options struct into an opaque
//! [`StoreRequest`] descriptor: method, path and query pairs. Nothing in
//! this module performs network activity; validation happens first so an
//! invalid call never leaves the process.

use crate::config::{DEFAULT_API_VERSION, DEFAULT_LOCALE, DEFAULT_RESULT_COUNT};
use crate::error::InvalidOptionsError;
use crate::options::{DetailOptions, IssuesOptions, ItemsOptions, ReviewsOptions};

pub(crate) const DETAIL_PATH: &str = "/webstore/ajax/detail";
pub(crate) const ITEMS_PATH: &str = "/webstore/ajax/item";
pub(crate) const REVIEWS_PATH: &str = "/webstore/ajax/reviews";
pub(crate) const ISSUES_PATH: &str = "/webstore/ajax/issues";
pub(crate) const VERSION_PATH: &str = "/webstore/ajax/version";

/// HTTP methods the upstream ajax endpoints use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    /// The data endpoints are POSTs with an empty body; all parameters
    /// travel in the query string.
    Post,
}

/// An opaque request descriptor handed to the transport collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StoreRequest {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(String, String)>,
    /// The listing id this request is about, used to report `NotFound`.
    pub id: Option<String>,
}

fn pair(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}

/// Builds the request for the `detail` operation.
pub(crate) fn detail(options: &DetailOptions) -> Result<StoreRequest, InvalidOptionsError> {
    options.verify()?;

    let mut query = vec![
        pair("hl", options.locale.as_deref().unwrap_or(DEFAULT_LOCALE)),
        pair(
            "pv",
            options.version.as_deref().unwrap_or(DEFAULT_API_VERSION),
        ),
        pair("id", &options.id),
    ];
    if options.related {
        query.push(pair("related", "true"));
    }
    if options.more {
        query.push(pair("more", "true"));
    }

    Ok(StoreRequest {
        method: Method::Post,
        path: DETAIL_PATH,
        query,
        id: Some(options.id.clone()),
    })
}

/// Builds the request for the `items` operation.
pub(crate) fn items(options: &ItemsOptions) -> Result<StoreRequest, InvalidOptionsError> {
    options.verify()?;

    let mut query = vec![
        pair("hl", options.locale.as_deref().unwrap_or(DEFAULT_LOCALE)),
        pair(
            "pv",
            options.version.as_deref().unwrap_or(DEFAULT_API_VERSION),
        ),
        pair("count", options.count.unwrap_or(DEFAULT_RESULT_COUNT)),
    ];
    if let Some(search) = &options.search {
        query.push(pair("searchTerm", search));
    }
    if let Some(category) = &options.category {
        query.push(pair("category", category));
    }
    if let Some(rating) = options.rating {
        query.push(pair("rating", rating.as_u8()));
    }
    if !options.features.is_empty() {
        let features = options
            .features
            .iter()
            .map(|feature| feature.as_query_value())
            .collect::<Vec<_>>()
            .join(",");
        query.push(pair("features", features));
    }
    if let Some(offset) = options.offset {
        query.push(pair("offset", offset));
    }

    Ok(StoreRequest {
        method: Method::Post,
        path: ITEMS_PATH,
        query,
        id: None,
    })
}

/// Builds the request for the `reviews` operation.
///
/// No `hl` parameter is sent unless a locale was given: the upstream
/// default for reviews is all locales.
pub(crate) fn reviews(options: &ReviewsOptions) -> Result<StoreRequest, InvalidOptionsError> {
    options.verify()?;

    let mut query = vec![
        pair(
            "pv",
            options.version.as_deref().unwrap_or(DEFAULT_API_VERSION),
        ),
        pair("id", &options.id),
        pair("count", options.count.unwrap_or(DEFAULT_RESULT_COUNT)),
        pair("sort", options.sort.as_query_value()),
    ];
    if let Some(offset) = options.offset {
        query.push(pair("offset", offset));
    }
    if let Some(locale) = &options.locale {
        query.push(pair("hl", locale));
    }

    Ok(StoreRequest {
        method: Method::Post,
        path: REVIEWS_PATH,
        query,
        id: Some(options.id.clone()),
    })
}

/// Builds the request for the `issues` operation.
pub(crate) fn issues(options: &IssuesOptions) -> Result<StoreRequest, InvalidOptionsError> {
    options.verify()?;

    let mut query = vec![
        pair(
            "pv",
            options.version.as_deref().unwrap_or(DEFAULT_API_VERSION),
        ),
        pair("id", &options.id),
        pair("count", options.count.unwrap_or(DEFAULT_RESULT_COUNT)),
    ];
    if let Some(issue_type) = options.issue_type {
        query.push(pair("type", issue_type.as_query_value()));
    }
    if let Some(page) = options.page {
        query.push(pair("page", page));
    }

    Ok(StoreRequest {
        method: Method::Post,
        path: ISSUES_PATH,
        query,
        id: Some(options.id.clone()),
    })
}

/// Builds the request for the `version` operation.
///
/// The reduced pipeline: no options, no query parameters.
pub(crate) const fn version() -> StoreRequest {
    StoreRequest {
        method: Method::Get,
        path: VERSION_PATH,
        query: Vec::new(),
        id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Feature, IssueType, RatingFilter, ReviewSort};

    fn query_value<'a>(request: &'a StoreRequest, key: &str) -> Option<&'a str> {
        request
            .query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_detail_request_applies_defaults() {
        let options = DetailOptions::builder("some-id").build().unwrap();
        let request = detail(&options).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, DETAIL_PATH);
        assert_eq!(query_value(&request, "hl"), Some(DEFAULT_LOCALE));
        assert_eq!(query_value(&request, "pv"), Some(DEFAULT_API_VERSION));
        assert_eq!(query_value(&request, "id"), Some("some-id"));
        assert_eq!(query_value(&request, "related"), None);
        assert_eq!(query_value(&request, "more"), None);
        assert_eq!(request.id.as_deref(), Some("some-id"));
    }

    #[test]
    fn test_detail_request_with_related_and_more() {
        let options = DetailOptions::builder("some-id")
            .related(true)
            .more(true)
            .locale("fr")
            .version("20250101")
            .build()
            .unwrap();
        let request = detail(&options).unwrap();

        assert_eq!(query_value(&request, "related"), Some("true"));
        assert_eq!(query_value(&request, "more"), Some("true"));
        assert_eq!(query_value(&request, "hl"), Some("fr"));
        assert_eq!(query_value(&request, "pv"), Some("20250101"));
    }

    #[test]
    fn test_items_request_defaults_count_to_five() {
        let options = ItemsOptions::builder().build().unwrap();
        let request = items(&options).unwrap();

        assert_eq!(request.path, ITEMS_PATH);
        assert_eq!(query_value(&request, "count"), Some("5"));
        assert_eq!(query_value(&request, "searchTerm"), None);
        assert!(request.id.is_none());
    }

    #[test]
    fn test_items_request_joins_features() {
        let options = ItemsOptions::builder()
            .search("adblock")
            .rating(RatingFilter::Four)
            .features(vec![Feature::Free, Feature::Offline, Feature::Google])
            .build()
            .unwrap();
        let request = items(&options).unwrap();

        assert_eq!(query_value(&request, "searchTerm"), Some("adblock"));
        assert_eq!(query_value(&request, "rating"), Some("4"));
        assert_eq!(
            query_value(&request, "features"),
            Some("free,offline,google")
        );
    }

    #[test]
    fn test_items_request_rejects_offset_without_category() {
        let options = ItemsOptions {
            offset: Some(10),
            ..ItemsOptions::default()
        };
        assert_eq!(
            items(&options),
            Err(InvalidOptionsError::OffsetRequiresCategory)
        );
    }

    #[test]
    fn test_reviews_request_omits_locale_by_default() {
        // Upstream returns reviews in all locales unless hl is given.
        let options = ReviewsOptions::builder("some-id").build().unwrap();
        let request = reviews(&options).unwrap();

        assert_eq!(request.path, REVIEWS_PATH);
        assert_eq!(query_value(&request, "hl"), None);
        assert_eq!(query_value(&request, "sort"), Some("helpful"));
        assert_eq!(query_value(&request, "count"), Some("5"));
    }

    #[test]
    fn test_reviews_request_with_recent_sort_and_offset() {
        let options = ReviewsOptions::builder("some-id")
            .sort(ReviewSort::Recent)
            .offset(15)
            .locale("en")
            .build()
            .unwrap();
        let request = reviews(&options).unwrap();

        assert_eq!(query_value(&request, "sort"), Some("recent"));
        assert_eq!(query_value(&request, "offset"), Some("15"));
        assert_eq!(query_value(&request, "hl"), Some("en"));
    }

    #[test]
    fn test_issues_request_with_type_and_page() {
        let options = IssuesOptions::builder("some-id")
            .issue_type(IssueType::Problem)
            .count(10)
            .page(3)
            .build()
            .unwrap();
        let request = issues(&options).unwrap();

        assert_eq!(request.path, ISSUES_PATH);
        assert_eq!(query_value(&request, "type"), Some("problem"));
        assert_eq!(query_value(&request, "count"), Some("10"));
        assert_eq!(query_value(&request, "page"), Some("3"));
    }

    #[test]
    fn test_version_request_is_a_bare_get() {
        let request = version();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, VERSION_PATH);
        assert!(request.query.is_empty());
        assert!(request.id.is_none());
    }

    #[test]
    fn test_empty_id_fails_before_request_construction() {
        let options = DetailOptions {
            id: String::new(),
            related: false,
            more: false,
            locale: None,
            version: None,
        };
        assert_eq!(detail(&options), Err(InvalidOptionsError::EmptyId));
    }
}
