//! Per-operation request options.
//!
//! This module provides the typed options consumed once per call, along
//! with the closed enumerations for the filters the upstream API accepts.
//! All constraints are validated when an options struct is built, before
//! any network activity.
//!
//! # Overview
//!
//! - [`DetailOptions`]: options for fetching a single listing
//! - [`ItemsOptions`]: search/category filters for listing items
//! - [`ReviewsOptions`]: options for listing reviews of an item
//! - [`IssuesOptions`]: options for listing reported issues of an item
//! - [`Feature`], [`RatingFilter`], [`ReviewSort`], [`IssueType`]: closed
//!   filter enumerations, so invalid values are caught at the boundary
//!   instead of travelling to the upstream API as free-form strings
//!
//! # Example
//!
//! ```rust
//! use chrome_webstore::{DetailOptions, ItemsOptions, Feature, RatingFilter};
//!
//! let detail = DetailOptions::builder("gighmmpiobklfepjocnamgkkbiglidom")
//!     .related(true)
//!     .build()
//!     .unwrap();
//! assert!(detail.related);
//!
//! let items = ItemsOptions::builder()
//!     .search("adblock")
//!     .rating(RatingFilter::try_from(4).unwrap())
//!     .features(vec![Feature::Free, Feature::Offline])
//!     .build()
//!     .unwrap();
//! assert_eq!(items.count, None); // default of 5 applied at request time
//! ```

use std::fmt;

use crate::error::InvalidOptionsError;

/// Feature tags an item search can filter by.
///
/// Order is irrelevant; the set is closed upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Runs offline.
    Offline,
    /// By Google.
    Google,
    /// Free of charge.
    Free,
    /// Compatible with an Android app.
    Android,
    /// Works with Google Drive.
    Gdrive,
}

impl Feature {
    /// Returns the query-string value the upstream API expects.
    #[must_use]
    pub const fn as_query_value(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Google => "google",
            Self::Free => "free",
            Self::Android => "android",
            Self::Gdrive => "gdrive",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Star-rating filter for item search.
///
/// The upstream search endpoint accepts only 2 through 5 stars; there is
/// no "1-star only" filter. [`Review::rating`](crate::Review) itself still
/// spans 1 through 5 — the asymmetry is an upstream quirk, preserved here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RatingFilter {
    /// At least 2 stars.
    Two,
    /// At least 3 stars.
    Three,
    /// At least 4 stars.
    Four,
    /// At least 5 stars.
    Five,
}

impl RatingFilter {
    /// Returns the numeric star value of this filter.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl TryFrom<u8> for RatingFilter {
    type Error = InvalidOptionsError;

    /// Converts a star count into a filter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError::InvalidRating`] for any value outside
    /// {2, 3, 4, 5}, including 1.
    fn try_from(rating: u8) -> Result<Self, Self::Error> {
        match rating {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            _ => Err(InvalidOptionsError::InvalidRating { rating }),
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Sort order for reviews.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReviewSort {
    /// Most helpful first (upstream default).
    #[default]
    Helpful,
    /// Most recent first.
    Recent,
}

impl ReviewSort {
    /// Returns the query-string value the upstream API expects.
    #[must_use]
    pub const fn as_query_value(&self) -> &'static str {
        match self {
            Self::Helpful => "helpful",
            Self::Recent => "recent",
        }
    }
}

impl fmt::Display for ReviewSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Issue type filter for the issues operation.
///
/// When no filter is given, the upstream returns all types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueType {
    /// A reported problem.
    Problem,
    /// A question.
    Question,
    /// A suggestion.
    Suggestion,
}

impl IssueType {
    /// Returns the query-string value the upstream API expects.
    #[must_use]
    pub const fn as_query_value(&self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Question => "question",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Options for the `detail` operation.
///
/// Construct via [`DetailOptions::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailOptions {
    /// The listing id.
    pub id: String,
    /// Include the embedded list of related extensions.
    pub related: bool,
    /// Include more items from the same developer.
    pub more: bool,
    /// Locale for the response data. Defaults to "en" at request time.
    pub locale: Option<String>,
    /// Store API version. Defaults to
    /// [`DEFAULT_API_VERSION`](crate::DEFAULT_API_VERSION) at request time.
    pub version: Option<String>,
}

impl DetailOptions {
    /// Creates a builder with the required listing id.
    #[must_use]
    pub fn builder(id: impl Into<String>) -> DetailOptionsBuilder {
        DetailOptionsBuilder::new(id)
    }

    /// Validates these options against the documented constraints.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError::EmptyId`] when `id` is empty.
    pub fn verify(&self) -> Result<(), InvalidOptionsError> {
        if self.id.is_empty() {
            return Err(InvalidOptionsError::EmptyId);
        }
        Ok(())
    }
}

/// Builder for [`DetailOptions`].
#[derive(Debug)]
pub struct DetailOptionsBuilder {
    id: String,
    related: bool,
    more: bool,
    locale: Option<String>,
    version: Option<String>,
}

impl DetailOptionsBuilder {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            related: false,
            more: false,
            locale: None,
            version: None,
        }
    }

    /// Includes the embedded list of related extensions in the result.
    #[must_use]
    pub const fn related(mut self, related: bool) -> Self {
        self.related = related;
        self
    }

    /// Includes more items from the same developer in the result.
    #[must_use]
    pub const fn more(mut self, more: bool) -> Self {
        self.more = more;
        self
    }

    /// Sets the locale for the response data.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Overrides the store API version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builds the [`DetailOptions`], validating in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError`] if validation fails.
    pub fn build(self) -> Result<DetailOptions, InvalidOptionsError> {
        let options = DetailOptions {
            id: self.id,
            related: self.related,
            more: self.more,
            locale: self.locale,
            version: self.version,
        };
        options.verify()?;
        Ok(options)
    }
}

/// Options for the `items` operation.
///
/// All fields are optional; construct via [`ItemsOptions::builder`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemsOptions {
    /// Filter items by search term.
    pub search: Option<String>,
    /// Filter items by category slug.
    pub category: Option<String>,
    /// Filter items by star rating (2 through 5 only).
    pub rating: Option<RatingFilter>,
    /// Filter items by feature tags.
    pub features: Vec<Feature>,
    /// Number of items to return. Defaults to 5 at request time.
    pub count: Option<u32>,
    /// Start returning items from this offset. Requires `category`.
    pub offset: Option<u32>,
    /// Locale for the response data. Defaults to "en" at request time.
    pub locale: Option<String>,
    /// Store API version.
    pub version: Option<String>,
}

impl ItemsOptions {
    /// Creates a builder with no filters applied.
    #[must_use]
    pub fn builder() -> ItemsOptionsBuilder {
        ItemsOptionsBuilder::default()
    }

    /// Validates these options against the documented constraints.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError::OffsetRequiresCategory`] when an
    /// offset is supplied without a category.
    pub fn verify(&self) -> Result<(), InvalidOptionsError> {
        if self.offset.is_some() && self.category.is_none() {
            return Err(InvalidOptionsError::OffsetRequiresCategory);
        }
        Ok(())
    }
}

/// Builder for [`ItemsOptions`].
#[derive(Debug, Default)]
pub struct ItemsOptionsBuilder {
    search: Option<String>,
    category: Option<String>,
    rating: Option<RatingFilter>,
    features: Vec<Feature>,
    count: Option<u32>,
    offset: Option<u32>,
    locale: Option<String>,
    version: Option<String>,
}

impl ItemsOptionsBuilder {
    /// Filters items by search term.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filters items by category slug (e.g. "ext/22-accessibility").
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filters items by star rating.
    #[must_use]
    pub const fn rating(mut self, rating: RatingFilter) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Filters items by feature tags.
    #[must_use]
    pub fn features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    /// Sets the number of items to return.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Starts returning items from this offset. Requires a category.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the locale for the response data.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Overrides the store API version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builds the [`ItemsOptions`], validating in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError`] if validation fails.
    pub fn build(self) -> Result<ItemsOptions, InvalidOptionsError> {
        let options = ItemsOptions {
            search: self.search,
            category: self.category,
            rating: self.rating,
            features: self.features,
            count: self.count,
            offset: self.offset,
            locale: self.locale,
            version: self.version,
        };
        options.verify()?;
        Ok(options)
    }
}

/// Options for the `reviews` operation.
///
/// Construct via [`ReviewsOptions::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewsOptions {
    /// The listing id.
    pub id: String,
    /// Number of reviews to return. Defaults to 5 at request time.
    pub count: Option<u32>,
    /// Start returning reviews from this offset.
    pub offset: Option<u32>,
    /// Return reviews only in this locale. The upstream default is all
    /// locales, so no locale is sent unless one is given here.
    pub locale: Option<String>,
    /// Sort order. Defaults to [`ReviewSort::Helpful`].
    pub sort: ReviewSort,
    /// Store API version.
    pub version: Option<String>,
}

impl ReviewsOptions {
    /// Creates a builder with the required listing id.
    #[must_use]
    pub fn builder(id: impl Into<String>) -> ReviewsOptionsBuilder {
        ReviewsOptionsBuilder::new(id)
    }

    /// Validates these options against the documented constraints.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError::EmptyId`] when `id` is empty.
    pub fn verify(&self) -> Result<(), InvalidOptionsError> {
        if self.id.is_empty() {
            return Err(InvalidOptionsError::EmptyId);
        }
        Ok(())
    }
}

/// Builder for [`ReviewsOptions`].
#[derive(Debug)]
pub struct ReviewsOptionsBuilder {
    id: String,
    count: Option<u32>,
    offset: Option<u32>,
    locale: Option<String>,
    sort: ReviewSort,
    version: Option<String>,
}

impl ReviewsOptionsBuilder {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            count: None,
            offset: None,
            locale: None,
            sort: ReviewSort::default(),
            version: None,
        }
    }

    /// Sets the number of reviews to return.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Starts returning reviews from this offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns reviews only in this locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort(mut self, sort: ReviewSort) -> Self {
        self.sort = sort;
        self
    }

    /// Overrides the store API version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builds the [`ReviewsOptions`], validating in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError`] if validation fails.
    pub fn build(self) -> Result<ReviewsOptions, InvalidOptionsError> {
        let options = ReviewsOptions {
            id: self.id,
            count: self.count,
            offset: self.offset,
            locale: self.locale,
            sort: self.sort,
            version: self.version,
        };
        options.verify()?;
        Ok(options)
    }
}

/// Options for the `issues` operation.
///
/// Construct via [`IssuesOptions::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuesOptions {
    /// The listing id.
    pub id: String,
    /// Filter by issue type. When `None`, all types are returned.
    pub issue_type: Option<IssueType>,
    /// Number of issues to return. Defaults to 5 at request time.
    pub count: Option<u32>,
    /// Start returning issues from this page (`page * count`).
    pub page: Option<u32>,
    /// Store API version.
    pub version: Option<String>,
}

impl IssuesOptions {
    /// Creates a builder with the required listing id.
    #[must_use]
    pub fn builder(id: impl Into<String>) -> IssuesOptionsBuilder {
        IssuesOptionsBuilder::new(id)
    }

    /// Validates these options against the documented constraints.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError::EmptyId`] when `id` is empty.
    pub fn verify(&self) -> Result<(), InvalidOptionsError> {
        if self.id.is_empty() {
            return Err(InvalidOptionsError::EmptyId);
        }
        Ok(())
    }
}

/// Builder for [`IssuesOptions`].
#[derive(Debug)]
pub struct IssuesOptionsBuilder {
    id: String,
    issue_type: Option<IssueType>,
    count: Option<u32>,
    page: Option<u32>,
    version: Option<String>,
}

impl IssuesOptionsBuilder {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            issue_type: None,
            count: None,
            page: None,
            version: None,
        }
    }

    /// Filters issues by type.
    #[must_use]
    pub const fn issue_type(mut self, issue_type: IssueType) -> Self {
        self.issue_type = Some(issue_type);
        self
    }

    /// Sets the number of issues to return.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Starts returning issues from this page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Overrides the store API version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builds the [`IssuesOptions`], validating in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError`] if validation fails.
    pub fn build(self) -> Result<IssuesOptions, InvalidOptionsError> {
        let options = IssuesOptions {
            id: self.id,
            issue_type: self.issue_type,
            count: self.count,
            page: self.page,
            version: self.version,
        };
        options.verify()?;
        Ok(options)
    }
}
