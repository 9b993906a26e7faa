//! Reported issues of a store listing.

use serde::{Deserialize, Serialize};

use super::common::Author;

/// One reported problem, question or suggestion.
///
/// `issue_type` is a free-form upstream string; when the request carried
/// an [`IssueType`](crate::IssueType) filter, upstream pre-filters and
/// every entry matches the requested type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Issue {
    /// Issue kind as reported upstream ("problem", "question", "suggestion").
    #[serde(rename = "type")]
    pub issue_type: String,
    /// Workflow status (e.g. "open", "fixed").
    pub status: String,
    /// Short title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Browser the reporter used.
    pub browser: String,
    /// Extension version the report is about.
    pub version: String,
    /// When the issue was filed (epoch milliseconds).
    pub date: i64,
    /// The reporter.
    pub author: Author,
}
