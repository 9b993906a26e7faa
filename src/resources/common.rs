//! Embedded types shared between reviews and issues.

use serde::{Deserialize, Serialize};

/// The author of a review or issue.
///
/// The store exposes no stable account data here: any of the fields may
/// be withheld upstream, in which case they map to `None` rather than a
/// sentinel value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Author {
    /// Opaque upstream id of the author, when disclosed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, when disclosed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Avatar image URL.
    pub avatar: Option<String>,
}
