//! Data shapes returned by the Chrome Web Store client.
//!
//! Each type here is a plain immutable record, constructed fresh from one
//! response and discarded after the caller consumes it. None has identity
//! beyond its fields, none is mutated, and none persists between calls.
//!
//! # Overview
//!
//! - [`Item`]: one store listing, summary view
//! - [`Detail`]: the full listing view, embedding an [`Item`]
//! - [`Review`]: one user review of an item
//! - [`Issue`]: one reported problem, question or suggestion
//! - [`Author`]: the (possibly anonymous) author of a review or issue

mod common;
mod detail;
mod issue;
mod item;
mod review;

pub use common::Author;
pub use detail::{Detail, Developer};
pub use issue::Issue;
pub use item::{Item, ItemAuthor, ItemCategory, ItemImages, ItemRating};
pub use review::Review;
