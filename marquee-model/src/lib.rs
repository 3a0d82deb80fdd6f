//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod ids;
pub mod image;
pub mod media;
pub mod query;
pub mod views;

// Intentionally curated re-exports for downstream consumers.
pub use ids::{ItemId, UserId};
pub use image::{ImageOptions, ImageType};
pub use media::{MediaItem, MediaKind};
pub use query::{ItemField, ItemQuery, ItemSortBy, ItemsResult, SortOrder};
pub use views::{GamesView, ViewContext};
