use std::fmt::Display;
use std::fmt::Formatter;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ids::ItemId;

/// Simple enum for browsable item kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum MediaKind {
    /// A playable game
    Game,
    /// A game system/platform category (folder of games)
    GamePlatform,
    /// Movie media kind
    Movie,
    /// Series media kind
    Series,
    /// Anything the client does not model explicitly
    Unknown,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Game => write!(f, "Game"),
            MediaKind::GamePlatform => write!(f, "GamePlatform"),
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Series => write!(f, "Series"),
            MediaKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A browsable item as returned by the remote server.
///
/// Plain data; immutable after deserialization. Optional fields are only
/// populated when the originating query requested them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaItem {
    pub id: ItemId,
    pub name: String,
    pub kind: MediaKind,
    /// Aspect ratio of the primary image, when known (width / height).
    pub primary_image_aspect_ratio: Option<f64>,
    pub date_created: Option<DateTime<Utc>>,
    /// Identity of the saved display preferences for this item's children.
    pub display_preferences_id: Option<Uuid>,
    /// Server-side cache key for the item's backdrop art, if it has one.
    pub backdrop_image_key: Option<String>,
}

impl MediaItem {
    /// Minimal item with just an identity, name, and kind.
    pub fn new(id: ItemId, name: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            primary_image_aspect_ratio: None,
            date_created: None,
            display_preferences_id: None,
            backdrop_image_key: None,
        }
    }

    pub fn has_backdrop(&self) -> bool {
        self.backdrop_image_key.is_some()
    }
}
