use std::fmt::Display;
use std::fmt::Formatter;

use crate::media::MediaItem;

/// Curated "Games" home-section payload assembled by the server.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GamesView {
    /// Items the server picked for the rotating spotlight display.
    pub spotlight_items: Vec<MediaItem>,
}

/// Navigation context for item detail views.
///
/// Tells the navigation target which home section the user came from so
/// chrome and back-navigation stay consistent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ViewContext {
    Home,
    Movies,
    Tv,
    Games,
    Music,
}

impl Display for ViewContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewContext::Home => write!(f, "Home"),
            ViewContext::Movies => write!(f, "Movies"),
            ViewContext::Tv => write!(f, "Tv"),
            ViewContext::Games => write!(f, "Games"),
            ViewContext::Music => write!(f, "Music"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;
    use crate::media::MediaKind;

    #[test]
    fn games_view_payload_round_trips_optional_fields() {
        let payload = serde_json::json!({
            "spotlight_items": [{
                "id": ItemId::new(),
                "name": "Super System Classics",
                "kind": "Game",
                "primary_image_aspect_ratio": 1.7777777778,
                "date_created": null,
                "display_preferences_id": null,
                "backdrop_image_key": "bd-1",
            }]
        });

        let view: GamesView = serde_json::from_value(payload).unwrap();
        assert_eq!(view.spotlight_items.len(), 1);
        let item = &view.spotlight_items[0];
        assert_eq!(item.kind, MediaKind::Game);
        assert!(item.has_backdrop());
        assert!(item.date_created.is_none());
    }
}
