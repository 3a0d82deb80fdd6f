//! Remote API service trait
//!
//! Abstraction over the theater server's client API. Wire-level concerns
//! (transport, auth headers, retries) belong to the implementation, not to
//! the view-models consuming this trait.

use async_trait::async_trait;
use marquee_model::{
    GamesView, ImageOptions, ItemQuery, ItemsResult, MediaItem, UserId,
};

use crate::error::ApiResult;

/// Remote server operations the home sections consume.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Fetch the curated games view for a user.
    async fn get_games_view(&self, user_id: UserId) -> ApiResult<GamesView>;

    /// Run an item query and return the matching page.
    async fn get_items(&self, query: &ItemQuery) -> ApiResult<ItemsResult>;

    /// Build the URL for an item image. Pure function of its inputs.
    fn image_url(&self, item: &MediaItem, options: &ImageOptions) -> String;
}
