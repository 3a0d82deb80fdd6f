//! Resumable-items supplier for the Games section.
//!
//! Pure data-shaping: builds the game-systems query and forwards the
//! result untouched. Stateless between calls; an externally owned list
//! view invokes [`ResumableItemsFeed::fetch`] whenever it wants data,
//! independent of the spotlight's lifecycle.

use std::fmt;
use std::sync::Arc;

use marquee_model::{ItemField, ItemQuery, ItemsResult, MediaKind};

use crate::error::{ApiError, ApiResult};
use crate::services::{ApiService, SessionService};

/// Supplies the remote query backing the resumable game-systems list.
pub struct ResumableItemsFeed {
    api: Arc<dyn ApiService>,
    session: Arc<dyn SessionService>,
}

impl ResumableItemsFeed {
    pub fn new(
        api: Arc<dyn ApiService>,
        session: Arc<dyn SessionService>,
    ) -> Self {
        Self { api, session }
    }

    /// Fetch the current page of game-system items.
    ///
    /// Rebuilds the query on every call, reading the session's *current*
    /// user at call time. Failures propagate to the caller unmodified.
    pub async fn fetch(&self) -> ApiResult<ItemsResult> {
        let query = self.build_query()?;
        self.api.get_items(&query).await
    }

    fn build_query(&self) -> ApiResult<ItemQuery> {
        let user = self.session.current_user().ok_or(ApiError::NoCurrentUser)?;

        let mut query = ItemQuery::for_user(user);
        query.include_kinds = vec![MediaKind::GamePlatform];
        query.recursive = true;
        query.fields = vec![
            ItemField::PrimaryImageAspectRatio,
            ItemField::DateCreated,
            ItemField::DisplayPreferencesId,
        ];
        Ok(query)
    }
}

impl fmt::Debug for ResumableItemsFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumableItemsFeed").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use marquee_model::{ItemSortBy, SortOrder, UserId};

    use super::*;
    use crate::testing::stubs::{TestApiService, TestSessionService};

    fn feed() -> (ResumableItemsFeed, Arc<TestApiService>, Arc<TestSessionService>)
    {
        let api = Arc::new(TestApiService::default());
        let session = Arc::new(TestSessionService::signed_in(UserId::new()));
        let feed = ResumableItemsFeed::new(api.clone(), session.clone());
        (feed, api, session)
    }

    #[tokio::test]
    async fn builds_the_game_systems_query() {
        let (feed, api, session) = feed();

        feed.fetch().await.unwrap();

        let queries = api.recorded_item_queries();
        assert_eq!(queries.len(), 1);
        let query = &queries[0];
        assert_eq!(query.user_id, session.current_user().unwrap());
        assert_eq!(query.include_kinds, vec![MediaKind::GamePlatform]);
        assert!(query.recursive);
        assert_eq!(query.sort_by, ItemSortBy::SortName);
        assert_eq!(query.sort_order, SortOrder::Ascending);
        assert_eq!(
            query.fields,
            vec![
                ItemField::PrimaryImageAspectRatio,
                ItemField::DateCreated,
                ItemField::DisplayPreferencesId,
            ]
        );
    }

    #[tokio::test]
    async fn reads_the_current_user_on_every_call() {
        let (feed, api, session) = feed();

        feed.fetch().await.unwrap();
        let switched = UserId::new();
        session.set_current_user(Some(switched));
        feed.fetch().await.unwrap();

        let queries = api.recorded_item_queries();
        assert_eq!(queries.len(), 2);
        assert_ne!(queries[0].user_id, queries[1].user_id);
        assert_eq!(queries[1].user_id, switched);
    }

    #[tokio::test]
    async fn missing_user_fails_without_touching_the_api() {
        let (feed, api, session) = feed();
        session.set_current_user(None);

        let result = feed.fetch().await;

        assert_eq!(result, Err(ApiError::NoCurrentUser));
        assert!(api.recorded_item_queries().is_empty());
    }

    #[tokio::test]
    async fn api_failures_propagate_unmodified() {
        let (feed, api, _session) = feed();
        api.fail_items(ApiError::Network("connection reset".into()));

        let result = feed.fetch().await;

        assert_eq!(result, Err(ApiError::Network("connection reset".into())));
    }
}
