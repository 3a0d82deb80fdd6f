use crate::ids::UserId;
use crate::media::{MediaItem, MediaKind};

/// Per-item fields a query can ask the server to populate.
///
/// Queries request the minimal set they need; everything else stays `None`
/// on the returned [`MediaItem`]s.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ItemField {
    PrimaryImageAspectRatio,
    DateCreated,
    DisplayPreferencesId,
}

/// Server-side sort field
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ItemSortBy {
    SortName,
    DateCreated,
}

/// Sort direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A server item query scoped to one user.
///
/// Stateless descriptor: rebuilt per request, carries no identity of its
/// own.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemQuery {
    pub user_id: UserId,
    pub include_kinds: Vec<MediaKind>,
    pub recursive: bool,
    pub sort_by: ItemSortBy,
    pub sort_order: SortOrder,
    pub fields: Vec<ItemField>,
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
}

impl ItemQuery {
    /// Query with the defaults most list views want: non-recursive,
    /// ascending sort by name, no paging window.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            include_kinds: Vec::new(),
            recursive: false,
            sort_by: ItemSortBy::SortName,
            sort_order: SortOrder::Ascending,
            fields: Vec::new(),
            start_index: None,
            limit: None,
        }
    }
}

/// Result page for an item query: the matching items plus the total count
/// across all pages, so list views can size their scroll range.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemsResult {
    pub items: Vec<MediaItem>,
    pub total_record_count: usize,
}

impl ItemsResult {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_record_count: 0,
        }
    }
}
