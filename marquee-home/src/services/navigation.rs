//! Navigation service trait

use marquee_model::{ItemId, ViewContext};

/// Routing requests from a section to the host shell.
pub trait NavigationService: Send + Sync {
    /// Navigate to an item's detail view within the given section context.
    fn navigate_to_item(&self, item: ItemId, context: ViewContext);
}
