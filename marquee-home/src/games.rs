//! The Games home-screen section.
//!
//! One load cycle per instance: the host constructs the section, awaits
//! (or spawns) [`GamesSection::load`], and binds against the resulting
//! view state, the spotlight rotator, and the resumable-items feed.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use marquee_model::{GamesView, ImageOptions, ItemId, ViewContext};
use parking_lot::Mutex;
use rand::seq::SliceRandom;

use crate::constants::{SPOTLIGHT_ROTATION_INTERVAL, TILE_PADDING};
use crate::error::{ApiError, ApiResult};
use crate::resumable::ResumableItemsFeed;
use crate::services::SectionServices;
use crate::spotlight::{
    SpotlightImage, SpotlightRotator, TickScheduler, TokioTickScheduler,
};

/// Rendering mode of the section. Exactly one is active; per load cycle
/// the only transitions are `Loading -> Ready` and `Loading -> Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionViewState {
    /// Initial state; the load cycle has not completed.
    Loading,
    /// Load succeeded; the spotlight is populated (possibly empty).
    Ready {
        /// Independent random ordering of the fetched spotlight item ids,
        /// used for the section's ambient backdrop display. Deliberately
        /// distinct from the rotator's order, which preserves fetch order.
        backdrop_order: Vec<ItemId>,
    },
    /// Load failed; a generic error notice has been surfaced.
    Error,
}

/// View-model for the Games home section.
///
/// Owns its [`SpotlightRotator`] exclusively (created here, disposed
/// here). The [`ResumableItemsFeed`] is handed out as a shared supplier
/// for an externally owned list view whose lifecycle this section does not
/// manage.
pub struct GamesSection {
    services: SectionServices,
    tile_width: f64,
    tile_height: f64,
    spotlight_width: f64,
    spotlight_height: f64,
    spotlight: SpotlightRotator,
    resumables: Arc<ResumableItemsFeed>,
    state: Mutex<SectionViewState>,
    load_started: AtomicBool,
    disposed: AtomicBool,
}

impl GamesSection {
    /// Create the section with the production tokio-backed rotation timer.
    pub fn new(
        tile_width: f64,
        tile_height: f64,
        services: SectionServices,
    ) -> Self {
        Self::with_scheduler(
            tile_width,
            tile_height,
            services,
            Arc::new(TokioTickScheduler::default()),
        )
    }

    /// Create the section with an explicit rotation scheduler.
    pub fn with_scheduler(
        tile_width: f64,
        tile_height: f64,
        services: SectionServices,
        scheduler: Arc<dyn TickScheduler>,
    ) -> Self {
        // The spotlight spans two tile columns and keeps a 16:9 aspect.
        let spotlight_width = tile_width * 2.0 + TILE_PADDING;
        let spotlight_height = spotlight_width * 9.0 / 16.0;

        let resumables = Arc::new(ResumableItemsFeed::new(
            services.api.clone(),
            services.session.clone(),
        ));

        Self {
            spotlight: SpotlightRotator::new(scheduler),
            resumables,
            tile_width,
            tile_height,
            spotlight_width,
            spotlight_height,
            state: Mutex::new(SectionViewState::Loading),
            load_started: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
            services,
        }
    }

    /// Run the section's one load cycle.
    ///
    /// Shows the loading indicator, fetches the games view for the current
    /// user, and transitions to exactly one of Ready or Error. The
    /// indicator is hidden exactly once as the final step of either path.
    /// A second call is a no-op; overlapping loads are not supported.
    pub async fn load(&self) {
        if self.load_started.swap(true, Ordering::SeqCst) {
            log::warn!("Games section load requested more than once; ignoring");
            return;
        }

        self.services.presentation.show_loading_animation();

        let fetched = self.fetch_view().await;

        // A result arriving after disposal must not touch section state.
        if self.disposed.load(Ordering::SeqCst) {
            self.services.presentation.hide_loading_animation();
            return;
        }

        match fetched {
            Ok(view) => self.populate_spotlight(view),
            Err(error) => {
                self.services
                    .log
                    .error_with_source("Error getting games view", &error);
                self.services.presentation.show_default_error_message();
                *self.state.lock() = SectionViewState::Error;
            }
        }

        // Both arms fall through here; the indicator cannot stay up.
        self.services.presentation.hide_loading_animation();
    }

    async fn fetch_view(&self) -> ApiResult<GamesView> {
        let user = self
            .services
            .session
            .current_user()
            .ok_or(ApiError::NoCurrentUser)?;
        self.services.api.get_games_view(user).await
    }

    fn populate_spotlight(&self, view: GamesView) {
        let options =
            ImageOptions::backdrop(self.spotlight_width, self.spotlight_height);

        let images: Vec<SpotlightImage> = view
            .spotlight_items
            .iter()
            .map(|item| SpotlightImage {
                url: self.services.api.image_url(item, &options),
                caption: item.name.clone(),
                item: item.id,
            })
            .collect();

        // The ambient backdrop display gets its own per-load shuffle; the
        // rotator keeps the order the server returned.
        let mut backdrop_order: Vec<ItemId> =
            view.spotlight_items.iter().map(|item| item.id).collect();
        backdrop_order.shuffle(&mut rand::rng());

        log::debug!(
            "Games spotlight populated with {} item(s)",
            images.len()
        );

        *self.state.lock() = SectionViewState::Ready { backdrop_order };

        let start_rotation = !images.is_empty();
        self.spotlight.set_images(images);
        if start_rotation {
            self.spotlight.start_rotating(SPOTLIGHT_ROTATION_INTERVAL);
        }
    }

    /// Request navigation to the currently spotlighted item, if any.
    pub fn activate_spotlight(&self) {
        if let Some(image) = self.spotlight.current() {
            self.services
                .navigation
                .navigate_to_item(image.item, ViewContext::Games);
        }
    }

    /// Stop rotation and release spotlight resources. Idempotent; safe
    /// before the load completes.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.spotlight.dispose();
    }

    /// Current rendering mode of the section.
    pub fn view_state(&self) -> SectionViewState {
        self.state.lock().clone()
    }

    /// The rotating spotlight display owned by this section.
    pub fn spotlight(&self) -> &SpotlightRotator {
        &self.spotlight
    }

    /// Supplier for the externally owned resumable-items list view.
    pub fn resumables(&self) -> Arc<ResumableItemsFeed> {
        self.resumables.clone()
    }

    /// Tile width the host list view should render items at.
    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    /// Tile height the host list view should render items at.
    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Derived spotlight display dimensions in layout units.
    pub fn spotlight_dimensions(&self) -> (f64, f64) {
        (self.spotlight_width, self.spotlight_height)
    }
}

impl fmt::Debug for GamesSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamesSection")
            .field("state", &*self.state.lock())
            .field("spotlight", &self.spotlight)
            .field("tile_width", &self.tile_width)
            .field("tile_height", &self.tile_height)
            .finish_non_exhaustive()
    }
}
