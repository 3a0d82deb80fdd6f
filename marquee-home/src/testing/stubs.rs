//! Recording stub implementations of the collaborator services.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use marquee_model::{
    GamesView, ImageOptions, ItemId, ItemQuery, ItemsResult, MediaItem,
    MediaKind, UserId, ViewContext,
};
use parking_lot::{Mutex, RwLock};
use tokio::sync::Notify;

use crate::error::{ApiError, ApiResult};
use crate::services::{
    ApiService, LogService, NavigationService, PresentationService,
    SectionServices, SessionService,
};
use crate::spotlight::{TickFn, TickScheduler};

/// In-memory API stub with configurable responses and call recording.
#[derive(Debug, Clone)]
pub struct TestApiService {
    inner: Arc<RwLock<InnerApiState>>,
    gate: Arc<Mutex<Option<Arc<Notify>>>>,
}

#[derive(Debug)]
struct InnerApiState {
    games_view: ApiResult<GamesView>,
    items: ApiResult<ItemsResult>,
    item_queries: Vec<ItemQuery>,
    games_view_calls: usize,
}

impl Default for TestApiService {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerApiState {
                games_view: Ok(GamesView {
                    spotlight_items: Vec::new(),
                }),
                items: Ok(ItemsResult::empty()),
                item_queries: Vec::new(),
                games_view_calls: 0,
            })),
            gate: Arc::new(Mutex::new(None)),
        }
    }
}

impl TestApiService {
    pub fn with_games_view(view: GamesView) -> Self {
        let service = Self::default();
        service.set_games_view(view);
        service
    }

    pub fn set_games_view(&self, view: GamesView) {
        self.inner.write().games_view = Ok(view);
    }

    pub fn fail_games_view(&self, error: ApiError) {
        self.inner.write().games_view = Err(error);
    }

    pub fn set_items(&self, result: ItemsResult) {
        self.inner.write().items = Ok(result);
    }

    pub fn fail_items(&self, error: ApiError) {
        self.inner.write().items = Err(error);
    }

    /// Make the next `get_games_view` call wait until the returned handle
    /// is notified, so tests can interleave work with an in-flight fetch.
    pub fn hold_games_view(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock() = Some(gate.clone());
        gate
    }

    pub fn recorded_item_queries(&self) -> Vec<ItemQuery> {
        self.inner.read().item_queries.clone()
    }

    pub fn games_view_calls(&self) -> usize {
        self.inner.read().games_view_calls
    }
}

#[async_trait]
impl ApiService for TestApiService {
    async fn get_games_view(&self, _user_id: UserId) -> ApiResult<GamesView> {
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let mut inner = self.inner.write();
        inner.games_view_calls += 1;
        inner.games_view.clone()
    }

    async fn get_items(&self, query: &ItemQuery) -> ApiResult<ItemsResult> {
        let mut inner = self.inner.write();
        inner.item_queries.push(query.clone());
        inner.items.clone()
    }

    fn image_url(&self, item: &MediaItem, options: &ImageOptions) -> String {
        format!(
            "http://test.local/items/{}/images/{}?w={}&h={}",
            item.id, options.image_type, options.width, options.height
        )
    }
}

/// Session stub with a switchable current user.
#[derive(Debug, Default)]
pub struct TestSessionService {
    user: Mutex<Option<UserId>>,
}

impl TestSessionService {
    pub fn signed_in(user: UserId) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }

    pub fn set_current_user(&self, user: Option<UserId>) {
        *self.user.lock() = user;
    }
}

impl SessionService for TestSessionService {
    fn current_user(&self) -> Option<UserId> {
        *self.user.lock()
    }
}

/// One observed presentation chrome signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEvent {
    ShowLoading,
    HideLoading,
    ShowError,
}

/// Presentation stub recording signals in arrival order.
#[derive(Debug, Default)]
pub struct TestPresentationService {
    events: Mutex<Vec<PresentationEvent>>,
}

impl TestPresentationService {
    pub fn events(&self) -> Vec<PresentationEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, event: PresentationEvent) -> usize {
        self.events.lock().iter().filter(|e| **e == event).count()
    }
}

impl PresentationService for TestPresentationService {
    fn show_loading_animation(&self) {
        self.events.lock().push(PresentationEvent::ShowLoading);
    }

    fn hide_loading_animation(&self) {
        self.events.lock().push(PresentationEvent::HideLoading);
    }

    fn show_default_error_message(&self) {
        self.events.lock().push(PresentationEvent::ShowError);
    }
}

/// Navigation stub recording requested routes.
#[derive(Debug, Default)]
pub struct TestNavigationService {
    requests: Mutex<Vec<(ItemId, ViewContext)>>,
}

impl TestNavigationService {
    pub fn requests(&self) -> Vec<(ItemId, ViewContext)> {
        self.requests.lock().clone()
    }
}

impl NavigationService for TestNavigationService {
    fn navigate_to_item(&self, item: ItemId, context: ViewContext) {
        self.requests.lock().push((item, context));
    }
}

/// Log stub capturing failure records as (message, error) strings.
#[derive(Debug, Default)]
pub struct TestLogService {
    records: Mutex<Vec<(String, String)>>,
}

impl TestLogService {
    pub fn records(&self) -> Vec<(String, String)> {
        self.records.lock().clone()
    }
}

impl LogService for TestLogService {
    fn error_with_source(&self, message: &str, error: &ApiError) {
        self.records
            .lock()
            .push((message.to_string(), error.to_string()));
    }
}

/// Scheduler whose ticks are fired by the test, never by a clock.
#[derive(Default)]
pub struct ManualTickScheduler {
    inner: Mutex<ManualTickInner>,
}

#[derive(Default)]
struct ManualTickInner {
    on_tick: Option<TickFn>,
    last_interval: Option<Duration>,
}

impl ManualTickScheduler {
    /// Deliver one tick, as the timer would.
    pub fn fire(&self) {
        let tick = self.inner.lock().on_tick.clone();
        if let Some(tick) = tick {
            tick();
        }
    }

    pub fn fire_many(&self, count: usize) {
        for _ in 0..count {
            self.fire();
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().on_tick.is_some()
    }

    pub fn last_interval(&self) -> Option<Duration> {
        self.inner.lock().last_interval
    }

    /// Clone of the registered tick callback, for simulating a tick that
    /// races teardown.
    pub fn captured_tick(&self) -> Option<TickFn> {
        self.inner.lock().on_tick.clone()
    }
}

impl TickScheduler for ManualTickScheduler {
    fn start(&self, interval: Duration, on_tick: TickFn) {
        let mut inner = self.inner.lock();
        inner.on_tick = Some(on_tick);
        inner.last_interval = Some(interval);
    }

    fn stop(&self) {
        self.inner.lock().on_tick = None;
    }
}

impl fmt::Debug for ManualTickScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualTickScheduler")
            .field("running", &self.is_running())
            .field("last_interval", &self.last_interval())
            .finish()
    }
}

/// Handles onto the stubs behind a [`SectionServices`] bundle.
///
/// [`Default`] wires every stub fresh with a signed-in user; use the
/// session handle to sign out or switch users.
#[derive(Debug, Clone)]
pub struct StubServices {
    pub api: Arc<TestApiService>,
    pub session: Arc<TestSessionService>,
    pub presentation: Arc<TestPresentationService>,
    pub navigation: Arc<TestNavigationService>,
    pub log: Arc<TestLogService>,
}

impl Default for StubServices {
    fn default() -> Self {
        Self {
            api: Arc::new(TestApiService::default()),
            session: Arc::new(TestSessionService::signed_in(UserId::new())),
            presentation: Arc::new(TestPresentationService::default()),
            navigation: Arc::new(TestNavigationService::default()),
            log: Arc::new(TestLogService::default()),
        }
    }
}

impl StubServices {
    /// The bundle a section consumes.
    pub fn bundle(&self) -> SectionServices {
        SectionServices {
            api: self.api.clone(),
            session: self.session.clone(),
            presentation: self.presentation.clone(),
            navigation: self.navigation.clone(),
            log: self.log.clone(),
        }
    }
}

/// Game item fixture with a backdrop key.
pub fn sample_game(name: &str) -> MediaItem {
    let mut item = MediaItem::new(ItemId::new(), name, MediaKind::Game);
    item.backdrop_image_key = Some(format!("bd-{name}"));
    item
}

/// Games view fixture spotlighting the named items, in order.
pub fn sample_games_view(names: &[&str]) -> GamesView {
    GamesView {
        spotlight_items: names.iter().map(|name| sample_game(name)).collect(),
    }
}
