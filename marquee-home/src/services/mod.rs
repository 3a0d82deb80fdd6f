//! Collaborator service traits consumed by the home sections.
//!
//! Everything a section talks to — the remote API, the session, the
//! presentation chrome, navigation, and failure logging — sits behind one
//! of these traits so view-model logic stays testable without a server or
//! a UI toolkit.

pub mod api;
pub mod diagnostics;
pub mod navigation;
pub mod presentation;
pub mod session;

pub use api::ApiService;
pub use diagnostics::{DefaultLogService, LogService};
pub use navigation::NavigationService;
pub use presentation::PresentationService;
pub use session::SessionService;

use std::fmt;
use std::sync::Arc;

/// Bundle of collaborator services a home section binds against.
///
/// Sections hold the bundle by value; the services themselves are shared
/// handles owned elsewhere.
#[derive(Clone)]
pub struct SectionServices {
    pub api: Arc<dyn ApiService>,
    pub session: Arc<dyn SessionService>,
    pub presentation: Arc<dyn PresentationService>,
    pub navigation: Arc<dyn NavigationService>,
    pub log: Arc<dyn LogService>,
}

impl fmt::Debug for SectionServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionServices").finish_non_exhaustive()
    }
}
