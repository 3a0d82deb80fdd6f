//! Home-screen section view-models for the Marquee theater client.
//!
//! Each home section is a small presentation-layer state machine that binds
//! remote data to a host UI. This crate currently carries the Games
//! section: an async load cycle feeding a rotating image spotlight
//! ([`spotlight::SpotlightRotator`]) and a resumable-items supplier
//! ([`resumable::ResumableItemsFeed`]) for an externally owned list view.
//!
//! All remote and host collaborators sit behind the traits in [`services`];
//! the [`testing`] module ships deterministic stand-ins for them.

pub mod constants;
pub mod error;
pub mod games;
pub mod resumable;
pub mod services;
pub mod spotlight;
pub mod testing;

pub use error::{ApiError, ApiResult};
pub use games::{GamesSection, SectionViewState};
pub use resumable::ResumableItemsFeed;
pub use services::SectionServices;
pub use spotlight::{
    RotatorPhase, SpotlightImage, SpotlightRotator, TickScheduler,
    TokioTickScheduler,
};
