//! Presentation host trait

/// UI chrome signals a section raises on its host.
///
/// All methods are fire-and-forget; the host consumes them without
/// returning anything to the section.
pub trait PresentationService: Send + Sync {
    /// Show the global busy indicator.
    fn show_loading_animation(&self);

    /// Hide the global busy indicator.
    fn hide_loading_animation(&self);

    /// Surface the generic "something went wrong" notice.
    fn show_default_error_message(&self);
}
