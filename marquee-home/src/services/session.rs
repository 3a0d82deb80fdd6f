//! Session service trait

use marquee_model::UserId;

/// Access to the signed-in session.
///
/// Callers must read the current user fresh on every call that needs it;
/// the identity can change between calls (user switching) and must never be
/// cached across them.
pub trait SessionService: Send + Sync {
    /// Identity of the currently signed-in user, if any.
    fn current_user(&self) -> Option<UserId>;
}
