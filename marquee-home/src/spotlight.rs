//! Rotating spotlight display state.
//!
//! Owns an ordered image sequence and advances the visible index on a
//! repeating timer. The timer is an injected [`TickScheduler`] capability
//! so rotation logic runs against synchronous ticks in tests instead of
//! wall-clock waits.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use marquee_model::ItemId;
use parking_lot::Mutex;

/// Callback invoked on every scheduler tick.
pub type TickFn = Arc<dyn Fn() + Send + Sync>;

/// Repeating-timer capability driving spotlight rotation.
pub trait TickScheduler: Send + Sync + fmt::Debug {
    /// Begin ticking at `interval`. Starting while already running drops
    /// the previous timer and restarts the interval from now.
    fn start(&self, interval: Duration, on_tick: TickFn);

    /// Cancel the timer. Safe to call when not running.
    fn stop(&self);
}

/// Production scheduler backed by a tokio interval task.
#[derive(Debug, Default)]
pub struct TokioTickScheduler {
    task: Mutex<Option<tokio::task::JoinHandle<()>>>,
}

impl TickScheduler for TokioTickScheduler {
    fn start(&self, interval: Duration, on_tick: TickFn) {
        let mut slot = self.task.lock();
        if let Some(task) = slot.take() {
            task.abort();
        }
        *slot = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker
                .set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // An interval's first tick resolves immediately; the current
            // image should hold for a full period before the first advance.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                on_tick();
            }
        }));
    }

    fn stop(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}

impl Drop for TokioTickScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}

/// One entry in the spotlight sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightImage {
    /// Fully resolved image URL at the spotlight's display dimensions.
    pub url: String,
    /// Display caption, taken from the item name.
    pub caption: String,
    /// Originating item, kept so selection can navigate to it.
    pub item: ItemId,
}

/// Lifecycle phase of a [`SpotlightRotator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorPhase {
    /// Constructed or stopped; the timer is not running.
    Idle,
    /// Timer running; the index advances on ticks.
    Rotating,
    /// Terminal: resources released, no transition back.
    Disposed,
}

#[derive(Debug)]
struct RotatorInner {
    images: Vec<SpotlightImage>,
    index: usize,
    phase: RotatorPhase,
}

/// Cycles a visible index through a fixed image sequence on a timer.
///
/// The sequence order is canonical display order, preserved from
/// [`set_images`](Self::set_images) input. Only the rotator advances the
/// index; only its owner replaces the sequence. Index invariant:
/// `index < images.len()` whenever the sequence is non-empty.
#[derive(Debug)]
pub struct SpotlightRotator {
    inner: Arc<Mutex<RotatorInner>>,
    scheduler: Arc<dyn TickScheduler>,
}

impl SpotlightRotator {
    pub fn new(scheduler: Arc<dyn TickScheduler>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RotatorInner {
                images: Vec::new(),
                index: 0,
                phase: RotatorPhase::Idle,
            })),
            scheduler,
        }
    }

    /// Append images to the sequence, preserving input order.
    ///
    /// Ignored after disposal.
    pub fn set_images(&self, images: Vec<SpotlightImage>) {
        let mut inner = self.inner.lock();
        if inner.phase == RotatorPhase::Disposed {
            return;
        }
        inner.images.extend(images);
    }

    /// (Re)start the rotation timer.
    ///
    /// Restarting while already rotating resets the interval and continues
    /// from the current index. Ignored after disposal.
    pub fn start_rotating(&self, interval: Duration) {
        {
            let mut inner = self.inner.lock();
            if inner.phase == RotatorPhase::Disposed {
                return;
            }
            if inner.images.len() < 2 {
                log::debug!(
                    "Spotlight rotation started with {} image(s); index will not advance",
                    inner.images.len()
                );
            }
            inner.phase = RotatorPhase::Rotating;
        }
        // The tick closure holds a weak handle so a timer that outlives
        // disposal finds nothing to act on.
        let weak = Arc::downgrade(&self.inner);
        self.scheduler
            .start(interval, Arc::new(move || Self::advance(&weak)));
    }

    /// Stop the timer without releasing the sequence. Safe to call when
    /// idle or disposed.
    pub fn stop(&self) {
        self.scheduler.stop();
        let mut inner = self.inner.lock();
        if inner.phase == RotatorPhase::Rotating {
            inner.phase = RotatorPhase::Idle;
        }
    }

    /// Stop the timer, then release the image sequence. Idempotent.
    pub fn dispose(&self) {
        {
            let inner = self.inner.lock();
            if inner.phase == RotatorPhase::Disposed {
                return;
            }
        }
        // Timer must be stopped before the sequence is cleared so a tick
        // cannot observe released state.
        self.scheduler.stop();
        let mut inner = self.inner.lock();
        inner.phase = RotatorPhase::Disposed;
        inner.images.clear();
        inner.index = 0;
    }

    pub fn phase(&self) -> RotatorPhase {
        self.inner.lock().phase
    }

    pub fn len(&self) -> usize {
        self.inner.lock().images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.inner.lock().index
    }

    /// The currently visible image, if the sequence is non-empty.
    pub fn current(&self) -> Option<SpotlightImage> {
        let inner = self.inner.lock();
        inner.images.get(inner.index).cloned()
    }

    /// Snapshot of the sequence in canonical display order.
    pub fn images(&self) -> Vec<SpotlightImage> {
        self.inner.lock().images.clone()
    }

    fn advance(inner: &Weak<Mutex<RotatorInner>>) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let mut inner = inner.lock();
        if inner.phase != RotatorPhase::Rotating {
            return;
        }
        // Nothing to rotate to with zero or one image.
        if inner.images.len() > 1 {
            inner.index = (inner.index + 1) % inner.images.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use marquee_model::ItemId;

    use super::{RotatorPhase, SpotlightImage, SpotlightRotator};
    use crate::testing::stubs::ManualTickScheduler;

    fn images(count: usize) -> Vec<SpotlightImage> {
        (0..count)
            .map(|i| SpotlightImage {
                url: format!("http://test.local/images/{i}"),
                caption: format!("Item {i}"),
                item: ItemId::new(),
            })
            .collect()
    }

    fn rotator() -> (SpotlightRotator, Arc<ManualTickScheduler>) {
        let scheduler = Arc::new(ManualTickScheduler::default());
        (SpotlightRotator::new(scheduler.clone()), scheduler)
    }

    #[test]
    fn ticks_cycle_through_every_index_in_order() {
        let (rotator, scheduler) = rotator();
        rotator.set_images(images(3));
        rotator.start_rotating(Duration::from_millis(8000));

        let mut seen = vec![rotator.current_index()];
        for _ in 0..3 {
            scheduler.fire();
            seen.push(rotator.current_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn index_never_leaves_range() {
        let (rotator, scheduler) = rotator();
        rotator.set_images(images(4));
        rotator.start_rotating(Duration::from_millis(8000));

        for _ in 0..17 {
            scheduler.fire();
            assert!(rotator.current_index() < rotator.len());
        }
    }

    #[test]
    fn single_image_never_advances() {
        let (rotator, scheduler) = rotator();
        rotator.set_images(images(1));
        rotator.start_rotating(Duration::from_millis(8000));

        scheduler.fire_many(5);
        assert_eq!(rotator.current_index(), 0);
    }

    #[test]
    fn empty_sequence_tick_is_a_no_op() {
        let (rotator, scheduler) = rotator();
        rotator.start_rotating(Duration::from_millis(8000));

        scheduler.fire_many(3);
        assert_eq!(rotator.current_index(), 0);
        assert!(rotator.is_empty());
    }

    #[test]
    fn restart_continues_from_current_index() {
        let (rotator, scheduler) = rotator();
        rotator.set_images(images(3));
        rotator.start_rotating(Duration::from_millis(8000));
        scheduler.fire();
        assert_eq!(rotator.current_index(), 1);

        rotator.start_rotating(Duration::from_millis(4000));
        assert_eq!(rotator.current_index(), 1);
        assert_eq!(scheduler.last_interval(), Some(Duration::from_millis(4000)));

        scheduler.fire();
        assert_eq!(rotator.current_index(), 2);
    }

    #[test]
    fn stop_is_idempotent_and_returns_to_idle() {
        let (rotator, scheduler) = rotator();
        rotator.set_images(images(2));
        rotator.start_rotating(Duration::from_millis(8000));

        rotator.stop();
        rotator.stop();
        assert_eq!(rotator.phase(), RotatorPhase::Idle);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn dispose_clears_images_and_is_terminal() {
        let (rotator, scheduler) = rotator();
        rotator.set_images(images(3));
        rotator.start_rotating(Duration::from_millis(8000));

        rotator.dispose();
        rotator.dispose();

        assert_eq!(rotator.phase(), RotatorPhase::Disposed);
        assert!(rotator.is_empty());
        assert!(!scheduler.is_running());

        // Further mutation attempts are ignored.
        rotator.set_images(images(2));
        rotator.start_rotating(Duration::from_millis(8000));
        assert!(rotator.is_empty());
        assert_eq!(rotator.phase(), RotatorPhase::Disposed);
    }

    #[test]
    fn late_tick_after_dispose_does_not_touch_state() {
        let (rotator, scheduler) = rotator();
        rotator.set_images(images(3));
        rotator.start_rotating(Duration::from_millis(8000));

        // Hold onto the tick callback the way a racing timer thread would.
        let tick = scheduler.captured_tick().unwrap();
        rotator.dispose();
        tick();

        assert_eq!(rotator.phase(), RotatorPhase::Disposed);
        assert_eq!(rotator.current_index(), 0);
    }
}
