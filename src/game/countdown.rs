//! Pre-round countdown and cancellation.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU8, Ordering};
use core::time::Duration;

use crate::error::PlayError;
use crate::observer::GameObserver;
use crate::options::HighLowOptions;
#[cfg(feature = "std")]
use crate::result::Turn;

const ARMED: u8 = 0;
const CANCELLED: u8 = 1;
const DONE: u8 = 2;

/// Shared handle that cancels a game's countdown.
///
/// A handle is armed when its game is created and again whenever a play
/// begins. Cancelling an armed handle stops that play's countdown, even when
/// the request arrives before the first tick. Once a countdown has stopped or
/// reached zero, cancel requests are ignored until the next play arms it.
#[derive(Debug, Clone, Default)]
pub struct CountdownHandle {
    phase: Arc<AtomicU8>,
}

impl CountdownHandle {
    /// Creates an armed handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the pending countdown stop.
    ///
    /// Returns `false` when there is no countdown left to stop.
    pub fn cancel(&self) -> bool {
        self.phase
            .compare_exchange(ARMED, CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Returns whether a cancellation is pending.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.phase.load(Ordering::SeqCst) == CANCELLED
    }

    /// Re-arms a finished handle. A pending cancellation is kept.
    pub(super) fn arm(&self) {
        let _ = self
            .phase
            .compare_exchange(DONE, ARMED, Ordering::SeqCst, Ordering::SeqCst);
    }

    /// Marks the countdown as over, dropping any late cancellation.
    pub(super) fn finish(&self) {
        self.phase.store(DONE, Ordering::SeqCst);
    }
}

/// Runs the countdown, announcing `countdown - 1` down to `0`.
///
/// The handle is finished on return, whether the countdown completed or not.
pub(super) fn run(
    options: &HighLowOptions,
    handle: &CountdownHandle,
    observer: Option<&dyn GameObserver>,
) -> Result<(), PlayError> {
    let counted = tick(options, handle, observer);
    handle.finish();
    counted
}

fn tick(
    options: &HighLowOptions,
    handle: &CountdownHandle,
    observer: Option<&dyn GameObserver>,
) -> Result<(), PlayError> {
    if handle.is_cancelled() {
        tracing::debug!("countdown cancelled before the first tick");
        return Err(PlayError::Cancelled);
    }

    for remaining in (0..options.countdown).rev() {
        pause(options.tick_interval);

        if handle.is_cancelled() {
            tracing::debug!(remaining, "countdown cancelled");
            return Err(PlayError::Cancelled);
        }

        tracing::trace!(remaining, "countdown tick");
        if let Some(observer) = observer {
            observer.on_countdown(remaining);
        }
    }

    Ok(())
}

#[cfg(feature = "std")]
fn pause(interval: Duration) {
    if !interval.is_zero() {
        std::thread::sleep(interval);
    }
}

// Without a clock, ticks fire back to back.
#[cfg(not(feature = "std"))]
const fn pause(_interval: Duration) {}

/// A play running on a background thread.
///
/// Returned by [`HighLow::spawn`](super::HighLow::spawn).
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ScheduledPlay {
    handle: CountdownHandle,
    thread: std::thread::JoinHandle<Result<Turn, PlayError>>,
}

#[cfg(feature = "std")]
impl ScheduledPlay {
    pub(super) const fn new(
        handle: CountdownHandle,
        thread: std::thread::JoinHandle<Result<Turn, PlayError>>,
    ) -> Self {
        Self { handle, thread }
    }

    /// Stops the countdown if it has not reached zero yet.
    ///
    /// Returns `false` when the countdown was already over.
    pub fn cancel(&self) -> bool {
        self.handle.cancel()
    }

    /// Returns whether the play has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the play to finish.
    ///
    /// # Errors
    ///
    /// Returns the play's error, or [`PlayError::Panicked`] if the thread panicked.
    pub fn join(self) -> Result<Turn, PlayError> {
        self.thread.join().unwrap_or(Err(PlayError::Panicked))
    }
}
