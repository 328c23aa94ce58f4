//! Game capability and the High-Low game.

use alloc::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::deck::Deck;
use crate::error::PlayError;
use crate::observer::GameObserver;
use crate::options::HighLowOptions;
use crate::result::Turn;

mod countdown;
pub mod state;

#[cfg(feature = "std")]
pub use countdown::ScheduledPlay;
pub use countdown::CountdownHandle;
pub use state::{GameKind, HighLowState};

/// The minimal contract of a card game.
pub trait CardGame {
    /// Returns the deck the game draws from.
    fn deck(&self) -> &Deck;

    /// Returns the tag identifying which game this is.
    fn kind(&self) -> GameKind;

    /// Runs the game to completion and returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot run or is stopped before it resolves.
    fn play(&self) -> Result<Turn, PlayError>;
}

/// High-Low: each player draws one card and the higher rank wins.
///
/// The game only produces events. Deciding and reporting the winner is left
/// to the registered [`GameObserver`]; with no observer the game runs silently.
pub struct HighLow {
    /// The deck both players draw from.
    deck: Deck,
    /// Game options.
    options: HighLowOptions,
    /// Registered observer, if any.
    observer: Option<Arc<dyn GameObserver>>,
    /// Current lifecycle state.
    state: Mutex<HighLowState>,
    /// Countdown cancellation flag.
    countdown: CountdownHandle,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl HighLow {
    /// Creates a new game with the given seed and no observer.
    ///
    /// # Example
    ///
    /// ```
    /// use highlow::{CardGame, HighLow, HighLowOptions};
    ///
    /// let game = HighLow::new(HighLowOptions::immediate(), 42);
    /// let turn = game.play().unwrap();
    /// assert!(game.deck().contains(&turn.player1));
    /// ```
    #[must_use]
    pub fn new(options: HighLowOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            options,
            observer: None,
            state: Mutex::new(HighLowState::Idle),
            countdown: CountdownHandle::new(),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Registers the observer that receives game events.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn GameObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Replaces the registered observer. `None` silences the game.
    pub fn set_observer(&mut self, observer: Option<Arc<dyn GameObserver>>) {
        self.observer = observer;
    }

    /// Returns the registered observer.
    pub fn observer(&self) -> Option<&Arc<dyn GameObserver>> {
        self.observer.as_ref()
    }

    /// Returns the game options.
    pub const fn options(&self) -> &HighLowOptions {
        &self.options
    }

    /// Returns the current game state.
    pub fn state(&self) -> HighLowState {
        *self.state.lock()
    }

    /// Returns a handle that cancels this game's countdown.
    pub fn countdown_handle(&self) -> CountdownHandle {
        self.countdown.clone()
    }

    /// Runs [`CardGame::play`] on a background thread.
    ///
    /// The returned [`ScheduledPlay`] can cancel the countdown or wait for the
    /// result.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn spawn(self: Arc<Self>) -> ScheduledPlay {
        let handle = self.countdown_handle();
        handle.arm();
        let thread = std::thread::spawn(move || self.play());
        ScheduledPlay::new(handle, thread)
    }

    fn set_state(&self, next: HighLowState) {
        *self.state.lock() = next;
        tracing::debug!(state = ?next, "high-low state changed");
    }

    /// Moves from `Idle` or `Ended` into `Countdown`.
    fn begin(&self) -> Result<(), PlayError> {
        let mut state = self.state.lock();
        if !state.can_play() {
            return Err(PlayError::InProgress);
        }
        *state = HighLowState::Countdown;
        drop(state);

        self.countdown.arm();
        tracing::debug!(ticks = self.options.countdown, "high-low countdown started");
        Ok(())
    }

    fn draw_turn(&self) -> Turn {
        let mut rng = self.rng.lock();
        let player1 = self.deck.draw_card(&mut *rng);
        let player2 = self.deck.draw_card(&mut *rng);
        drop(rng);

        tracing::trace!(%player1, %player2, "cards drawn");
        Turn { player1, player2 }
    }
}

impl CardGame for HighLow {
    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn kind(&self) -> GameKind {
        GameKind::HighLow
    }

    fn play(&self) -> Result<Turn, PlayError> {
        self.begin()?;
        let guard = ResetOnDrop(self);

        let observer = self.observer.as_deref();
        countdown::run(&self.options, &self.countdown, observer)?;

        self.set_state(HighLowState::Started);
        if let Some(observer) = observer {
            observer.on_game_start(self);
        }

        let turn = self.draw_turn();
        self.set_state(HighLowState::Resolved);
        if let Some(observer) = observer {
            observer.on_turn(turn.player1, turn.player2);
        }

        self.set_state(HighLowState::Ended);
        if let Some(observer) = observer {
            observer.on_game_end(self);
        }

        core::mem::forget(guard);
        Ok(turn)
    }
}

/// Returns an unfinished play to `Idle`, including when an observer panics.
struct ResetOnDrop<'a>(&'a HighLow);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.countdown.finish();
        self.0.set_state(HighLowState::Idle);
    }
}
