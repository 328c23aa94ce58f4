//! A game observer that counts turns and reports results as text.

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::card::Card;
use crate::game::{CardGame, GameKind};
use crate::observer::GameObserver;
use crate::result::RoundOutcome;
use crate::sync::Mutex;

/// Counts turns and writes one line per game event to a text sink.
///
/// The sink is any [`fmt::Write`]; use a `String` to capture a transcript or
/// [`Tracker::stdout`] to print to the console.
///
/// ```
/// use std::sync::Arc;
/// use highlow::{CardGame, HighLow, HighLowOptions, Tracker};
///
/// let tracker = Arc::new(Tracker::new(String::new()));
/// let game = HighLow::new(HighLowOptions::immediate(), 7).with_observer(tracker.clone());
/// game.play().unwrap();
///
/// assert_eq!(tracker.turns(), 1);
/// tracker.with_sink(|out| assert!(out.ends_with("The game lasted for 1 turns.\n")));
/// ```
pub struct Tracker<W> {
    turns: AtomicUsize,
    sink: Mutex<W>,
}

impl<W: Write + Send> Tracker<W> {
    /// Creates a tracker writing to `sink`.
    pub const fn new(sink: W) -> Self {
        Self {
            turns: AtomicUsize::new(0),
            sink: Mutex::new(sink),
        }
    }

    /// Returns the number of turns since the last game start.
    pub fn turns(&self) -> usize {
        self.turns.load(Ordering::SeqCst)
    }

    /// Runs `f` with a shared view of the sink.
    pub fn with_sink<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        let sink = self.sink.lock();
        f(&*sink)
    }

    /// Consumes the tracker and returns the sink.
    pub fn into_sink(self) -> W {
        self.sink.into_inner()
    }

    fn emit(&self, args: fmt::Arguments<'_>) {
        let mut sink = self.sink.lock();
        if sink.write_fmt(args).and_then(|()| sink.write_char('\n')).is_err() {
            tracing::warn!("tracker sink rejected a message");
        }
    }
}

#[cfg(feature = "std")]
impl Tracker<Console> {
    /// Creates a tracker printing to standard output.
    #[must_use]
    pub const fn stdout() -> Self {
        Self::new(Console)
    }
}

impl<W: Write + Send> GameObserver for Tracker<W> {
    fn on_countdown(&self, remaining: u32) {
        self.emit(format_args!("A new game is about to start in {remaining}"));
    }

    fn on_game_start(&self, game: &dyn CardGame) {
        self.turns.store(0, Ordering::SeqCst);
        if matches!(game.kind(), GameKind::HighLow) {
            self.emit(format_args!("A new game has started."));
        }
    }

    fn on_turn(&self, player1: Card, player2: Card) {
        self.turns.fetch_add(1, Ordering::SeqCst);
        self.emit(format_args!("Player 1 drew a {player1}, player 2 drew {player2}"));
        self.emit(format_args!("{}", RoundOutcome::decide(player1, player2)));
    }

    fn on_game_end(&self, _game: &dyn CardGame) {
        self.emit(format_args!("The game lasted for {} turns.", self.turns()));
    }
}

/// Text sink for standard output.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

#[cfg(feature = "std")]
impl Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        use std::io::Write as _;

        std::io::stdout()
            .lock()
            .write_all(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}
