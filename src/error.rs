//! Error types for card parsing and game play.

use thiserror::Error;

/// Errors that can occur when converting values into cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Numeric rank outside 1..=13.
    #[error("rank value {0} is outside 1..=13")]
    InvalidRank(u8),
    /// Rank name not recognized.
    #[error("unknown rank name")]
    UnknownRank,
    /// Suit name not recognized.
    #[error("unknown suit name")]
    InvalidSuit,
    /// Text is not of the form `"{rank} of {suit}"`.
    #[error("expected \"<rank> of <suit>\"")]
    InvalidFormat,
}

/// Errors that can occur while playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// A play is already running on this game.
    #[error("a game is already in progress")]
    InProgress,
    /// The countdown was cancelled before it reached zero.
    #[error("countdown was cancelled")]
    Cancelled,
    /// The background play thread panicked.
    #[error("background play panicked")]
    Panicked,
}
