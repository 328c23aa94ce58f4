//! Game state types.

/// Lifecycle state of a [`HighLow`](super::HighLow) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighLowState {
    /// Deck built, waiting for `play`.
    Idle,
    /// Counting down to the round.
    Countdown,
    /// The start notification has fired.
    Started,
    /// Both cards are drawn and reported.
    Resolved,
    /// The end notification has fired.
    Ended,
}

impl HighLowState {
    /// Returns whether a new play may begin from this state.
    #[must_use]
    pub const fn can_play(self) -> bool {
        matches!(self, Self::Idle | Self::Ended)
    }
}

/// Capability tag identifying the concrete game behind a [`CardGame`](super::CardGame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum GameKind {
    /// The High-Low comparison game.
    HighLow,
}
