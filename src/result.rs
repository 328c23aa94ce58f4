//! Turn and round outcome types.

use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;

/// The two cards drawn in one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    /// Card drawn by player 1.
    pub player1: Card,
    /// Card drawn by player 2.
    pub player2: Card,
}

impl Turn {
    /// Decides the outcome of this turn.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome::decide(self.player1, self.player2)
    }
}

/// Outcome of a High-Low comparison, carrying the card that is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Both ranks are equal. Carries player 1's card.
    Tie(Card),
    /// Player 1 has the higher rank.
    Player1(Card),
    /// Player 2 has the higher rank.
    Player2(Card),
}

impl RoundOutcome {
    /// Compares two cards by rank. Suits never break a tie, and the ace is low.
    ///
    /// # Example
    ///
    /// ```
    /// use highlow::{Card, Rank, RoundOutcome, Suit};
    ///
    /// let two = Card::new(Rank::Two, Suit::Diamonds);
    /// let ace = Card::new(Rank::Ace, Suit::Diamonds);
    /// assert_eq!(RoundOutcome::decide(two, ace), RoundOutcome::Player1(two));
    /// ```
    #[must_use]
    pub fn decide(player1: Card, player2: Card) -> Self {
        match player1.cmp_rank(&player2) {
            Ordering::Equal => Self::Tie(player1),
            Ordering::Greater => Self::Player1(player1),
            Ordering::Less => Self::Player2(player2),
        }
    }

    /// Returns the card named in the outcome.
    #[must_use]
    pub const fn card(&self) -> Card {
        match *self {
            Self::Tie(card) | Self::Player1(card) | Self::Player2(card) => card,
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tie(card) => write!(f, "Round ends in a tie with {card}"),
            Self::Player1(card) => write!(f, "Player 1 wins with {card}"),
            Self::Player2(card) => write!(f, "Player 2 wins with {card}"),
        }
    }
}
