//! Observer interface for game lifecycle events.

use crate::card::Card;
use crate::game::CardGame;

/// Receives notifications from a running game.
///
/// A game pushes events to at most one observer, synchronously and in order:
/// countdown ticks, then `on_game_start`, one `on_turn` per comparison, and
/// finally `on_game_end`. Methods take `&self`, so implementations that keep
/// state use interior mutability.
pub trait GameObserver: Send + Sync {
    /// Called once per countdown tick with the number announced for that tick.
    fn on_countdown(&self, remaining: u32) {
        let _ = remaining;
    }

    /// Called once before the first draw.
    fn on_game_start(&self, game: &dyn CardGame);

    /// Called once per comparison with the cards drawn by each player.
    fn on_turn(&self, player1: Card, player2: Card);

    /// Called once after every turn has completed.
    fn on_game_end(&self, game: &dyn CardGame);
}
