//! Game integration tests.

extern crate alloc;

use alloc::sync::Arc;
use core::cmp::Ordering;
use core::sync::atomic::{self, AtomicBool};
use core::time::Duration;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::thread;

use highlow::{
    Card, CardGame, DECK_SIZE, Deck, GameKind, GameObserver, HighLow, HighLowOptions,
    HighLowState, PlayError, Rank, RoundOutcome, Suit, Tracker, Turn,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Countdown(u32),
    Start(GameKind),
    Turn(Card, Card),
    End(GameKind),
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl GameObserver for Recorder {
    fn on_countdown(&self, remaining: u32) {
        self.push(Event::Countdown(remaining));
    }

    fn on_game_start(&self, game: &dyn CardGame) {
        self.push(Event::Start(game.kind()));
    }

    fn on_turn(&self, player1: Card, player2: Card) {
        self.push(Event::Turn(player1, player2));
    }

    fn on_game_end(&self, game: &dyn CardGame) {
        self.push(Event::End(game.kind()));
    }
}

/// Sleeps in `on_game_end`, keeping a spawned play alive after its countdown.
struct SlowEnd(Duration);

impl GameObserver for SlowEnd {
    fn on_game_start(&self, _game: &dyn CardGame) {}

    fn on_turn(&self, _player1: Card, _player2: Card) {}

    fn on_game_end(&self, _game: &dyn CardGame) {
        thread::sleep(self.0);
    }
}

/// Panics in `on_game_start` the first time it is called.
#[derive(Default)]
struct PanicOnce {
    fired: AtomicBool,
}

impl GameObserver for PanicOnce {
    fn on_game_start(&self, _game: &dyn CardGame) {
        assert!(
            self.fired.swap(true, atomic::Ordering::SeqCst),
            "observer failed on game start"
        );
    }

    fn on_turn(&self, _player1: Card, _player2: Card) {}

    fn on_game_end(&self, _game: &dyn CardGame) {}
}

fn lines(tracker: &Tracker<String>) -> Vec<String> {
    tracker.with_sink(|out| out.lines().map(str::to_owned).collect())
}

fn report(player1: Card, player2: Card) -> Vec<String> {
    let tracker = Tracker::new(String::new());
    tracker.on_turn(player1, player2);
    lines(&tracker)
}

fn fast_options(ticks: u32) -> HighLowOptions {
    HighLowOptions::default()
        .with_countdown(ticks)
        .with_tick_interval(Duration::ZERO)
}

#[test]
fn deck_covers_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 52);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            assert!(deck.contains(&card(rank, suit)), "missing {rank} of {suit}");
        }
    }
}

#[test]
fn draws_are_roughly_uniform() {
    let deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts: HashMap<Card, usize> = HashMap::new();

    for _ in 0..52_000 {
        let drawn = deck.draw_card(&mut rng);
        assert!(deck.contains(&drawn));
        *counts.entry(drawn).or_default() += 1;
    }

    assert_eq!(counts.len(), DECK_SIZE);
    for (drawn, count) in counts {
        assert!((700..=1300).contains(&count), "{drawn} drawn {count} times");
    }
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn ranks_are_strictly_ordered() {
    assert!(Rank::Ace < Rank::Two);
    assert!(Rank::Queen < Rank::King);
    for (index, rank) in Rank::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(rank.value()), index + 1);
        assert_eq!(Rank::try_from(rank.value()), Ok(rank));
    }
}

#[test]
fn card_equality_and_rank_comparison() {
    let king_hearts = card(Rank::King, Suit::Hearts);
    let king_clubs = card(Rank::King, Suit::Clubs);

    assert_eq!(king_hearts, card(Rank::King, Suit::Hearts));
    assert_ne!(king_hearts, king_clubs);
    assert_ne!(king_hearts, card(Rank::Queen, Suit::Hearts));
    assert_eq!(king_hearts.cmp_rank(&king_clubs), Ordering::Equal);
    assert_eq!(
        card(Rank::Ace, Suit::Spades).cmp_rank(&card(Rank::Two, Suit::Spades)),
        Ordering::Less
    );
}

#[test]
fn ace_is_low() {
    let two = card(Rank::Two, Suit::Diamonds);
    let ace = card(Rank::Ace, Suit::Diamonds);

    assert_eq!(RoundOutcome::decide(two, ace), RoundOutcome::Player1(two));
    assert_eq!(
        report(two, ace),
        [
            "Player 1 drew a Two of diamonds, player 2 drew Ace of diamonds",
            "Player 1 wins with Two of diamonds",
        ]
    );
}

#[test]
fn higher_second_card_wins() {
    let eight = card(Rank::Eight, Suit::Hearts);
    let jack = card(Rank::Jack, Suit::Spades);

    assert_eq!(
        report(eight, jack),
        [
            "Player 1 drew a Eight of hearts, player 2 drew Jack of spades",
            "Player 2 wins with Jack of spades",
        ]
    );
}

#[test]
fn equal_ranks_tie_regardless_of_suit() {
    let clubs = card(Rank::King, Suit::Clubs);
    let diamonds = card(Rank::King, Suit::Diamonds);

    assert_eq!(RoundOutcome::decide(clubs, diamonds).card(), clubs);
    assert_eq!(
        report(clubs, diamonds),
        [
            "Player 1 drew a King of clubs, player 2 drew King of diamonds",
            "Round ends in a tie with King of clubs",
        ]
    );

    let same = card(Rank::Four, Suit::Hearts);
    assert_eq!(RoundOutcome::decide(same, same), RoundOutcome::Tie(same));
}

#[test]
fn tracker_counts_single_turn() {
    let tracker = Arc::new(Tracker::new(String::new()));
    let game = HighLow::new(fast_options(0), 11).with_observer(tracker.clone());

    let turn = game.play().unwrap();
    let outcome = turn.outcome();

    assert_eq!(tracker.turns(), 1);
    assert_eq!(
        lines(&tracker),
        [
            "A new game has started.".to_owned(),
            format!("Player 1 drew a {}, player 2 drew {}", turn.player1, turn.player2),
            outcome.to_string(),
            "The game lasted for 1 turns.".to_owned(),
        ]
    );
}

#[test]
fn countdown_announces_each_tick() {
    let tracker = Arc::new(Tracker::new(String::new()));
    let game = HighLow::new(fast_options(3), 5).with_observer(tracker.clone());

    game.play().unwrap();

    let output = lines(&tracker);
    assert_eq!(
        &output[..4],
        [
            "A new game is about to start in 2",
            "A new game is about to start in 1",
            "A new game is about to start in 0",
            "A new game has started.",
        ]
    );
    assert_eq!(output.len(), 7);
}

#[test]
fn observer_sees_phases_in_order() {
    let recorder = Arc::new(Recorder::default());
    let game = HighLow::new(fast_options(2), 77).with_observer(recorder.clone());

    let Turn { player1, player2 } = game.play().unwrap();

    assert_eq!(
        recorder.events(),
        [
            Event::Countdown(1),
            Event::Countdown(0),
            Event::Start(GameKind::HighLow),
            Event::Turn(player1, player2),
            Event::End(GameKind::HighLow),
        ]
    );
    assert_eq!(game.state(), HighLowState::Ended);
}

#[test]
fn replay_resets_tracker() {
    let tracker = Arc::new(Tracker::new(String::new()));
    let game = HighLow::new(fast_options(0), 3).with_observer(tracker.clone());

    game.play().unwrap();
    game.play().unwrap();

    assert_eq!(tracker.turns(), 1);
    let output = lines(&tracker);
    assert_eq!(output.len(), 8);
    assert_eq!(output[7], "The game lasted for 1 turns.");
}

#[test]
fn play_without_observer_is_silent() {
    let mut game = HighLow::new(fast_options(3), 8).with_observer(Arc::new(Recorder::default()));
    game.set_observer(None);

    assert!(game.observer().is_none());
    let turn = game.play().unwrap();
    assert!(game.deck().contains(&turn.player1));
    assert_eq!(game.state(), HighLowState::Ended);
}

#[test]
fn seeded_games_draw_the_same_cards() {
    let a = HighLow::new(fast_options(0), 31);
    let b = HighLow::new(fast_options(0), 31);
    assert_eq!(a.play().unwrap(), b.play().unwrap());
}

#[test]
fn cancelled_countdown_skips_the_round() {
    let recorder = Arc::new(Recorder::default());
    let game = HighLow::new(fast_options(3), 4).with_observer(recorder.clone());

    game.countdown_handle().cancel();
    assert_eq!(game.play().unwrap_err(), PlayError::Cancelled);
    assert!(recorder.events().is_empty());
    assert_eq!(game.state(), HighLowState::Idle);

    game.play().unwrap();
    assert_eq!(recorder.events().len(), 6);
}

#[test]
fn scheduled_play_can_be_cancelled() {
    let recorder = Arc::new(Recorder::default());
    let options = HighLowOptions::default()
        .with_countdown(5)
        .with_tick_interval(Duration::from_millis(200));
    let game = Arc::new(HighLow::new(options, 6).with_observer(recorder.clone()));

    let scheduled = Arc::clone(&game).spawn();
    assert!(scheduled.cancel());

    assert_eq!(scheduled.join().unwrap_err(), PlayError::Cancelled);
    assert!(
        recorder
            .events()
            .iter()
            .all(|event| matches!(event, Event::Countdown(_)))
    );
    assert_eq!(game.state(), HighLowState::Idle);
}

#[test]
fn scheduled_play_completes() {
    let tracker = Arc::new(Tracker::new(String::new()));
    let game = Arc::new(HighLow::new(fast_options(1), 12).with_observer(tracker.clone()));

    let scheduled = Arc::clone(&game).spawn();
    while !scheduled.is_finished() {
        thread::sleep(Duration::from_millis(5));
    }
    let turn = scheduled.join().unwrap();

    assert_eq!(tracker.turns(), 1);
    assert!(game.deck().contains(&turn.player2));
    assert_eq!(game.state(), HighLowState::Ended);
}

#[test]
fn late_cancel_does_not_leak_into_next_play() {
    let observer = Arc::new(SlowEnd(Duration::from_millis(300)));
    let game = Arc::new(HighLow::new(HighLowOptions::immediate(), 14).with_observer(observer));

    let scheduled = Arc::clone(&game).spawn();
    thread::sleep(Duration::from_millis(100));

    assert!(!scheduled.cancel());
    assert!(scheduled.join().is_ok());
    assert!(!game.countdown_handle().is_cancelled());
    assert!(game.play().is_ok());
    assert_eq!(game.state(), HighLowState::Ended);
}

#[test]
fn observer_panic_leaves_game_playable() {
    let game = Arc::new(
        HighLow::new(fast_options(1), 15).with_observer(Arc::new(PanicOnce::default())),
    );

    assert_eq!(
        Arc::clone(&game).spawn().join().unwrap_err(),
        PlayError::Panicked
    );
    assert_eq!(game.state(), HighLowState::Idle);

    game.play().unwrap();
    assert_eq!(game.state(), HighLowState::Ended);
}

#[test]
fn parse_round_trip_of_display() {
    for drawn in &Deck::new() {
        assert_eq!(drawn.to_string().parse::<Card>(), Ok(*drawn));
    }
}
