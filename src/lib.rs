//! A High-Low card game with a pluggable observer and optional `no_std` support.
//!
//! The crate provides the card types, a 52-card [`Deck`], the [`CardGame`] and
//! [`GameObserver`] capabilities, the [`HighLow`] game, and a [`Tracker`]
//! observer that reports each round as text.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use highlow::{CardGame, HighLow, HighLowOptions, Tracker};
//!
//! let game = HighLow::new(HighLowOptions::default(), 42)
//!     .with_observer(Arc::new(Tracker::stdout()));
//! game.play().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod observer;
pub mod options;
pub mod result;
mod sync;
pub mod tracker;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ParseCardError, PlayError};
#[cfg(feature = "std")]
pub use game::ScheduledPlay;
pub use game::{CardGame, CountdownHandle, GameKind, HighLow, HighLowState};
pub use observer::GameObserver;
pub use options::HighLowOptions;
pub use result::{RoundOutcome, Turn};
#[cfg(feature = "std")]
pub use tracker::Console;
pub use tracker::Tracker;
