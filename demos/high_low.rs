//! Console High-Low example.
//!
//! Run with `cargo run --example high_low [seed]`. Set `RUST_LOG=highlow=debug`
//! to see the game's state transitions.

extern crate alloc;

use alloc::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use highlow::{CardGame, HighLow, HighLowOptions, Tracker};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let tracker = Arc::new(Tracker::stdout());
    let game = HighLow::new(HighLowOptions::default(), seed).with_observer(tracker);

    if let Err(err) = game.play() {
        eprintln!("Game error: {err}");
    }
}
