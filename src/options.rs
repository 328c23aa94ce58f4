//! Game configuration options.

use core::time::Duration;

/// Configuration options for a High-Low game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use highlow::HighLowOptions;
///
/// let options = HighLowOptions::default()
///     .with_countdown(5)
///     .with_tick_interval(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighLowOptions {
    /// Number of countdown ticks before the round. 0 starts immediately.
    pub countdown: u32,
    /// Delay before each countdown tick. Only honored with the `std` feature.
    pub tick_interval: Duration,
}

impl Default for HighLowOptions {
    fn default() -> Self {
        Self {
            countdown: 3,
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl HighLowOptions {
    /// Options that skip the countdown and start the round right away.
    ///
    /// # Example
    ///
    /// ```
    /// use highlow::HighLowOptions;
    ///
    /// let options = HighLowOptions::immediate();
    /// assert_eq!(options.countdown, 0);
    /// ```
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            countdown: 0,
            tick_interval: Duration::ZERO,
        }
    }

    /// Sets the number of countdown ticks.
    ///
    /// # Example
    ///
    /// ```
    /// use highlow::HighLowOptions;
    ///
    /// let options = HighLowOptions::default().with_countdown(10);
    /// assert_eq!(options.countdown, 10);
    /// ```
    #[must_use]
    pub const fn with_countdown(mut self, ticks: u32) -> Self {
        self.countdown = ticks;
        self
    }

    /// Sets the delay before each countdown tick.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use highlow::HighLowOptions;
    ///
    /// let options = HighLowOptions::default().with_tick_interval(Duration::ZERO);
    /// assert_eq!(options.tick_interval, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}
