//! # Global runtime configuration.
//!
//! [`Config`] defines the controller's behavior: how long to wait when
//! joining a finished or stopped engine task, and how often waits re-check
//! the cancellation flag.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use autopaste::Config;
//!
//! let mut cfg = Config::default();
//! cfg.join_grace = Duration::from_secs(10);
//!
//! assert_eq!(cfg.poll_granularity, Duration::from_millis(50));
//! ```

use std::time::Duration;

use crate::engine::POLL_GRANULARITY;

/// Runtime configuration for the controller and the engines it spawns.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Maximum time to wait for an engine task to exit when joining it.
    /// On timeout the join is abandoned with a logged warning.
    pub join_grace: Duration,
    /// Granularity at which interruptible waits re-check the cancellation
    /// flag. Bounds cancellation latency regardless of wait duration.
    pub poll_granularity: Duration,
}

impl Default for Config {
    /// Provides a default configuration:
    /// - `join_grace = 5s`
    /// - `poll_granularity = 50ms`
    fn default() -> Self {
        Self {
            join_grace: Duration::from_secs(5),
            poll_granularity: POLL_GRANULARITY,
        }
    }
}
