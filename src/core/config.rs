//! Rules configuration.
//!
//! The board geometry (6 pits + 1 store per side) is fixed by the Kalah
//! variant. The only tunable is how many stones start in each pit, which
//! matters for the initial board alone: sowing, capture and scoring never
//! consult the configuration.

use serde::{Deserialize, Serialize};

use super::board::{DEFAULT_STONES_PER_PIT, PITS_PER_SIDE};
use super::error::ConfigError;

/// Configuration for a Kalah engine.
///
/// Deserializes with missing fields filled from [`RulesConfig::default`].
///
/// ```
/// use rust_mancala::core::RulesConfig;
///
/// let config = RulesConfig::default().with_stones_per_pit(3);
/// assert_eq!(config.stones_per_pit, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Stones placed in each of the twelve pits at the start of a game.
    pub stones_per_pit: u32,
}

impl RulesConfig {
    /// Set the starting stones per pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: u32) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Total stones in play for this configuration, or `None` if the
    /// total does not fit in a cell.
    #[must_use]
    pub fn total_stones(&self) -> Option<u32> {
        self.stones_per_pit.checked_mul(2 * PITS_PER_SIDE as u32)
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stones_per_pit == 0 {
            return Err(ConfigError::ZeroStones);
        }
        if self.total_stones().is_none() {
            return Err(ConfigError::TooManyStones(self.stones_per_pit));
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            stones_per_pit: DEFAULT_STONES_PER_PIT,
        }
    }
}
