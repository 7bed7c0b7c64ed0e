//! Player identification and side ownership.
//!
//! ## Player
//!
//! Kalah is strictly two-player. Each player owns six pits and one store on
//! the shared 14-cell board:
//!
//! | Player | Pits | Store |
//! |--------|------|-------|
//! | One    | 7-12 | 13    |
//! | Two    | 0-5  | 6     |

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::board::{PITS_PER_SIDE, PLAYER_ONE_STORE, PLAYER_TWO_STORE};

/// One of the two seats at the board.
///
/// Player One moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, owns the bottom row (pits 7-12) and store 13.
    One,
    /// Second player, owns the top row (pits 0-5) and store 6.
    Two,
}

impl Player {
    /// Both players in seating order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look up a player by its 1-based number.
    ///
    /// ```
    /// use rust_mancala::core::Player;
    ///
    /// assert_eq!(Player::from_number(1), Some(Player::One));
    /// assert_eq!(Player::from_number(2), Some(Player::Two));
    /// assert_eq!(Player::from_number(0), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board indices of this player's six pits.
    #[must_use]
    pub const fn pit_range(self) -> Range<usize> {
        let start = match self {
            Player::One => PLAYER_TWO_STORE + 1,
            Player::Two => 0,
        };
        start..start + PITS_PER_SIDE
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store_index(self) -> usize {
        match self {
            Player::One => PLAYER_ONE_STORE,
            Player::Two => PLAYER_TWO_STORE,
        }
    }

    /// Check if `index` is one of this player's pits (stores excluded).
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pit_range().contains(&index)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
