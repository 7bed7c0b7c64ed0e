//! The 14-cell Kalah board.
//!
//! Cells are laid out in sowing order (counter-clockwise):
//!
//! ```text
//!        12  11  10   9   8   7
//!   13                            6
//!         0   1   2   3   4   5
//! ```
//!
//! Stated as indices: 0-5 are Player Two's pits, 6 is Player Two's store,
//! 7-12 are Player One's pits, 13 is Player One's store. Pit `i` faces pit
//! `12 - i` across the board.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::player::Player;

/// Number of cells on the board (12 pits + 2 stores).
pub const BOARD_SIZE: usize = 14;

/// Number of pits owned by each player.
pub const PITS_PER_SIDE: usize = 6;

/// Board index of Player Two's store.
pub const PLAYER_TWO_STORE: usize = 6;

/// Board index of Player One's store.
pub const PLAYER_ONE_STORE: usize = 13;

/// Stones in each pit at the start of a standard game.
pub const DEFAULT_STONES_PER_PIT: u32 = 4;

/// Most stones a board may hold in total.
///
/// Stones are conserved, so while the total stays within this bound no
/// single cell can overflow during sowing, capture or the final sweep.
pub const MAX_TOTAL_STONES: u64 = u32::MAX as u64;

/// Stone counts for every cell of the board.
///
/// `Board` is a plain `Copy` value; the engine never mutates a board it was
/// handed, it works on a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [u32; BOARD_SIZE],
}

impl Board {
    /// Create a starting board with `stones_per_pit` in every pit and empty stores.
    ///
    /// ```
    /// use rust_mancala::core::Board;
    ///
    /// let board = Board::new(4);
    /// assert_eq!(board.cells(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    /// assert_eq!(board.total(), 48);
    /// ```
    #[must_use]
    pub fn new(stones_per_pit: u32) -> Self {
        let mut cells = [stones_per_pit; BOARD_SIZE];
        cells[PLAYER_TWO_STORE] = 0;
        cells[PLAYER_ONE_STORE] = 0;
        Self { cells }
    }

    /// Create a board from explicit cell counts.
    #[must_use]
    pub const fn from_cells(cells: [u32; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// All 14 cells in index order.
    #[must_use]
    pub const fn cells(&self) -> &[u32; BOARD_SIZE] {
        &self.cells
    }

    /// Stones in cell `index`, or `None` if the index is off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.cells.get(index).copied()
    }

    /// Total stones on the board.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&stones| u64::from(stones)).sum()
    }

    /// Check the total fits within [`MAX_TOTAL_STONES`].
    #[must_use]
    pub fn within_capacity(&self) -> bool {
        self.total() <= MAX_TOTAL_STONES
    }

    /// A player's six pits, nearest-to-store last.
    #[must_use]
    pub fn pits(&self, player: Player) -> &[u32] {
        &self.cells[player.pit_range()]
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.cells[player.store_index()]
    }

    /// Stones still in play on a player's side (store excluded).
    #[must_use]
    pub fn side_total(&self, player: Player) -> u64 {
        self.pits(player).iter().map(|&stones| u64::from(stones)).sum()
    }

    /// Check if all six of a player's pits are empty.
    #[must_use]
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.pits(player).iter().all(|&stones| stones == 0)
    }

    /// Check if `index` is one of the two stores.
    #[must_use]
    pub const fn is_store(index: usize) -> bool {
        index == PLAYER_ONE_STORE || index == PLAYER_TWO_STORE
    }

    /// The pit directly across from `index`.
    ///
    /// Pairs 0↔12, 1↔11, ... 5↔7. Stores and off-board indices have no
    /// opposite.
    ///
    /// ```
    /// use rust_mancala::core::Board;
    ///
    /// assert_eq!(Board::opposite(9), Some(3));
    /// assert_eq!(Board::opposite(0), Some(12));
    /// assert_eq!(Board::opposite(6), None);
    /// assert_eq!(Board::opposite(13), None);
    /// ```
    #[must_use]
    pub const fn opposite(index: usize) -> Option<usize> {
        if index >= PLAYER_ONE_STORE || index == PLAYER_TWO_STORE {
            None
        } else {
            Some(PLAYER_ONE_STORE - 1 - index)
        }
    }

    // === Mutation (engine only) ===

    pub(crate) fn take(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.cells[index])
    }

    pub(crate) fn add(&mut self, index: usize, stones: u32) {
        self.cells[index] += stones;
    }

    /// Move every stone left on `player`'s side into their store.
    ///
    /// Returns the number of stones swept.
    pub(crate) fn sweep_side(&mut self, player: Player) -> u32 {
        let swept: u32 = player.pit_range().map(|pit| self.take(pit)).sum();
        self.add(player.store_index(), swept);
        swept
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_STONES_PER_PIT)
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}
