//! Rules engine trait.
//!
//! `RulesEngine` separates the driver surface a collaborator calls
//! (`apply_move`, `reset`, `legal_moves`) from the rule implementation:
//! - What moves are legal
//! - How a move transforms the state
//! - When and how the game ends

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::board::PITS_PER_SIDE;
use crate::core::config::RulesConfig;
use crate::core::player::Player;
use crate::core::{GameState, MoveError, MoveOutcome};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has the strictly larger store.
    Winner(Player),
    /// Both stores hold the same number of stones.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Numeric form of the result: the winner's number, or 0 for a tie.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            GameResult::Winner(player) => player.number(),
            GameResult::Draw => 0,
        }
    }
}

/// Legal pits for one turn. A player never has more than six.
pub type MoveList = SmallVec<[usize; PITS_PER_SIDE]>;

/// Rules engine trait.
///
/// Implementations must be deterministic: the same state and pit always
/// produce the same result.
///
/// ## Implementation Notes
///
/// - `validate_move`: every rejection reason is a `MoveError`
/// - `try_apply_move`: must not modify the input state
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// Get the engine configuration.
    fn config(&self) -> &RulesConfig;

    /// The starting position.
    fn initial_state(&self) -> GameState;

    /// Check whether the current player may sow from `pit`.
    fn validate_move(&self, state: &GameState, pit: usize) -> Result<(), MoveError>;

    /// Apply a move, returning the new state and a report of what happened.
    ///
    /// The input state is left untouched.
    fn try_apply_move(
        &self,
        state: &GameState,
        pit: usize,
    ) -> Result<(GameState, MoveOutcome), MoveError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Apply a move, treating any rejection as a no-op.
    ///
    /// Returns a copy of `state` unchanged when the move is not legal, so a
    /// UI can forward every click without checking first.
    fn apply_move(&self, state: &GameState, pit: usize) -> GameState {
        match self.try_apply_move(state, pit) {
            Ok((next, _)) => next,
            Err(err) => {
                debug!(pit, player = %state.current_player(), %err, "move rejected");
                state.clone()
            }
        }
    }

    /// Discard the current game and return the starting position.
    fn reset(&self) -> GameState {
        self.initial_state()
    }

    /// Check if a move would be accepted.
    fn is_legal(&self, state: &GameState, pit: usize) -> bool {
        self.validate_move(state, pit).is_ok()
    }

    /// Enumerate the current player's legal pits in index order.
    ///
    /// Empty once the game is over.
    fn legal_moves(&self, state: &GameState) -> MoveList {
        state
            .current_player()
            .pit_range()
            .filter(|&pit| self.is_legal(state, pit))
            .collect()
    }
}
