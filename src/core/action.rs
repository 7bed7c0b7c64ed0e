//! Move reports.
//!
//! A Kalah move is a single pit index, so the move itself needs no type of
//! its own. What callers want after a move is what happened: where the last
//! stone landed, whether anything was captured, whether the mover goes
//! again. `MoveOutcome` records that for one accepted move.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::rules::GameResult;

/// Stones taken by a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// The mover's pit where the last stone landed.
    pub pit: usize,

    /// The opponent's pit directly across.
    pub opposite: usize,

    /// Stones added to the mover's store (opposite pit + the landing stone).
    pub stones: u32,
}

/// Everything that happened during one accepted move.
///
/// ## Example
///
/// ```
/// use rust_mancala::{Kalah, RulesEngine};
/// use rust_mancala::core::Player;
///
/// let game = Kalah::default();
/// let state = game.initial_state();
///
/// // Pit 9 holds 4 stones: 10, 11, 12, then the store.
/// let (_, outcome) = game.try_apply_move(&state, 9).unwrap();
/// assert_eq!(outcome.player, Player::One);
/// assert_eq!(outcome.landing, 13);
/// assert!(outcome.extra_turn);
/// assert!(outcome.capture.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The player who moved.
    pub player: Player,

    /// The pit that was emptied.
    pub pit: usize,

    /// Stones picked up and sown.
    pub sown: u32,

    /// Index of the cell that received the last stone.
    pub landing: usize,

    /// Capture triggered by the landing stone, if any.
    pub capture: Option<Capture>,

    /// The mover landed in their own store and moves again.
    pub extra_turn: bool,

    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}

impl MoveOutcome {
    /// Check if this move ended the game.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.result.is_some()
    }

    /// Stones gained by the capture (0 if none).
    #[must_use]
    pub fn captured_stones(&self) -> u32 {
        self.capture.map_or(0, |capture| capture.stones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_helpers() {
        let mut outcome = MoveOutcome {
            player: Player::Two,
            pit: 2,
            sown: 1,
            landing: 3,
            capture: Some(Capture { pit: 3, opposite: 9, stones: 5 }),
            extra_turn: false,
            result: None,
        };

        assert_eq!(outcome.captured_stones(), 5);
        assert!(!outcome.ended_game());

        outcome.capture = None;
        outcome.result = Some(GameResult::Draw);
        assert_eq!(outcome.captured_stones(), 0);
        assert!(outcome.ended_game());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = MoveOutcome {
            player: Player::One,
            pit: 8,
            sown: 1,
            landing: 9,
            capture: Some(Capture { pit: 9, opposite: 3, stones: 4 }),
            extra_turn: false,
            result: Some(GameResult::Winner(Player::One)),
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: MoveOutcome = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome, deserialized);
    }
}
