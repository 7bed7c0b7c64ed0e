//! Game invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger for a state produced by the engine. The engine
//! runs them under `debug_assert!` after every accepted move, deserialization
//! refuses snapshots that fail them, and tests call them directly.

use crate::core::{GameState, Player};
use crate::rules::GameResult;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check the invariants of a single state produced by a move.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let board = state.board();

    if state.is_game_over() {
        for player in Player::ALL {
            if board.side_total(player) != 0 {
                violations.push(InvariantViolation::new(format!(
                    "game over but {} still has {} stones in pits",
                    player,
                    board.side_total(player)
                )));
            }
        }

        let expected = expected_result(board.store(Player::One), board.store(Player::Two));
        match state.winner() {
            None => violations.push(InvariantViolation::new("game over without a result")),
            Some(result) if result != expected => {
                violations.push(InvariantViolation::new(format!(
                    "recorded result {result:?} but stores say {expected:?}"
                )));
            }
            Some(_) => {}
        }
    } else {
        if let Some(result) = state.winner() {
            violations.push(InvariantViolation::new(format!(
                "game in progress but result {result:?} recorded"
            )));
        }

        for player in Player::ALL {
            if board.side_is_empty(player) {
                violations.push(InvariantViolation::new(format!(
                    "{player} has no stones but the game was not ended"
                )));
            }
        }
    }

    violations
}

/// Check the invariants linking a state to the state that follows it.
#[must_use]
pub fn check_transition(before: &GameState, after: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let (total_before, total_after) = (before.board().total(), after.board().total());
    if total_before != total_after {
        violations.push(InvariantViolation::new(format!(
            "stone count changed from {total_before} to {total_after}"
        )));
    }

    if before.is_game_over() && before != after {
        violations.push(InvariantViolation::new("finished game was modified"));
    }

    violations
}

pub(crate) fn expected_result(player_one_store: u32, player_two_store: u32) -> GameResult {
    match player_one_store.cmp(&player_two_store) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    /// A state with `cells` forced onto it, bypassing the constructors' checks.
    fn forced(cells: [u32; 14]) -> GameState {
        let mut state = GameState::default();
        *state.board_mut() = Board::from_cells(cells);
        state
    }

    fn finished(cells: [u32; 14], result: GameResult) -> GameState {
        let mut state = forced(cells);
        state.finish(result);
        state
    }

    #[test]
    fn test_initial_state_is_clean() {
        assert!(check_invariants(&GameState::default()).is_empty());
    }

    #[test]
    fn test_finished_state_is_clean() {
        let state = finished(
            [0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 28],
            GameResult::Winner(Player::One),
        );
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn test_wrong_winner_detected() {
        let state = finished(
            [0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 28],
            GameResult::Winner(Player::Two),
        );
        assert_eq!(check_invariants(&state).len(), 1);
    }

    #[test]
    fn test_stones_left_after_game_over_detected() {
        let state = finished(
            [0, 0, 1, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 23],
            GameResult::Winner(Player::Two),
        );
        let violations = check_invariants(&state);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Player 2"));
    }

    #[test]
    fn test_unended_empty_side_detected() {
        let state = forced([0, 0, 0, 0, 0, 0, 24, 1, 0, 0, 0, 0, 0, 23]);
        assert_eq!(check_invariants(&state).len(), 1);
    }

    #[test]
    fn test_conservation_violation_detected() {
        let before = GameState::default();
        let after = GameState::with_board(Board::new(3), Player::Two).unwrap();

        let violations = check_transition(&before, &after);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().contains("48 to 36"));
    }

    #[test]
    fn test_expected_result() {
        assert_eq!(expected_result(25, 23), GameResult::Winner(Player::One));
        assert_eq!(expected_result(20, 28), GameResult::Winner(Player::Two));
        assert_eq!(expected_result(24, 24), GameResult::Draw);
    }
}
