//! Game state.
//!
//! ## GameState
//!
//! Everything needed to continue a game:
//! - The board
//! - Whose turn it is
//! - Whether the game has ended, and how
//!
//! States are values. The engine takes `&GameState` and returns a new one,
//! so a caller can keep any earlier state around for inspection or replay.
//!
//! ## GameStatus
//!
//! The two-state machine view of a `GameState`: in progress with a player to
//! move, or over with a result.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::Board;
use super::config::RulesConfig;
use super::error::StateError;
use super::player::Player;
use crate::rules::invariants::{check_invariants, expected_result};
use crate::rules::GameResult;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues; this player moves next.
    InProgress(Player),
    /// The game has ended with this result.
    GameOver(GameResult),
}

/// A complete, self-contained Kalah position.
///
/// Every constructor yields a playable or finished position: a board with an
/// empty side is settled on the spot, and deserialized snapshots are checked
/// before they are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<GameResult>,
}

impl GameState {
    /// Create the starting position for `config`.
    ///
    /// ## Defaults
    ///
    /// - every pit holds `config.stones_per_pit`, stores are empty
    /// - Player One moves first
    ///
    /// The config is not validated here. Zero stones per pit gives a game
    /// that is already drawn; a board too large to count is refused by the
    /// engine move by move.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        let mut state = Self {
            board: Board::new(config.stones_per_pit),
            current_player: Player::One,
            game_over: false,
            winner: None,
        };
        state.settle();
        state
    }

    /// Create a position from an arbitrary board.
    ///
    /// Useful for puzzles and tests. No particular stone total is required,
    /// but it must fit in a cell. If either side is already empty the game
    /// ends immediately, exactly as it would after a move.
    ///
    /// ```
    /// use rust_mancala::core::{Board, GameState, Player};
    ///
    /// let board = Board::from_cells([1, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 27]);
    /// let state = GameState::with_board(board, Player::One).unwrap();
    /// assert!(state.is_game_over());
    /// assert_eq!(state.score(Player::Two), 21);
    /// ```
    pub fn with_board(board: Board, current_player: Player) -> Result<Self, StateError> {
        if !board.within_capacity() {
            return Err(StateError::TooManyStones(board.total()));
        }

        let mut state = Self {
            board,
            current_player,
            game_over: false,
            winner: None,
        };
        state.settle();
        Ok(state)
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.winner
    }

    /// The result in numeric form: 1 or 2 for a winner, 0 for a tie,
    /// `None` while the game is in progress.
    #[must_use]
    pub fn winner_code(&self) -> Option<u8> {
        self.winner.map(GameResult::code)
    }

    /// A player's current store total.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.board.store(player)
    }

    /// State machine view of this position.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(result) if self.game_over => GameStatus::GameOver(result),
            _ => GameStatus::InProgress(self.current_player),
        }
    }

    // === Transitions (engine only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(crate) fn finish(&mut self, result: GameResult) {
        self.game_over = true;
        self.winner = Some(result);
    }

    /// End the game if either side has run out of stones.
    ///
    /// Both sides are swept into their owners' stores, then the stores decide
    /// the result. The board must be within capacity.
    pub(crate) fn settle(&mut self) -> Option<GameResult> {
        if !Player::ALL.iter().any(|&player| self.board.side_is_empty(player)) {
            return None;
        }

        for player in Player::ALL {
            let swept = self.board.sweep_side(player);
            if swept > 0 {
                debug!(%player, swept, "swept remaining stones");
            }
        }

        let player_one = self.board.store(Player::One);
        let player_two = self.board.store(Player::Two);
        let result = expected_result(player_one, player_two);
        self.finish(result);

        info!(player_one, player_two, ?result, "game over");
        Some(result)
    }
}

/// Wire form of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct GameStateRecord {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<GameResult>,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = StateError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        if !record.board.within_capacity() {
            return Err(StateError::TooManyStones(record.board.total()));
        }

        let state = Self {
            board: record.board,
            current_player: record.current_player,
            game_over: record.game_over,
            winner: record.winner,
        };

        let violations = check_invariants(&state);
        if violations.is_empty() {
            Ok(state)
        } else {
            let reason = violations
                .iter()
                .map(|violation| violation.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Err(StateError::Inconsistent { reason })
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&RulesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::default();

        assert_eq!(
            state.board().cells(),
            &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]
        );
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.winner_code(), None);
        assert_eq!(state.status(), GameStatus::InProgress(Player::One));
    }

    #[test]
    fn test_new_state_with_config() {
        let state = GameState::new(&RulesConfig::default().with_stones_per_pit(5));
        assert_eq!(state.board().total(), 60);
    }

    #[test]
    fn test_new_state_with_zero_stones_is_finished() {
        let state = GameState::new(&RulesConfig::default().with_stones_per_pit(0));
        assert_eq!(state.status(), GameStatus::GameOver(GameResult::Draw));
    }

    #[test]
    fn test_with_board() {
        let board = Board::from_cells([0, 0, 0, 0, 0, 1, 20, 1, 0, 0, 0, 0, 0, 26]);
        let state = GameState::with_board(board, Player::Two).unwrap();

        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.score(Player::Two), 20);
        assert_eq!(state.score(Player::One), 26);
        assert_eq!(state.status(), GameStatus::InProgress(Player::Two));
    }

    #[test]
    fn test_with_board_settles_empty_side() {
        // Player One has nothing left to sow.
        let board = Board::from_cells([1, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 27]);
        let state = GameState::with_board(board, Player::One).unwrap();

        assert!(state.is_game_over());
        assert_eq!(state.board().cells(), &[0, 0, 0, 0, 0, 0, 21, 0, 0, 0, 0, 0, 0, 27]);
        assert_eq!(state.status(), GameStatus::GameOver(GameResult::Winner(Player::One)));
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn test_with_board_rejects_uncountable_total() {
        let mut cells = [0; 14];
        cells[0] = u32::MAX;
        cells[8] = 1;
        cells[10] = 1;

        let err = GameState::with_board(Board::from_cells(cells), Player::One).unwrap_err();
        assert_eq!(err, StateError::TooManyStones(u64::from(u32::MAX) + 2));
    }

    #[test]
    fn test_settle_leaves_live_game_alone() {
        let mut state = GameState::default();
        assert_eq!(state.settle(), None);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_finish() {
        let mut state = GameState::default();
        state.finish(GameResult::Draw);

        assert!(state.is_game_over());
        assert_eq!(state.winner_code(), Some(0));
        assert_eq!(state.status(), GameStatus::GameOver(GameResult::Draw));

        let mut state = GameState::default();
        state.finish(GameResult::Winner(Player::Two));
        assert_eq!(state.winner_code(), Some(2));
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::default();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_result_in_live_game() {
        let mut value = serde_json::to_value(GameState::default()).unwrap();
        value["winner"] = serde_json::json!("Draw");

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("inconsistent game state"));
    }

    #[test]
    fn test_deserialize_rejects_finished_game_with_stones_in_pits() {
        let mut value = serde_json::to_value(GameState::default()).unwrap();
        value["game_over"] = serde_json::json!(true);
        value["winner"] = serde_json::json!("Draw");

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("still has 24 stones"));
    }

    #[test]
    fn test_deserialize_rejects_uncountable_total() {
        let mut value = serde_json::to_value(GameState::default()).unwrap();
        value["board"]["cells"][0] = serde_json::json!(u32::MAX);

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("more than a cell can count"));
    }

    #[test]
    fn test_finished_state_round_trips() {
        let board = Board::from_cells([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]);
        let state = GameState::with_board(board, Player::Two).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.status(), GameStatus::GameOver(GameResult::Draw));
        assert_eq!(state, deserialized);
    }
}
