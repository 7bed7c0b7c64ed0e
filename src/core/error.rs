//! Error types.
//!
//! Rejected moves are no-ops at the public `apply_move` boundary; these
//! types carry the reason for callers that want it (`try_apply_move`,
//! `validate_move`) and for log output.

use derive_more::{Display, Error};

use super::player::Player;

/// Reason a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has ended; no further moves are accepted.
    #[display("game is already over")]
    GameOver,

    /// The index is not a board cell.
    #[display("index {_0} is off the board")]
    OutOfRange(#[error(not(source))] usize),

    /// Stores are never sown from.
    #[display("cell {_0} is a store")]
    StoreSelected(#[error(not(source))] usize),

    /// The pit belongs to the other player.
    #[display("pit {pit} does not belong to {player}")]
    NotYourPit {
        /// The player whose turn it is.
        player: Player,
        /// The pit that was chosen.
        pit: usize,
    },

    /// The pit holds no stones.
    #[display("pit {_0} is empty")]
    EmptyPit(#[error(not(source))] usize),

    /// The board holds more stones than a cell can count, so sowing could
    /// overflow.
    #[display("board holds {_0} stones, more than a cell can count")]
    BoardOverflow(#[error(not(source))] u64),
}

/// Invalid engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Pits must start with at least one stone.
    #[display("stones_per_pit must be at least 1")]
    ZeroStones,

    /// The board total would not fit in a cell counter.
    #[display("stones_per_pit {_0} overflows the board total")]
    TooManyStones(#[error(not(source))] u32),
}

/// A position that cannot be played from.
///
/// Returned by `GameState::with_board` and when deserializing a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum StateError {
    /// The board holds more stones than a cell can count.
    #[display("board holds {_0} stones, more than a cell can count")]
    TooManyStones(#[error(not(source))] u64),

    /// The flags and the board disagree, e.g. a recorded winner in a game
    /// that is not over.
    #[display("inconsistent game state: {reason}")]
    Inconsistent {
        /// What disagrees.
        reason: String,
    },
}
