//! # rust-mancala
//!
//! A deterministic rules engine for Kalah, the six-pit Mancala variant.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `apply_move` takes a state and returns a new one.
//!    Nothing is mutated behind the caller's back, so any state can be kept,
//!    compared, replayed or logged.
//!
//! 2. **Rejections Are No-ops**: an illegal move returns the input state
//!    unchanged. `try_apply_move` reports the reason for callers that need it.
//!
//! 3. **Atomic Moves**: sowing, capture, turn handoff and the end-of-game
//!    sweep all happen inside one call, in that order. No intermediate board
//!    is ever observable.
//!
//! ## Board Layout
//!
//! 14 cells in sowing order: 0-5 Player 2's pits, 6 Player 2's store,
//! 7-12 Player 1's pits, 13 Player 1's store.
//!
//! ## Modules
//!
//! - `core`: players, board, state, move reports, configuration, errors
//! - `rules`: `RulesEngine` trait, game results, invariant checks
//! - `games`: the Kalah implementation
//!
//! ## Example
//!
//! ```
//! use rust_mancala::core::Player;
//!
//! let state = rust_mancala::reset();
//! let state = rust_mancala::apply_move(&state, 9); // lands in the store
//! assert_eq!(state.current_player(), Player::One);
//!
//! let state = rust_mancala::apply_move(&state, 7);
//! assert_eq!(state.current_player(), Player::Two);
//! ```

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Player, Board, RulesConfig,
    Capture, MoveOutcome,
    GameState, GameStatus,
    ConfigError, MoveError, StateError,
};

pub use crate::rules::{GameResult, MoveList, RulesEngine};

pub use crate::games::kalah::{apply_move, reset, Kalah};
