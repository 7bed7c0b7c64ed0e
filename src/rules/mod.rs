//! Rules engine trait and invariant checks.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each game state
//! - How moves transform state
//! - Win/draw conditions
//!
//! `invariants` holds the properties every reachable state must satisfy.

pub mod engine;
pub mod invariants;

pub use engine::{GameResult, MoveList, RulesEngine};
pub use invariants::{check_invariants, check_transition, InvariantViolation};
