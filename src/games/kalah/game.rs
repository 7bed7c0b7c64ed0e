//! Kalah rules implementation.

use tracing::{debug, instrument, trace};

use crate::core::{
    Board, Capture, ConfigError, GameState, MoveError, MoveOutcome, Player, RulesConfig, BOARD_SIZE,
};
use crate::rules::invariants::{check_invariants, check_transition};
use crate::rules::{GameResult, RulesEngine};

/// The Kalah rules: 6 pits and a store per side, sowing counter-clockwise.
///
/// A move runs these steps in order, all inside one call:
/// 1. sow the chosen pit, skipping the opponent's store
/// 2. capture if the last stone landed in an empty pit of the mover's
/// 3. hand the turn over unless the last stone landed in the mover's store
/// 4. end the game if either side is out of stones
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Kalah {
    config: RulesConfig,
}

impl Kalah {
    /// Create an engine with a custom configuration.
    pub fn with_config(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl RulesEngine for Kalah {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn initial_state(&self) -> GameState {
        GameState::new(&self.config)
    }

    fn validate_move(&self, state: &GameState, pit: usize) -> Result<(), MoveError> {
        let player = state.current_player();

        if state.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !state.board().within_capacity() {
            return Err(MoveError::BoardOverflow(state.board().total()));
        }
        if pit >= BOARD_SIZE {
            return Err(MoveError::OutOfRange(pit));
        }
        if Board::is_store(pit) {
            return Err(MoveError::StoreSelected(pit));
        }
        if !player.owns_pit(pit) {
            return Err(MoveError::NotYourPit { player, pit });
        }
        if state.board()[pit] == 0 {
            return Err(MoveError::EmptyPit(pit));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self, state), fields(player = %state.current_player()))]
    fn try_apply_move(
        &self,
        state: &GameState,
        pit: usize,
    ) -> Result<(GameState, MoveOutcome), MoveError> {
        self.validate_move(state, pit)?;

        let player = state.current_player();
        let mut next = state.clone();

        let (sown, landing) = sow(next.board_mut(), player, pit);
        let capture = capture(next.board_mut(), player, landing);

        let extra_turn = landing == player.store_index();
        if extra_turn {
            debug!(landing, "last stone in own store, extra turn");
        } else {
            next.set_current_player(player.opponent());
        }

        let result = next.settle();

        debug_assert!(
            check_invariants(&next).is_empty(),
            "{:?}",
            check_invariants(&next)
        );
        debug_assert!(
            check_transition(state, &next).is_empty(),
            "{:?}",
            check_transition(state, &next)
        );

        let outcome = MoveOutcome {
            player,
            pit,
            sown,
            landing,
            capture,
            extra_turn,
            result,
        };

        Ok((next, outcome))
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.is_game_over() {
            state.winner()
        } else {
            None
        }
    }
}

/// The cell after `index` in sowing order, never stopping on `skipped`.
fn next_cell(index: usize, skipped: usize) -> usize {
    let next = (index + 1) % BOARD_SIZE;
    if next == skipped {
        (next + 1) % BOARD_SIZE
    } else {
        next
    }
}

/// Empty `pit` and sow its stones one per cell.
///
/// Returns the number of stones sown and the landing index.
fn sow(board: &mut Board, player: Player, pit: usize) -> (u32, usize) {
    let stones = board.take(pit);
    let skipped = player.opponent().store_index();

    let mut index = pit;
    for _ in 0..stones {
        index = next_cell(index, skipped);
        board.add(index, 1);
    }

    trace!(pit, stones, landing = index, "sowed");
    (stones, index)
}

/// Apply the capture rule for a sowing that ended at `landing`.
fn capture(board: &mut Board, player: Player, landing: usize) -> Option<Capture> {
    if !player.owns_pit(landing) || board[landing] != 1 {
        return None;
    }

    let opposite = Board::opposite(landing)?;
    if board[opposite] == 0 {
        return None;
    }

    let stones = board.take(opposite) + board.take(landing);
    board.add(player.store_index(), stones);

    debug!(pit = landing, opposite, stones, "capture");
    Some(Capture {
        pit: landing,
        opposite,
        stones,
    })
}
