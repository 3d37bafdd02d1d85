//! Fallback move selection when the oracle is unusable.

use chess_core::{legal_moves, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Difficulty, MoveOracle, OracleError};

/// Uniform choice among the legal moves. `None` only when the position is
/// terminal. The RNG is injected so tests can seed it.
pub fn random_legal_move<R: Rng>(pos: &Position, rng: &mut R) -> Option<Move> {
    legal_moves(pos).choose(rng).copied()
}

/// Oracle stand-in for sessions without a configured endpoint: every call
/// reports unavailability, which routes the session straight to
/// [`random_legal_move`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineOracle;

impl MoveOracle for OfflineOracle {
    fn propose_move(
        &mut self,
        _fen: &str,
        _san_history: &[String],
        _difficulty: Difficulty,
    ) -> Result<String, OracleError> {
        Err(OracleError::Unavailable)
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod fallback_tests;
