//! Puzzle solve sessions.
//!
//! Each attempt wraps one fresh `GameRecord` seeded from the puzzle FEN.
//! A submitted move is validated and applied *speculatively* to obtain
//! its SAN, compared against the accepted answers, and committed only on
//! a match: a wrong move is never observable on the board, and the
//! verdict and board state always change together.

use tracing::debug;

use chess_core::{
    attempt_move, square_name, GameRecord, MoveError, PieceKind, Position,
};

use crate::catalog::{validate, Puzzle};
use crate::CatalogError;

/// Tri-state verdict for the current attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    Solving,
    /// Terminal for this attempt; further submissions are ignored.
    Correct,
    /// Transient; presentation clears it back to `Solving` after its
    /// cool-down via [`PuzzleSession::clear_verdict`].
    Incorrect,
}

pub struct PuzzleSession {
    puzzles: Vec<Puzzle>,
    /// Validated start positions, parallel to `puzzles`.
    starts: Vec<Position>,
    index: usize,
    record: GameRecord,
    status: SolveStatus,
}

impl PuzzleSession {
    /// Build a session over a validated catalog. Every FEN is parsed up
    /// front so navigation never fails later.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, CatalogError> {
        validate(&puzzles)?;
        let starts = puzzles
            .iter()
            .map(|p| Position::from_fen(&p.fen))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| CatalogError::BadFen {
                id: String::new(),
                source,
            })?;

        let record = GameRecord::from_position(starts[0].clone());
        Ok(Self {
            puzzles,
            starts,
            index: 0,
            record,
            status: SolveStatus::Solving,
        })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(crate::catalog::builtin())
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzles[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    pub fn position(&self) -> &Position {
        self.record.current()
    }

    pub fn fen(&self) -> String {
        self.record.current().to_fen()
    }

    /// Submit a candidate move. Promotion defaults to a queen, matching
    /// the board-input convention. Illegal moves are rejected without any
    /// state change; legal moves are compared against the accepted
    /// answers and committed only when they match.
    pub fn submit(&mut self, from: u8, to: u8) -> Result<SolveStatus, MoveError> {
        if self.status == SolveStatus::Correct {
            return Ok(SolveStatus::Correct);
        }

        let pos = self.record.current();
        let (played, promo) = match attempt_move(pos, from, to, None) {
            Ok(p) => (p, None),
            Err(MoveError::PromotionRequired { .. }) => {
                let promo = Some(PieceKind::Queen);
                (attempt_move(pos, from, to, promo)?, promo)
            }
            Err(e) => return Err(e),
        };

        let coord_pair = format!("{}{}", square_name(from), square_name(to));
        let matched = self.puzzle().solution.iter().any(|answer| {
            let answer = answer.trim();
            answer == played.san
                || strip_suffix(answer) == strip_suffix(&played.san)
                || answer == coord_pair
        });

        if matched {
            // Commit the speculative move; same inputs, same outcome.
            self.record.attempt(from, to, promo)?;
            self.status = SolveStatus::Correct;
        } else {
            debug!(san = %played.san, "puzzle move rejected by solution set");
            self.status = SolveStatus::Incorrect;
        }
        Ok(self.status)
    }

    /// `Incorrect` is transient: presentation calls this when the
    /// cool-down ends. `Correct` stays terminal.
    pub fn clear_verdict(&mut self) {
        if self.status == SolveStatus::Incorrect {
            self.status = SolveStatus::Solving;
        }
    }

    pub fn next(&mut self) {
        self.goto((self.index + 1) % self.puzzles.len());
    }

    pub fn prev(&mut self) {
        self.goto((self.index + self.puzzles.len() - 1) % self.puzzles.len());
    }

    /// Jump to a puzzle, discarding the current attempt wholesale.
    pub fn goto(&mut self, index: usize) {
        self.index = index % self.puzzles.len();
        self.record = GameRecord::from_position(self.starts[self.index].clone());
        self.status = SolveStatus::Solving;
    }
}

/// Check and mate markers describe the position after the move, not the
/// move itself; answers match with or without them.
fn strip_suffix(san: &str) -> &str {
    san.trim_end_matches(['+', '#'])
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
