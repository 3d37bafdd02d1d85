//! The authoritative move sequence of one game, plus the ledger view.

use crate::board::Position;
use crate::errors::{FenError, MoveError};
use crate::rules::{attempt_move, game_status, GameStatus, PlayedMove};
use crate::types::{Move, PieceKind};

/// Append-only record of applied moves. Owns the current position, the
/// SAN history and the hash history used for repetition detection. It is
/// discarded wholesale on reset; there is no partial rollback.
#[derive(Clone, Debug)]
pub struct GameRecord {
    start: Position,
    plies: Vec<PlayedMove>,
    hashes: Vec<u64>,
}

/// One numbered row of the move table: white ply, then black ply if the
/// game has advanced that far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerRow {
    pub num: u32,
    pub white: String,
    pub black: Option<String>,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRecord {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(start: Position) -> Self {
        let hash = start.position_hash();
        Self {
            start,
            plies: Vec::new(),
            hashes: vec![hash],
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn starting_position(&self) -> &Position {
        &self.start
    }

    pub fn current(&self) -> &Position {
        match self.plies.last() {
            Some(ply) => &ply.position,
            None => &self.start,
        }
    }

    pub fn ply_count(&self) -> usize {
        self.plies.len()
    }

    pub fn plies(&self) -> &[PlayedMove] {
        &self.plies
    }

    pub fn san_history(&self) -> Vec<String> {
        self.plies.iter().map(|p| p.san.clone()).collect()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.plies.last().map(|p| p.mv)
    }

    pub fn status(&self) -> GameStatus {
        game_status(self.current())
    }

    /// Current position seen at least three times, clocks ignored.
    pub fn is_threefold_repetition(&self) -> bool {
        match self.hashes.last() {
            Some(&cur) => self.hashes.iter().filter(|&&h| h == cur).count() >= 3,
            None => false,
        }
    }

    /// Validate and append one move. Rejected attempts leave the record
    /// untouched; once the game is over every attempt is rejected.
    pub fn attempt(
        &mut self,
        from: u8,
        to: u8,
        promo: Option<PieceKind>,
    ) -> Result<&PlayedMove, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        let played = attempt_move(self.current(), from, to, promo)?;
        self.hashes.push(played.position.position_hash());
        self.plies.push(played);
        let idx = self.plies.len() - 1;
        Ok(&self.plies[idx])
    }

    /// Numbered move table: row `n` holds plies `2n-1` and `2n`. Stable
    /// and order-preserving; recomputed on demand.
    pub fn ledger(&self) -> Vec<LedgerRow> {
        let mut rows: Vec<LedgerRow> = Vec::with_capacity(self.plies.len().div_ceil(2));
        for (i, ply) in self.plies.iter().enumerate() {
            if i % 2 == 0 {
                rows.push(LedgerRow {
                    num: (i / 2 + 1) as u32,
                    white: ply.san.clone(),
                    black: None,
                });
            } else if let Some(row) = rows.last_mut() {
                row.black = Some(ply.san.clone());
            }
        }
        rows
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
