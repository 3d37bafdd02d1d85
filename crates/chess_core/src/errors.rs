//! Engine error taxonomy.
//!
//! Every error here is local and recoverable: a failed parse or a rejected
//! move never touches existing state.

use thiserror::Error;

use crate::types::square_name;

fn sq(square: &u8) -> String {
    square_name(*square)
}

/// Malformed FEN input. Fatal to the parse call only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 6 space-separated fields, found {0}")]
    FieldCount(usize),
    #[error("board section must describe 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank '{0}' does not describe exactly 8 files")]
    RankWidth(String),
    #[error("invalid piece character '{0}'")]
    PieceChar(char),
    #[error("invalid side-to-move token '{0}'")]
    SideToMove(String),
    #[error("invalid castling token '{0}'")]
    Castling(String),
    #[error("invalid en-passant field '{0}'")]
    EnPassant(String),
    #[error("invalid clock field '{0}'")]
    Clock(String),
    #[error("each side must have exactly one king")]
    KingCount,
}

/// A rejected move attempt. The position is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece of the side to move on {}", sq(.0))]
    NotYourPiece(u8),
    #[error("{} to {} is not a legal move", sq(.from), sq(.to))]
    Illegal { from: u8, to: u8 },
    /// Two-phase protocol signal: the caller must re-invoke with a
    /// promotion piece supplied.
    #[error("pawn move {} to {} requires a promotion piece", sq(.from), sq(.to))]
    PromotionRequired { from: u8, to: u8 },
    #[error("promotion piece supplied for a non-promoting move")]
    UnexpectedPromotion,
    #[error("the game is already over")]
    GameOver,
}
