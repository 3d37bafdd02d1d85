//! Move attempt protocol and game-end classification.
//!
//! `attempt_move` is the single gate between untrusted input (board
//! clicks, oracle replies, puzzle submissions) and a position change. It
//! is pure: the input position is untouched either way.

use crate::board::Position;
use crate::errors::MoveError;
use crate::movegen::{legal_moves, legal_moves_from};
use crate::san::san_for_move;
use crate::types::{Color, Move, PieceKind};

/// Terminal classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    FiftyMoveDraw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::InsufficientMaterial | GameStatus::FiftyMoveDraw
        )
    }
}

/// Checkmate iff the side to move has no legal moves and is in check;
/// stalemate iff no legal moves without check. Draw conditions are
/// evaluated on the position alone, independent of how it was reached.
pub fn game_status(pos: &Position) -> GameStatus {
    if legal_moves(pos).is_empty() {
        if pos.in_check(pos.side_to_move) {
            GameStatus::Checkmate {
                winner: pos.side_to_move.other(),
            }
        } else {
            GameStatus::Stalemate
        }
    } else if pos.is_fifty_move_draw() {
        GameStatus::FiftyMoveDraw
    } else if pos.is_insufficient_material() {
        GameStatus::InsufficientMaterial
    } else {
        GameStatus::Ongoing
    }
}

/// An accepted move: the move itself, its SAN, and the successor position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    pub san: String,
    pub position: Position,
}

/// Validate and apply a candidate move.
///
/// A pawn reaching the last rank without `promo` is rejected with
/// [`MoveError::PromotionRequired`]; the caller re-invokes with the piece
/// supplied. Supplying `promo` for any other move is also rejected.
pub fn attempt_move(
    pos: &Position,
    from: u8,
    to: u8,
    promo: Option<PieceKind>,
) -> Result<PlayedMove, MoveError> {
    let owns_from = pos
        .piece_at(from)
        .map(|p| p.color == pos.side_to_move)
        .unwrap_or(false);
    if !owns_from {
        return Err(MoveError::NotYourPiece(from));
    }

    let candidates: Vec<Move> = legal_moves_from(pos, from)
        .into_iter()
        .filter(|m| m.to == to)
        .collect();
    if candidates.is_empty() {
        return Err(MoveError::Illegal { from, to });
    }

    // Either every candidate for this from/to pair promotes or none does.
    let promoting = candidates[0].promo.is_some();
    let mv = match (promoting, promo) {
        (true, None) => return Err(MoveError::PromotionRequired { from, to }),
        (true, Some(kind)) => candidates
            .into_iter()
            .find(|m| m.promo == Some(kind))
            .ok_or(MoveError::Illegal { from, to })?,
        (false, Some(_)) => return Err(MoveError::UnexpectedPromotion),
        (false, None) => candidates[0],
    };

    let san = san_for_move(pos, mv);
    let position = pos.apply(mv);
    Ok(PlayedMove { mv, san, position })
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
