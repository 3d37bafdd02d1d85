//! Chess rules engine.
//!
//! A deterministic, side-effect-free state machine over chess positions:
//! legal move generation, move application with the two-phase promotion
//! protocol, FEN and SAN in both directions, game-end detection, and the
//! append-only [`GameRecord`] with its numbered ledger view.
//!
//! The crate performs no I/O and never blocks. Everything that consumes
//! untrusted input (oracle replies, board clicks, puzzle solutions) goes
//! through [`attempt_move`] or [`resolve_san`].

pub mod board;
pub mod errors;
pub mod movegen;
pub mod perft;
pub mod record;
pub mod rules;
pub mod san;
pub mod types;
pub mod zobrist;

pub use board::{CastlingRights, Position, Undo};
pub use errors::{FenError, MoveError};
pub use movegen::{legal_moves, legal_moves_from, legal_moves_into};
pub use perft::perft;
pub use record::{GameRecord, LedgerRow};
pub use rules::{attempt_move, game_status, GameStatus, PlayedMove};
pub use san::{resolve_san, san_for_move};
pub use types::{
    file_of, parse_square, rank_of, square_at, square_name, Color, Move, Piece, PieceKind,
};
pub use zobrist::hash_position;
