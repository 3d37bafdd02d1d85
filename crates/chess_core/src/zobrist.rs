//! Zobrist hashing for repetition detection.
//!
//! The hash XORs fixed pseudo-random keys for each piece/square pair, the
//! side to move, each castling right and the en-passant file. The two
//! clocks are deliberately excluded: positions that differ only in clocks
//! must hash equal for threefold repetition to work.

use crate::board::Position;
use crate::types::{Color, Piece};

/// Key table, generated at compile time from a fixed xorshift64 seed so
/// hashes are reproducible across builds.
pub struct ZobristKeys {
    /// Indexed by [color][piece kind][square].
    pieces: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    /// [wk, wq, bk, bq]
    castling: [u64; 4],
    /// En-passant file a..h.
    en_passant: [u64; 8],
}

impl ZobristKeys {
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E3779B97F4A7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// Full-position hash. O(64); positions are hashed once per applied ply so
/// incremental updates are not needed here.
pub fn hash_position(pos: &Position) -> u64 {
    let mut h = 0u64;

    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq) {
            h ^= ZOBRIST.piece_key(pc, sq);
        }
    }

    if pos.side_to_move == Color::Black {
        h ^= ZOBRIST.side_to_move;
    }

    let rights = [
        pos.castling.wk,
        pos.castling.wq,
        pos.castling.bk,
        pos.castling.bq,
    ];
    for (i, &set) in rights.iter().enumerate() {
        if set {
            h ^= ZOBRIST.castling[i];
        }
    }

    if let Some(ep) = pos.en_passant {
        h ^= ZOBRIST.en_passant[(ep % 8) as usize];
    }

    h
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
