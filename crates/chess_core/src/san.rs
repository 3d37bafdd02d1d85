//! Standard Algebraic Notation: generation and resolution.
//!
//! Generation produces fully disambiguated SAN with capture, promotion,
//! castling and check/mate markers. Resolution goes the other way: an
//! untrusted token (from an oracle reply or puzzle solution) is matched
//! against the legal move set, never applied directly.

use crate::board::Position;
use crate::movegen::{legal_moves, legal_moves_from};
use crate::types::*;

/// SAN for a legal move in `pos`. `mv` must come from this position's
/// legal move set; the output includes `+`/`#` suffixes computed by
/// applying the move.
pub fn san_for_move(pos: &Position, mv: Move) -> String {
    let piece = match pos.piece_at(mv.from) {
        Some(p) => p,
        None => return mv.coord(),
    };

    let mut san = String::new();

    if mv.is_castle {
        san.push_str(if mv.to > mv.from { "O-O" } else { "O-O-O" });
    } else {
        if let Some(letter) = piece.kind.san_letter() {
            san.push(letter);
            san.push_str(&disambiguation(pos, mv, piece));
        }

        let is_capture = pos.piece_at(mv.to).is_some() || mv.is_en_passant;
        if is_capture {
            if piece.kind == PieceKind::Pawn {
                san.push((b'a' + (mv.from % 8)) as char);
            }
            san.push('x');
        }

        san.push_str(&square_name(mv.to));

        if let Some(promo) = mv.promo {
            san.push('=');
            san.push(promo.san_letter().unwrap_or('?'));
        }
    }

    let next = pos.apply(mv);
    if next.in_check(next.side_to_move) {
        if legal_moves(&next).is_empty() {
            san.push('#');
        } else {
            san.push('+');
        }
    }

    san
}

/// Standard tie-break escalation: file, then rank, then both.
fn disambiguation(pos: &Position, mv: Move, piece: Piece) -> String {
    let rivals: Vec<Move> = legal_moves(pos)
        .into_iter()
        .filter(|m| {
            m.to == mv.to
                && m.from != mv.from
                && pos.piece_at(m.from).map(|p| p.kind) == Some(piece.kind)
        })
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let file = (b'a' + (mv.from % 8)) as char;
    let rank = (b'1' + (mv.from / 8)) as char;
    let file_shared = rivals.iter().any(|m| file_of(m.from) == file_of(mv.from));
    let rank_shared = rivals.iter().any(|m| rank_of(m.from) == rank_of(mv.from));

    if !file_shared {
        file.to_string()
    } else if !rank_shared {
        rank.to_string()
    } else {
        format!("{file}{rank}")
    }
}

/// Resolve a candidate token against the legal move set.
///
/// Accepts SAN (with or without `+`/`#`/`=`, `0-0` spelling included) and
/// coordinate pairs (`e2e4`, `e2-e4`, `e7e8q`). Returns `None` for
/// anything that does not name a legal move; callers treat that the same
/// as an empty reply.
pub fn resolve_san(pos: &Position, token: &str) -> Option<Move> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(mv) = resolve_coord(pos, trimmed) {
        return Some(mv);
    }

    let wanted = normalize(trimmed);
    if wanted.is_empty() {
        return None;
    }
    legal_moves(pos)
        .into_iter()
        .find(|&m| normalize(&san_for_move(pos, m)) == wanted)
}

/// Strip decorations that do not change which move is meant.
fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '+' | '#' | '=' | '!' | '?' => {}
            // Castling spelled with zeros.
            '0' => out.push('O'),
            _ => out.push(c),
        }
    }
    out
}

fn resolve_coord(pos: &Position, text: &str) -> Option<Move> {
    let cleaned: String = text.chars().filter(|&c| c != '-').collect();
    if !(4..=5).contains(&cleaned.len()) {
        return None;
    }

    let from = parse_square(cleaned.get(0..2)?)?;
    let to = parse_square(cleaned.get(2..4)?)?;
    let promo = match cleaned.chars().nth(4) {
        Some(c) => Some(PieceKind::from_promo_char(c)?),
        None => None,
    };

    let candidates: Vec<Move> = legal_moves_from(pos, from)
        .into_iter()
        .filter(|m| m.to == to)
        .collect();

    match promo {
        Some(kind) => candidates.into_iter().find(|m| m.promo == Some(kind)),
        // A bare pair on a promoting move picks the queen, matching the
        // puzzle input convention.
        None if candidates.len() > 1 => candidates
            .into_iter()
            .find(|m| m.promo.is_none() || m.promo == Some(PieceKind::Queen)),
        None => candidates.into_iter().next(),
    }
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
