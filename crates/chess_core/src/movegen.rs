//! Legal move generation.
//!
//! Pseudo-legal moves are generated per piece type, then filtered by
//! playing each one on a scratch position and rejecting those that leave
//! the mover's own king attacked.

use crate::board::Position;
use crate::types::*;

/// All legal moves for the side to move.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Legal moves originating from one square. The filter the board renderer
/// uses to highlight destinations.
pub fn legal_moves_from(pos: &Position, from: u8) -> Vec<Move> {
    legal_moves(pos)
        .into_iter()
        .filter(|m| m.from == from)
        .collect()
}

/// Buffer-reusing variant for hot paths (perft, legality filtering).
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let own_king_exposed = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !own_king_exposed
    });
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for sq in 0..64u8 {
        let pc = match pos.piece_at(sq) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, sq, pc.color, out),
            PieceKind::Knight => gen_steps(pos, sq, pc.color, &KNIGHT_STEPS, out),
            PieceKind::Bishop => gen_slider(pos, sq, pc.color, &DIAG_DIRS, out),
            PieceKind::Rook => gen_slider(pos, sq, pc.color, &ORTHO_DIRS, out),
            PieceKind::Queen => {
                gen_slider(pos, sq, pc.color, &DIAG_DIRS, out);
                gen_slider(pos, sq, pc.color, &ORTHO_DIRS, out);
            }
            PieceKind::King => {
                gen_steps(pos, sq, pc.color, &KING_STEPS, out);
                gen_castle(pos, sq, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for kind in PROMO_KINDS {
            out.push(Move::with_promo(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // Single and double pushes.
    if let Some(to) = square_at(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, promo_rank, out);

            if r == start_rank {
                if let Some(to2) = square_at(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // Diagonal captures, including en-passant.
    for df in [-1, 1] {
        if let Some(to) = square_at(f + df, r + dir) {
            match pos.piece_at(to) {
                Some(target) => {
                    if target.color != c {
                        push_pawn_move(from, to, promo_rank, out);
                    }
                }
                None => {
                    if pos.en_passant == Some(to) {
                        let mut mv = Move::new(from, to);
                        mv.is_en_passant = true;
                        out.push(mv);
                    }
                }
            }
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in steps {
        if let Some(to) = square_at(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = square_at(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // Rights are flags, not piece placement; still require the king on its
    // home square so the rook-hop geometry in make_move holds.
    let home: u8 = match c {
        Color::White => 4,
        Color::Black => 60,
    };
    if from != home {
        return;
    }

    // Castling out of check is never legal.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let (kingside, queenside) = match c {
        Color::White => (pos.castling.wk, pos.castling.wq),
        Color::Black => (pos.castling.bk, pos.castling.bq),
    };

    // Kingside: f/g files empty, transit and destination unattacked.
    if kingside
        && pos.piece_at(home + 1).is_none()
        && pos.piece_at(home + 2).is_none()
        && !pos.is_square_attacked(home + 1, enemy)
        && !pos.is_square_attacked(home + 2, enemy)
    {
        let mut mv = Move::new(home, home + 2);
        mv.is_castle = true;
        out.push(mv);
    }

    // Queenside: b/c/d files empty, c/d unattacked (b may be attacked).
    if queenside
        && pos.piece_at(home - 1).is_none()
        && pos.piece_at(home - 2).is_none()
        && pos.piece_at(home - 3).is_none()
        && !pos.is_square_attacked(home - 1, enemy)
        && !pos.is_square_attacked(home - 2, enemy)
    {
        let mut mv = Move::new(home, home - 2);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
