//! Board representation and move application.
//!
//! `Position` is a per-ply snapshot: mailbox board, side to move, castling
//! rights, en-passant target and the two clocks. It is a plain value type;
//! `apply` produces a successor without touching the original, while
//! `make_move`/`unmake_move` mutate in place for the movegen legality
//! filter and perft.

use crate::errors::FenError;
use crate::types::*;
use crate::zobrist;

/// The four independent castling permissions. Tracked by flag, never by
/// piece placement: a king that returns to its home square does not regain
/// rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    fn parse(token: &str) -> Result<Self, FenError> {
        let mut rights = Self::none();
        if token == "-" {
            return Ok(rights);
        }
        if token.is_empty() {
            return Err(FenError::Castling(token.to_string()));
        }
        for c in token.chars() {
            match c {
                'K' => rights.wk = true,
                'Q' => rights.wq = true,
                'k' => rights.bk = true,
                'q' => rights.bq = true,
                _ => return Err(FenError::Castling(token.to_string())),
            }
        }
        Ok(rights)
    }

    fn token(&self) -> String {
        let mut s = String::new();
        if self.wk {
            s.push('K');
        }
        if self.wq {
            s.push('Q');
        }
        if self.bk {
            s.push('k');
        }
        if self.bq {
            s.push('q');
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square passed over by a double pawn push, valid for exactly one ply.
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// State needed to reverse a `make_move`.
#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>,
    pub ep_captured_sq: Option<u8>,
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Strict six-field FEN parse. Any malformed field fails the whole
    /// parse; existing positions are never affected.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let rank: i8 = 7 - rank_idx as i8;
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 || d > 8 {
                        return Err(FenError::PieceChar(ch));
                    }
                    file += d as i8;
                } else {
                    let piece =
                        Piece::from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;
                    match square_at(file, rank) {
                        Some(sq) => board[sq as usize] = Some(piece),
                        None => return Err(FenError::RankWidth(rank_str.to_string())),
                    }
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth(rank_str.to_string()));
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth(rank_str.to_string()));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let castling = CastlingRights::parse(parts[2])?;

        let en_passant = match parts[3] {
            "-" => None,
            sq => Some(parse_square(sq).ok_or_else(|| FenError::EnPassant(sq.to_string()))?),
        };

        let halfmove_clock: u32 = parts[4]
            .parse()
            .map_err(|_| FenError::Clock(parts[4].to_string()))?;
        let fullmove_number: u32 = parts[5]
            .parse()
            .map_err(|_| FenError::Clock(parts[5].to_string()))?;

        let pos = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };

        for color in [Color::White, Color::Black] {
            let kings = pos
                .board
                .iter()
                .flatten()
                .filter(|p| p.color == color && p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(FenError::KingCount);
            }
        }

        Ok(pos)
    }

    /// Inverse of `from_fen`: `Position::from_fen(&p.to_fen()) == Ok(p)`
    /// for every reachable position.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(80);

        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let sq = (rank * 8 + file) as usize;
                match self.board[sq] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        out.push(' ');
        out.push_str(&self.castling.token());
        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&square_name(sq)),
            None => out.push('-'),
        }
        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.board[i] {
                if pc.color == c && pc.kind == PieceKind::King {
                    return Some(i as u8);
                }
            }
        }
        None
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // Pawns attack the target from the rank behind it (relative to
        // their own direction of travel).
        let pawn_steps: [(i8, i8); 2] = match by {
            Color::White => [(-1, -1), (1, -1)],
            Color::Black => [(-1, 1), (1, 1)],
        };
        if self.probe(tf, tr, &pawn_steps, by, |k| k == PieceKind::Pawn) {
            return true;
        }
        if self.probe(tf, tr, &KNIGHT_STEPS, by, |k| k == PieceKind::Knight) {
            return true;
        }
        if self.probe(tf, tr, &KING_STEPS, by, |k| k == PieceKind::King) {
            return true;
        }

        self.slide_probe(tf, tr, &DIAG_DIRS, by, |k| {
            k == PieceKind::Bishop || k == PieceKind::Queen
        }) || self.slide_probe(tf, tr, &ORTHO_DIRS, by, |k| {
            k == PieceKind::Rook || k == PieceKind::Queen
        })
    }

    fn probe(
        &self,
        tf: i8,
        tr: i8,
        steps: &[(i8, i8)],
        by: Color,
        matches: impl Fn(PieceKind) -> bool,
    ) -> bool {
        for &(df, dr) in steps {
            if let Some(s) = square_at(tf + df, tr + dr) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && matches(pc.kind) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn slide_probe(
        &self,
        tf: i8,
        tr: i8,
        dirs: &[(i8, i8)],
        by: Color,
        matches: impl Fn(PieceKind) -> bool,
    ) -> bool {
        for &(df, dr) in dirs {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(s) = square_at(f, r) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && matches(pc.kind) {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        false
    }

    /// Pure application: clones and plays the move, leaving `self` intact.
    pub fn apply(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);
        let prev_castling = self.castling;
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;
        let mut reset_clock = moved.kind == PieceKind::Pawn || captured.is_some();

        // En-passant removes the pawn from its origin square, one rank
        // behind the destination.
        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let back: i8 = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = square_at(file_of(to), rank_of(to) + back) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_clock = true;
            }
        }

        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        if moved.kind == PieceKind::Pawn {
            let r = rank_of(to);
            if (moved.color == Color::White && r == 7) || (moved.color == Color::Black && r == 0) {
                let promo = mv.promo.unwrap_or(PieceKind::Queen);
                self.set_piece(to, Some(Piece::new(moved.color, promo)));
            }
        }

        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            // Rook hop determined by the king's destination.
            let hop = match (moved.color, from, to) {
                (Color::White, 4, 6) => Some((7u8, 5u8)),
                (Color::White, 4, 2) => Some((0u8, 3u8)),
                (Color::Black, 60, 62) => Some((63u8, 61u8)),
                (Color::Black, 60, 58) => Some((56u8, 59u8)),
                _ => None,
            };
            if let Some((rf, rt)) = hop {
                let rook = self.piece_at(rf).expect("no rook on castling square");
                self.set_piece(rf, None);
                self.set_piece(rt, Some(rook));
                rook_move = Some((rf, rt));
            }
        }

        self.update_castling_rights(moved, from, to, captured);

        // A double pawn push exposes the passed-over square for one ply.
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(from);
            let tr = rank_of(to);
            if (moved.color == Color::White && fr == 1 && tr == 3)
                || (moved.color == Color::Black && fr == 6 && tr == 4)
            {
                self.en_passant = square_at(file_of(from), (fr + tr) / 2);
            }
        }

        self.halfmove_clock = if reset_clock {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    fn update_castling_rights(
        &mut self,
        moved: Piece,
        from: u8,
        to: u8,
        captured: Option<Piece>,
    ) {
        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 0 {
                        self.castling.wq = false;
                    }
                    if from == 7 {
                        self.castling.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 56 {
                        self.castling.bq = false;
                    }
                    if from == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }

        // A rook captured on its home square also loses the right.
        if let Some(cp) = captured {
            if cp.kind == PieceKind::Rook {
                match cp.color {
                    Color::White => {
                        if to == 0 {
                            self.castling.wq = false;
                        }
                        if to == 7 {
                            self.castling.wk = false;
                        }
                    }
                    Color::Black => {
                        if to == 56 {
                            self.castling.bq = false;
                        }
                        if to == 63 {
                            self.castling.bk = false;
                        }
                    }
                }
            }
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let from = mv.from;
        let to = mv.to;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt).expect("castling rook missing on unmake");
            self.set_piece(rt, None);
            self.set_piece(rf, Some(rook));
        }

        // Promotions revert to the pawn that moved.
        self.set_piece(to, None);
        self.set_piece(from, Some(undo.moved_piece));

        if mv.is_en_passant {
            if let Some(cs) = undo.ep_captured_sq {
                self.set_piece(cs, undo.captured);
            }
        } else {
            self.set_piece(to, undo.captured);
        }
    }

    /// Fifty-move rule: 100 halfmoves without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Dead positions: K v K, K+B v K, K+N v K, and K+B v K+B with both
    /// bishops on the same square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut others: Vec<(Piece, u8)> = Vec::new();
        for sq in 0..64u8 {
            if let Some(pc) = self.piece_at(sq) {
                if pc.kind != PieceKind::King {
                    others.push((pc, sq));
                }
            }
        }

        match others.as_slice() {
            [] => true,
            [(pc, _)] => pc.kind == PieceKind::Bishop || pc.kind == PieceKind::Knight,
            [(a, asq), (b, bsq)] => {
                a.kind == PieceKind::Bishop
                    && b.kind == PieceKind::Bishop
                    && a.color != b.color
                    && square_color(*asq) == square_color(*bsq)
            }
            _ => false,
        }
    }

    /// Zobrist hash of board, side to move, castling rights and en-passant
    /// file. Clocks are excluded so repeated positions compare equal.
    pub fn position_hash(&self) -> u64 {
        zobrist::hash_position(self)
    }
}

fn square_color(sq: u8) -> bool {
    (file_of(sq) + rank_of(sq)) % 2 == 0
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
