//! One human-vs-oracle game.
//!
//! The session serializes input around the record: board input is ignored
//! while the oracle is thinking or when it is not the player's turn, a
//! promotion is completed through the two-phase protocol, and oracle
//! replies are resolved against the legal move set with a random-legal
//! fallback, so every applied move is a legal successor.

use std::collections::HashSet;

use rand::Rng;
use tracing::{info, warn};

use chess_core::{
    legal_moves_from, resolve_san, Color, GameRecord, GameStatus, LedgerRow, MoveError,
    PieceKind,
};
use move_oracle::{random_legal_move, Difficulty, MoveOracle};

use crate::config::{SessionConfig, ThinkPolicy};

/// Why a finished game is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoves,
    Repetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw(DrawReason),
}

impl SessionOutcome {
    pub fn is_over(self) -> bool {
        self != SessionOutcome::InProgress
    }
}

/// What happened to one piece of board input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveReply {
    /// Applied; carries the SAN written to the ledger.
    Played(String),
    /// Parked pending a promotion piece; complete with [`GameSession::promote`].
    PromotionPending,
    /// A square was selected; destinations are in `legal_targets`.
    Selected(u8),
    /// Input ignored: not the player's turn, oracle thinking, or game over.
    Ignored,
}

pub struct GameSession {
    record: GameRecord,
    player_color: Color,
    difficulty: Difficulty,
    think: ThinkPolicy,
    selected_square: Option<u8>,
    legal_targets: HashSet<u8>,
    pending_promotion: Option<(u8, u8)>,
    oracle_thinking: bool,
}

impl GameSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            record: GameRecord::new(),
            player_color: config.player.color(),
            difficulty: config.difficulty,
            think: config.think,
            selected_square: None,
            legal_targets: HashSet::new(),
            pending_promotion: None,
            oracle_thinking: false,
        }
    }

    /// Seed the game from an arbitrary position (replays, tests).
    pub fn from_fen(config: &SessionConfig, fen: &str) -> Result<Self, chess_core::FenError> {
        let mut session = Self::new(config);
        session.record = GameRecord::from_fen(fen)?;
        Ok(session)
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn fen(&self) -> String {
        self.record.current().to_fen()
    }

    pub fn ledger(&self) -> Vec<LedgerRow> {
        self.record.ledger()
    }

    pub fn player_color(&self) -> Color {
        self.player_color
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn think_policy(&self) -> ThinkPolicy {
        self.think
    }

    pub fn oracle_thinking(&self) -> bool {
        self.oracle_thinking
    }

    pub fn selected_square(&self) -> Option<u8> {
        self.selected_square
    }

    pub fn legal_targets(&self) -> &HashSet<u8> {
        &self.legal_targets
    }

    pub fn pending_promotion(&self) -> Option<(u8, u8)> {
        self.pending_promotion
    }

    pub fn is_player_turn(&self) -> bool {
        self.record.current().side_to_move == self.player_color
    }

    pub fn outcome(&self) -> SessionOutcome {
        match self.record.status() {
            GameStatus::Checkmate {
                winner: Color::White,
            } => SessionOutcome::WhiteWins,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => SessionOutcome::BlackWins,
            GameStatus::Stalemate => SessionOutcome::Draw(DrawReason::Stalemate),
            GameStatus::InsufficientMaterial => {
                SessionOutcome::Draw(DrawReason::InsufficientMaterial)
            }
            GameStatus::FiftyMoveDraw => SessionOutcome::Draw(DrawReason::FiftyMoves),
            GameStatus::Ongoing => {
                if self.record.is_threefold_repetition() {
                    SessionOutcome::Draw(DrawReason::Repetition)
                } else {
                    SessionOutcome::InProgress
                }
            }
        }
    }

    fn accepting_player_input(&self) -> bool {
        self.is_player_turn() && !self.oracle_thinking && !self.outcome().is_over()
    }

    /// Direct from/to input (drag-and-drop style). Promotion moves park
    /// the pair and report [`MoveReply::PromotionPending`].
    pub fn try_move(&mut self, from: u8, to: u8) -> Result<MoveReply, MoveError> {
        if !self.accepting_player_input() {
            return Ok(MoveReply::Ignored);
        }

        match self.record.attempt(from, to, None) {
            Ok(played) => {
                let san = played.san.clone();
                self.pending_promotion = None;
                self.clear_selection();
                Ok(MoveReply::Played(san))
            }
            Err(MoveError::PromotionRequired { .. }) => {
                self.pending_promotion = Some((from, to));
                Ok(MoveReply::PromotionPending)
            }
            Err(e) => Err(e),
        }
    }

    /// Phase two of the promotion protocol.
    pub fn promote(&mut self, kind: PieceKind) -> Result<MoveReply, MoveError> {
        let (from, to) = match self.pending_promotion {
            Some(pair) => pair,
            None => return Err(MoveError::UnexpectedPromotion),
        };
        self.pending_promotion = None;

        let played = self.record.attempt(from, to, Some(kind))?;
        let san = played.san.clone();
        self.clear_selection();
        Ok(MoveReply::Played(san))
    }

    pub fn cancel_promotion(&mut self) {
        self.pending_promotion = None;
    }

    /// Select-then-click input: clicking an own piece selects it, clicking
    /// a highlighted destination moves, anything else clears.
    pub fn select_square(&mut self, sq: u8) -> Result<MoveReply, MoveError> {
        if !self.accepting_player_input() {
            return Ok(MoveReply::Ignored);
        }

        if let Some(piece) = self.record.current().piece_at(sq) {
            if piece.color == self.player_color {
                self.selected_square = Some(sq);
                self.legal_targets = legal_moves_from(self.record.current(), sq)
                    .into_iter()
                    .map(|m| m.to)
                    .collect();
                return Ok(MoveReply::Selected(sq));
            }
        }

        if let Some(from) = self.selected_square {
            if self.legal_targets.contains(&sq) {
                return self.try_move(from, sq);
            }
        }

        self.clear_selection();
        Ok(MoveReply::Ignored)
    }

    fn clear_selection(&mut self) {
        self.selected_square = None;
        self.legal_targets.clear();
    }

    /// Run one oracle turn: propose, resolve against the legal move set,
    /// fall back to a uniformly random legal move when the proposal is
    /// empty, illegal or the call failed. Returns the SAN actually played,
    /// or `None` when it is not the oracle's turn or the game is over.
    pub fn oracle_turn<R: Rng>(
        &mut self,
        oracle: &mut dyn MoveOracle,
        rng: &mut R,
    ) -> Option<String> {
        if self.is_player_turn() || self.outcome().is_over() {
            return None;
        }

        self.oracle_thinking = true;
        let fen = self.fen();
        let history = self.record.san_history();

        let proposed = match oracle.propose_move(&fen, &history, self.difficulty) {
            Ok(token) => {
                let resolved = resolve_san(self.record.current(), &token);
                if resolved.is_none() {
                    warn!(%token, "oracle proposed an unusable move");
                }
                resolved
            }
            Err(e) => {
                warn!(error = %e, oracle = oracle.name(), "oracle call failed");
                None
            }
        };

        let mv = proposed.or_else(|| random_legal_move(self.record.current(), rng));
        self.oracle_thinking = false;

        let mv = mv?;
        match self.record.attempt(mv.from, mv.to, mv.promo) {
            Ok(played) => {
                info!(san = %played.san, "oracle move applied");
                Some(played.san.clone())
            }
            Err(e) => {
                // Unreachable for moves drawn from the legal set.
                warn!(error = %e, "resolved oracle move was rejected");
                None
            }
        }
    }

    /// Discard the record wholesale and start over; the only way out of a
    /// terminal state.
    pub fn reset(&mut self) {
        self.record = GameRecord::new();
        self.pending_promotion = None;
        self.oracle_thinking = false;
        self.clear_selection();
    }

    pub fn reset_with_color(&mut self, player_color: Color) {
        self.player_color = player_color;
        self.reset();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
