//! Move Oracle boundary.
//!
//! The oracle is an opaque, untrusted move suggester: it receives the
//! current FEN, the SAN history and a difficulty label, and returns a
//! single candidate token. Nothing it says is applied directly; callers
//! resolve the token through `chess_core::resolve_san` and fall back to
//! [`random_legal_move`] when the reply is empty, illegal or the call
//! fails entirely.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod fallback;
pub mod gemini;
pub mod prompt;

pub use fallback::{random_legal_move, OfflineOracle};
pub use gemini::GeminiOracle;

/// Oracle-side failure. All variants are handled by the collaborator via
/// the random-legal fallback; none of them ever reaches engine state.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("no oracle is configured")]
    Unavailable,
    #[error("oracle quota exhausted")]
    QuotaExhausted,
    #[error("oracle returned an empty reply")]
    EmptyReply,
    #[error("oracle request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected oracle response shape: {0}")]
    Malformed(String),
}

/// Playing-strength persona forwarded to the oracle prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Novice,
    Casual,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Novice,
        Difficulty::Casual,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    /// Persona line embedded in the move prompt.
    pub fn persona(self) -> &'static str {
        match self {
            Difficulty::Novice => "Novice. Makes beginner tactical mistakes.",
            Difficulty::Casual => "Casual. Plays solid moves but without deep plans.",
            Difficulty::Intermediate => "Intermediate. Knows standard tactics and openings.",
            Difficulty::Advanced => "Advanced. Precise calculation and constant pressure.",
            Difficulty::Expert => "Expert. Grandmaster level. Forgives no mistakes.",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Novice => "Novice",
            Difficulty::Casual => "Casual",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "novice" => Ok(Difficulty::Novice),
            "casual" => Ok(Difficulty::Casual),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Trait implemented by every move suggester.
///
/// Implementations may return illegal or nonsensical tokens; the session
/// layer validates everything against the legal move set.
pub trait MoveOracle {
    /// Propose the next move for the side to move in `fen`, as a SAN (or
    /// coordinate) token.
    fn propose_move(
        &mut self,
        fen: &str,
        san_history: &[String],
        difficulty: Difficulty,
    ) -> Result<String, OracleError>;

    /// Human-readable identification for logs and the UI footer.
    fn name(&self) -> &str;
}
