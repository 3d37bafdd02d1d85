//! Puzzle records and catalog loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use chess_core::FenError;

/// One tactical puzzle: a starting position and the accepted answers.
/// Read-only; sessions never write back into the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    pub fen: String,
    /// Accepted answers, each either SAN or a `from+to` coordinate pair.
    pub solution: Vec<String>,
    pub description: String,
    pub difficulty: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read puzzle catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse puzzle catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("puzzle catalog is empty")]
    Empty,
    #[error("puzzle '{id}' has an invalid FEN: {source}")]
    BadFen { id: String, source: FenError },
    #[error("puzzle '{id}' has no solution moves")]
    NoSolution { id: String },
}

/// Parse and validate a JSON catalog: a non-empty array of puzzles, each
/// with a parseable FEN and at least one solution move.
pub fn from_json(text: &str) -> Result<Vec<Puzzle>, CatalogError> {
    let puzzles: Vec<Puzzle> = serde_json::from_str(text)?;
    validate(&puzzles)?;
    Ok(puzzles)
}

pub fn load(path: &Path) -> Result<Vec<Puzzle>, CatalogError> {
    from_json(&std::fs::read_to_string(path)?)
}

pub(crate) fn validate(puzzles: &[Puzzle]) -> Result<(), CatalogError> {
    if puzzles.is_empty() {
        return Err(CatalogError::Empty);
    }
    for p in puzzles {
        if p.solution.is_empty() {
            return Err(CatalogError::NoSolution { id: p.id.clone() });
        }
        if let Err(source) = chess_core::Position::from_fen(&p.fen) {
            return Err(CatalogError::BadFen {
                id: p.id.clone(),
                source,
            });
        }
    }
    Ok(())
}

/// The built-in dozen, graded from club level up to expert.
pub fn builtin() -> Vec<Puzzle> {
    fn puzzle(id: &str, fen: &str, solution: &str, description: &str, difficulty: &str) -> Puzzle {
        Puzzle {
            id: id.to_string(),
            fen: fen.to_string(),
            solution: vec![solution.to_string()],
            description: description.to_string(),
            difficulty: difficulty.to_string(),
        }
    }

    vec![
        puzzle(
            "1",
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
            "Qxf7#",
            "Scholar's Mate: find the mate in one.",
            "Casual",
        ),
        puzzle(
            "2",
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
            "exd5",
            "Central control: win the central pawn.",
            "Casual",
        ),
        puzzle(
            "3",
            "r2qkb1r/pp2pppp/2n2n2/1B1p4/3P2b1/2N2N2/PPP2PPP/R1BQK2R w KQkq - 4 7",
            "Bxc6+",
            "Structural damage: wreck the black pawn chain.",
            "Casual",
        ),
        puzzle(
            "4",
            "r1b1k1nr/p2p1pNp/n2B4/1p1NP2P/6P1/3P1Q2/P1P1K3/q5b1 w - - 0 1",
            "Qf6+",
            "Decisive attack: find the check that breaks the defense.",
            "Intermediate",
        ),
        puzzle(
            "5",
            "r2q1rk1/ppp2ppp/2n1bn2/2bpp3/4P3/2PP1NPP/PP3PB1/RNBQR1K1 b - - 0 9",
            "dxe4",
            "Central tension: pick the right exchange.",
            "Intermediate",
        ),
        puzzle(
            "6",
            "rn1qk2r/pbpp1ppp/1p2pn2/8/1bPP4/2N2NP1/PP2PPBP/R1BQK2R b KQkq - 2 6",
            "Bxc3+",
            "Doubled pawns: remove the centralized knight.",
            "Intermediate",
        ),
        puzzle(
            "7",
            "r1b2rk1/pp3ppp/2n1pn2/q2p4/2PP4/P1PB1N2/3B1PPP/R2QK2R w KQ - 3 11",
            "cxd5",
            "Opening lines: simplify in your favor.",
            "Advanced",
        ),
        puzzle(
            "8",
            "3r2k1/p4p1p/1p4p1/2r5/4R3/P1P5/1P3PPP/4R1K1 w - - 0 1",
            "Re8+",
            "Open file: start the invasion down the e-file.",
            "Advanced",
        ),
        puzzle(
            "9",
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 4 10",
            "Nd5",
            "Central strike: hit the queen and the pinned knight.",
            "Advanced",
        ),
        puzzle(
            "10",
            "2r3k1/1p3p1p/p5p1/5b2/3Q4/1P6/P4PPP/2R3K1 b - - 0 1",
            "Rxc1+",
            "Back-rank mate: exploit the weak first rank.",
            "Expert",
        ),
        puzzle(
            "11",
            "r2qk2r/pb1nbppp/1pn1p3/2ppP3/3P4/2PB1NN1/PP3PPP/R1BQK2R w KQkq - 1 10",
            "O-O",
            "Consolidation: finish development under pressure.",
            "Expert",
        ),
        puzzle(
            "12",
            "2r2rk1/1b1n1ppp/pp1qpn2/3p4/2PP4/1PNB1N2/P1Q2PPP/R3R1K1 w - - 2 15",
            "c5",
            "Clamping the flank: gain space and restrict the pieces.",
            "Expert",
        ),
    ]
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
