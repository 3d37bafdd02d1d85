//! Tactical puzzle catalog and solve sessions.
//!
//! Puzzles are static `(fen, solution, description, difficulty)` records;
//! each attempt runs against its own engine record, so puzzle state never
//! leaks into a live game.

pub mod catalog;
pub mod session;

pub use catalog::{builtin, from_json, load, CatalogError, Puzzle};
pub use session::{PuzzleSession, SolveStatus};
