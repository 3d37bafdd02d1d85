//! Game sessions against a move oracle.
//!
//! Wraps one [`chess_core::GameRecord`] with the turn and input gating the
//! board front end needs: the select-then-click state machine, the
//! two-phase promotion protocol, and the oracle turn pipeline with its
//! random-legal fallback.

pub mod config;
pub mod game;

pub use config::{ConfigError, PlayerSide, SessionConfig, ThinkPolicy};
pub use game::{DrawReason, GameSession, MoveReply, SessionOutcome};
