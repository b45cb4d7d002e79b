// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Hegemon: a dice-driven territory conquest game for the terminal.
//!
//! This crate provides the simulation core for a small turn-based war game:
//! - A fixed five-territory board with a hardcoded starting deployment
//! - One-round dice combat where ties favor the attacker
//! - A secret mission drawn at session start and checked on demand
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Interactive Shell (binary)      │
//! ├─────────────────────────────────────┤
//! │         Game Logic                  │
//! ├─────────────────────────────────────┤
//! │    Board / Territories / Dice       │
//! └─────────────────────────────────────┘
//! ```
//!
//! The shell owns all I/O; it hands the core validated identifiers and
//! prints whatever the core reports back.

pub mod error;
pub mod game;

pub use error::{AttackError, AttackResult};

// Re-export key game types at crate root for convenience
pub use game::{
    AttackOutcome, Board, DiceRoll, Faction, GameState, Mission, RoundWinner, Territory,
    TerritoryId, TERRITORY_COUNT,
};
