//! Game layer for Hegemon.
//!
//! Implements the rules of the simulation:
//! - Fixed five-territory board with the starting deployment
//! - One-round dice combat and conquest handling
//! - Secret missions (random draw, on-demand evaluation)
//! - Session state tying board, mission, and player together

mod board;
mod combat;
mod invariants;
mod mission;
mod state;
mod territory;

pub use board::{Board, TERRITORY_COUNT};
pub use combat::{apply_round, resolve_attack, AttackOutcome, DiceRoll, RoundWinner};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use mission::Mission;
pub use state::GameState;
pub use territory::{Faction, Territory, TerritoryId};
