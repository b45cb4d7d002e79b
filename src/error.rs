//! Error types for the simulation core.

use std::fmt;

use crate::game::Faction;

/// Reasons an attack order is rejected before any dice are rolled.
///
/// Rejection is atomic: when any of these is returned, neither territory
/// has been touched and no randomness has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// Attacker and defender are the same territory.
    SelfAttack,
    /// The attacking territory is not held by the player.
    NotPlayerOwned {
        /// Name of the territory the order came from.
        territory: &'static str,
        /// Faction actually holding it.
        owner: Faction,
    },
    /// The attacking territory cannot spare a troop (one must garrison).
    InsufficientTroops {
        /// Name of the territory the order came from.
        territory: &'static str,
        /// Troops currently stationed there.
        troops: i32,
    },
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::SelfAttack => {
                write!(f, "a territory cannot attack itself")
            }
            AttackError::NotPlayerOwned { territory, owner } => {
                write!(f, "{territory} is held by the {owner} army, not by you")
            }
            AttackError::InsufficientTroops { territory, troops } => {
                write!(
                    f,
                    "{territory} has {troops} troop(s); at least 2 are needed, one stays to garrison"
                )
            }
        }
    }
}

impl std::error::Error for AttackError {}

/// Result type for combat orders.
pub type AttackResult<T> = Result<T, AttackError>;
