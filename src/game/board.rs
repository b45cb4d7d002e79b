//! The fixed five-territory board.

use serde::Serialize;

use crate::game::territory::{Faction, Territory, TerritoryId};

/// Number of territories on the board. Never changes during a session.
pub const TERRITORY_COUNT: usize = 5;

/// The board: an ordered, fixed-length set of territory records.
///
/// Built once at session start by [`Board::new`] and owned by the session
/// state; there are no statics and no hidden initialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Territories in slot order.
    territories: [Territory; TERRITORY_COUNT],
}

impl Board {
    /// Create the board with the starting deployment.
    ///
    /// The player opens holding Brazil and Japan; Red holds Canada and
    /// Green holds India and Egypt. Deterministic: the same player color
    /// always yields byte-for-byte the same records.
    #[must_use]
    pub const fn new(player: Faction) -> Self {
        Self {
            territories: [
                Territory::new("Brazil", player, 3),
                Territory::new("Canada", Faction::Red, 2),
                Territory::new("India", Faction::Green, 4),
                Territory::new("Japan", player, 2),
                Territory::new("Egypt", Faction::Green, 1),
            ],
        }
    }

    /// Get the territory in the given slot.
    #[must_use]
    #[inline]
    pub const fn get(&self, id: TerritoryId) -> &Territory {
        &self.territories[id.index()]
    }

    /// Get the territory in the given slot, mutably.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, id: TerritoryId) -> &mut Territory {
        &mut self.territories[id.index()]
    }

    /// Iterate over all slots and their territories in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        TerritoryId::ALL.into_iter().zip(self.territories.iter())
    }

    /// Count territories held by a faction.
    #[must_use]
    pub fn count_owned_by(&self, faction: Faction) -> usize {
        self.territories
            .iter()
            .filter(|t| t.owner == faction)
            .count()
    }

    /// Whether any territory is still held by a faction.
    #[must_use]
    pub fn any_owned_by(&self, faction: Faction) -> bool {
        self.territories.iter().any(|t| t.owner == faction)
    }

    /// Sum of troops across the whole board.
    ///
    /// Combat only ever removes troops, so this never rises above the
    /// starting total.
    #[must_use]
    pub fn total_troops(&self) -> i32 {
        self.territories.iter().map(|t| t.troops).sum()
    }
}
