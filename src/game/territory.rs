//! Territories and the army colors that hold them.

use std::fmt;

use serde::Serialize;

use crate::game::board::TERRITORY_COUNT;

/// Army color. The closed set of factions that can hold a territory.
///
/// Colors are compared by variant, never by text, so a misspelled color
/// is a compile error rather than a silently-failed mission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    /// The default player color.
    Yellow,
    /// Playable color.
    Blue,
    /// Playable color.
    White,
    /// Playable color.
    Black,
    /// Scripted opponent holding Canada at the start.
    Red,
    /// Scripted opponent and the target of the elimination mission.
    Green,
}

impl Faction {
    /// The color name as shown on the board.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Yellow => "Yellow",
            Faction::Blue => "Blue",
            Faction::White => "White",
            Faction::Black => "Black",
            Faction::Red => "Red",
            Faction::Green => "Green",
        }
    }

    /// Whether this color belongs to a scripted opponent.
    ///
    /// Scripted colors cannot be picked by the player: Red and Green hold
    /// the non-player territories, and Green is the elimination target.
    #[must_use]
    pub const fn is_scripted(self) -> bool {
        matches!(self, Faction::Red | Faction::Green)
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a board slot.
///
/// Only valid slots are representable: construction goes through
/// [`TerritoryId::new`] (zero-based) or [`TerritoryId::from_display`]
/// (one-based, as typed at the prompt), both of which reject anything
/// outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerritoryId(u8);

impl TerritoryId {
    /// Every slot on the board, in board order.
    pub const ALL: [Self; TERRITORY_COUNT] =
        [Self(0), Self(1), Self(2), Self(3), Self(4)];

    /// Create an identifier from a zero-based index.
    ///
    /// Returns `None` if the index is off the board.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Option<Self> {
        if index < TERRITORY_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create an identifier from a one-based id as shown to the player.
    ///
    /// Returns `None` for `0` and for anything past the last slot.
    #[must_use]
    pub const fn from_display(id: usize) -> Option<Self> {
        match id.checked_sub(1) {
            Some(index) => Self::new(index),
            None => None,
        }
    }

    /// Zero-based index into the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based id as shown to the player.
    #[must_use]
    pub const fn display(self) -> usize {
        self.0 as usize + 1
    }
}

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// One ownable region on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Territory {
    /// Display label, fixed at initialization.
    pub name: &'static str,
    /// Army currently holding the territory.
    pub owner: Faction,
    /// Troops stationed here.
    ///
    /// Signed on purpose: the conquest arithmetic is applied as-is and
    /// never clamped, so the type documents that a count below zero is
    /// representable even though the garrison rule keeps it out of reach
    /// in practice.
    pub troops: i32,
}

impl Territory {
    /// Create a territory record.
    #[must_use]
    pub const fn new(name: &'static str, owner: Faction, troops: i32) -> Self {
        Self {
            name,
            owner,
            troops,
        }
    }
}
