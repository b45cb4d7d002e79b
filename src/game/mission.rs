//! Secret missions: random draw at session start, on-demand evaluation.

use rand::Rng;
use serde::Serialize;

use crate::game::board::Board;
use crate::game::territory::Faction;

/// The player's secret mission for the session.
///
/// Drawn once when the session starts and held fixed afterwards. The set
/// is closed, so mission evaluation is an exhaustive match; there is no
/// "unknown mission" case to default on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mission {
    /// Wipe the Green army off the board.
    EliminateGreen,
    /// Hold three territories at once, any colors.
    ConquerThree,
}

impl Mission {
    /// The army the elimination mission targets.
    pub const ELIMINATION_TARGET: Faction = Faction::Green;

    /// Territories the player must hold for the conquest mission.
    pub const CONQUEST_GOAL: usize = 3;

    /// Draw a mission uniformly at random.
    pub fn draw(rng: &mut impl Rng) -> Self {
        if rng.gen_range(0..2u8) == 0 {
            Mission::EliminateGreen
        } else {
            Mission::ConquerThree
        }
    }

    /// Mission text as shown in the briefing panel.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Mission::EliminateGreen => "Destroy the Green army: conquer every territory it holds.",
            Mission::ConquerThree => "Conquer a total of 3 territories, any colors.",
        }
    }

    /// Whether the mission condition holds on the given board.
    ///
    /// Pure: scans the board once and mutates nothing.
    #[must_use]
    pub fn accomplished(self, board: &Board, player: Faction) -> bool {
        let mut held_by_player = 0usize;
        let mut target_on_board = false;

        for (_, territory) in board.iter() {
            if territory.owner == player {
                held_by_player += 1;
            }
            if territory.owner == Self::ELIMINATION_TARGET {
                target_on_board = true;
            }
        }

        match self {
            Mission::EliminateGreen => !target_on_board,
            Mission::ConquerThree => held_by_player >= Self::CONQUEST_GOAL,
        }
    }
}
