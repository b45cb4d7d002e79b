//! Session state: the board, the mission, and the player, owned together.

use rand::Rng;

use crate::error::AttackResult;
use crate::game::board::Board;
use crate::game::combat::{self, AttackOutcome};
use crate::game::mission::Mission;
use crate::game::territory::{Faction, TerritoryId};

/// Complete state of one session.
///
/// Everything a running game needs lives here and is passed by reference
/// into each operation; nothing is process-global. Dropped with the
/// session.
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    /// The five-territory board.
    pub board: Board,
    /// The secret mission, fixed for the session.
    pub mission: Mission,
    /// The player's army color.
    pub player: Faction,
    /// Rounds of combat resolved so far (successful orders only).
    pub rounds_fought: u32,
}

impl GameState {
    /// Create a session with a known mission.
    #[must_use]
    pub const fn new(player: Faction, mission: Mission) -> Self {
        Self {
            board: Board::new(player),
            mission,
            player,
            rounds_fought: 0,
        }
    }

    /// Create a session, drawing the mission from `rng`.
    pub fn start(player: Faction, rng: &mut impl Rng) -> Self {
        Self::new(player, Mission::draw(rng))
    }

    /// Resolve one round of combat ordered by the player.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::error::AttackError`] and leaves the session
    /// untouched when the order is rejected.
    pub fn attack(
        &mut self,
        attacker: TerritoryId,
        defender: TerritoryId,
        rng: &mut impl Rng,
    ) -> AttackResult<AttackOutcome> {
        let outcome = combat::resolve_attack(&mut self.board, attacker, defender, self.player, rng)?;
        self.rounds_fought += 1;
        Ok(outcome)
    }

    /// Whether the session's mission condition currently holds.
    #[must_use]
    pub fn mission_accomplished(&self) -> bool {
        self.mission.accomplished(&self.board, self.player)
    }
}
