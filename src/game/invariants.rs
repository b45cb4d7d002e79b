//! Game invariants - sanity checks that detect bugs.
//!
//! A correctly implemented session can never trigger these: combat only
//! removes troops, conquest always leaves a one-troop garrison, and the
//! starting deployment bounds everything else. If one fires, it is a bug
//! in the rules code, not a gameplay situation.

use crate::game::state::GameState;
use crate::game::territory::Faction;

/// Sanity bound: no territory ever exceeds this many troops.
/// The deployment tops out at 4 and combat never adds troops, so this is
/// very generous.
pub(crate) const SANITY_MAX_TROOPS_PER_TERRITORY: i32 = 64;

/// Starting troop total. Combat only removes troops, so the board-wide
/// sum can never rise above it.
pub(crate) const STARTING_TROOP_TOTAL: i32 = 12;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all session invariants.
///
/// Returns the violations found, empty if all invariants hold. These are
/// bug detectors, not gameplay limits.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (id, territory) in state.board.iter() {
        // Between operations every territory keeps its garrison. A count
        // of zero or less means a conquest failed to reassign the slot.
        if territory.troops < 1 {
            violations.push(InvariantViolation {
                message: format!(
                    "{} (slot {id}) holds {} troops; every territory keeps at least 1",
                    territory.name, territory.troops
                ),
            });
        }

        if territory.troops > SANITY_MAX_TROOPS_PER_TERRITORY {
            violations.push(InvariantViolation {
                message: format!(
                    "{} (slot {id}) holds {} troops > sanity max {}",
                    territory.name, territory.troops, SANITY_MAX_TROOPS_PER_TERRITORY
                ),
            });
        }
    }

    let total = state.board.total_troops();
    if total > STARTING_TROOP_TOTAL {
        violations.push(InvariantViolation {
            message: format!(
                "board-wide troop total {total} exceeds the starting total {STARTING_TROOP_TOTAL}"
            ),
        });
    }

    // The player never picks a scripted color; the CLI rejects it and the
    // core never reassigns the player's own faction.
    if state.player.is_scripted() {
        violations.push(InvariantViolation {
            message: format!("player holds the scripted color {}", state.player),
        });
    }

    // Conquest reassigns territories toward the player; Green can shrink
    // but never spread.
    let green_held = state.board.count_owned_by(Faction::Green);
    if green_held > 2 {
        violations.push(InvariantViolation {
            message: format!("Green holds {green_held} territories, more than its deployment"),
        });
    }

    violations
}

/// Assert all session invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Session invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::mission::Mission;
    use crate::game::territory::TerritoryId;

    fn valid_session() -> GameState {
        GameState::new(Faction::Yellow, Mission::ConquerThree)
    }

    #[test]
    fn test_fresh_session_passes() {
        let state = valid_session();
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn test_zero_troop_territory_detected() {
        let mut state = valid_session();
        state.board.get_mut(TerritoryId::ALL[4]).troops = 0;

        let violations = check_invariants(&state);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("at least 1"));
    }

    #[test]
    fn test_excessive_troops_detected() {
        let mut state = valid_session();
        state.board.get_mut(TerritoryId::ALL[0]).troops =
            SANITY_MAX_TROOPS_PER_TERRITORY + 1;

        let violations = check_invariants(&state);
        assert!(!violations.is_empty());
        // The inflated slot also pushes the board-wide total over its bound.
        assert!(violations
            .iter()
            .any(|v| v.message.contains("sanity max")));
        assert!(violations
            .iter()
            .any(|v| v.message.contains("starting total")));
    }

    #[test]
    fn test_troops_exactly_at_max_pass() {
        let mut state = valid_session();
        // Keep the board total in bounds while testing the per-slot bound.
        for id in TerritoryId::ALL {
            state.board.get_mut(id).troops = 1;
        }
        state.board.get_mut(TerritoryId::ALL[0]).troops = STARTING_TROOP_TOTAL - 4;

        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_scripted_player_color_detected() {
        let state = GameState::new(Faction::Green, Mission::ConquerThree);
        let violations = check_invariants(&state);
        assert!(violations
            .iter()
            .any(|v| v.message.contains("scripted color")));
    }

    #[test]
    fn test_spreading_green_detected() {
        let mut state = valid_session();
        state.board.get_mut(TerritoryId::ALL[1]).owner = Faction::Green;

        let violations = check_invariants(&state);
        assert!(violations
            .iter()
            .any(|v| v.message.contains("more than its deployment")));
    }
}
