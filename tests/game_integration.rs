//! Multi-round integration tests for the simulation core.
//!
//! These drive whole campaigns against the real starting deployment and
//! verify the rules never leave the board in an inconsistent state.
//!
//! Run with: cargo test game_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use hegemon::game::{apply_round, check_invariants};
use hegemon::{DiceRoll, Faction, GameState, Mission, TerritoryId};

const BRAZIL: TerritoryId = TerritoryId::ALL[0];
const INDIA: TerritoryId = TerritoryId::ALL[2];

#[test]
fn test_winning_roll_without_conquest() {
    let mut state = GameState::new(Faction::Yellow, Mission::EliminateGreen);

    // Brazil (3 troops) hits India (4 troops) with a 6 against a 1.
    let outcome = apply_round(
        &mut state.board,
        BRAZIL,
        INDIA,
        state.player,
        DiceRoll {
            attack: 6,
            defense: 1,
        },
    )
    .unwrap();

    assert!(!outcome.conquered);
    assert_eq!(state.board.get(INDIA).troops, 3);
    assert_eq!(state.board.get(INDIA).owner, Faction::Green);
    assert_eq!(state.board.get(BRAZIL).troops, 3);
    assert!(check_invariants(&state).is_empty());
}

#[test]
fn test_winning_roll_with_conquest() {
    let mut state = GameState::new(Faction::Yellow, Mission::EliminateGreen);

    // Wear India down to a single troop, then land the final blow.
    state.board.get_mut(INDIA).troops = 1;
    let attacker_before = state.board.get(BRAZIL).troops;

    let outcome = apply_round(
        &mut state.board,
        BRAZIL,
        INDIA,
        state.player,
        DiceRoll {
            attack: 5,
            defense: 2,
        },
    )
    .unwrap();

    assert!(outcome.conquered);
    assert_eq!(state.board.get(INDIA).owner, Faction::Yellow);
    assert_eq!(state.board.get(INDIA).troops, 1);
    // The attacker won the roll (no combat loss) and paid one troop to occupy.
    assert_eq!(state.board.get(BRAZIL).troops, attacker_before - 1);
    assert!(check_invariants(&state).is_empty());
}

#[test]
fn test_campaign_to_elimination_never_breaks_invariants() {
    // March on Green with every territory that can spare a troop until the
    // mission resolves or the player runs out of attack-capable territories.
    let mut state = GameState::new(Faction::Yellow, Mission::EliminateGreen);
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..200 {
        if state.mission_accomplished() {
            break;
        }

        let attacker = state
            .board
            .iter()
            .find(|(_, t)| t.owner == state.player && t.troops >= 2)
            .map(|(id, _)| id);
        let defender = state
            .board
            .iter()
            .find(|(_, t)| t.owner == Faction::Green)
            .map(|(id, _)| id);

        let (Some(attacker), Some(defender)) = (attacker, defender) else {
            break;
        };

        state.attack(attacker, defender, &mut rng).unwrap();
        assert!(check_invariants(&state).is_empty());
    }

    if state.mission_accomplished() {
        assert!(!state.board.any_owned_by(Faction::Green));
    }
}

#[test]
fn test_random_orders_over_many_seeds_never_panic() {
    for seed in 0..50u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::start(Faction::Blue, &mut rng);

        for round in 0..100usize {
            let attacker = TerritoryId::ALL[round % 5];
            let defender = TerritoryId::ALL[(round * 3 + 1) % 5];

            // Rejected orders are expected; resolved ones must keep the
            // board consistent.
            let _ = state.attack(attacker, defender, &mut rng);
            let violations = check_invariants(&state);
            assert!(violations.is_empty(), "seed {seed}: {violations:?}");
        }
    }
}

#[test]
fn test_mission_verdicts_on_known_boards() {
    let mut state = GameState::new(Faction::Yellow, Mission::EliminateGreen);

    // One Green territory left: not accomplished.
    state.board.get_mut(TerritoryId::ALL[2]).owner = Faction::Yellow;
    assert!(!state.mission_accomplished());

    // Last Green territory taken: accomplished.
    state.board.get_mut(TerritoryId::ALL[4]).owner = Faction::Yellow;
    assert!(state.mission_accomplished());

    // The player holds {Brazil, India, Japan, Egypt}: the conquest mission
    // is satisfied on the same board.
    let conquer = GameState {
        mission: Mission::ConquerThree,
        ..state
    };
    assert!(conquer.mission_accomplished());
}

#[test]
fn test_session_counts_resolved_rounds() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = GameState::new(Faction::Yellow, Mission::ConquerThree);

    assert!(state.attack(BRAZIL, BRAZIL, &mut rng).is_err());
    assert!(state.attack(BRAZIL, INDIA, &mut rng).is_ok());
    assert!(state.attack(BRAZIL, INDIA, &mut rng).is_ok());
    assert_eq!(state.rounds_fought, 2);
}
