#![no_main]

use arbitrary::Arbitrary;
use hegemon::game::{apply_round, check_invariants};
use hegemon::{DiceRoll, Faction, GameState, Mission, TerritoryId};
use libfuzzer_sys::fuzz_target;

const PLAYABLE: [Faction; 4] = [
    Faction::Yellow,
    Faction::Blue,
    Faction::White,
    Faction::Black,
];

/// One attack order as drawn from the fuzzer.
#[derive(Arbitrary, Debug)]
struct Order {
    /// Attacking slot selector.
    attacker: u8,
    /// Defending slot selector.
    defender: u8,
    /// Attacker die face selector.
    attack: u8,
    /// Defender die face selector.
    defense: u8,
}

/// A whole session: a player color, a mission, and a stream of orders
/// applied to the real starting deployment.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Player color selector.
    player: u8,
    /// Mission selector.
    eliminate: bool,
    /// Orders to apply in sequence.
    orders: Vec<Order>,
}

fuzz_target!(|input: SessionInput| {
    let player = PLAYABLE[input.player as usize % PLAYABLE.len()];
    let mission = if input.eliminate {
        Mission::EliminateGreen
    } else {
        Mission::ConquerThree
    };

    let mut state = GameState::new(player, mission);

    for order in input.orders.iter().take(64) {
        let attacker = TerritoryId::new(order.attacker as usize % 5).unwrap();
        let defender = TerritoryId::new(order.defender as usize % 5).unwrap();
        let rolls = DiceRoll {
            attack: order.attack % 6 + 1,
            defense: order.defense % 6 + 1,
        };

        // Rejected orders are part of normal play; resolved ones must keep
        // every session invariant intact.
        let _ = apply_round(&mut state.board, attacker, defender, player, rolls);

        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "{violations:?}");

        // The mission check is pure; calling it mid-session must not
        // disturb anything.
        let before = state.board;
        let _ = state.mission_accomplished();
        assert_eq!(state.board, before);
    }
});
