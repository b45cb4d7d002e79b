#![no_main]

use arbitrary::Arbitrary;
use hegemon::game::apply_round;
use hegemon::{Board, DiceRoll, Faction, TerritoryId};
use libfuzzer_sys::fuzz_target;

const FACTIONS: [Faction; 6] = [
    Faction::Yellow,
    Faction::Blue,
    Faction::White,
    Faction::Black,
    Faction::Red,
    Faction::Green,
];

const PLAYABLE: [Faction; 4] = [
    Faction::Yellow,
    Faction::Blue,
    Faction::White,
    Faction::Black,
];

/// Structured input for one round of combat on a scrambled board.
#[derive(Arbitrary, Debug)]
struct RoundInput {
    /// Player color selector.
    player: u8,
    /// Owner selector per board slot.
    owners: [u8; 5],
    /// Troop count per board slot.
    troops: [u8; 5],
    /// Attacking slot selector.
    attacker: u8,
    /// Defending slot selector.
    defender: u8,
    /// Attacker die face selector.
    attack: u8,
    /// Defender die face selector.
    defense: u8,
}

fuzz_target!(|input: RoundInput| {
    let player = PLAYABLE[input.player as usize % PLAYABLE.len()];

    let mut board = Board::new(player);
    for (slot, id) in TerritoryId::ALL.into_iter().enumerate() {
        board.get_mut(id).owner = FACTIONS[input.owners[slot] as usize % FACTIONS.len()];
        // Keep troops positive; combat owns the only paths below one.
        board.get_mut(id).troops = i32::from(input.troops[slot] % 100) + 1;
    }

    let attacker = TerritoryId::new(input.attacker as usize % 5).unwrap();
    let defender = TerritoryId::new(input.defender as usize % 5).unwrap();
    let rolls = DiceRoll {
        attack: input.attack % 6 + 1,
        defense: input.defense % 6 + 1,
    };

    let before = board;
    let total_before = board.total_troops();

    // Must never panic, whatever the order.
    match apply_round(&mut board, attacker, defender, player, rolls) {
        Err(_) => {
            // Rejection is atomic.
            assert_eq!(board, before, "rejected order mutated the board");
        }
        Ok(outcome) => {
            // Exactly one troop leaves the board per round.
            assert_eq!(
                board.total_troops(),
                total_before - 1,
                "round changed the board total by more than one troop"
            );

            // The attacker always keeps a garrison.
            assert!(
                board.get(attacker).troops >= 1,
                "attacker left without a garrison"
            );

            if outcome.conquered {
                assert_eq!(board.get(defender).owner, player);
                assert_eq!(
                    board.get(defender).troops,
                    1,
                    "conquered territory not left at one troop"
                );
            } else {
                assert_eq!(board.get(defender).owner, before.get(defender).owner);
                assert!(board.get(defender).troops >= 1);
            }
        }
    }
});
