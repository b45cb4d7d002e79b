//! Rendering and end-of-session summaries.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use serde::Serialize;

use hegemon::{AttackOutcome, Board, Faction, GameState, Mission, RoundWinner, TerritoryId};

use super::play::SessionEnd;
use super::{CliError, SummaryFormat};

/// Terminal color for an army.
const fn faction_color(faction: Faction) -> Color {
    match faction {
        Faction::Yellow => Color::Yellow,
        Faction::Blue => Color::Blue,
        Faction::White => Color::White,
        Faction::Black => Color::DarkGrey,
        Faction::Red => Color::Red,
        Faction::Green => Color::Green,
    }
}

/// Render the board as a table, one row per territory.
pub(crate) fn render_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=================== WORLD MAP ===================")?;
    writeln!(out, "| ID | Territory          | Army     | Troops  |")?;
    writeln!(out, "|----|--------------------|----------|---------|")?;
    for (id, territory) in board.iter() {
        // Pad before styling: ANSI escapes would otherwise count against
        // the column width.
        let army = format!("{:<8}", territory.owner.name()).with(faction_color(territory.owner));
        writeln!(
            out,
            "| {:<2} | {:<18} | {army} | {:<7} |",
            id.display(),
            territory.name,
            territory.troops,
        )?;
    }
    writeln!(out, "=================================================")?;
    Ok(())
}

/// Render the mission briefing panel.
pub(crate) fn render_mission(out: &mut impl Write, mission: Mission) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- YOUR SECRET MISSION ---")?;
    writeln!(out, "{}", mission.description())?;
    writeln!(out, "---------------------------")?;
    Ok(())
}

/// Render the action menu.
pub(crate) fn render_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- ACTIONS ---")?;
    writeln!(out, "1. Attack")?;
    writeln!(out, "2. Check mission")?;
    writeln!(out, "0. Quit")?;
    writeln!(out, "---------------")?;
    Ok(())
}

/// Narrate one resolved round of combat.
pub(crate) fn render_battle(
    out: &mut impl Write,
    board: &Board,
    attacker: TerritoryId,
    defender: TerritoryId,
    outcome: AttackOutcome,
) -> io::Result<()> {
    let from = board.get(attacker);
    let to = board.get(defender);

    writeln!(out)?;
    writeln!(out, "--- BATTLE: {} vs {} ---", from.name, to.name)?;
    writeln!(out, "Attacker die ({}): {}", from.name, outcome.rolls.attack)?;
    writeln!(out, "Defender die ({}): {}", to.name, outcome.rolls.defense)?;

    match outcome.winner {
        RoundWinner::Attacker => {
            writeln!(out, "The attacker takes the round! {} loses 1 troop.", to.name)?;
        }
        RoundWinner::Defender => {
            writeln!(out, "The defender holds! {} loses 1 troop.", from.name)?;
        }
    }

    if outcome.conquered {
        // By now the defender record already carries the new owner.
        let banner = to.owner.name().with(faction_color(to.owner));
        writeln!(out, "CONQUEST! {} now flies the {banner} flag.", to.name)?;
        writeln!(out, "One troop moved from {} to {}.", from.name, to.name)?;
    }

    writeln!(
        out,
        "Troops now: {} {}, {} {}.",
        from.name, outcome.attacker_troops, to.name, outcome.defender_troops,
    )?;
    Ok(())
}

/// JSON-serializable session summary.
#[derive(Debug, Serialize)]
struct JsonSessionSummary<'a> {
    /// Random seed used.
    seed: u64,
    /// The player's army color.
    player: Faction,
    /// The secret mission that was drawn.
    mission: Mission,
    /// How the session ended.
    outcome: &'static str,
    /// Rounds of combat resolved.
    rounds_fought: u32,
    /// Whether the mission condition held when the session ended.
    mission_accomplished: bool,
    /// Final board state.
    board: &'a Board,
}

/// Print the end-of-session summary in the requested format.
pub(crate) fn print_summary(
    out: &mut impl Write,
    state: &GameState,
    seed: u64,
    end: SessionEnd,
    format: SummaryFormat,
) -> Result<(), CliError> {
    match format {
        SummaryFormat::Text => {
            writeln!(out)?;
            writeln!(out, "Session summary (seed: {seed})")?;
            writeln!(out, "  Outcome: {}", end.label())?;
            writeln!(out, "  Mission: {}", state.mission.description())?;
            writeln!(out, "  Rounds fought: {}", state.rounds_fought)?;
            writeln!(
                out,
                "  Territories held: {} of {}",
                state.board.count_owned_by(state.player),
                hegemon::TERRITORY_COUNT,
            )?;
        }
        SummaryFormat::Json => {
            let summary = JsonSessionSummary {
                seed,
                player: state.player,
                mission: state.mission,
                outcome: end.label(),
                rounds_fought: state.rounds_fought,
                mission_accomplished: state.mission_accomplished(),
                board: &state.board,
            };
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
