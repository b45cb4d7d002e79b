//! Interactive session loop.
//!
//! The shell owns every prompt and every line of input; the core only ever
//! sees validated identifiers. It is generic over its reader and writer so
//! whole sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hegemon::game::assert_invariants;
use hegemon::{Faction, GameState, TerritoryId, TERRITORY_COUNT};

use super::output;
use super::{CliError, SummaryFormat};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionEnd {
    /// A mission check came back accomplished.
    Victory,
    /// The player chose to quit.
    Quit,
    /// Input closed (EOF) before the player quit.
    InputClosed,
}

impl SessionEnd {
    /// Stable label used in the JSON summary.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            SessionEnd::Victory => "victory",
            SessionEnd::Quit => "quit",
            SessionEnd::InputClosed => "input-closed",
        }
    }
}

/// One entry of the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Attack,
    CheckMission,
    Quit,
}

/// Result of prompting for a territory id.
enum Prompt {
    Id(TerritoryId),
    Invalid,
    Closed,
}

/// Run an interactive session on stdin/stdout and print the summary.
///
/// # Errors
///
/// Returns an error if the terminal streams fail or the JSON summary
/// cannot be serialized.
pub(crate) fn execute(
    player: Faction,
    seed: u64,
    summary: SummaryFormat,
) -> Result<(), CliError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::start(player, &mut rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let end = run_session(&mut state, &mut rng, stdin.lock(), &mut out)?;
    output::print_summary(&mut out, &state, seed, end, summary)
}

/// Drive the menu loop until the session ends.
fn run_session(
    state: &mut GameState,
    rng: &mut impl Rng,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<SessionEnd> {
    writeln!(out, "====================================================")?;
    writeln!(out, "                     HEGEMON")?;
    writeln!(out, "====================================================")?;

    loop {
        output::render_board(out, &state.board)?;
        output::render_mission(out, state.mission)?;
        output::render_menu(out)?;
        write!(out, "Your choice: ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(SessionEnd::InputClosed);
        };

        match parse_choice(&line) {
            Some(MenuChoice::Attack) => {
                if !attack_phase(state, rng, &mut input, out)? {
                    return Ok(SessionEnd::InputClosed);
                }
                assert_invariants(state);
                if !pause(&mut input, out)? {
                    return Ok(SessionEnd::InputClosed);
                }
            }
            Some(MenuChoice::CheckMission) => {
                if state.mission_accomplished() {
                    writeln!(out)?;
                    writeln!(out, "CONGRATULATIONS! Your secret mission is accomplished.")?;
                    writeln!(out, "The world is yours. Game over.")?;
                    return Ok(SessionEnd::Victory);
                }
                writeln!(out)?;
                writeln!(out, "Mission not accomplished yet. Keep attacking!")?;
                if !pause(&mut input, out)? {
                    return Ok(SessionEnd::InputClosed);
                }
            }
            Some(MenuChoice::Quit) => {
                writeln!(out)?;
                writeln!(out, "Closing the session. Thanks for playing!")?;
                return Ok(SessionEnd::Quit);
            }
            None => {
                writeln!(out)?;
                writeln!(out, "Invalid choice. Try again.")?;
            }
        }
    }
}

/// Prompt for both territory ids and resolve one round of combat.
///
/// Returns `false` if input closed mid-phase. Invalid ids and rejected
/// orders are reported and abort the phase without touching game state.
fn attack_phase(
    state: &mut GameState,
    rng: &mut impl Rng,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<bool> {
    writeln!(out)?;
    writeln!(out, "--- ATTACK ORDERS ---")?;

    let attacker = match prompt_territory(input, out, "attacking")? {
        Prompt::Id(id) => id,
        Prompt::Invalid => return Ok(true),
        Prompt::Closed => return Ok(false),
    };
    let defender = match prompt_territory(input, out, "defending")? {
        Prompt::Id(id) => id,
        Prompt::Invalid => return Ok(true),
        Prompt::Closed => return Ok(false),
    };

    match state.attack(attacker, defender, rng) {
        Ok(outcome) => output::render_battle(out, &state.board, attacker, defender, outcome)?,
        Err(reason) => {
            writeln!(out, "Attack rejected: {reason}.")?;
        }
    }

    Ok(true)
}

/// Prompt for a single one-based territory id.
fn prompt_territory(
    input: &mut impl BufRead,
    out: &mut impl Write,
    role: &str,
) -> io::Result<Prompt> {
    write!(out, "Enter the {role} territory id (1 to {TERRITORY_COUNT}): ")?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(Prompt::Closed);
    };

    match parse_territory_id(&line) {
        Some(id) => Ok(Prompt::Id(id)),
        None => {
            writeln!(
                out,
                "Invalid id; expected a number from 1 to {TERRITORY_COUNT}."
            )?;
            Ok(Prompt::Invalid)
        }
    }
}

/// Hold the screen until ENTER. Returns `false` on EOF.
fn pause(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    writeln!(out)?;
    writeln!(out, "Press ENTER to continue...")?;
    out.flush()?;
    Ok(read_line(input)?.is_some())
}

/// Read one line; `None` means the input stream is closed.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Parse a menu choice. Anything but `0`, `1` or `2` is invalid.
fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().parse::<i64>() {
        Ok(1) => Some(MenuChoice::Attack),
        Ok(2) => Some(MenuChoice::CheckMission),
        Ok(0) => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Parse a one-based territory id as typed at the prompt.
fn parse_territory_id(line: &str) -> Option<TerritoryId> {
    line.trim()
        .parse::<usize>()
        .ok()
        .and_then(TerritoryId::from_display)
}
