//! CLI implementation for the hegemon binary.

pub(crate) mod output;
pub(crate) mod play;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

use hegemon::Faction;

/// Player army color.
///
/// Red and Green are deliberately absent: they hold the scripted
/// territories, and Green is the elimination-mission target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PlayerColor {
    /// The classic default.
    Yellow,
    /// Blue army.
    Blue,
    /// White army.
    White,
    /// Black army.
    Black,
}

impl PlayerColor {
    /// The faction this choice maps to.
    pub(crate) const fn faction(self) -> Faction {
        match self {
            PlayerColor::Yellow => Faction::Yellow,
            PlayerColor::Blue => Faction::Blue,
            PlayerColor::White => Faction::White,
            PlayerColor::Black => Faction::Black,
        }
    }
}

/// End-of-session summary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SummaryFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}
