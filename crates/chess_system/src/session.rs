//! Session files: a command script plus where to write the reports
//!
//! Sessions are TOML by default; a `.json` extension selects JSON.
//!
//! ```toml
//! [output]
//! players_levels = "levels.txt"
//! tournament_statistics = "stats.txt"
//!
//! [[commands]]
//! action = "add_tournament"
//! id = 1
//! max_games = 3
//! location = "Haifa"
//!
//! [[commands]]
//! action = "add_game"
//! tournament = 1
//! first = 10
//! second = 20
//! winner = "first"
//! play_time = 50
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::error::ChessResult;
use crate::game::Winner;
use crate::player::PlayerId;
use crate::report::PlayerLevel;
use crate::system::ChessSystem;
use crate::tournament::TournamentId;

/// Failure to read or parse a session file
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse TOML session: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON session: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where reports are written after the commands ran
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub players_levels: Option<PathBuf>,
    pub tournament_statistics: Option<PathBuf>,
}

/// One step of a session script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    AddTournament {
        id: TournamentId,
        max_games: i32,
        location: String,
    },
    AddGame {
        tournament: TournamentId,
        first: PlayerId,
        second: PlayerId,
        winner: Winner,
        play_time: i32,
    },
    RemoveTournament {
        id: TournamentId,
    },
    RemovePlayer {
        player: PlayerId,
    },
    EndTournament {
        id: TournamentId,
    },
    AveragePlayTime {
        player: PlayerId,
    },
}

impl Command {
    /// Run the command and describe what it did.
    pub fn apply(&self, system: &mut ChessSystem) -> ChessResult<String> {
        match self {
            Command::AddTournament {
                id,
                max_games,
                location,
            } => {
                system.add_tournament(*id, *max_games, location)?;
                Ok(format!("tournament {} added", id))
            }
            Command::AddGame {
                tournament,
                first,
                second,
                winner,
                play_time,
            } => {
                let game = system.add_game(*tournament, *first, *second, *winner, *play_time)?;
                Ok(format!("game {} recorded in tournament {}", game, tournament))
            }
            Command::RemoveTournament { id } => {
                system.remove_tournament(*id)?;
                Ok(format!("tournament {} removed", id))
            }
            Command::RemovePlayer { player } => {
                system.remove_player(*player)?;
                Ok(format!("player {} removed", player))
            }
            Command::EndTournament { id } => {
                let winner = system.end_tournament(*id)?;
                Ok(format!("tournament {} won by {}", id, winner))
            }
            Command::AveragePlayTime { player } => {
                let average = system.average_play_time(*player)?;
                Ok(format!("player {} average play time {:.2}", player, average))
            }
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Stop at the first command that fails
    #[serde(default)]
    pub stop_on_error: bool,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl SessionConfig {
    /// Load a session, picking the format from the file extension
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SessionError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Result of one command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutcome {
    /// Position in the script, from 1
    pub step: usize,
    pub command: Command,
    pub ok: bool,
    pub message: String,
}

/// Result of writing one report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOutcome {
    pub path: PathBuf,
    pub ok: bool,
    pub message: String,
}

/// Everything a session run produced
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub outcomes: Vec<CommandOutcome>,
    pub levels: Vec<PlayerLevel>,
    pub reports: Vec<ReportOutcome>,
}

impl SessionSummary {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|outcome| !outcome.ok).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Replays a session against a chess system
pub struct Session {
    config: SessionConfig,
    system: ChessSystem,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            system: ChessSystem::new(),
        }
    }

    pub fn system(&self) -> &ChessSystem {
        &self.system
    }

    /// Run every command, then write the configured reports
    pub fn run(&mut self) -> SessionSummary {
        let mut summary = SessionSummary::default();

        for (index, command) in self.config.commands.iter().enumerate() {
            let step = index + 1;
            let (ok, message) = match command.apply(&mut self.system) {
                Ok(message) => {
                    info!("[{}] {}", step, message);
                    (true, message)
                }
                Err(err) => {
                    warn!("[{}] {:?} failed: {}", step, command, err);
                    (false, err.to_string())
                }
            };
            summary.outcomes.push(CommandOutcome {
                step,
                command: command.clone(),
                ok,
                message,
            });
            if !ok && self.config.stop_on_error {
                warn!("Stopping session after step {}", step);
                break;
            }
        }

        match self.system.players_levels() {
            Ok(levels) => summary.levels = levels,
            Err(err) => warn!("Could not compute player levels: {}", err),
        }

        if let Some(path) = self.config.output.players_levels.clone() {
            let result = self.system.save_players_levels_to(&path);
            summary.reports.push(report_outcome(path, result));
        }
        if let Some(path) = self.config.output.tournament_statistics.clone() {
            let result = self.system.save_tournament_statistics_to(&path);
            summary.reports.push(report_outcome(path, result));
        }

        summary
    }
}

fn report_outcome(path: PathBuf, result: ChessResult<()>) -> ReportOutcome {
    match result {
        Ok(()) => {
            info!("Report written to {}", path.display());
            ReportOutcome {
                path,
                ok: true,
                message: "written".to_string(),
            }
        }
        Err(err) => {
            warn!("Report {} not written: {}", path.display(), err);
            ReportOutcome {
                path,
                ok: false,
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
