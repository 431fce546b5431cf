//! Flat-text reports: player levels and tournament statistics

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::ChessResult;
use crate::player::PlayerId;

/// One line of the players-levels report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerLevel {
    pub id: PlayerId,
    pub level: f64,
}

impl fmt::Display for PlayerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.id, self.level)
    }
}

/// Highest level first, lower id first among equal levels.
pub fn sort_levels(levels: &mut [PlayerLevel]) {
    levels.sort_by(|a, b| {
        b.level
            .partial_cmp(&a.level)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Write one `"<id> <level>"` line per entry, in the given order.
pub fn write_players_levels<W: Write>(sink: &mut W, levels: &[PlayerLevel]) -> ChessResult<()> {
    for level in levels {
        writeln!(sink, "{}", level)?;
    }
    Ok(())
}

/// Summary of an ended tournament
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentStatistics {
    pub winner: PlayerId,
    pub longest_game_time: u32,
    pub average_game_time: f64,
    pub location: String,
    pub total_games: usize,
    pub distinct_players: u32,
}

impl fmt::Display for TournamentStatistics {
    /// Six lines: winner, longest game, average game, location, games, players
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.winner)?;
        writeln!(f, "{}", self.longest_game_time)?;
        writeln!(f, "{:.2}", self.average_game_time)?;
        writeln!(f, "{}", self.location)?;
        writeln!(f, "{}", self.total_games)?;
        writeln!(f, "{}", self.distinct_players)
    }
}

pub fn write_tournament_statistics<W: Write>(
    sink: &mut W,
    statistics: &[TournamentStatistics],
) -> ChessResult<()> {
    for entry in statistics {
        write!(sink, "{}", entry)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
