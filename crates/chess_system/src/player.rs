//! Per-player running statistics

use std::cmp::Ordering;

/// Player identifier. Valid ids are strictly positive.
pub type PlayerId = i32;

/// Result of a single game from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Statistics of one player within one tournament (or merged across several).
///
/// A removed player keeps its entry: the counters are zeroed and `removed` is
/// set, so a later removal can tell it has nothing left to forfeit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub games_played: u32,
    /// Total seconds spent in games
    pub time_played: u64,
    pub removed: bool,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_played(&self) -> bool {
        self.games_played > 0
    }

    /// Count one finished game.
    pub fn record(&mut self, result: GameResult, play_time: u32) {
        self.games_played += 1;
        self.time_played += u64::from(play_time);
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Tournament points: 2 per win, 1 per draw
    pub fn points(&self) -> u32 {
        2 * self.wins + self.draws
    }

    /// Numerator of the level formula: `6*wins - 10*losses + 2*draws`
    pub fn level_score(&self) -> i64 {
        6 * i64::from(self.wins) - 10 * i64::from(self.losses) + 2 * i64::from(self.draws)
    }

    /// Level per game played, `None` when the player has no games.
    pub fn level(&self) -> Option<f64> {
        if !self.has_played() {
            return None;
        }
        Some(self.level_score() as f64 / f64::from(self.games_played))
    }

    /// Compare tournament standing.
    ///
    /// More points first, then fewer losses, then more wins. `Greater` means
    /// `self` stands above `other`; `Equal` leaves the decision to the caller
    /// (lowest id).
    pub fn compare_standing(&self, other: &Player) -> Ordering {
        self.points()
            .cmp(&other.points())
            .then_with(|| other.losses.cmp(&self.losses))
            .then_with(|| self.wins.cmp(&other.wins))
    }

    /// Turn a game this player already has on record into a win.
    ///
    /// `prior` is what the game counted as for this player. Players that
    /// hold no games are left alone.
    pub fn convert_to_win(&mut self, prior: GameResult) {
        if !self.has_played() {
            return;
        }
        match prior {
            GameResult::Win => {}
            GameResult::Draw => {
                self.draws = self.draws.saturating_sub(1);
                self.wins += 1;
            }
            GameResult::Loss => {
                self.losses = self.losses.saturating_sub(1);
                self.wins += 1;
            }
        }
    }

    /// Zero the statistics and tombstone the record.
    pub fn reset(&mut self) {
        *self = Self {
            removed: true,
            ..Self::default()
        };
    }

    /// Add another record's counters to this one.
    pub fn merge(&mut self, other: &Player) {
        self.wins += other.wins;
        self.draws += other.draws;
        self.losses += other.losses;
        self.games_played += other.games_played;
        self.time_played += other.time_played;
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
