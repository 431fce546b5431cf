//! The chess system: every tournament, plus cross-tournament reporting

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ordered_map::OrderedMap;
use tracing::{debug, info};

use crate::error::{ChessError, ChessResult};
use crate::game::{GameId, Winner};
use crate::player::{Player, PlayerId};
use crate::report::{self, PlayerLevel, TournamentStatistics};
use crate::tournament::{Removal, Tournament, TournamentId};

#[derive(Debug, Clone, Default)]
pub struct ChessSystem {
    tournaments: OrderedMap<TournamentId, Tournament>,
}

impl ChessSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.get(&id)
    }

    pub fn tournaments(&self) -> &OrderedMap<TournamentId, Tournament> {
        &self.tournaments
    }

    pub fn add_tournament(
        &mut self,
        id: TournamentId,
        max_games_per_player: i32,
        location: &str,
    ) -> ChessResult<()> {
        if id <= 0 {
            return Err(ChessError::InvalidId);
        }
        if self.tournaments.contains(&id) {
            return Err(ChessError::TournamentAlreadyExists);
        }
        let tournament = Tournament::new(max_games_per_player, location)?;
        self.tournaments
            .put(id, tournament)
            .map_err(|_| ChessError::OutOfMemory)?;
        debug!("Tournament {} added in {}", id, location);
        Ok(())
    }

    pub fn add_game(
        &mut self,
        tournament_id: TournamentId,
        first: PlayerId,
        second: PlayerId,
        winner: Winner,
        play_time: i32,
    ) -> ChessResult<GameId> {
        if tournament_id <= 0 || first <= 0 || second <= 0 || first == second {
            return Err(ChessError::InvalidId);
        }
        let tournament = self
            .tournaments
            .get_mut(&tournament_id)
            .ok_or(ChessError::TournamentNotExist)?;
        tournament.add_game(first, second, winner, play_time)
    }

    pub fn remove_tournament(&mut self, id: TournamentId) -> ChessResult<()> {
        if id <= 0 {
            return Err(ChessError::InvalidId);
        }
        self.tournaments
            .remove(&id)
            .map_err(|_| ChessError::TournamentNotExist)?;
        debug!("Tournament {} removed", id);
        Ok(())
    }

    /// Remove a player from every tournament they have games in.
    ///
    /// Fails with [`ChessError::PlayerNotExist`] when no tournament holds any
    /// game of theirs, which includes a player that was already removed.
    pub fn remove_player(&mut self, id: PlayerId) -> ChessResult<()> {
        if id <= 0 {
            return Err(ChessError::InvalidId);
        }
        let mut found = false;
        for (tournament_id, tournament) in self.tournaments.iter_mut() {
            match tournament.remove_player(id) {
                Removal::NotPresent => {}
                removal => {
                    debug!("Player {} removed from tournament {}: {:?}", id, tournament_id, removal);
                    found = true;
                }
            }
        }
        if !found {
            return Err(ChessError::PlayerNotExist);
        }
        Ok(())
    }

    /// End a tournament and return its winner.
    pub fn end_tournament(&mut self, id: TournamentId) -> ChessResult<PlayerId> {
        if id <= 0 {
            return Err(ChessError::InvalidId);
        }
        let tournament = self
            .tournaments
            .get_mut(&id)
            .ok_or(ChessError::TournamentNotExist)?;
        let winner = tournament.end()?;
        info!("Tournament {} ended, winner {}", id, winner);
        Ok(winner)
    }

    /// Mean game duration of a player over every tournament they played in.
    pub fn average_play_time(&self, player_id: PlayerId) -> ChessResult<f64> {
        if player_id <= 0 {
            return Err(ChessError::InvalidId);
        }
        let (time, games) = self
            .tournaments
            .values()
            .filter_map(|tournament| tournament.player(player_id))
            .fold((0u64, 0u64), |(time, games), player| {
                (time + player.time_played, games + u64::from(player.games_played))
            });
        if games == 0 {
            return Err(ChessError::PlayerNotExist);
        }
        Ok(time as f64 / games as f64)
    }

    /// Every player's statistics summed across tournaments.
    ///
    /// The first tournament's player map seeds the result; later tournaments
    /// add their counters on top.
    pub fn merged_players(&self) -> ChessResult<OrderedMap<PlayerId, Player>> {
        let mut tournaments = self.tournaments.values();
        let mut merged = match tournaments.next() {
            Some(first) => first
                .players()
                .try_clone()
                .map_err(|_| ChessError::OutOfMemory)?,
            None => OrderedMap::new(),
        };
        for tournament in tournaments {
            for (id, player) in tournament.players() {
                match merged.get_mut(id) {
                    Some(total) => total.merge(player),
                    None => {
                        merged
                            .put(*id, player.clone())
                            .map_err(|_| ChessError::OutOfMemory)?;
                    }
                }
            }
        }
        Ok(merged)
    }

    /// Levels of every player with at least one game, best first.
    pub fn players_levels(&self) -> ChessResult<Vec<PlayerLevel>> {
        let merged = self.merged_players()?;
        let mut levels: Vec<PlayerLevel> = merged
            .iter()
            .filter_map(|(id, player)| player.level().map(|level| PlayerLevel { id: *id, level }))
            .collect();
        report::sort_levels(&mut levels);
        Ok(levels)
    }

    pub fn save_players_levels<W: Write>(&self, sink: &mut W) -> ChessResult<()> {
        let levels = self.players_levels()?;
        report::write_players_levels(sink, &levels)
    }

    pub fn save_players_levels_to(&self, path: &Path) -> ChessResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save_players_levels(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Statistics of every ended tournament, by ascending tournament id.
    pub fn tournament_statistics(&self) -> Vec<TournamentStatistics> {
        self.tournaments
            .values()
            .filter_map(Tournament::statistics)
            .collect()
    }

    /// Write the statistics of every ended tournament.
    ///
    /// Nothing is written when no tournament has ended.
    pub fn save_tournament_statistics<W: Write>(&self, sink: &mut W) -> ChessResult<()> {
        let statistics = self.tournament_statistics();
        if statistics.is_empty() {
            return Err(ChessError::NoTournamentsEnded);
        }
        report::write_tournament_statistics(sink, &statistics)
    }

    /// Create (or truncate) `path` and write the tournament statistics to it.
    pub fn save_tournament_statistics_to(&self, path: &Path) -> ChessResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save_tournament_statistics(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod system_tests;
