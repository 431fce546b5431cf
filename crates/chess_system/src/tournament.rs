//! A single tournament: its games, its players and the derived statistics

use std::cmp::Ordering;

use ordered_map::OrderedMap;
use tracing::debug;

use crate::error::{ChessError, ChessResult};
use crate::game::{Game, GameId, Side, Winner};
use crate::player::{Player, PlayerId};
use crate::report::TournamentStatistics;

/// Tournament identifier. Valid ids are strictly positive.
pub type TournamentId = i32;

/// What removing a player did to one tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The player has no games here (never played, or already removed).
    NotPresent,
    /// The tournament had ended; only the player's statistics were cleared.
    Tombstoned,
    /// The player's games were awarded to their opponents.
    Forfeited { games: usize },
}

#[derive(Debug, Clone)]
pub struct Tournament {
    max_games_per_player: u32,
    location: String,
    games: OrderedMap<GameId, Game>,
    players: OrderedMap<PlayerId, Player>,
    longest_game_time: u32,
    average_game_time: f64,
    winner: Option<PlayerId>,
    ended: bool,
    distinct_players: u32,
}

/// A location is a capitalised name: an ASCII uppercase letter followed by
/// lowercase letters and spaces.
pub fn is_valid_location(location: &str) -> bool {
    let mut chars = location.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c == ' ' || c.is_ascii_lowercase())
        }
        _ => false,
    }
}

impl Tournament {
    pub fn new(max_games_per_player: i32, location: &str) -> ChessResult<Self> {
        if !is_valid_location(location) {
            return Err(ChessError::InvalidLocation);
        }
        let max_games_per_player = u32::try_from(max_games_per_player)
            .ok()
            .filter(|max| *max > 0)
            .ok_or(ChessError::InvalidMaxGames)?;

        Ok(Self {
            max_games_per_player,
            location: location.to_string(),
            games: OrderedMap::new(),
            players: OrderedMap::new(),
            longest_game_time: 0,
            average_game_time: 0.0,
            winner: None,
            ended: false,
            distinct_players: 0,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn max_games_per_player(&self) -> u32 {
        self.max_games_per_player
    }

    pub fn games(&self) -> &OrderedMap<GameId, Game> {
        &self.games
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn players(&self) -> &OrderedMap<PlayerId, Player> {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Longest game in seconds
    pub fn longest_game_time(&self) -> u32 {
        self.longest_game_time
    }

    /// Mean game duration in seconds, 0 before the first game
    pub fn average_game_time(&self) -> f64 {
        self.average_game_time
    }

    /// Winner chosen when the tournament ended
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Number of players that entered the tournament. A removed player that
    /// comes back counts again.
    pub fn distinct_players(&self) -> u32 {
        self.distinct_players
    }

    fn games_played_by(&self, id: PlayerId) -> u32 {
        self.players.get(&id).map_or(0, |player| player.games_played)
    }

    /// Record a game and return its id.
    ///
    /// Every check runs before anything is modified.
    pub fn add_game(
        &mut self,
        first: PlayerId,
        second: PlayerId,
        winner: Winner,
        play_time: i32,
    ) -> ChessResult<GameId> {
        if first <= 0 || second <= 0 || first == second {
            return Err(ChessError::InvalidId);
        }
        if self.ended {
            return Err(ChessError::TournamentEnded);
        }
        if self.games.values().any(|game| game.is_between(first, second)) {
            return Err(ChessError::GameAlreadyExists);
        }
        let play_time = u32::try_from(play_time)
            .ok()
            .filter(|time| *time > 0)
            .ok_or(ChessError::InvalidPlayTime)?;
        if self.games_played_by(first) >= self.max_games_per_player
            || self.games_played_by(second) >= self.max_games_per_player
        {
            return Err(ChessError::ExceededGames);
        }

        let id = self.games.len() as GameId + 1;
        self.games
            .put(id, Game::new(first, second, winner, play_time))
            .map_err(|_| ChessError::OutOfMemory)?;

        self.longest_game_time = self.longest_game_time.max(play_time);
        // No history of durations is kept, so the mean is updated in place.
        let count = self.games.len() as f64;
        self.average_game_time =
            (self.average_game_time * (count - 1.0) + f64::from(play_time)) / count;

        self.credit(first, Side::First, winner, play_time)?;
        self.credit(second, Side::Second, winner, play_time)?;

        debug!(
            "Game {} recorded: {} vs {} ({:?}, {}s)",
            id, first, second, winner, play_time
        );
        Ok(id)
    }

    /// Apply one game's outcome to the player on `side` and store the record.
    fn credit(
        &mut self,
        id: PlayerId,
        side: Side,
        winner: Winner,
        play_time: u32,
    ) -> ChessResult<()> {
        let mut player = self.players.get(&id).cloned().unwrap_or_default();
        if !player.has_played() {
            self.distinct_players += 1;
            player.removed = false;
        }
        player.record(winner.result_for(side), play_time);
        self.players
            .put(id, player)
            .map_err(|_| ChessError::OutOfMemory)?;
        Ok(())
    }

    /// Close the tournament and pick its winner.
    ///
    /// Highest points win; ties go to fewer losses, then more wins, then the
    /// lower player id.
    pub fn end(&mut self) -> ChessResult<PlayerId> {
        if self.ended {
            return Err(ChessError::TournamentEnded);
        }

        let mut standings = self.players.iter();
        let (mut best_id, mut best) = standings.next().ok_or(ChessError::NoGames)?;
        for (id, player) in standings {
            match player.compare_standing(best) {
                Ordering::Greater => {
                    best_id = id;
                    best = player;
                }
                Ordering::Equal if id < best_id => {
                    best_id = id;
                    best = player;
                }
                _ => {}
            }
        }
        if !best.has_played() {
            return Err(ChessError::NoGames);
        }

        let winner = *best_id;
        self.winner = Some(winner);
        self.ended = true;
        Ok(winner)
    }

    /// Remove a player from this tournament.
    ///
    /// In an ongoing tournament each of the player's games is awarded to the
    /// opponent and the player's seat is emptied. An ended tournament keeps
    /// its games and winner; only the player's own record is cleared.
    pub fn remove_player(&mut self, id: PlayerId) -> Removal {
        match self.players.get_mut(&id) {
            Some(player) if player.has_played() => {
                if self.ended {
                    player.reset();
                    return Removal::Tombstoned;
                }
            }
            _ => return Removal::NotPresent,
        }

        let mut forfeited = 0;
        for game in self.games.values_mut() {
            let Some(side) = game.side_of(id) else {
                continue;
            };
            let opponent_side = side.other();
            if let Some(opponent) = game
                .player(opponent_side)
                .and_then(|opponent_id| self.players.get_mut(&opponent_id))
            {
                opponent.convert_to_win(game.winner().result_for(opponent_side));
            }
            game.forfeit(side);
            forfeited += 1;
        }

        if let Some(player) = self.players.get_mut(&id) {
            player.reset();
        }
        debug!("Player {} removed, {} games forfeited", id, forfeited);
        Removal::Forfeited { games: forfeited }
    }

    /// Statistics line block, available once the tournament has ended.
    pub fn statistics(&self) -> Option<TournamentStatistics> {
        let winner = self.winner.filter(|_| self.ended)?;
        Some(TournamentStatistics {
            winner,
            longest_game_time: self.longest_game_time,
            average_game_time: self.average_game_time,
            location: self.location.clone(),
            total_games: self.games.len(),
            distinct_players: self.distinct_players,
        })
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
