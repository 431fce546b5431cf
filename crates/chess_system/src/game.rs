//! Single game records

use serde::{Deserialize, Serialize};

use crate::player::{GameResult, PlayerId};

/// Game identifier within a tournament, assigned sequentially from 1.
pub type GameId = u32;

/// Recorded outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    First,
    Second,
    Draw,
}

impl Winner {
    /// The outcome as seen by the player sitting on `side`.
    pub fn result_for(self, side: Side) -> GameResult {
        match (self, side) {
            (Winner::Draw, _) => GameResult::Draw,
            (Winner::First, Side::First) | (Winner::Second, Side::Second) => GameResult::Win,
            _ => GameResult::Loss,
        }
    }
}

/// Seat of a player in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// The winner value meaning "this side won".
    pub fn as_winner(self) -> Winner {
        match self {
            Side::First => Winner::First,
            Side::Second => Winner::Second,
        }
    }
}

/// A recorded game.
///
/// A seat becomes `None` once its player has been removed from the
/// tournament; the game then counts as won by the remaining seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    first: Option<PlayerId>,
    second: Option<PlayerId>,
    winner: Winner,
    play_time: u32,
}

impl Game {
    /// Build a game between two validated players.
    pub(crate) fn new(first: PlayerId, second: PlayerId, winner: Winner, play_time: u32) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
            winner,
            play_time,
        }
    }

    pub fn first_player(&self) -> Option<PlayerId> {
        self.first
    }

    pub fn second_player(&self) -> Option<PlayerId> {
        self.second
    }

    pub fn player(&self, side: Side) -> Option<PlayerId> {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Duration in seconds
    pub fn play_time(&self) -> u32 {
        self.play_time
    }

    /// Seat occupied by `player`, if they took part in this game.
    pub fn side_of(&self, player: PlayerId) -> Option<Side> {
        if self.first == Some(player) {
            Some(Side::First)
        } else if self.second == Some(player) {
            Some(Side::Second)
        } else {
            None
        }
    }

    /// Whether this game was played between `a` and `b`, in either seating.
    pub fn is_between(&self, a: PlayerId, b: PlayerId) -> bool {
        let pair = (Some(a), Some(b));
        (self.first, self.second) == pair || (self.second, self.first) == pair
    }

    /// Empty the seat on `side` and award the game to the other seat.
    pub(crate) fn forfeit(&mut self, side: Side) {
        match side {
            Side::First => self.first = None,
            Side::Second => self.second = None,
        }
        self.winner = side.other().as_winner();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
