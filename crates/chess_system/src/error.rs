//! Outcome of chess system operations

use std::io;

use thiserror::Error;

/// Reason a chess system operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid id")]
    InvalidId,
    #[error("invalid tournament location")]
    InvalidLocation,
    #[error("invalid maximum games per player")]
    InvalidMaxGames,
    #[error("invalid play time")]
    InvalidPlayTime,
    #[error("tournament already exists")]
    TournamentAlreadyExists,
    #[error("tournament does not exist")]
    TournamentNotExist,
    #[error("tournament has already ended")]
    TournamentEnded,
    #[error("game already exists")]
    GameAlreadyExists,
    #[error("player exceeded the maximum number of games")]
    ExceededGames,
    #[error("player does not exist")]
    PlayerNotExist,
    #[error("tournament has no games")]
    NoGames,
    #[error("no tournament has ended")]
    NoTournamentsEnded,
    #[error("failed to save report: {0}")]
    SaveFailure(String),
    #[error("out of memory")]
    OutOfMemory,
}

impl From<io::Error> for ChessError {
    fn from(err: io::Error) -> Self {
        ChessError::SaveFailure(err.to_string())
    }
}

pub type ChessResult<T> = Result<T, ChessError>;
