//! Chess tournament tracker
//!
//! This crate provides:
//! - Tournaments that record games between players and pick a winner
//! - Player removal that rewrites their games as forfeits
//! - Cross-tournament player levels and per-tournament statistics reports
//! - Session files for replaying a command script from the command line
//!
//! # Usage
//!
//! ```bash
//! # Replay a session and write the reports it names
//! cargo run -p chess_system -- run session.toml
//!
//! # Override report paths and print a JSON summary
//! cargo run -p chess_system -- run session.toml --levels levels.txt --stats stats.txt --json
//! ```

mod error;
mod game;
mod player;
mod report;
mod session;
mod system;
mod tournament;

pub use error::*;
pub use game::*;
pub use player::*;
pub use report::*;
pub use session::*;
pub use system::*;
pub use tournament::*;
