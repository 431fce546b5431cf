//! Chess system CLI
//!
//! Replay a session file and write the player-level and tournament reports.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chess_system::{Session, SessionConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess Tournament Tracker");
    println!();
    println!("Usage:");
    println!("  chess_system run <session> [--levels PATH] [--stats PATH] [--json]");
    println!("  chess_system help");
    println!();
    println!("Options:");
    println!("  --levels PATH   write the players-levels report to PATH");
    println!("  --stats PATH    write the tournament-statistics report to PATH");
    println!("  --json          print a JSON summary of the run");
    println!();
    println!("Sessions are TOML files (or JSON with a .json extension).");
    println!("Set RUST_LOG=debug for a trace of every state change.");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_session(args: &[String]) -> Result<()> {
    let Some(session_path) = args.first() else {
        print_usage();
        bail!("run requires a session file");
    };

    let mut config = SessionConfig::load(Path::new(session_path))
        .with_context(|| format!("loading session {}", session_path))?;

    // Parse optional arguments
    let mut json = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--levels" | "-l" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--levels requires a path");
                };
                config.output.players_levels = Some(PathBuf::from(path));
                i += 1;
            }
            "--stats" | "-s" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--stats requires a path");
                };
                config.output.tournament_statistics = Some(PathBuf::from(path));
                i += 1;
            }
            "--json" => json = true,
            other => bail!("unknown option: {}", other),
        }
        i += 1;
    }

    info!(
        "Running session {} ({} commands)",
        session_path,
        config.commands.len()
    );
    let mut session = Session::new(config);
    let summary = session.run();

    if json {
        println!("{}", summary.to_json().context("serializing summary")?);
    } else {
        println!(
            "{} commands, {} failed",
            summary.outcomes.len(),
            summary.failures()
        );
        for level in &summary.levels {
            println!("{}", level);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "run" => run_session(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {}", other)
        }
    }
}
