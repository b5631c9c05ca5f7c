//! CLI argument parsing for the sweepslots demo binary
//!
//! All game behavior lives in the library; this module only defines the
//! command surface.

use clap::{Parser, Subcommand};

/// Command-line interface definition for sweepslots
#[derive(Parser)]
#[command(name = "sweepslots")]
#[command(about = "Slot spin engine for a points-based sweepstakes demo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long)]
    pub verbose: bool,
}

/// Available commands for the sweepslots CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Spin the reels one or more times
    Spin {
        #[arg(long, default_value = "10")]
        bet: u64,
        #[arg(long)]
        user: Option<String>,
        #[arg(long, default_value = "1")]
        count: u32,
    },

    /// Show a player's point balance
    Balance {
        #[arg(long)]
        user: Option<String>,
    },

    /// Reset a player's balance to a fixed value
    ResetBalance {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        value: Option<u64>,
    },

    /// Show global game statistics
    Stats,

    /// Run a batch of spins and report payout numbers
    Simulate {
        #[arg(long, default_value = "1000")]
        spins: u64,
        #[arg(long, default_value = "10")]
        bet: u64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Spin { .. } => "spin",
            Commands::Balance { .. } => "balance",
            Commands::ResetBalance { .. } => "reset-balance",
            Commands::Stats => "stats",
            Commands::Simulate { .. } => "simulate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_spin_defaults() {
        let cli = Cli::parse_from(["sweepslots", "spin"]);
        match cli.command {
            Commands::Spin { bet, user, count } => {
                assert_eq!(bet, 10);
                assert!(user.is_none());
                assert_eq!(count, 1);
            }
            _ => panic!("expected spin command"),
        }
    }

    #[test]
    fn test_simulate_args() {
        let cli = Cli::parse_from([
            "sweepslots",
            "simulate",
            "--spins",
            "500",
            "--bet",
            "25",
            "--seed",
            "42",
        ]);
        match cli.command {
            Commands::Simulate { spins, bet, seed } => {
                assert_eq!(spins, 500);
                assert_eq!(bet, 25);
                assert_eq!(seed, Some(42));
            }
            _ => panic!("expected simulate command"),
        }
    }

    #[test]
    fn test_command_names() {
        let cli = Cli::parse_from(["sweepslots", "stats"]);
        assert_eq!(cli.command.name(), "stats");
        let cli = Cli::parse_from(["sweepslots", "reset-balance"]);
        assert_eq!(cli.command.name(), "reset-balance");
    }
}
