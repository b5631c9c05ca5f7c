use log::info;

use sweepslots::{Result, SlotConfig, SlotService};

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    use clap::Parser;

    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    println!("🎰 Sweepslots - Points Casino Spin Engine");
    println!("⚡ Sweepstakes-style demo; points have no cash value");
    println!();

    let config = SlotConfig::load()?;
    info!("Running {} command", cli.command.name());

    match cli.command {
        Commands::Spin { bet, user, count } => {
            let service = SlotService::new(config)?;
            commands::spin_command(&service, bet, user.as_deref(), count).await?;
        }

        Commands::Balance { user } => {
            let service = SlotService::new(config)?;
            commands::balance_command(&service, user.as_deref()).await?;
        }

        Commands::ResetBalance { user, value } => {
            let service = SlotService::new(config)?;
            commands::reset_balance_command(&service, user.as_deref(), value).await?;
        }

        Commands::Stats => {
            let service = SlotService::new(config)?;
            commands::stats_command(&service).await?;
        }

        Commands::Simulate { spins, bet, seed } => {
            commands::simulate_command(config, spins, bet, seed).await?;
        }
    }

    Ok(())
}
