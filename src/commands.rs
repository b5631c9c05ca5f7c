//! Command implementations for the sweepslots CLI
//!
//! Thin wrappers over [`SlotService`] that render engine responses for a
//! terminal. All game behavior lives in the library.

use log::info;

use sweepslots::{Error, Result, SlotConfig, SlotService, SpinRequest, SpinResponse};

/// Run `count` spins for one user and print each settlement.
pub async fn spin_command(
    service: &SlotService,
    bet: u64,
    user: Option<&str>,
    count: u32,
) -> Result<()> {
    for _ in 0..count {
        let response = service
            .spin(&SpinRequest {
                bet,
                user_id: user.map(str::to_string),
            })
            .await;
        print_spin(&response);
        if !response.success {
            break;
        }
    }
    Ok(())
}

fn print_spin(response: &SpinResponse) {
    if let Some(result) = &response.result {
        for row in result.reels.rows() {
            println!("  🎰 {} | {} | {}", row[0], row[1], row[2]);
        }
        if result.is_jackpot {
            println!("  🏆 JACKPOT! {} points", result.total_win);
        } else if result.total_win > 0 {
            println!(
                "  ✅ Won {} points on {} line(s), x{}",
                result.total_win,
                result.win_lines.len(),
                result.multiplier
            );
        } else {
            println!("  💨 No win this spin");
        }
        if let Some(balance) = response.balance {
            println!("  💰 Balance: {} points", balance);
        }
    } else if let Some(error) = &response.error {
        println!("  ❌ Spin rejected: {}", error);
        if let Some(balance) = response.balance {
            println!("  💰 Balance: {} points", balance);
        }
    }
    println!();
}

/// Show a player's current balance.
pub async fn balance_command(service: &SlotService, user: Option<&str>) -> Result<()> {
    let response = service.balance(user).await;
    println!("💰 {} has {} points", response.user_id, response.balance);
    Ok(())
}

/// Reset a player's balance to a fixed value.
pub async fn reset_balance_command(
    service: &SlotService,
    user: Option<&str>,
    value: Option<u64>,
) -> Result<()> {
    let response = service.reset_balance(user, value).await;
    println!("✅ {}: {}", response.user_id, response.message);
    Ok(())
}

/// Show the global stats block.
pub async fn stats_command(service: &SlotService) -> Result<()> {
    let stats = service.stats().await;

    println!("📊 Sweepslots Statistics:");
    println!("  🎰 Total Spins: {}", stats.total_spins);
    println!("  ✅ Total Wins: {}", stats.total_wins);
    println!("  🏅 Biggest Win: {} points", stats.biggest_win);
    println!("  🎯 Jackpot Pool: {} points", stats.jackpot_pool);
    if stats.recent_winners.is_empty() {
        println!("  🏆 No recent winners yet");
    } else {
        println!("  🏆 Recent Winners:");
        for winner in &stats.recent_winners {
            let tag = if winner.is_jackpot { " (JACKPOT)" } else { "" };
            println!("    {} won {} points{}", winner.username, winner.amount, tag);
        }
    }
    Ok(())
}

/// Run a batch of spins against a dedicated account and report payout
/// numbers. A seed makes the run reproducible.
pub async fn simulate_command(
    config: SlotConfig,
    spins: u64,
    bet: u64,
    seed: Option<u64>,
) -> Result<()> {
    let service = match seed {
        Some(seed) => SlotService::with_seed(config, seed)?,
        None => SlotService::new(config)?,
    };

    // Bankroll covers the worst case of losing every spin.
    let user = "simulation";
    let bankroll = bet.saturating_mul(spins).max(1);
    service.reset_balance(Some(user), Some(bankroll)).await;

    info!("Simulating {} spins at {} points each", spins, bet);

    let mut total_won = 0u64;
    let mut winning_spins = 0u64;
    let mut jackpots = 0u64;

    for _ in 0..spins {
        let response = service
            .spin(&SpinRequest {
                bet,
                user_id: Some(user.to_string()),
            })
            .await;
        match response.result {
            Some(result) => {
                if result.total_win > 0 {
                    winning_spins += 1;
                    total_won = total_won.saturating_add(result.total_win);
                }
                if result.is_jackpot {
                    jackpots += 1;
                }
            }
            None => {
                let detail = response.error.unwrap_or_else(|| "no result".to_string());
                return Err(Error::Internal(format!("simulation spin failed: {}", detail)));
            }
        }
    }

    let total_bet = bet.saturating_mul(spins);
    let stats = service.stats().await;

    println!("📊 Simulation of {} spins at {} points each:", spins, bet);
    println!("  💸 Total bet: {} points", total_bet);
    println!("  💰 Total won: {} points", total_won);
    println!("  📈 Return to player: {:.2}%", percent(total_won, total_bet));
    println!("  🎯 Hit rate: {:.2}%", percent(winning_spins, spins));
    println!("  🏆 Jackpots: {}", jackpots);
    println!("  🎰 Pool after run: {} points", stats.jackpot_pool);
    Ok(())
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
