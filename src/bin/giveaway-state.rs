use anyhow::{anyhow, Result};
use chrono::Utc;
use giveaway_bot::config::{range_from_env, schedule_from_env, state_file_from_env};
use giveaway_bot::giveaway::{check_invariants, GiveawayState, GiveawayStore};
use giveaway_bot::utils::datetime::format_timestamp;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Library events reach env_logger through tracing's `log` records
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("check");

    dotenvy::dotenv().ok();

    match command {
        "init" => init_state().await,
        "check" => check_state().await,
        "show" => show_state().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn init_state() -> Result<()> {
    println!("🎲 Giveaway Bot - State File Tool");
    println!("=================================");

    let path = state_file_from_env();
    let schedule = schedule_from_env()?;
    let end_time = schedule.next_after(Utc::now());

    println!("📁 State file: {}", path.display());
    println!("⏰ First draw: {} ({})", format_timestamp(end_time.timestamp()), schedule);

    GiveawayStore::create(&path, GiveawayState::new(end_time.timestamp()))
        .await
        .map_err(|e| anyhow!("Failed to create state file: {}", e))?;

    println!("✅ State file created, the bot is ready to start!");
    Ok(())
}

async fn check_state() -> Result<()> {
    println!("🔍 Checking state file...");

    let path = state_file_from_env();
    let range = range_from_env()?;
    println!("📁 State file: {}", path.display());

    let store = match GiveawayStore::load(&path).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ {e}");
            println!("💡 Run 'giveaway-state init' to create a fresh state file");
            std::process::exit(1);
        }
    };

    let problems = check_invariants(store.state(), &range);
    if problems.is_empty() {
        println!("✅ State file is valid for range {range}");
        return Ok(());
    }

    println!("⚠️  Found {} problem(s):", problems.len());
    for problem in problems {
        println!("  • {problem}");
    }
    std::process::exit(1);
}

async fn show_state() -> Result<()> {
    let path = state_file_from_env();
    let store = GiveawayStore::load(&path)
        .await
        .map_err(|e| anyhow!("Failed to load state file: {}", e))?;
    let state = store.state();
    let round = &state.current_giveaway;

    println!("🎟️  Current round (ends {})", format_timestamp(round.end_time));
    if round.entries.is_empty() {
        println!("  no entries yet");
    }
    for (participant, values) in &round.entries {
        println!("  • user {participant}: {values:?}");
    }

    println!();
    println!("📜 Archive ({} rounds)", state.archive.len());
    for (key, entry) in state.recent_archive(10) {
        match entry.winner() {
            Some(winner) => println!("  • {key}: {} won by user {winner}", entry.winning_number),
            None => println!("  • {key}: {} unclaimed", entry.winning_number),
        }
    }

    Ok(())
}

fn print_help() {
    println!("🎲 Giveaway Bot - State File Tool");
    println!();
    println!("USAGE:");
    println!("    giveaway-state [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    init           Create a fresh state file with the next draw scheduled");
    println!("    check          Load the state file and verify entry rules (default)");
    println!("    show           Print the current round and recent draws");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    STATE_FILE     Path of the state file (default: ./data/giveaway_data.json)");
    println!("    GIVEAWAY_MIN   Lowest valid number (default: 1)");
    println!("    GIVEAWAY_MAX   Highest valid number (default: 90)");
    println!("    DRAW_WEEKDAY   Weekday of the draw (default: tue)");
    println!("    DRAW_TIME      UTC time of the draw, HH:MM (default: 22:00)");
    println!();
}
