//! # Gacha Simulator
//!
//! Runs a pool's draw logic many times and prints the observed rarity
//! distribution next to the configured rates.
//!
//! ```text
//! gacha_sim <content.toml> <pool_id> [pulls] [seed]
//! ```
//!
//! Set `RUST_LOG=summoner_economy=debug` to see per-pull logging.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::process::ExitCode;
use summoner_content::{ContentTables, Rarity};
use summoner_economy::{simulate, GachaEngine, GameState};
use tracing_subscriber::EnvFilter;

const DEFAULT_PULLS: u64 = 100_000;
const DEFAULT_SEED: u64 = 42;

fn main() -> ExitCode {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {e}");
    }

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         SUMMONER GACHA SIMULATOR                                 ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: gacha_sim <content.toml> <pool_id> [pulls] [seed]");
        println!();
        println!("  pulls    Number of single pulls to simulate (default {DEFAULT_PULLS})");
        println!("  seed     RNG seed (default {DEFAULT_SEED})");
        return ExitCode::FAILURE;
    }

    let content_path = &args[1];
    let pool_id = &args[2];
    let Some(pulls) = parse_or(args.get(3), DEFAULT_PULLS) else {
        eprintln!("Error: pulls must be a non-negative integer");
        return ExitCode::FAILURE;
    };
    let Some(seed) = parse_or(args.get(4), DEFAULT_SEED) else {
        eprintln!("Error: seed must be a non-negative integer");
        return ExitCode::FAILURE;
    };

    let content = match ContentTables::from_toml_file(content_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let engine = GachaEngine::new(&content);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let stats = match simulate(&engine, &GameState::new("simulator"), pool_id, pulls, &mut rng) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // simulate() already rejected unknown pools.
    let Some(pool) = content.pool(pool_id) else {
        return ExitCode::FAILURE;
    };

    println!("┌─ {} ({}) ", pool.name, pool.id);
    println!("│ Pulls:              {}", stats.pulls);
    println!("│ Seed:               {seed}");
    println!("├─ RARITY ─────────────────────────────────────────────────────────");
    println!("│ {:<6} {:>10} {:>10} {:>10}", "Tier", "Count", "Observed", "Config");
    for rarity in Rarity::RAREST_FIRST {
        let configured = if pool.is_lucky_draw {
            "-".to_string()
        } else {
            format!("{:.3}%", pool.rates.rate(rarity) * 100.0)
        };
        println!(
            "│ {:<6} {:>10} {:>9.3}% {:>10}",
            rarity.label(),
            stats.count(rarity),
            stats.frequency(rarity) * 100.0,
            configured
        );
    }
    println!("├─ PITY ───────────────────────────────────────────────────────────");
    println!("│ SSR/UR rate:        {:.3}%", stats.high_rate() * 100.0);
    println!("│ UP items:           {}", stats.up);
    println!("│ Longest drought:    {}", stats.longest_drought);
    if let Some(hard) = pool.guarantees.hard_pity_ssr {
        println!("│ Hard pity:          {hard}");
    }
    println!("└──────────────────────────────────────────────────────────────────");

    ExitCode::SUCCESS
}

fn parse_or(arg: Option<&String>, default: u64) -> Option<u64> {
    arg.map_or(Some(default), |value| value.parse().ok())
}
