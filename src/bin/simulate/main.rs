// Regime Simulation Runner - seedable PRNG, built-in or user regime catalogs
//
// Usage:
//   cargo run --release --bin simulate                       # normal activity, 50 trades
//   cargo run --release --bin simulate -- --activity high    # pick a catalog level
//   cargo run --release --bin simulate -- --trades 100 --price 1.5
//   cargo run --release --bin simulate -- --runs 1000 --seed 42
//   cargo run --release --bin simulate -- --levels my.json   # custom catalog file
//   cargo run --release --bin simulate -- --json             # machine-readable report

mod render;

use regime_sim::{catalog, simulation, ConfigError, MicroUsdc, SimConfig};
use std::path::PathBuf;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    price_usdc: f64,
    trades: u32,
    runs: u32,
    seed: u64,
    activity: String,
    levels_file: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        price_usdc: 2.0,
        trades: 50,
        runs: simulation::DEFAULT_RUNS,
        seed: 0,
        activity: "normal".to_string(),
        levels_file: None,
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--price" => {
                i += 1;
                if i < args.len() {
                    cli.price_usdc = args[i].parse().unwrap_or(2.0);
                }
            }
            "--trades" => {
                i += 1;
                if i < args.len() {
                    cli.trades = args[i].parse().unwrap_or(50);
                }
            }
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(simulation::DEFAULT_RUNS);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--activity" => {
                i += 1;
                if i < args.len() {
                    cli.activity = args[i].clone();
                }
            }
            "--levels" => {
                i += 1;
                if i < args.len() {
                    cli.levels_file = Some(PathBuf::from(&args[i]));
                }
            }
            "--json" => {
                cli.json = true;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn run(cli: &CliArgs) -> Result<(), ConfigError> {
    let levels = match &cli.levels_file {
        Some(path) => catalog::load(path)?,
        None => catalog::builtin(),
    };
    let level = catalog::find(&levels, &cli.activity)?;

    let config = SimConfig::new(
        MicroUsdc::from_usdc(cli.price_usdc),
        cli.trades,
        cli.runs,
        cli.seed,
    )?;

    let report = simulation::run(&config, level);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
        println!("{}", json);
    } else {
        render::print_report(&report);
    }
    Ok(())
}

fn main() {
    let cli = parse_args();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
