//! Card game payout simulator CLI.
//!
//! Plays a game to its trial budget and checks the empirical expected value.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100000 tries
//!   cargo run --bin simulate -- -n 5000 -c 500  # 5000 tries, 500 per chunk
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use cardsim::analysis::WaitedValue;
use cardsim::build_info;
use cardsim::constants::{DEFAULT_SIMULATION_TRIES, WAITED_VALUE_ERROR_MARGIN};
use cardsim::services::{create_game, create_simulation_with};
use cardsim::simulator::{SimConfig, SimReport, SimulationHooks, SimulationProgress};
use std::env;
use std::process::ExitCode;
use tracing::Level;

struct CliOptions {
    tries: u64,
    margin: f64,
    json: bool,
    sim: SimConfig,
}

/// Prints a progress line per chunk at verbosity 2.
struct ConsoleHooks {
    verbosity: u8,
}

impl SimulationHooks for ConsoleHooks {
    fn on_progress(&mut self, progress: SimulationProgress) {
        if self.verbosity >= 2 {
            println!(
                "  {:>10}/{} ({:.0}%)",
                progress.current_tries,
                progress.max_tries,
                progress.fraction() * 100.0
            );
        }
    }

    fn on_finish(&mut self) {
        if self.verbosity >= 1 {
            println!("Simulation finished.");
            println!();
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);
    init_tracing(options.sim.verbosity);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CARD GAME PAYOUT SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("{}", build_info::version_line());
    println!();
    println!("Configuration:");
    println!("  Tries:          {}", options.tries);
    println!("  Chunk Size:     {}", options.sim.chunk_size);
    println!("  Error Margin:   {:.1}%", options.margin * 100.0);
    if !options.sim.weights.is_empty() {
        println!("  Weights:        {:?}", options.sim.weights);
    }
    if let Some(seed) = options.sim.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run(&options) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if options.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(err) = std::fs::write(&filename, report.to_json()) {
            eprintln!("error: failed to write {}: {}", filename, err);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn run(options: &CliOptions) -> Result<SimReport, Box<dyn std::error::Error>> {
    let game = create_game(format!("game-simulation-with-{}", options.tries), options.tries)?;
    let hooks = ConsoleHooks {
        verbosity: options.sim.verbosity,
    };
    let mut simulation = create_simulation_with(game, hooks, &options.sim)?;
    simulation.start()?;

    let game = simulation.into_game();
    let analysis = WaitedValue::new(&game).with_margin(options.margin);
    Ok(SimReport::with_analysis(&game, &analysis))
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        tries: DEFAULT_SIMULATION_TRIES,
        margin: WAITED_VALUE_ERROR_MARGIN,
        json: false,
        sim: SimConfig::default(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--tries" => {
                if i + 1 < args.len() {
                    options.tries = args[i + 1].parse().unwrap_or(DEFAULT_SIMULATION_TRIES);
                    i += 1;
                }
            }
            "-c" | "--chunk" => {
                if i + 1 < args.len() {
                    options.sim.chunk_size = args[i + 1].parse().unwrap_or(options.sim.chunk_size);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.sim.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-m" | "--margin" => {
                if i + 1 < args.len() {
                    options.margin = args[i + 1].parse().unwrap_or(WAITED_VALUE_ERROR_MARGIN);
                    i += 1;
                }
            }
            "-w" | "--weights" => {
                if i + 1 < args.len() {
                    options.sim.weights = args[i + 1]
                        .split(',')
                        .filter_map(|w| w.trim().parse().ok())
                        .collect();
                    i += 1;
                }
            }
            "--json" => {
                options.json = true;
            }
            "-q" | "--quiet" => {
                options.sim.verbosity = 0;
            }
            "-v" | "--verbose" => {
                options.sim.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Card Game Payout Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --tries <N>     Number of trials to play (default: 100000)");
    println!("    -c, --chunk <N>     Trials per scheduling chunk (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -m, --margin <F>    Viability error margin as a fraction (default: 0.05)");
    println!("    -w, --weights <W>   Comma-separated column weights, e.g. 0.7,0.3");
    println!("    --json              Save the report as JSON");
    println!("    -q, --quiet         Only warnings and the final report");
    println!("    -v, --verbose       Per-chunk progress and debug logging");
    println!("    -h, --help          Show this help");
}
