//! Headless runner simulator.
//!
//! Drives the game engine with synthetic frame timestamps, optionally with
//! an autopilot pressing the primary action, and reports how rounds went.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # One minute at 16 ms frames
//!   cargo run --bin simulate -- --runs 10 --seed 7
//!   cargo run --bin simulate -- --no-autopilot     # Never jump

use hurdle::autopilot::Autopilot;
use hurdle::input::InputAction;
use hurdle::{logging, App, GameConfig, ManualClock, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;

struct SimOptions {
    frames: u64,
    frame_ms: f64,
    runs: u32,
    seed: u64,
    config: Option<PathBuf>,
    autopilot: bool,
    quiet: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            frames: 3750,
            frame_ms: 16.0,
            runs: 1,
            seed: 42,
            config: None,
            autopilot: true,
            quiet: false,
        }
    }
}

#[derive(Debug, Default)]
struct RunReport {
    frames: u64,
    game_overs: u32,
    cleared: u64,
    best_score: u32,
    final_score: u32,
    jumps: u64,
}

fn main() {
    logging::init_stderr("warn");
    let options = parse_args();

    if let Err(e) = run(&options) {
        eprintln!("simulate: {}", e);
        std::process::exit(1);
    }
}

fn run(options: &SimOptions) -> Result<()> {
    let config = GameConfig::load_or_default(options.config.as_deref())?;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                   HURDLE RUN SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", options.runs);
    println!("  Frames/run:     {}", options.frames);
    println!("  Frame length:   {} ms", options.frame_ms);
    println!("  Autopilot:      {}", options.autopilot);
    println!("  Seed:           {}", options.seed);
    println!("  Frames to clear an obstacle: {}", config.frames_to_clear());
    println!();

    let mut reports = Vec::with_capacity(options.runs as usize);
    for run in 0..options.runs {
        let seed = options.seed.wrapping_add(run as u64);
        let report = simulate_run(config, options, seed);
        if !options.quiet {
            println!(
                "Run {:>3}: best {:>4}  final {:>4}  game overs {:>3}  cleared {:>5}  jumps {:>5}",
                run + 1,
                report.best_score,
                report.final_score,
                report.game_overs,
                report.cleared,
                report.jumps
            );
        }
        reports.push(report);
    }

    print_summary(&reports, options.frame_ms);
    Ok(())
}

fn simulate_run(config: GameConfig, options: &SimOptions, seed: u64) -> RunReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut app = App::new(config, ManualClock::new());
    let mut pilot = if options.autopilot {
        let pilot = Autopilot::new(&config, &mut rng);
        if pilot.is_none() {
            log::warn!("no jump timing clears an obstacle with this config; autopilot disabled");
        }
        pilot
    } else {
        None
    };

    let mut report = RunReport::default();

    for _ in 0..options.frames {
        if !app.is_running() {
            // Game over: the primary action restarts.
            app.handle_input(InputAction::Primary);
        } else if let Some(pilot) = pilot.as_mut() {
            if pilot.should_jump(app.session(), &mut rng) {
                app.handle_input(InputAction::Primary);
            }
        }

        app.clock_mut().advance(options.frame_ms);
        if let Some(outcome) = app.tick() {
            report.frames += 1;
            report.cleared += outcome.cleared as u64;
            if outcome.collided {
                report.game_overs += 1;
            }
        }
    }

    report.best_score = app.best_score();
    report.final_score = app.session().score;
    report.jumps = pilot.map_or(0, |p| p.jumps());
    log::debug!("seed {} finished: {:?}", seed, report);
    report
}

fn print_summary(reports: &[RunReport], frame_ms: f64) {
    if reports.is_empty() {
        return;
    }

    let n = reports.len() as f64;
    let mean_best = reports.iter().map(|r| r.best_score as f64).sum::<f64>() / n;
    let top = reports.iter().map(|r| r.best_score).max().unwrap_or(0);
    let total_overs: u32 = reports.iter().map(|r| r.game_overs).sum();
    let total_cleared: u64 = reports.iter().map(|r| r.cleared).sum();
    let total_frames: u64 = reports.iter().map(|r| r.frames).sum();
    let seconds = total_frames as f64 * frame_ms / 1000.0;

    println!();
    println!("Summary:");
    println!("  Mean best score:   {:.1}", mean_best);
    println!("  Top score:         {}", top);
    println!("  Game overs:        {}", total_overs);
    println!("  Obstacles cleared: {}", total_cleared);
    if seconds > 0.0 {
        println!(
            "  Clear rate:        {:.2} per simulated second",
            total_cleared as f64 / seconds
        );
    }
}

fn parse_args() -> SimOptions {
    let args: Vec<String> = env::args().collect();
    let mut options = SimOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--frames" => {
                if i + 1 < args.len() {
                    options.frames = args[i + 1].parse().unwrap_or(3750);
                    i += 1;
                }
            }
            "--frame-ms" => {
                if i + 1 < args.len() {
                    options.frame_ms = args[i + 1]
                        .parse::<f64>()
                        .ok()
                        .filter(|ms| ms.is_finite() && *ms > 0.0)
                        .unwrap_or(16.0);
                    i += 1;
                }
            }
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    options.runs = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().unwrap_or(42);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    options.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--no-autopilot" => {
                options.autopilot = false;
            }
            "-q" | "--quiet" => {
                options.quiet = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Hurdle Run Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -f, --frames <N>    Frames per run (default: 3750)");
    println!("    --frame-ms <MS>     Milliseconds between frames (default: 16)");
    println!("    -n, --runs <N>      Number of runs (default: 1)");
    println!("    -s, --seed <S>      Seed for the autopilot's jump timing (default: 42)");
    println!("    -c, --config <F>    Load game constants from a JSON file");
    println!("    --no-autopilot      Never jump");
    println!("    -q, --quiet         Only print the summary");
    println!("    -h, --help          Show this help");
}
