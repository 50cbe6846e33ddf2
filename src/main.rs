mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use hurdle::input::map_event;
use hurdle::{build_info, logging};
use hurdle::{App, AppControl, FrameClock, GameConfig, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Roughly one display refresh.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Default)]
struct Options {
    config: Option<PathBuf>,
    log: Option<PathBuf>,
}

fn main() {
    let options = parse_args();

    if let Err(e) = run(&options) {
        eprintln!("hurdle: {}", e);
        std::process::exit(1);
    }
}

fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "--log" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Missing value for {}", args[i]);
                    std::process::exit(1);
                };
                if args[i] == "--config" {
                    options.config = Some(PathBuf::from(value));
                } else {
                    options.log = Some(PathBuf::from(value));
                }
                i += 1;
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line("hurdle"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'hurdle --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Hurdle - Terminal Endless Runner\n");
    println!("Usage: hurdle [options]\n");
    println!("Options:");
    println!("  --config FILE  Load game constants from a JSON file");
    println!("  --log FILE     Write log records to FILE (filter with RUST_LOG)");
    println!("  --version      Show version information");
    println!("  --help         Show this help message\n");
    println!("Controls:");
    println!("  Space, Up, or click   Jump, or restart after game over");
    println!("  Esc or q              Quit");
}

fn run(options: &Options) -> Result<()> {
    logging::init(options.log.as_deref())?;
    let config = GameConfig::load_or_default(options.config.as_deref())?;
    log::info!("starting with {:?}", config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = game_loop(&mut terminal, App::new(config, FrameClock::start()));

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<FrameClock>,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|f| ui::draw_ui(f, &app))?;

        let timeout = FRAME_INTERVAL.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            let action = map_event(&event::read()?);
            if app.handle_input(action) == AppControl::Quit {
                break;
            }
        }

        if last_frame.elapsed() >= FRAME_INTERVAL {
            last_frame = Instant::now();
            if let Some(outcome) = app.tick() {
                if outcome.collided {
                    log::info!(
                        "round {} over, score {}, best {}",
                        app.rounds_played(),
                        app.session().score,
                        app.best_score()
                    );
                }
            }
        }
    }

    log::info!(
        "quitting after {} rounds, best score {}",
        app.rounds_played(),
        app.best_score()
    );
    Ok(())
}
