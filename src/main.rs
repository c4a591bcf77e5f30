//! Dot Chase entry point
//!
//! Runs the simulation headless under the autopilot host and prints a summary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use dot_chase::platform::{self, Autopilot};
use dot_chase::{GameState, Settings};

/// Headless dot-chasing demo
#[derive(Debug, Parser)]
#[command(name = "dot-chase", version, about)]
struct Args {
    /// JSON settings file (defaults are used for missing keys)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Frame rate the autopilot pretends to run at
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// How many times to restart after a game over
    #[arg(short, long, default_value_t = 0)]
    restarts: u32,

    /// Override the RNG seed from the settings
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    dump_settings: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let env = Env::default().default_filter_or(level.to_string());
    // Only fails if a logger is already installed
    let _ = Builder::from_env(env).try_init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut settings = match &args.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    if args.dump_settings {
        return match settings.to_json() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    if !(args.fps.is_finite() && args.fps > 0.0) {
        log::error!("--fps must be positive, got {}", args.fps);
        return ExitCode::FAILURE;
    }

    log::info!("Dot Chase (headless) starting, {} frames at {} fps", args.frames, args.fps);

    let mut state = match GameState::new(settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Could not set up the field: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut pilot = Autopilot::new(args.frames, 1.0 / args.fps, args.restarts);
    match platform::run(&mut state, &mut pilot) {
        Ok(summary) => {
            println!(
                "frames: {}  games: {}  catches: {}  best score: {}  final score: {}{}",
                summary.frames,
                summary.games,
                summary.catches,
                summary.best_score,
                summary.final_score,
                if state.is_game_over() { "  (game over)" } else { "" }
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Simulation stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
