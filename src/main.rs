mod app;
mod codec;
mod colors;
mod config;
mod engine;
mod error;
mod grid;
mod help;
mod patterns;
mod settings;
mod snapshot;
mod terminal;
mod viewport;

use clap::{Parser, Subcommand};
use config::{LifeConfig, DEFAULT_CELL_SIZE, DEFAULT_DELAY_MS, MAX_DELAY_MS, MIN_DELAY_MS};
use error::LifeError;
use grid::LiveSet;
use settings::Settings;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "termlife")]
#[command(version = "0.1.0")]
#[command(about = "Conway's Game of Life on an unbounded grid, in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive session
    Play {
        /// Pattern file to load at startup
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Animation delay in milliseconds (10-1000)
        #[arg(short, long)]
        delay: Option<u64>,

        /// Cell edge length in terminal columns
        #[arg(short, long)]
        cell_size: Option<i64>,

        /// Character used to draw live cells
        #[arg(long)]
        char: Option<String>,

        /// Random seed for the soup fill
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Advance a pattern file without a terminal session
    Advance {
        /// Pattern file to read
        input: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value = "1")]
        generations: u32,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in patterns
    Patterns,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("termlife: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), LifeError> {
    match command {
        Commands::Play {
            pattern,
            delay,
            cell_size,
            char: draw_char,
            seed,
        } => {
            let settings = Settings::load();
            let initial_cells = match &pattern {
                Some(path) => codec::decode(&fs::read_to_string(path)?)?,
                None => Vec::new(),
            };
            let config = LifeConfig {
                delay_ms: delay
                    .or(settings.animation.delay_ms)
                    .unwrap_or(DEFAULT_DELAY_MS)
                    .clamp(MIN_DELAY_MS, MAX_DELAY_MS),
                cell_size: cell_size
                    .or(settings.display.cell_size)
                    .unwrap_or(DEFAULT_CELL_SIZE)
                    .max(1),
                draw_char: draw_char
                    .and_then(|s| s.chars().next())
                    .or(settings.display.draw_char)
                    .unwrap_or('#'),
                color_scheme: settings.display.color_scheme.unwrap_or(0),
                seed,
                export_dir: settings.io.export_dir.unwrap_or_else(|| PathBuf::from(".")),
                pattern_file: pattern,
                initial_cells,
            };
            app::run(config)?;
            Ok(())
        }

        Commands::Advance {
            input,
            generations,
            output,
        } => {
            let mut live = LiveSet::new(codec::decode(&fs::read_to_string(&input)?)?);
            for _ in 0..generations {
                let next = engine::advance(&live);
                live.replace(next);
                live.complete_generation();
            }
            let encoded = codec::encode(&live);
            match output {
                Some(path) => fs::write(path, encoded)?,
                None => println!("{encoded}"),
            }
            Ok(())
        }

        Commands::Patterns => {
            for pattern in patterns::PATTERNS {
                println!("{:<20} {:>3} cells", pattern.name, pattern.cells.len());
            }
            Ok(())
        }
    }
}
