use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::{Difficulty, Game};

mod app;
mod ui;

#[derive(Parser, Debug)]
#[command(name = "blockfall", about = "Falling-block puzzle in the terminal")]
struct Cli {
    /// Board preset; prompts on stdin when omitted
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Override the preset height (5..=50)
    #[arg(long)]
    height: Option<usize>,

    /// Override the preset width (5..=50)
    #[arg(long)]
    width: Option<usize>,

    /// Seed for a reproducible piece sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the game owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(level))
        .init();
    info!("logging initialized at level {level}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let difficulty = match cli.difficulty {
        Some(d) => d,
        None => app::prompt::prompt_difficulty(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let (preset_h, preset_w) = difficulty.dimensions();
    let height = cli.height.unwrap_or(preset_h);
    let width = cli.width.unwrap_or(preset_w);

    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(height, width, seed)?,
        None => Game::new(height, width)?,
    };
    info!(?difficulty, height, width, "starting game");

    app::run(&mut game)?;

    println!("Your score was {}", game.score());
    println!("You cleared {} line(s)", game.lines_cleared());
    Ok(())
}
