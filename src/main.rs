//! Not Pong entry point
//!
//! Parses the command line, sets up logging and settings, then runs the
//! director on the terminal until the player quits.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use not_pong::Director;
use not_pong::audio::AudioManager;
use not_pong::platform::{Assets, BuiltinAssets, FileAssets, Terminal};
use not_pong::settings::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pong in the terminal", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding images/
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    /// Use the generated sprites instead of reading PNGs
    #[arg(long)]
    builtin_assets: bool,
    /// Second player on the right paddle (W/S for the left)
    #[arg(long)]
    two_player: bool,
    /// Start with music off
    #[arg(long)]
    mute: bool,
    /// Seed for the serve RNG
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs here (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings, not_pong::Error> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    };
    if cli.mute {
        settings.audio_enabled = false;
    }
    if cli.two_player {
        settings.two_player = true;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;
    log::info!("Not Pong starting...");

    let settings = load_settings(&cli).context("load settings")?;
    let assets: Box<dyn Assets> = if cli.builtin_assets {
        Box::new(BuiltinAssets)
    } else {
        Box::new(FileAssets::new(&cli.assets))
    };

    let mut director =
        Director::new(settings, AudioManager::default(), assets).context("load home screen")?;
    let mut terminal = Terminal::new().context("set up terminal")?;
    let result = director.run(&mut terminal);
    // Restore the terminal before any error is printed
    drop(terminal);

    result.context("game loop")?;
    log::info!("Bye");
    Ok(())
}
