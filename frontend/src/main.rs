use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use diva_core::display::DisplayMode;
use diva_soc::registry;

mod config;
mod session;
mod snapshot;

use config::SessionConfig;

#[derive(Parser, Debug)]
#[command(name = "diva")]
#[command(about = "Run the DiVA control firmware against a simulated SoC", long_about = None)]
struct Args {
    /// Session config (TOML). Defaults to <config_dir>/diva/config.toml if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board profile; overrides the config file
    #[arg(long)]
    board: Option<String>,

    /// Loop iterations to run after boot; overrides the config file
    #[arg(long)]
    ticks: Option<u64>,

    /// Initial display mode (native or scaled); overrides the config file
    #[arg(long)]
    mode: Option<DisplayMode>,

    /// Write a PNG of the final output layout
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// List board profiles and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_boards: bool,

    /// More output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_boards {
        for entry in registry::all() {
            println!("{:<16} {}", entry.name, entry.description);
        }
        return ExitCode::SUCCESS;
    }

    let config = match SessionConfig::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let board = args.board.unwrap_or(config.board.clone());
    let Some(profile) = registry::find(&board) else {
        let names: Vec<_> = registry::all().iter().map(|e| e.name).collect();
        log::error!("unknown board: {board} (available: {})", names.join(", "));
        return ExitCode::FAILURE;
    };

    let mode = args.mode.unwrap_or(config.initial_mode.into());
    let ticks = args.ticks.unwrap_or(config.ticks);
    let script = config.button_script();

    let (soc, summary) = match session::run(profile, mode, config.clock_polls, &script, ticks) {
        Ok(result) => result,
        Err(e) => {
            log::error!("boot failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{} ticks, {} display toggles, {} camera mode switches, final mode {}",
        summary.ticks,
        summary.toggles,
        summary.camera_switches,
        summary.final_mode.unwrap_or(mode)
    );

    if let Some(path) = args.snapshot {
        if let Err(e) = snapshot::save_png(&path, soc.framer()) {
            log::error!("failed to write {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        log::info!("wrote layout snapshot to {}", path.display());
    }

    ExitCode::SUCCESS
}
