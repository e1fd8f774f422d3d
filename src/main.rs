use clap::Parser;
use fayin::core::config::{self, CliOverrides, ResolvedConfig};
use fayin::core::loader::{AssetBundle, CheckReport};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fayin", about = "Phonetic flashcards in the terminal")]
struct Args {
    /// Deck asset name, loaded from <asset-dir>/<deck>.json
    #[arg(short, long)]
    deck: Option<String>,

    /// Directory holding deck and audio assets
    #[arg(short, long)]
    asset_dir: Option<PathBuf>,

    /// Gesture magnitude needed to move a card
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Validate the deck and exit instead of starting the UI
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to fayin.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("fayin.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Fayin starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        Default::default()
    });
    let cli = CliOverrides {
        deck: args.deck,
        asset_dir: args.asset_dir,
        threshold: args.threshold,
    };
    let resolved = config::resolve(&file_config, &cli);

    if args.check {
        return check(&resolved);
    }

    match fayin::tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("fayin: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check(config: &ResolvedConfig) -> ExitCode {
    let bundle = AssetBundle::new(config.asset_dir.clone());
    let report = CheckReport::run(&bundle, &config.deck);
    if report.passed() {
        println!("{report}");
        ExitCode::SUCCESS
    } else {
        eprintln!("{report}");
        ExitCode::FAILURE
    }
}
