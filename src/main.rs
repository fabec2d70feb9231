use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use xfeed::app::App;
use xfeed::config::Config;
use xfeed::logging;
use xfeed::routing::{self, ROUTES};
use xfeed::tui;

#[derive(Parser)]
#[command(name = "xfeed", version, about = "A terminal social feed")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route to open at startup (overrides config)
    #[arg(short, long)]
    path: Option<String>,

    /// Feed file to load (overrides config)
    #[arg(short, long)]
    feed: Option<PathBuf>,

    /// Log file (defaults to the user data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print which page a path resolves to
    Route { path: String },
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    match cli.command {
        Some(Command::Route { path }) => {
            return Ok(match routing::resolve(&path, &ROUTES) {
                Ok(page) => {
                    println!("{}", page);
                    ExitCode::SUCCESS
                }
                Err(_) => {
                    println!("not found: {}", path);
                    ExitCode::FAILURE
                }
            });
        }
        Some(Command::Init { force }) => {
            Config::write_default(&config_path, force)?;
            println!("Wrote {}", config_path.display());
            return Ok(ExitCode::SUCCESS);
        }
        None => {}
    }

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let mut config = Config::load(&config_path)?;
    if let Some(path) = cli.path {
        config.general.start_path = path;
    }
    if let Some(feed) = cli.feed {
        config.feed.path = Some(feed);
    }

    tracing::info!(config = %config_path.display(), "starting xfeed");

    let (mut terminal, guard) = tui::init()?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    drop(guard);
    result?;
    Ok(ExitCode::SUCCESS)
}
