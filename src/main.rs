use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use backup_dash::cli::{handle_show_command, ShowArgs};
use backup_dash::config::{DashPaths, Settings};
use backup_dash::logging::{self, Console};
use backup_dash::source;
use backup_dash::store::{LocalClock, ReportStore};

/// Slack on top of the fetch timeout before `show` gives up waiting
const WAIT_MARGIN: Duration = Duration::from_secs(2);

#[derive(Parser)]
#[command(
    name = "backupdash",
    version,
    about = "Terminal dashboard for daily backup reports",
    long_about = "backupdash fetches the daily report of backup notification \
                  messages and shows which clients succeeded, failed, errored \
                  or sent something unrecognized."
)]
struct Cli {
    /// Report location: http(s) URL or directory, `{date}` is substituted
    #[arg(long, global = true, env = "BACKUP_DASH_SOURCE")]
    source: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Print one day's report and exit
    Show(ShowArgs),

    /// Show current configuration and paths
    Config,

    /// Write the default configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = DashPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(source) = cli.source {
        settings.source = source;
    }
    if let Some(secs) = cli.timeout {
        settings.fetch_timeout_secs = secs;
    }

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            // The terminal belongs to the dashboard; logs only go to the file
            if let Err(e) = logging::init(&paths, Console::Off) {
                eprintln!("warning: logging disabled: {}", e);
            }
            let store = ReportStore::new(source::from_settings(&settings), LocalClock);
            backup_dash::tui::run_tui(store, settings.tick_rate())?;
        }
        Commands::Show(args) => {
            if let Err(e) = logging::init(&paths, Console::Stderr) {
                eprintln!("warning: logging disabled: {}", e);
            }
            let mut store = ReportStore::new(source::from_settings(&settings), LocalClock);
            handle_show_command(&mut store, args, settings.fetch_timeout() + WAIT_MARGIN)?;
        }
        Commands::Config => {
            println!("backup-dash Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log directory:  {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Source:          {}", settings.source);
            println!("  Fetch timeout:   {}s", settings.fetch_timeout().as_secs());
            println!("  Max report size: {} bytes", settings.max_report_bytes);
            println!("  Tick rate:       {}ms", settings.tick_rate().as_millis());
            if !paths.is_initialized() {
                println!();
                println!("Not initialized. Run 'backupdash init' to write the settings file.");
            }
        }
        Commands::Init => {
            println!("Initializing backup-dash at: {}", paths.base_dir().display());
            if paths.is_initialized() {
                println!("Existing settings file will be rewritten.");
            }
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
            println!("Edit 'source' to point at your report server or directory.");
        }
    }

    Ok(())
}
