use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use roster::commands::table::TableOptions;
use roster::config;
use roster::data_provider::FileFeed;
use roster::engine::{Basis, SortDirection};
use roster::{commands, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "roster")]
#[command(
    about = "Ranked player roster viewer",
    long_about = "Ranked player roster viewer\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Rankings CSV to load (defaults to feed_path from the config file)
    #[arg(long, global = true)]
    feed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum BasisArg {
    /// Rank by the Good Ironman score
    GoodIronman,
    /// Rank by the Ironman score
    Ironman,
}

impl BasisArg {
    fn to_basis(self) -> Basis {
        match self {
            BasisArg::GoodIronman => Basis::GoodIronman,
            BasisArg::Ironman => Basis::Ironman,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked roster as a table
    Table {
        /// Case-insensitive player name search
        #[arg(short, long)]
        search: Option<String>,

        /// Only show these teams (repeatable)
        #[arg(short, long)]
        team: Vec<String>,

        /// Only show players with one of these position tags (repeatable)
        #[arg(short, long)]
        position: Vec<String>,

        /// Minimum games played
        #[arg(short, long)]
        min_games: Option<u32>,

        /// Ranking basis
        #[arg(short, long, default_value = "good-ironman")]
        basis: BasisArg,

        /// Sort column (rank, name, team, pos, score, gp, mpg, or a metric column like ADP)
        #[arg(long)]
        sort: Option<String>,

        /// Force descending order
        #[arg(long, conflicts_with = "asc")]
        desc: bool,

        /// Force ascending order
        #[arg(long)]
        asc: bool,

        /// Show at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("feed_path: {}", cfg.feed_path);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[layout]");
    println!("card_breakpoint: {} columns", cfg.layout.card_breakpoint);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!(
        "unfocused_selection_fg: {:?}{}",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() {
            " (auto: 50% darker)"
        } else {
            ""
        }
    );
    println!("header_fg: {:?}", cfg.display.header_fg);
    println!("tier_fg: {:?}", cfg.display.tier_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn resolve_feed_path(cli: &Cli, config: &config::Config) -> PathBuf {
    cli.feed
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.feed_path))
}

fn direction_from_flags(desc: bool, asc: bool) -> Option<SortDirection> {
    match (desc, asc) {
        (true, _) => Some(SortDirection::Descending),
        (_, true) => Some(SortDirection::Ascending),
        _ => None,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let feed_path = resolve_feed_path(&cli, &config);

    let Some(command) = cli.command else {
        tracing::info!("FEED: starting interactive mode with {}", feed_path.display());
        let source = Arc::new(FileFeed::new(feed_path));
        if let Err(e) = tui::run(config, source).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    let result = match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Table {
            search,
            team,
            position,
            min_games,
            basis,
            sort,
            desc,
            asc,
            limit,
        } => {
            let options = TableOptions {
                search,
                teams: team,
                positions: position,
                min_games,
                basis: basis.to_basis(),
                sort,
                direction: direction_from_flags(desc, asc),
                limit,
            };
            commands::table::run(&feed_path, &options, &config.display)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_direction_flags_conflict() {
        let result = Cli::try_parse_from(["roster", "table", "--desc", "--asc"]);

        assert_eq!(
            result.err().map(|e| e.kind()),
            Some(clap::error::ErrorKind::ArgumentConflict)
        );
    }

    #[test]
    fn test_table_arguments() {
        let cli = Cli::try_parse_from([
            "roster", "table", "--team", "DEN", "--team", "OKC", "--basis", "ironman", "--asc",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Table {
                team, basis, desc, asc, ..
            }) => {
                assert_eq!(team, vec!["DEN", "OKC"]);
                assert_eq!(basis.to_basis(), Basis::Ironman);
                assert_eq!(direction_from_flags(desc, asc), Some(SortDirection::Ascending));
            }
            _ => panic!("expected the table command"),
        }
    }
}
