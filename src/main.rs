use clap::{Parser, Subcommand};
use hoops::config::{self, Config};
use hoops::data_provider::StatsDataProvider;
use hoops::{commands, supabase, tui};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

/// Page shown when `--page` is not given
const DEFAULT_PAGE: usize = 1;

#[derive(Parser)]
#[command(name = "hoops")]
#[command(about = "Fantasy basketball stats viewer", long_about = "Fantasy basketball stats viewer\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use fixture data instead of the stats backend
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search players by name
    Search {
        /// Part of a player name (at least 2 characters)
        text: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: usize,
    },
    /// List players in a position category
    Position {
        /// Category: guards, forwards or centers
        key: String,

        /// Only players whose name contains this text
        #[arg(short, long)]
        name: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: usize,
    },
    /// List the roster of a team
    Team {
        /// Team slug (e.g., celtics, 76ers)
        slug: String,

        /// Only players whose name contains this text
        #[arg(short, long)]
        name: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: usize,
    },
    /// Display the team directory
    Teams {
        /// Show teams on the league map instead of by division
        #[arg(short, long)]
        map: bool,
    },
    /// Display season stats for a player
    Player {
        /// Player ID
        id: i64,
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
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("time_format: {}", cfg.time_format);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[backend]");
    match cfg.backend.resolve() {
        Ok(credentials) => {
            println!("url: {}", credentials.url);
            println!("anon_key: {}", config::mask_key(&credentials.anon_key));
        }
        Err(e) => println!("{}", e),
    }
    println!("timeout_secs: {}", cfg.backend.timeout_secs);
    println!();
    println!("[pagination]");
    println!("search_page_size: {}", cfg.pagination.search_page_size);
    println!("position_page_size: {}", cfg.pagination.position_page_size);
    println!("team_page_size: {}", cfg.pagination.team_page_size);
    println!("exact_end: {}", cfg.pagination.exact_end);
    println!();
    println!("[theme]");
    println!("selection_fg: {}", config::format_color(&cfg.theme.selection_fg));
    println!("unfocused_selection_fg: {}{}",
        config::format_color(&cfg.theme.unfocused_selection_fg()),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("accent_fg: {}", config::format_color(&cfg.theme.accent_fg));
    println!("error_fg: {}", config::format_color(&cfg.theme.error_fg));
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
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

#[cfg(feature = "development")]
fn mock_provider(cli: &Cli) -> Option<Arc<dyn StatsDataProvider>> {
    if !cli.mock {
        return None;
    }
    tracing::info!("Using fixture data (--mock)");
    Some(Arc::new(hoops::dev::MockClient::new()))
}

#[cfg(not(feature = "development"))]
fn mock_provider(_cli: &Cli) -> Option<Arc<dyn StatsDataProvider>> {
    None
}

/// Build the data provider; missing credentials are fatal
fn create_provider(cli: &Cli, config: &Config) -> Arc<dyn StatsDataProvider> {
    if let Some(provider) = mock_provider(cli) {
        return provider;
    }

    let credentials = match config.backend.resolve() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    match supabase::Client::new(&credentials.url, &credentials.anon_key, config.backend.timeout()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create stats client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    provider: &dyn StatsDataProvider,
    command: Commands,
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config | Commands::Teams { .. } => {
            unreachable!("Offline commands are handled before execute_command")
        }
        Commands::Search { text, page } => {
            commands::search::run(provider, &text, page, config).await
        }
        Commands::Position { key, name, page } => {
            commands::position::run(provider, &key, name.as_deref(), page, config).await
        }
        Commands::Team { slug, name, page } => {
            commands::team::run(provider, &slug, name.as_deref(), page, config).await
        }
        Commands::Player { id } => {
            commands::player::run(provider, id, &config.display).await
        }
    }
}

#[tokio::main]
async fn main() {
    let dotenv_path = config::load_dotenv();
    let config = config::read();
    let mut cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // Handle commands that never touch the backend
    match cli.command {
        Some(Commands::Config) => {
            handle_config_command(&config);
            return;
        }
        Some(Commands::Teams { map }) => {
            commands::teams::run(map, &config.display);
            return;
        }
        _ => {}
    }

    let provider = create_provider(&cli, &config);

    // If no subcommand, run TUI
    let Some(command) = cli.command.take() else {
        if let Err(e) = tui::run(provider, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(provider.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
