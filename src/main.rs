//! tokswap - token price converter and wallet viewer
//!
//! A desktop converter between any two currencies of a live USD price feed,
//! plus a wallet view that ranks balances by blockchain priority.
//!
//! # Features
//!
//! - Searchable currency pickers that close on outside clicks
//! - Cross-rate conversion rounded to cents
//! - Wallet balances sorted by blockchain priority with USD values
//! - The same operations from the command line
//!
//! # Architecture
//!
//! - `tokswap::core`: headless picker, pipeline and conversion logic
//! - `app`: iced GUI state, handlers and views
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! tokswap
//!
//! # CLI commands
//! tokswap prices --filter eth          # Show feed prices matching "eth"
//! tokswap convert 10 ETH ATOM          # Convert using the live feed
//! tokswap convert 10 ETH ATOM -f p.json  # Convert using a saved feed
//! tokswap wallet --balances w.json     # Show a wallet with USD values
//! tokswap config                       # Show the resolved configuration
//! tokswap config --save                # Write it back to the config file
//! ```

mod app;

use clap::{Parser, Subcommand};
use iced::Size;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokswap::config::{self, AppConfig};
use tokswap::core::convert::{ConversionRequest, parse_amount};
use tokswap::core::feed::{fetch_table, load_table_from_file};
use tokswap::core::filter::filter;
use tokswap::core::item::IconResolver;
use tokswap::core::prices::PriceTable;
use tokswap::core::wallet::{WalletView, load_balances, sample_balances};
use tokswap::core::pipeline::Versioned;
use tokswap::{Error, Result};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokswap")]
#[command(about = "Token price converter and wallet viewer", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the latest price of every currency in the feed
    Prices {
        /// Read a saved feed instead of fetching
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Only show currencies whose code contains this text
        #[arg(long)]
        filter: Option<String>,
    },
    /// Convert an amount between two currencies
    Convert {
        amount: String,
        from: String,
        to: String,
        /// Read a saved feed instead of fetching
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Show wallet balances ranked by blockchain priority
    Wallet {
        /// JSON array of balances (defaults to the configured or demo wallet)
        #[arg(short, long, value_name = "FILE")]
        balances: Option<PathBuf>,
        /// Read a saved feed instead of fetching
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Show where the configuration lives and what it contains
    Config {
        /// Write the resolved configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> ExitCode {
    let _ = tokswap::utils::ensure_dirs();
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        init_cli_logging(cli.verbose);
        // Create Tokio runtime only for CLI commands
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Error: failed to start runtime: {e}");
                return ExitCode::FAILURE;
            }
        };
        match runtime.block_on(handle_cli(command)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                if e.is_user_error() {
                    eprintln!("Error: {}", e.user_message());
                } else {
                    eprintln!("Error: {e}");
                }
                ExitCode::FAILURE
            }
        }
    } else {
        // GUI runs in normal sync context (Iced has its own async runtime)
        launch_gui(cli.verbose)
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "tokswap=debug" } else { "tokswap=info" }))
}

fn init_cli_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(if verbose {
            env_filter(true)
        } else {
            EnvFilter::new("warn")
        })
        .with_writer(std::io::stderr)
        .init();
}

async fn load_prices(file: Option<&Path>, config: &AppConfig) -> Result<PriceTable> {
    match file {
        Some(path) => load_table_from_file(path).await,
        None => Ok(fetch_table(&config.price_feed_url).await?),
    }
}

async fn handle_cli(command: Commands) -> Result<()> {
    let config = config::load_config().await;

    match command {
        Commands::Prices { file, filter: query } => {
            let table = load_prices(file.as_deref(), &config).await?;
            let items = table.currency_items(&IconResolver::new(config.icon_base_url.as_str()));
            let shown = filter(&items, query.as_deref().unwrap_or(""));
            for item in shown.iter() {
                if let Some(price) = table.get(&item.key) {
                    println!("{:<12} {price}", item.label);
                }
            }
            if shown.is_empty() {
                println!("No matching currencies.");
            }
        }
        Commands::Convert {
            amount,
            from,
            to,
            file,
        } => {
            let amount = parse_amount(&amount)?;
            let table = load_prices(file.as_deref(), &config).await?;
            let quote = ConversionRequest::new(amount, from, to).quote(&table)?;
            println!("{quote}");
        }
        Commands::Wallet { balances, file } => {
            let source = match balances.or_else(|| config.wallet_file.clone()) {
                Some(path) => load_balances(&path).await?,
                None => sample_balances(),
            };
            let table = load_prices(file.as_deref(), &config).await?;

            let mut view = WalletView::new(source, config.blockchain_priority.clone());
            view.set_prices(Versioned::new(table));
            let rows = view.rows();
            println!("{:<8} {:<12} {:>14} {:>16}", "CURRENCY", "BLOCKCHAIN", "AMOUNT", "USD");
            for row in rows.iter() {
                println!(
                    "{:<8} {:<12} {:>14} {:>16}",
                    row.balance.currency(),
                    row.balance.entry.blockchain,
                    row.balance.formatted_amount,
                    row.usd_display()
                );
            }
            println!("Total: ${}", tokswap::core::convert::round_money(view.total_usd()));
        }
        Commands::Config { save } => {
            match config::config_path() {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("Config file: <no data directory>"),
            }
            println!("{}", serde_json::to_string_pretty(&config).map_err(Error::from)?);
            if save {
                config::save_config(&config).await?;
                println!("Configuration saved.");
            }
        }
    }
    Ok(())
}

fn launch_gui(verbose: bool) -> ExitCode {
    // Set up logging to file
    let log_file = tokswap::utils::get_state_dir()
        .and_then(|dir| std::fs::File::create(dir.join("tokswap.log")).ok());
    match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_ansi(false)
            .with_writer(file)
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(std::io::stderr)
            .init(),
    }

    let result = iced::application(app::State::new, app::State::update, app::State::view)
        .subscription(app::State::subscription)
        .window(iced::window::Settings {
            size: Size::new(640.0, 720.0),
            ..Default::default()
        })
        .title("tokswap")
        .theme(|_state: &app::State| iced::Theme::Dark)
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("GUI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}
