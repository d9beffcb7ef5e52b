//! Cinder command line: simulate burns, decode packed records, query rarity.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use cinder_types::Ordinal;
use cinder_utils::LogFormat;
use clap::Parser;

use crate::commands::simulate::SimulateOptions;
use crate::config::CinderConfig;

#[derive(Parser)]
#[command(name = "cinder", about = "Burn-to-collectible certificate engine")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "CINDER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CINDER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CINDER_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run scripted burns against an in-memory token and chain.
    Simulate {
        /// Number of burns.
        #[arg(long, default_value_t = 5)]
        burns: u64,

        /// Whole tokens burned per call.
        #[arg(long, default_value_t = 1)]
        amount: u64,

        /// Blocks between consecutive burns.
        #[arg(long, default_value_t = 1)]
        block_gap: u64,

        /// Whole tokens credited to the burner (overrides the config file).
        #[arg(long, env = "CINDER_INITIAL_BALANCE")]
        initial_balance: Option<u64>,

        /// Height of the first block (overrides the config file).
        #[arg(long, env = "CINDER_GENESIS_HEIGHT")]
        genesis_height: Option<u64>,

        /// Reward rate written into each record.
        #[arg(long)]
        apy: Option<u16>,

        /// Term written into each record.
        #[arg(long)]
        term: Option<u16>,

        /// Print each certificate's metadata JSON.
        #[arg(long)]
        metadata: bool,

        /// Print each certificate's token URI.
        #[arg(long)]
        token_uri: bool,
    },

    /// Decode a packed 256-bit record word given as hex.
    Decode {
        word: String,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show the rarity of an ordinal minted at a block height.
    Rarity { ordinal: Ordinal, height: u64 },

    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => CinderConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CinderConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    cinder_utils::init_logging(config.log_format, &config.log_level)?;
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let output = match cli.command {
        Command::Simulate {
            burns,
            amount,
            block_gap,
            initial_balance,
            genesis_height,
            apy,
            term,
            metadata,
            token_uri,
        } => {
            if let Some(balance) = initial_balance {
                config.initial_balance = balance;
            }
            if let Some(height) = genesis_height {
                config.genesis_height = height;
            }
            if let Some(apy) = apy {
                config.params.apy = apy;
            }
            if let Some(term) = term {
                config.params.term = term;
            }
            let options = SimulateOptions {
                burns,
                amount,
                block_gap,
                metadata,
                token_uri,
            };
            commands::simulate::run(&config, &options)?
        }
        Command::Decode { word, json } => commands::decode::run(&word, json, &config.params)?,
        Command::Rarity { ordinal, height } => commands::rarity::run(ordinal, height),
        Command::Config => config.to_toml_string()?,
    };

    println!("{}", output.trim_end());
    Ok(())
}
