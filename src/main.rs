#![forbid(unsafe_code)]
//! Match criteria command line interface

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use criteria::commands::{
    execute_catalog, execute_init, execute_replay, execute_variants, CatalogOptions, InitOptions,
    ReplayOptions,
};
use criteria::{Config, Variant};

#[derive(Parser)]
#[command(name = "criteria")]
#[command(about = "Match criteria panel - selection state, layouts and session replay")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = criteria::config::CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Starting layout (v1..v6)
        #[arg(long, value_parser = parse_variant)]
        variant: Option<Variant>,
    },

    /// List categories, or one category's suggestions and explorer groups
    Catalog {
        /// Category to show in detail
        #[arg(long)]
        category: Option<String>,

        /// Filter suggestions (case-insensitive)
        #[arg(short, long, requires = "category")]
        query: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a session script (JSON or YAML) and show the panel
    Replay {
        /// Script file
        script: PathBuf,

        /// Layout to replay in, overriding the script and config
        #[arg(long, value_parser = parse_variant)]
        variant: Option<Variant>,

        /// Record rejected actions and continue
        #[arg(short, long)]
        keep_going: bool,

        /// Print the step records, snapshot and view as JSON
        #[arg(long)]
        json: bool,
    },

    /// List panel layouts
    Variants {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse::<Variant>().map_err(|e| e.to_string())
}

fn init_tracing(verbose: bool, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { config.log_level.as_str() };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // init may be replacing an unreadable config
    let config = if matches!(cli.command, Commands::Init { .. }) {
        Config::default()
    } else {
        Config::load_or_default(&cli.config)
            .with_context(|| format!("failed to read {}", cli.config.display()))?
    };
    init_tracing(cli.verbose, &config);
    config.validate()?;

    match cli.command {
        Commands::Init { force, variant } => {
            let options = InitOptions {
                path: cli.config,
                force,
                variant,
            };
            execute_init(options)?;
        }

        Commands::Catalog {
            category,
            query,
            json,
        } => {
            let options = CatalogOptions {
                category,
                query,
                json,
            };
            execute_catalog(&config.catalog()?, options)?;
        }

        Commands::Replay {
            script,
            variant,
            keep_going,
            json,
        } => {
            let options = ReplayOptions {
                script,
                variant,
                keep_going,
                json,
            };
            execute_replay(&config, options)?;
        }

        Commands::Variants { json } => {
            execute_variants(config.variant, json)?;
        }
    }

    Ok(())
}
