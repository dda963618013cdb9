//! geocoder CLI
//!
//! Entry point for the `geocoder` command-line tool.

use clap::{Args, Parser, Subcommand};
use geocoder_cache::config::{default_user_config_path, resolve_project_config, EffectiveConfig};
use geocoder_cache::{FixtureProvider, GeocodeCache, ProviderAggregator, ResultSet};
use serde_json::{json, Map, Value};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "geocoder")]
#[command(about = "Cached forward and reverse geocoding", version)]
struct Cli {
    /// Path to project config file (default: ./geocoder.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "geocoder_cache=trace"
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LookupArgs {
    /// Fixture file to load as an offline provider (repeatable)
    #[arg(long = "fixtures", short = 'f')]
    fixtures: Vec<PathBuf>,

    /// Provider to route the lookup to (default: first registered)
    #[arg(long)]
    provider: Option<String>,

    /// Bypass the cache for this lookup
    #[arg(long)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Forward geocode an address
    Geocode {
        address: String,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Reverse geocode a latitude/longitude pair
    #[command(allow_negative_numbers = true)]
    Reverse {
        latitude: f64,
        longitude: f64,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Cache maintenance
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Remove every cached lookup
    Clear,
    /// Show entry counts
    Stats,
    /// Remove expired entries
    Purge,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration with provenance
    Show {
        /// Print only this dot-separated key, e.g. "cache.timeout"
        key: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let project_config = resolve_project_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Geocode { address, lookup } => {
            let config = load_config(&project_config, Some(&lookup))?;
            let mut geocoder = build_geocoder(&config)?;
            print_results(&geocoder.geocode(&address)?)
        }
        Commands::Reverse {
            latitude,
            longitude,
            lookup,
        } => {
            let config = load_config(&project_config, Some(&lookup))?;
            let mut geocoder = build_geocoder(&config)?;
            print_results(&geocoder.reverse(latitude, longitude)?)
        }
        Commands::Cache { action } => {
            let config = load_config(&project_config, None)?;
            run_cache(action, &config)
        }
        Commands::Config {
            action: ConfigCommands::Show { key },
        } => {
            let config = load_config(&project_config, None)?;
            match key {
                Some(key) => {
                    let value = config
                        .get(&key)
                        .ok_or_else(|| format!("no config value at '{}'", key))?;
                    println!("{}", serde_json::to_string_pretty(value)?);
                }
                None => println!("{}", config.to_json()?),
            }
            Ok(())
        }
    }
}

fn run_cache(action: CacheCommands, config: &EffectiveConfig) -> CliResult<()> {
    match action {
        CacheCommands::Clear => {
            let removed = build_geocoder(config)?.clear_cache()?;
            println!("Removed {} cached lookup(s)", removed);
        }
        CacheCommands::Stats => {
            let stats = config.settings.store.open()?.stats()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "entries": stats.entries,
                    "expired": stats.expired,
                    "total_size_bytes": stats.total_size_bytes,
                }))?
            );
        }
        CacheCommands::Purge => {
            let removed = config.settings.store.open()?.purge_expired()?;
            println!("Purged {} expired entr{}", removed, if removed == 1 { "y" } else { "ies" });
        }
    }
    Ok(())
}

/// Merge config layers, turning lookup flags into the CLI layer.
fn load_config(project_config: &Path, lookup: Option<&LookupArgs>) -> CliResult<EffectiveConfig> {
    let mut overrides = Map::new();
    if let Some(lookup) = lookup {
        if lookup.no_cache {
            overrides.insert("cache".to_string(), json!({ "enabled": false }));
        }
        if !lookup.fixtures.is_empty() {
            overrides.insert("fixtures".to_string(), json!(lookup.fixtures));
        }
        if let Some(provider) = &lookup.provider {
            overrides.insert("default_provider".to_string(), json!(provider));
        }
    }
    let overrides = (!overrides.is_empty()).then_some(Value::Object(overrides));

    let user_config = default_user_config_path();
    let config = EffectiveConfig::build(
        user_config.as_deref(),
        Some(project_config),
        overrides,
    )?;
    debug!(sources = config.sources.len(), "loaded configuration");
    Ok(config)
}

fn build_geocoder(config: &EffectiveConfig) -> CliResult<GeocodeCache<ProviderAggregator>> {
    let settings = &config.settings;

    let fixtures = settings
        .fixtures
        .iter()
        .map(|path| FixtureProvider::from_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut aggregator = ProviderAggregator::with_limit(settings.limit);
    aggregator.register_all(fixtures);
    if let Some(name) = &settings.default_provider {
        aggregator.using(name)?;
    }

    let store = settings.store.open()?;
    Ok(GeocodeCache::new(aggregator, store, settings.cache))
}

fn print_results(results: &ResultSet) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}
