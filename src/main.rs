use std::{path::PathBuf, time::Instant};

use clap::{Parser, Subcommand};
use eyre::{eyre, WrapErr};
use price_track::{
    config::Config,
    loader::{CatalogLoader, JsonCatalog, SampleCatalog},
    model::{Product, ProductId},
    notify::ToastQueue,
    report,
    tracking::{self, StubTracker},
    view::{SortKey, ViewState},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Track e-commerce product prices")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON product catalog (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tracked products
    List {
        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(short, long, value_enum)]
        sort: Option<SortKey>,
    },
    /// Show the price history of one product
    History {
        id: u64,

        /// Observations in the rolling low/high window
        #[arg(long)]
        window: Option<usize>,
    },
    /// Start tracking a new product
    Track {
        #[arg(long)]
        url: String,

        #[arg(long)]
        platform: String,
    },
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(catalog) = &args.catalog {
        config = config.with_catalog(catalog);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match args.command {
        Command::List { query, sort } => {
            if let Some(sort) = sort {
                config = config.with_default_sort(sort);
            }
            list(&load_catalog(&config)?, &query, config.default_sort)
        }
        Command::History { id, window } => {
            if let Some(window) = window {
                config = config.with_chart_window(window);
            }
            history(&load_catalog(&config)?, ProductId(id), config.chart_window)
        }
        Command::Track { url, platform } => track(&config, &url, &platform),
    }
}

fn load_catalog(config: &Config) -> eyre::Result<Vec<Product>> {
    let products = match &config.catalog {
        Some(path) => JsonCatalog::new(path)
            .load()
            .wrap_err_with(|| format!("failed to load catalog {}", path.display()))?,
        None => SampleCatalog {}.load()?,
    };

    Ok(products)
}

fn list(products: &[Product], query: &str, sort_key: SortKey) -> eyre::Result<()> {
    let state = ViewState::default()
        .with_query(query)
        .with_sort_key(sort_key);

    for line in report::product_list(products, &state)? {
        println!("{line}");
    }

    Ok(())
}

fn history(products: &[Product], id: ProductId, window: usize) -> eyre::Result<()> {
    let product = products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| eyre!("no product with id {id}"))?;

    for line in report::price_history(product, window)? {
        println!("{line}");
    }

    Ok(())
}

fn track(config: &Config, url: &str, platform: &str) -> eyre::Result<()> {
    let mut tracker = StubTracker::default();
    let mut toasts = ToastQueue::new(config.toast_timeout());

    let (_, outcome) = tracking::submit(url, platform, &mut tracker, &mut toasts, Instant::now());

    for line in report::toasts(&toasts) {
        println!("{line}");
    }

    outcome.map(|_| ()).wrap_err("tracking request rejected")
}
