use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use healthbadge_core::{AppConfig, ConfigError, HealthBadgeState};
use healthbadge_overlay::{run, ExecuteOutcome, HostPage, RetryBudget, SiteAdapter};
use healthbadge_soda::InspectionClient;
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "healthbadge")]
#[command(about = "Overlay restaurant health-inspection scores on delivery-site pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the overlay against a saved page and write the augmented HTML
    Overlay {
        /// Origin the page was served from, e.g. `https://postmates.com`
        #[arg(long)]
        origin: String,
        /// Saved page HTML
        #[arg(long)]
        page: PathBuf,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show which adapter handles a page and what it extracts
    Detect {
        #[arg(long)]
        origin: String,
        #[arg(long)]
        page: PathBuf,
    },
    /// Query inspection history for a business name
    Lookup {
        /// Exact business name as listed in the dataset
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let (cli, config) =
        match parse_then_load(std::env::args_os(), healthbadge_core::load_app_config) {
            Ok(startup) => startup,
            Err(err) => match err.downcast::<clap::Error>() {
                Ok(usage) => usage.exit(),
                Err(other) => return Err(other),
            },
        };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // The overlay shares one page between tasks without locking, so
    // everything runs on a single-threaded runtime.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(cli.command, &config))
}

/// Parses arguments before reading configuration, so `--help` and usage
/// errors are reported even when the environment is invalid.
fn parse_then_load<I, T, F>(args: I, load_config: F) -> anyhow::Result<(Cli, AppConfig)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    let cli = Cli::try_parse_from(args)?;
    let config = load_config()?;
    Ok((cli, config))
}

async fn dispatch(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Overlay { origin, page, out } => {
            overlay(config, &origin, &page, out.as_deref()).await
        }
        Commands::Detect { origin, page } => detect(&origin, &page),
        Commands::Lookup { name } => lookup(config, &name).await,
    }
}

fn build_client(config: &AppConfig) -> anyhow::Result<InspectionClient> {
    let client = InspectionClient::with_base_url(
        &config.soda_base_url,
        &config.soda_dataset,
        config.request_timeout_secs,
        &config.user_agent,
    )?
    .with_app_token(config.soda_app_token.clone());
    Ok(client)
}

fn load_page(origin: &str, path: &Path) -> anyhow::Result<HostPage> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read page from {}", path.display()))?;
    Ok(HostPage::parse(origin, &html))
}

async fn overlay(
    config: &AppConfig,
    origin: &str,
    page_path: &Path,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let page = load_page(origin, page_path)?.into_shared();
    let client = build_client(config)?;
    let budget = RetryBudget::new(config.inject_interval_ms, config.inject_max_attempts);

    let local = LocalSet::new();
    let outcome = local.run_until(run(&page, &client, budget)).await;
    // Let every in-flight convergence sequence finish or give up.
    local.await;

    match outcome {
        ExecuteOutcome::Unsupported => tracing::info!(origin, "origin is not a supported site"),
        ExecuteOutcome::NotRestaurantPage => tracing::info!(origin, "not a restaurant page"),
        ExecuteOutcome::Rendered(state) => tracing::info!(origin, badge = ?state, "overlay rendered"),
    }

    let html = page.borrow().html();
    match out {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{html}"),
    }
    Ok(())
}

fn detect(origin: &str, page_path: &Path) -> anyhow::Result<()> {
    let page = load_page(origin, page_path)?;
    let site = SiteAdapter::for_origin(origin);
    println!("adapter: {site}");
    match site.detect(&page) {
        Some(restaurant) => {
            println!("restaurant: {}", restaurant.restaurant_name());
            println!("address: {}", restaurant.address().unwrap_or("-"));
            let container = if restaurant.container_element(&page).is_some() {
                "present"
            } else {
                "not rendered"
            };
            println!("container: {container}");
        }
        None => println!("restaurant page: no"),
    }
    Ok(())
}

async fn lookup(config: &AppConfig, name: &str) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let records = client
        .query(name)
        .await
        .with_context(|| format!("inspection query for '{name}' failed"))?;

    println!("records: {}", records.len());
    match HealthBadgeState::from_records(&records) {
        HealthBadgeState::Scored {
            score, category, ..
        } => println!("score: {score} ({category})"),
        HealthBadgeState::Unscored | HealthBadgeState::Error => println!("score: none on record"),
    }
    Ok(())
}

#[cfg(test)]
mod tests;
