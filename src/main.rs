use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todoctl::config::Config;
use todoctl::console::{ConsoleConfirm, ConsoleNotifier};
use todoctl::{HttpCollection, ListFormController};

/// Terminal client for a paginated todo REST API
#[derive(Parser, Debug)]
#[command(name = "todoctl")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the remote service
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Items per page
    #[arg(long, value_name = "N")]
    page_size: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load(args.config.as_ref(), args.url.as_deref(), args.page_size)?;

    info!(
        "Configuration loaded: url={} page_size={}",
        config.base_url, config.page_size
    );

    let collection = Arc::new(HttpCollection::new(config.base_url));
    let controller = ListFormController::new(
        collection,
        Arc::new(ConsoleNotifier),
        Arc::new(ConsoleConfirm),
        config.page_size,
    );

    todoctl::console::run(controller).await
}
