use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use snag_auth::ClerkAuthenticator;
use snag_config::SnagConfig;
use snag_server::routes;
use snag_server::state::AppState;
use snag_store::SnagStore;

/// Snag defect-tracking API server.
#[derive(Debug, Parser)]
#[command(name = "snagd", version, about)]
struct Cli {
    /// Socket address to listen on (overrides config).
    #[arg(long)]
    bind: Option<String>,

    /// Path to the record database (overrides config).
    #[arg(long)]
    db: Option<String>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,

    /// Log errors only.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("snagd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = SnagConfig::load_with_dotenv().context("loading configuration")?;
    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());
    let db_path = cli.db.unwrap_or_else(|| config.store.path.clone());

    if !config.clerk.is_configured() {
        tracing::warn!("clerk secret key not configured; all tokens will be rejected");
    }

    let store = SnagStore::open(&db_path)
        .await
        .with_context(|| format!("opening record store at {db_path}"))?;
    let auth = ClerkAuthenticator::new(config.clerk.secret_key.clone());
    let state = AppState {
        store: Arc::new(store),
        auth: Arc::new(auth),
    };

    let app = routes::router(state, &config.server.api_prefix);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    tracing::info!(%bind, prefix = %config.server.api_prefix, "snagd listening");

    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SNAG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("tracing init: {error}"))
}
