//! Healio server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! knowledge store, and serves the JSON API over HTTP.
//!
//! The Gemini key comes from `gemini_api_key` / `HEALIO_GEMINI_API_KEY`, or
//! failing that from `GEMINI_API_KEY`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use healio_api::AppState;
use healio_core::{
  connectivity::ConnectivitySignal,
  gateway::Instructions,
  locale::Localizer,
  store::KnowledgeStore,
  triage::TriageEngine,
};
use healio_gemini::GeminiGateway;
use healio_server::{ServerConfig, probe, sweep};
use healio_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Healio health awareness server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Start offline regardless of the config file.
  #[arg(long)]
  offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut cfg = ServerConfig::load(cli.config)
    .context("failed to load configuration")?;
  cfg.force_offline |= cli.offline;

  // Localization tables. An incomplete default table is fatal here.
  let localizer = Localizer::builtin()
    .and_then(|l| l.with_overrides(&cfg.translations))
    .context("invalid translation tables")?;
  let localizer = Arc::new(localizer);

  // Open SQLite store and take the catalog snapshot used for triage.
  let store_path = expand_tilde(&cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let records = store
    .list_diseases()
    .await
    .context("failed to load disease catalog")?;
  tracing::info!(diseases = records.len(), "knowledge store ready");

  // Remote reasoning.
  let api_key = match cfg.gemini_api_key.trim() {
    "" => std::env::var("GEMINI_API_KEY").unwrap_or_default(),
    key => key.to_owned(),
  };
  if api_key.is_empty() && !cfg.force_offline {
    tracing::warn!("no gemini api key configured; remote answers will fail");
  }
  let gateway = GeminiGateway::new(
    cfg.gemini(api_key),
    Instructions::from_localizer(&localizer),
  )
  .context("failed to build gemini client")?;

  // Connectivity: pinned offline, or driven by the probe.
  let connectivity = Arc::new(ConnectivitySignal::new(!cfg.force_offline));
  let probe_task = if cfg.force_offline {
    tracing::info!("running in forced offline mode");
    None
  } else {
    let prober = gateway.clone();
    Some(probe::spawn(connectivity.clone(), cfg.probe_interval(), move || {
      let prober = prober.clone();
      async move { prober.probe().await }
    }))
  };

  // Build application state.
  let engine = TriageEngine::new(records, localizer, gateway);
  let state = AppState::new(Arc::new(store), Arc::new(engine), connectivity)
    .serialize_triage(cfg.serialize_triage);

  let sweep_task = cfg.conversation_idle().map(|max_idle| {
    sweep::spawn(state.conversations.clone(), max_idle, cfg.sweep_interval())
  });

  let app = healio_server::router(state);
  let address = cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  let served = axum::serve(listener, app).await.context("server error");
  for task in [probe_task, sweep_task].into_iter().flatten() {
    task.abort();
  }
  served
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
