//! Runtime configuration, deserialised from `config.toml` layered under
//! `HEALIO_*` environment variables.

use std::{path::PathBuf, time::Duration};

use healio_core::locale::Overrides;
use healio_gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
use serde::Deserialize;

/// Every field has a default, so an absent config file is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                   String,
  pub port:                   u16,
  pub store_path:             PathBuf,
  /// Empty means "read `GEMINI_API_KEY` from the environment".
  pub gemini_api_key:         String,
  pub gemini_model:           String,
  pub gemini_base_url:        String,
  pub request_timeout_secs:   u64,
  pub probe_interval_secs:    u64,
  /// Pin connectivity to offline and skip the probe.
  pub force_offline:          bool,
  pub serialize_triage:       bool,
  /// Evict conversations with no message for this long. `0` keeps them
  /// until deleted.
  pub conversation_idle_secs: u64,
  /// `language -> template key -> text`, merged over the built-in tables.
  pub translations:           Overrides,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                   "0.0.0.0".to_owned(),
      port:                   3000,
      store_path:             PathBuf::from("healio.db"),
      gemini_api_key:         String::new(),
      gemini_model:           DEFAULT_MODEL.to_owned(),
      gemini_base_url:        DEFAULT_BASE_URL.to_owned(),
      request_timeout_secs:   30,
      probe_interval_secs:    30,
      force_offline:          false,
      serialize_triage:       false,
      conversation_idle_secs: 3600,
      translations:           Overrides::new(),
    }
  }
}

impl ServerConfig {
  pub fn load(path: PathBuf) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("HEALIO"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn probe_interval(&self) -> Duration {
    Duration::from_secs(self.probe_interval_secs.max(1))
  }

  /// `None` when idle eviction is disabled.
  pub fn conversation_idle(&self) -> Option<Duration> {
    (self.conversation_idle_secs > 0)
      .then(|| Duration::from_secs(self.conversation_idle_secs))
  }

  /// How often to look for idle conversations: a tenth of the idle limit,
  /// between one second and one minute.
  pub fn sweep_interval(&self) -> Duration {
    Duration::from_secs((self.conversation_idle_secs / 10).clamp(1, 60))
  }

  pub fn gemini(&self, api_key: String) -> GeminiConfig {
    GeminiConfig {
      api_key,
      model: self.gemini_model.clone(),
      base_url: self.gemini_base_url.clone(),
      timeout: Duration::from_secs(self.request_timeout_secs),
    }
  }
}
