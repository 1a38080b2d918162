//! Configuration loaded from `config/*.yaml` and `APP_*` environment variables.

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::env;

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub address: String,
    pub port: u16,
    pub max_workers: usize,
    /// Location of the SQLite listings store.
    pub database_path: String,
    pub session_ttl_secs: u64,
    /// Upper bound on live sessions; the least recently seen is dropped first.
    pub max_sessions: usize,
    pub map: MapSettings,
}

/// Where the map opens when there is nothing to centre on.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        // Tokyo Station
        Self {
            center_lat: 35.6812,
            center_lon: 139.7671,
            zoom: 12,
        }
    }
}

/// `config/default` → `config/{APP_ENV}` (optional) → `APP_*` env vars.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());
    build_settings("config", &app_env, None)
}

/// `env_vars` replaces the process environment when given.
fn build_settings(
    config_dir: &str,
    app_env: &str,
    env_vars: Option<Map<String, String>>,
) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::with_name(&format!("{config_dir}/default")))
        .add_source(File::with_name(&format!("{config_dir}/{app_env}")).required(false))
        // APP_DATABASE_PATH -> database_path, APP_MAP__ZOOM -> map.zoom
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env_vars),
        )
        .build()?
        .try_deserialize::<Settings>()
}
