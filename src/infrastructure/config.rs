use crate::domain::session::{RefreshInterval, RefreshMode, DEFAULT_REFRESH_SECS};
use crate::infrastructure::error::DashboardError;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub panels: PanelSettings,
    pub refresh: RefreshSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// Trailing windows and row limits for the panel queries.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PanelSettings {
    pub metrics_window_minutes: i32,
    pub series_window_minutes: i32,
    pub top_stocks_limit: i64,
    pub recent_trades_limit: i64,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            metrics_window_minutes: 5,
            series_window_minutes: 60,
            top_stocks_limit: 10,
            recent_trades_limit: 20,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub default_interval_secs: u64,
    pub auto_refresh: bool,
}

impl RefreshSettings {
    pub fn interval(&self) -> RefreshInterval {
        RefreshInterval::from_secs(self.default_interval_secs)
    }

    pub fn mode(&self) -> RefreshMode {
        RefreshMode::new(self.auto_refresh, self.interval())
    }
}

/// Load settings from `config/dashboard.{toml,..}` if present, with
/// `DASHBOARD__SECTION__KEY` environment variables taking precedence.
pub fn load_settings() -> Result<Settings, DashboardError> {
    build_settings(config::File::with_name(CONFIG_FILE).required(false))
}

fn build_settings<S>(file: S) -> Result<Settings, DashboardError>
where
    S: config::Source + Send + Sync + 'static,
{
    let panels = PanelSettings::default();
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("database.host", "postgres")?
        .set_default("database.name", "streaming")?
        .set_default("database.user", "postgres")?
        .set_default("database.password", "postgres")?
        .set_default("database.port", 5432_i64)?
        .set_default("database.max_connections", 5_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .set_default("panels.metrics_window_minutes", i64::from(panels.metrics_window_minutes))?
        .set_default("panels.series_window_minutes", i64::from(panels.series_window_minutes))?
        .set_default("panels.top_stocks_limit", panels.top_stocks_limit)?
        .set_default("panels.recent_trades_limit", panels.recent_trades_limit)?
        .set_default("refresh.default_interval_secs", DEFAULT_REFRESH_SECS as i64)?
        .set_default("refresh.auto_refresh", true)?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
