use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use budgetflow_core::settings::{AnalyticsSettings, CostBasisMode};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "./db/app.db";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Server configuration, read from `BF_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_allow_origins: Vec<String>,
    pub request_timeout: Duration,
    /// `text` or `json`.
    pub log_format: String,
    pub analytics: AnalyticsSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            db_path: DEFAULT_DB_PATH.to_string(),
            cors_allow_origins: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            log_format: "text".to_string(),
            analytics: AnalyticsSettings::default(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then overlays the environment on the defaults.
    /// Unparseable values fall back to their default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = env_parse("BF_LISTEN_ADDR").unwrap_or(defaults.listen_addr);
        let db_path = env_string("BF_DB_PATH").unwrap_or(defaults.db_path);
        let cors_allow_origins = env_string("BF_CORS_ALLOW_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_allow_origins);
        let request_timeout = env_parse::<u64>("BF_REQUEST_TIMEOUT_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);
        let log_format = env_string("BF_LOG_FORMAT").unwrap_or(defaults.log_format);

        let mut analytics = defaults.analytics;
        if let Some(currency) = env_string("BF_REPORTING_CURRENCY") {
            analytics.reporting_currency = currency;
        }
        if let Some(months) = env_parse("BF_RISK_LOOKBACK_MONTHS") {
            analytics.risk_lookback_months = months;
        }
        if let Some(months) = env_parse("BF_CALENDAR_MONTHS") {
            analytics.default_calendar_months = months;
        }
        if let Some(mode) = env_parse::<CostBasisMode>("BF_COST_BASIS_MODE") {
            analytics.cost_basis_mode = mode;
        }

        Self {
            listen_addr,
            db_path,
            cors_allow_origins,
            request_timeout,
            log_format,
            analytics,
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|v| v.parse().ok())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
