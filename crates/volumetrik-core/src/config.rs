/// Runtime configuration read from the environment.
///
/// | Variable | Meaning | Default |
/// |---|---|---|
/// | `VOLUMETRIK_SERVER` | Base URL of a Volumetrik server; enables the HTTP backend | unset (local backend) |
/// | `VOLUMETRIK_SETTINGS` | Settings file of the local backend | `settings/settings.json` |
/// | `VOLUMETRIK_TIMEOUT_SECS` | HTTP request timeout | `300` |
/// | `VOLUMETRIK_START_PATH` | Initial content of the path field | working directory |
use crate::error::ServiceError;
use crate::service::local::DEFAULT_SETTINGS_PATH;
use crate::service::{DashboardService, HttpService, LocalService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_url: Option<String>,
    pub settings_path: PathBuf,
    pub timeout: Duration,
    pub start_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: None,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            timeout: DEFAULT_TIMEOUT,
            start_path: default_start_path(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        config.server_url = get("VOLUMETRIK_SERVER");
        if let Some(path) = get("VOLUMETRIK_SETTINGS") {
            config.settings_path = PathBuf::from(path);
        }
        if let Some(raw) = get("VOLUMETRIK_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid VOLUMETRIK_TIMEOUT_SECS={raw}"),
            }
        }
        if let Some(path) = get("VOLUMETRIK_START_PATH") {
            config.start_path = path;
        }
        config
    }
}

fn default_start_path() -> String {
    std::env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "/".to_string())
}

/// The backend selected by `config`: HTTP when a server URL is set,
/// otherwise the in-process scanner.
pub fn build_service(config: &Config) -> Result<Arc<dyn DashboardService>, ServiceError> {
    match &config.server_url {
        Some(url) => {
            info!(url = %url, "Using remote Volumetrik server");
            Ok(Arc::new(HttpService::new(url, config.timeout)?))
        }
        None => {
            info!(settings = %config.settings_path.display(), "Using local scanner");
            Ok(Arc::new(LocalService::new(&config.settings_path)))
        }
    }
}
