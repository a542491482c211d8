use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://16.design.htmlacademy.pro/six-cities";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout_ms: u64,
    /// Where the auth token is persisted. Defaults to the app data dir.
    pub token_store_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            token_store_path: None,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn token_store_path(&self) -> PathBuf {
        self.token_store_path
            .clone()
            .unwrap_or_else(|| app_data_dir().join("storage.json"))
    }

    fn apply_env_overrides(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
        .apply_env_overrides(std::env::var("SIX_CITIES_API_URL").ok())
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).unwrap_or_default();
    std::fs::write(path, contents)
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SIX_CITIES_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("SIX_CITIES_DATA_HOME") {
        return PathBuf::from(path);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join("sixcities");
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".sixcities")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            api_url: "http://localhost:3000/six-cities".into(),
            request_timeout_ms: 1_500,
            token_store_path: Some(dir.path().join("token.json")),
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_ms = 250\n").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout_ms, 250);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [not toml").unwrap();
        assert_eq!(load_config_from(&path), AppConfig::default());
    }

    #[test]
    fn env_override_replaces_api_url_when_set() {
        let config = AppConfig::default().apply_env_overrides(Some("http://mock".into()));
        assert_eq!(config.api_url, "http://mock");

        let config = AppConfig::default().apply_env_overrides(Some("  ".into()));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
