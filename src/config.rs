use std::{env, path::PathBuf, time::Duration};

use crate::logging::Environment;

const DEFAULT_SITE_URL: &str = "https://kunamix.com";

/// Runtime settings, read once from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub env: Environment,
    pub bind_address: String,
    pub port: u16,
    pub site_url: String,
    pub content_path: PathBuf,
    pub static_dir: PathBuf,
    pub cache_enabled: bool,
    pub trust_proxy: bool,
    pub leads_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_flush_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: Environment::Dev,
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            site_url: DEFAULT_SITE_URL.to_string(),
            content_path: PathBuf::from("content/blog.json"),
            static_dir: PathBuf::from("static"),
            cache_enabled: false,
            trust_proxy: false,
            leads_file: None,
            log_file: PathBuf::from("logs/access.log"),
            log_flush_interval: Duration::from_secs(5),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let env = get("KUNAMIX_ENV")
            .or_else(|| get("RUST_ENV"))
            .map(|v| Environment::parse(&v))
            .unwrap_or(defaults.env);
        Self {
            env,
            bind_address: get("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            site_url: get("SITE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.site_url),
            content_path: get("CONTENT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_path),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cache_enabled: get("CACHE_ENABLED").is_some_and(|v| flag(&v)),
            trust_proxy: get("TRUST_PROXY").is_some_and(|v| flag(&v)),
            leads_file: get("LEADS_FILE")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            log_file: get("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            log_flush_interval: get("LOG_FLUSH_INTERVAL")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.log_flush_interval),
        }
    }

    /// Absolute URL on this site for a root-relative `path`.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.site_url, path.trim_start_matches('/'))
        }
    }
}

fn flag(v: &str) -> bool {
    matches!(v, "1" | "true" | "TRUE" | "True" | "on" | "ON" | "yes")
}
