//! Configuration management for the adoption API.
//!
//! Loads configuration from environment variables (and an optional `.env`):
//! - Listener address (`HOST`, `PORT`)
//! - Public URL used to build absolute photo links
//! - Upload directory and size limits

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Maximum number of photos accepted in a single create/update request.
pub const MAX_PHOTOS_PER_REQUEST: usize = 5;

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL clients use to reach this server, e.g. `http://192.168.0.103:3000`.
    pub public_url: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory served under `/public`; uploads land in its `uploads/` child.
    pub public_dir: PathBuf,
    pub max_upload_size: usize,
}

impl StorageConfig {
    pub fn uploads_dir(&self) -> PathBuf {
        self.public_dir.join("uploads")
    }
}

/// Default for `MAX_UPLOAD_SIZE`: 10MB per photo.
const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;
const DEFAULT_PORT: u16 = 3000;

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    ///
    /// Unparseable numbers are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT);
        let max_upload_size = parse_or(
            "MAX_UPLOAD_SIZE",
            lookup("MAX_UPLOAD_SIZE"),
            DEFAULT_MAX_UPLOAD_SIZE,
        );

        let public_host = lookup("PUBLIC_HOST")
            .or_else(|| lookup("IP_ADDRESS"))
            .unwrap_or_else(|| "localhost".to_string());

        let public_url = lookup("PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://{}:{}", public_host, port));

        Self {
            server: ServerConfig {
                host: get_or("HOST", "0.0.0.0"),
                port,
                public_url,
            },
            storage: StorageConfig {
                public_dir: PathBuf::from(get_or("PUBLIC_DIR", "./public")),
                max_upload_size,
            },
        }
    }

    /// Explicit configuration for tests and embedding; reads no environment.
    pub fn with_public_dir(public_url: impl Into<String>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                public_url: public_url.into(),
            },
            storage: StorageConfig {
                public_dir: public_dir.into(),
                max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Invalid {} value '{}' ({}), falling back to {}", key, raw, e, default);
            default
        }
    }
}
