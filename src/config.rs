use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Redis,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "redis" => Ok(StorageBackend::Redis),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    /// Database name, used as the key namespace in the document store.
    pub db_name: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub storage: StorageBackend,
    pub allowed_origins: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379")?,
            db_name: try_load("DB_NAME", "inovix_portal")?,
            port: try_load("PORT", "8001")?,
            static_dir: try_load("STATIC_DIR", "static")?,
            storage: try_load("STORAGE_BACKEND", "redis")?,
            allowed_origins: env::var("ALLOWED_ORIGINS").ok(),
        })
    }

    pub fn catalog_dir(&self) -> PathBuf {
        self.static_dir.join("catalog")
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| AppError::EnvError(format!("Invalid {key} value '{raw}': {e}")))
}
