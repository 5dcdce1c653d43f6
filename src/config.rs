use std::env;
use std::path::PathBuf;

use tracing::Level;

pub struct Config {
    pub environment: String,
    pub catalog_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            log_level: lookup("LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(Level::INFO),
        }
    }
}
