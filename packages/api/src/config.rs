//! Loads [`ViewerConfig`] for the server process.

use std::path::PathBuf;

use store::config::ENV_CONFIG_PATH;
use store::ViewerConfig;
use tracing::{info, warn};

/// Read `viewer.toml` (or the file named by `VIEWER_CONFIG`) and apply
/// environment overrides. `.env` is loaded first. A missing file means
/// defaults; an unreadable or malformed one is logged and ignored.
pub fn load() -> ViewerConfig {
    dotenvy::dotenv().ok();

    let path = std::env::var(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(ViewerConfig::filename()));

    let config = match std::fs::read_to_string(&path) {
        Ok(text) => match ViewerConfig::from_toml(&text) {
            Ok(config) => {
                info!(path = %path.display(), "loaded viewer config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid viewer config, using defaults");
                ViewerConfig::default()
            }
        },
        Err(_) => ViewerConfig::default(),
    };

    config.with_env_overrides(|key| std::env::var(key).ok())
}
