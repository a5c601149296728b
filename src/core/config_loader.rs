// /src/core/config_loader.rs

use directories::BaseDirs;
use std::path::PathBuf;

// User override in XDG_CONFIG_HOME/batblock/config.toml
pub fn user_config_path() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().join("batblock").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config/config.toml"))
}
