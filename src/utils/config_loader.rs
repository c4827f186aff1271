use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::config::proc_loader::file_to_config;
use crate::config::settings::ServiceConfig;

/// Without a path the built-in placeholders are used.
pub async fn run(config_path: Option<&str>) -> Result<ServiceConfig> {
    match config_path {
        Some(config_path) => {
            let path = Path::new(config_path);
            file_to_config(path)
                .await
                .map_err(|e| anyhow!(format!("Invalid config format: {}", e)))
        }
        None => {
            debug!("no config file given, using defaults");
            Ok(ServiceConfig::default())
        }
    }
}
