//! Configuration validation with aggregated errors.

use reqwest::Url;
use tracing::{error, info};

use crate::config::settings::ServiceConfig;
use crate::utils::constants::LOG_LEVELS;

/// Returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_base_url(&cfg.api.base_url, &mut errors);

    if cfg.credentials.username.is_empty() {
        errors.push("credentials.username must not be empty".to_string());
    }
    if cfg.credentials.password.is_empty() {
        errors.push("credentials.password must not be empty".to_string());
    }
    if cfg.patient_id.trim().is_empty() {
        errors.push("patient_id must not be empty".to_string());
    }

    let level = cfg.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level '{}' is not one of {}",
            cfg.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config: {}", e);
        }
        Err(errors)
    }
}

fn validate_base_url(base_url: &str, errors: &mut Vec<String>) {
    match Url::parse(base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(format!(
            "api.base_url '{}' must use http or https, got '{}'",
            base_url,
            url.scheme()
        )),
        Err(e) => errors.push(format!("api.base_url '{}' is not a valid url: {}", base_url, e)),
    }
}
