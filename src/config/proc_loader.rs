use std::path::Path;
use std::sync::LazyLock;

use anyhow::{anyhow, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::proc_validator;
use crate::config::settings::ServiceConfig;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("env var pattern is valid")
});

/// Load and validate config from YAML file
pub async fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow!("cannot read {}: {}", path.display(), e))?;

    let expanded = expand_env_vars(&content);
    parse_config(expanded)
}

pub fn parse_config(content: String) -> Result<ServiceConfig> {
    let service_config: ServiceConfig = if content.trim().is_empty() {
        ServiceConfig::default()
    } else {
        serde_yaml::from_str(&content).inspect_err(|e| error!("parse config error: {}", e))?
    };

    debug!("validation config ...");
    proc_validator::validate_service_config(&service_config)
        .map_err(|errors| anyhow!("config is not valid: {}", errors.join("; ")))?;

    Ok(service_config)
}

/// Replaces `${VAR}` and `${VAR:default}` with the environment value,
/// falling back to the default or an empty string.
pub fn expand_env_vars(input: &str) -> String {
    ENV_VAR
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;
    use crate::config::settings::LogFormat;
    use crate::utils::constants::{DEFAULT_BASE_URL, DEFAULT_PATIENT_ID, DEFAULT_USERNAME};

    #[test]
    fn empty_config_uses_placeholders() {
        let service_config = parse_config(String::new()).unwrap();
        assert_eq!(service_config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(service_config.credentials.username, DEFAULT_USERNAME);
        assert_eq!(service_config.patient_id, DEFAULT_PATIENT_ID);
        assert_eq!(service_config.logging.level, "info");
        assert_eq!(service_config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let yaml = r#"
patient_id: "98765"
logging:
  format: json
"#;
        let service_config = parse_config(yaml.to_owned()).unwrap();
        assert_eq!(service_config.patient_id, "98765");
        assert_eq!(service_config.logging.format, LogFormat::Json);
        assert_eq!(service_config.logging.level, "info");
        assert_eq!(service_config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn env_vars_are_expanded_with_defaults() {
        std::env::set_var("ELIGIBILITY_TEST_USER", "clinic-bot");
        std::env::remove_var("ELIGIBILITY_TEST_MISSING");

        let expanded = expand_env_vars(
            "user: ${ELIGIBILITY_TEST_USER}\npass: ${ELIGIBILITY_TEST_MISSING:fallback}\nempty: '${ELIGIBILITY_TEST_MISSING}'",
        );
        assert_eq!(expanded, "user: clinic-bot\npass: fallback\nempty: ''");

        std::env::remove_var("ELIGIBILITY_TEST_USER");
    }

    #[tokio::test]
    #[serial]
    async fn file_config_reads_credentials_from_env() {
        std::env::set_var("ELIGIBILITY_TEST_PASSWORD", "s3cret");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api:
  base_url: http://127.0.0.1:8080
credentials:
  username: nurse
  password: ${{ELIGIBILITY_TEST_PASSWORD}}
"#
        )
        .unwrap();

        let service_config = file_to_config(file.path()).await.unwrap();
        assert_eq!(service_config.api.base_url, "http://127.0.0.1:8080");
        assert_eq!(service_config.credentials.username, "nurse");
        assert_eq!(service_config.credentials.password, "s3cret");

        std::env::remove_var("ELIGIBILITY_TEST_PASSWORD");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = file_to_config(&dir.path().join("absent.yaml")).await.unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn invalid_config_reports_all_errors() {
        let yaml = r#"
api:
  base_url: ftp://records.example.com
credentials:
  username: ""
  password: ""
patient_id: ""
logging:
  level: loud
"#;
        let err = parse_config(yaml.to_owned()).unwrap_err().to_string();
        assert!(err.starts_with("config is not valid"));
        for expected in ["api.base_url", "credentials.username", "credentials.password", "patient_id", "logging.level"] {
            assert!(err.contains(expected), "missing '{expected}' in: {err}");
        }
    }
}
