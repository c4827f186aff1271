//! Shared constants and invariants

pub const DEFAULT_BASE_URL: &str = "https://api.canvasmedical.com";

// Placeholders, meant to be replaced by the operator
pub const DEFAULT_USERNAME: &str = "your_username";
pub const DEFAULT_PASSWORD: &str = "your_password";
pub const DEFAULT_PATIENT_ID: &str = "12345";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub const AUTH_PATH: [&str; 2] = ["v1", "authenticate"];

pub fn eligibility_path(patient_id: &str) -> [&str; 5] {
    ["v1", "patients", patient_id, "insurance", "eligibility"]
}
