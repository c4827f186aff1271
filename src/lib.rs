//! # Eligibility Check Library
//!
//! Authenticates against a medical records API and retrieves a patient's
//! insurance eligibility status.
//!
//! Modules:
//! - `config` — YAML configuration, defaults and validation
//! - `client` — authentication and eligibility calls
//! - `app` — the authenticate-then-fetch flow that prints the status
//! - `utils` — logging, constants, config entrypoint

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::client::{authenticate, fetch_eligibility, ApiClient};
pub use crate::config::settings::ServiceConfig;
pub use crate::error::{ApiError, ApiResult};
pub use crate::models::{Credentials, EligibilityRecord, Token};
