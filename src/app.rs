//! Authenticate, fetch, print.

use std::io::{self, Write};

use tracing::warn;

use crate::client::{authenticate, fetch_eligibility, ApiClient};
use crate::error::{ApiError, ApiResult};
use crate::models::Credentials;

/// What `run` ended up printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Status(String),
    Failed(String),
}

/// Retrieves the eligibility status of `patient_id` and writes exactly one
/// line to `out`. API failures end up in the line, only write errors are
/// returned.
pub async fn run<W: Write>(
    client: &ApiClient,
    credentials: &Credentials,
    patient_id: &str,
    out: &mut W,
) -> io::Result<Outcome> {
    match check_eligibility(client, credentials, patient_id).await {
        Ok(status) => {
            writeln!(out, "Eligibility Status: {}", status)?;
            Ok(Outcome::Status(status))
        }
        Err(err) => {
            warn!(error = %err, "eligibility check failed");
            let detail = err.to_string();
            writeln!(out, "API request failed: {}", detail)?;
            Ok(Outcome::Failed(detail))
        }
    }
}

async fn check_eligibility(
    client: &ApiClient,
    credentials: &Credentials,
    patient_id: &str,
) -> ApiResult<String> {
    let token = authenticate(client, credentials).await?;
    let record = fetch_eligibility(client, &token, patient_id).await?;
    record
        .status()
        .map(str::to_owned)
        .ok_or(ApiError::MissingField { field: "status" })
}
