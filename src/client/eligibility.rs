use tracing::{debug, info};

use crate::client::{read_success, ApiClient};
use crate::error::{ApiError, ApiResult};
use crate::models::{EligibilityRecord, Token};
use crate::utils::constants::eligibility_path;

/// Fetches the insurance eligibility record of `patient_id`, presenting
/// `token` as a bearer credential.
pub async fn fetch_eligibility(
    client: &ApiClient,
    token: &Token,
    patient_id: &str,
) -> ApiResult<EligibilityRecord> {
    if patient_id.is_empty() {
        return Err(ApiError::InvalidInput("patient id must be non-empty"));
    }
    if token.as_str().is_empty() {
        return Err(ApiError::InvalidInput("token must be non-empty"));
    }

    let url = client.endpoint(eligibility_path(patient_id))?;
    debug!(%url, "requesting eligibility");

    let response = client
        .http()
        .get(url)
        .bearer_auth(token.as_str())
        .send()
        .await?;
    let body = read_success(response).await?;
    let record: EligibilityRecord = serde_json::from_str(&body)?;

    info!(patient_id, fields = record.fields().len(), "eligibility received");
    Ok(record)
}
