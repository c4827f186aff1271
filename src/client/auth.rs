use serde_json::Value;
use tracing::{debug, info};

use crate::client::{read_success, ApiClient};
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthRequest, AuthResponse, Credentials, Token};
use crate::utils::constants::AUTH_PATH;

/// Exchanges `credentials` for a bearer token.
///
/// A response without a non-empty string `token` is an
/// [`ApiError::MissingField`], never an empty token.
pub async fn authenticate(client: &ApiClient, credentials: &Credentials) -> ApiResult<Token> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(ApiError::InvalidInput("username and password must be non-empty"));
    }

    let url = client.endpoint(AUTH_PATH)?;
    debug!(%url, username = %credentials.username, "authenticating");

    let response = client
        .http()
        .post(url)
        .json(&AuthRequest::from(credentials))
        .send()
        .await?;
    let body = read_success(response).await?;
    let parsed: AuthResponse = serde_json::from_str(&body)?;

    match parsed.token {
        Some(Value::String(token)) if !token.is_empty() => {
            info!(username = %credentials.username, "authenticated");
            Ok(Token::new(token))
        }
        _ => Err(ApiError::MissingField { field: "token" }),
    }
}
