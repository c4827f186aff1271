/// Client module
///
/// Wraps one `reqwest::Client` together with the API base url and exposes
/// the two remote calls: `auth::authenticate` and
/// `eligibility::fetch_eligibility`.

use reqwest::{Client, Response, Url};
use tracing::debug;

use crate::config::settings::ServiceConfig;
use crate::error::{ApiError, ApiResult};

pub mod auth;
pub mod eligibility;

pub use auth::authenticate;
pub use eligibility::fetch_eligibility;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn from_config(service_config: &ServiceConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&service_config.api.base_url)
            .map_err(|_| ApiError::Url(service_config.api.base_url.to_owned()))?;
        Ok(Self::new(Client::new(), base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Appends `segments` to the base url, percent-encoding each one.
    pub(crate) fn endpoint<I>(&self, segments: I) -> ApiResult<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Returns the body of a 2xx response, or `ApiError::Http` otherwise.
pub(crate) async fn read_success(response: Response) -> ApiResult<String> {
    let status = response.status();
    if !status.is_success() {
        let url = response.url().to_string();
        debug!(%status, %url, "remote call rejected");
        return Err(ApiError::Http { status, url });
    }
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn endpoint_joins_segments_onto_base_path() {
        let url = client("https://api.example.com/").endpoint(["v1", "authenticate"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/authenticate");

        let url = client("https://api.example.com/emr").endpoint(["v1", "authenticate"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/emr/v1/authenticate");
    }

    #[test]
    fn endpoint_encodes_each_segment() {
        let url = client("https://api.example.com").endpoint(["v1", "patients", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/patients/a%2Fb%20c");
    }

    #[test]
    fn endpoint_rejects_opaque_base() {
        let err = client("mailto:ops@example.com").endpoint(["v1"]).unwrap_err();
        assert!(matches!(err, ApiError::Url(_)));
    }
}
