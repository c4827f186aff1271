// tests/common/mod.rs
pub use httpmock::Method::{GET, POST};
pub use httpmock::MockServer;
pub use serde_json::json;

use reqwest::{Client, Url};

use crate::client::ApiClient;

/// API client pointed at the mock server
pub fn client_for(server: &MockServer) -> ApiClient {
    let base_url = Url::parse(&server.base_url()).expect("mock server url");
    ApiClient::new(build_reqwest_client(), base_url)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}
