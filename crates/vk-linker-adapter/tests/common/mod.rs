/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for vk-linker-adapter tests

use vk_linker_adapter::{ClientConfig, Credentials, VkClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Access token used by every mocked request
pub fn mock_access_token() -> String {
    "vk1.a.test-access-token".to_string()
}

/// Client pointed at the mock server with the mock token installed
pub fn authed_client(server: &MockServer) -> VkClient {
    let mut client = VkClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    client.set_credentials(Credentials::new(mock_access_token()));
    client
}
