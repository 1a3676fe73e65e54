// Shared helpers for the integration tests.
#![allow(dead_code)]

use camcommission::app_config::ApplicationConfig;
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::MockServer;

pub const CAMERAS_PATH: &str = "/api/v1/config/cameras";

pub fn serials_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

pub async fn start_mock_camera_api_server() -> MockServer {
    MockServer::start().await
}

pub fn settings_for(server: &MockServer) -> ApplicationConfig {
    ApplicationConfig {
        api_url: format!("{}{}", server.uri(), CAMERAS_PATH),
        ..ApplicationConfig::default()
    }
}
