use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:8888/api/v1/config/cameras";
pub const DEFAULT_GAIN: f64 = 20.0;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApplicationConfig {
    pub api_url: String,
    pub gain: f64, // applied uniformly to every camera in a batch
    pub log_level: Option<String>, // CLI --debug takes precedence
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            api_url: DEFAULT_API_URL.to_string(),
            gain: DEFAULT_GAIN,
            log_level: Some("info".to_string()),
        }
    }
}
