use serde::Deserialize;
use std::fs;
use std::path::Path;
use crate::app_config::ApplicationConfig;
use anyhow::{Result, Context, bail};
use log::{debug, info};
use reqwest::Url;
use std::time::Instant;

pub const DEFAULT_CONFIG_PATH: &str = "config/commission.yaml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MasterConfig {
    #[serde(rename = "application", default)]
    pub app_settings: ApplicationConfig,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file \'{}\'. 📖", path))?;

    let config: MasterConfig = serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse YAML configuration from \'{}\'. 💔", path))?;

    validate_master_config(&config).with_context(|| "Master configuration validation failed 👎")?;

    info!("✅ Loaded configuration from \'{}\' in {:?}", path, start_time.elapsed());
    Ok(config)
}

/// Loads an explicitly requested config file, or the default one when it
/// exists, falling back to built-in settings otherwise.
pub fn resolve_config(explicit_path: Option<&str>) -> Result<MasterConfig> {
    match explicit_path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).is_file() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            debug!("No configuration file at '{}', using built-in defaults.", DEFAULT_CONFIG_PATH);
            Ok(MasterConfig::default())
        }
    }
}

pub fn validate_master_config(config: &MasterConfig) -> Result<()> {
    let settings = &config.app_settings;
    if settings.api_url.trim().is_empty() {
        bail!("❌ Application api_url cannot be empty.");
    }
    let url = Url::parse(&settings.api_url)
        .with_context(|| format!("❌ Invalid api_url \'{}\'", settings.api_url))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("❌ api_url \'{}\' must use http or https.", settings.api_url);
    }
    if !settings.gain.is_finite() {
        bail!("❌ Gain must be a finite number, got {}.", settings.gain);
    }
    debug!("👍 Master configuration validated: endpoint {}, gain {}", settings.api_url, settings.gain);
    Ok(())
}
