use crate::app_config::ApplicationConfig;
use crate::camera_config::ConfigurationBatch;
use crate::errors::AppError;
use log::{debug, error, info};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed { status: u16, body: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded)
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionOutcome::Succeeded => write!(f, "Cameras successfully configured!"),
            SubmissionOutcome::Failed { status, body } => write!(f, "Error: {}\n{}", status, body),
        }
    }
}

/// Sends a whole configuration batch to the camera config API in one PUT.
#[derive(Clone)]
pub struct ConfigSubmitter {
    http_client: Client,
    api_url: String,
}

impl ConfigSubmitter {
    pub fn new(settings: &ApplicationConfig) -> Self {
        ConfigSubmitter {
            http_client: Client::new(),
            api_url: settings.api_url.clone(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Only 204 No Content counts as success; any other status is reported
    /// back with its body. Transport failures surface as `AppError::Network`.
    pub async fn submit(&self, batch: &ConfigurationBatch) -> Result<SubmissionOutcome, AppError> {
        let start_time = Instant::now();
        debug!("PUT {} with {} record(s)", self.api_url, batch.len());

        let response = self
            .http_client
            .put(&self.api_url)
            .json(batch)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("PUT {} failed: {}", self.api_url, e)))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            info!("✅ {} camera(s) configured in {:?}", batch.len(), start_time.elapsed());
            return Ok(SubmissionOutcome::Succeeded);
        }

        let body = response.text().await?;
        error!("❌ Camera config API answered {} after {:?}", status, start_time.elapsed());
        Ok(SubmissionOutcome::Failed { status: status.as_u16(), body })
    }
}
