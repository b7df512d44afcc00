//! HTTP client for the resume analysis service

use crate::config::ServiceConfig;
use crate::error::{Result, SkillSparkError};
use crate::input::upload::ResumeUpload;
use crate::service::analysis::{AnalysisResponse, AnalysisResult};
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::time::Duration;

const ANALYZE_ENDPOINT: &str = "/analyze-resume";

/// Name of the multipart field carrying the document
const FILE_FIELD: &str = "file";

pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// The whole request, including reading the body, is bounded by `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SkillSparkError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_ENDPOINT)
    }

    /// Upload one resume and return the service's analysis.
    ///
    /// A single attempt; a timeout surfaces as `SkillSparkError::Timeout`.
    pub async fn analyze(&self, upload: &ResumeUpload) -> Result<AnalysisResult> {
        let url = self.endpoint();

        let form = Form::new().part(
            FILE_FIELD,
            Part::bytes(upload.bytes.clone())
                .file_name(upload.file_name.clone())
                .mime_str(upload.mime_type())?,
        );

        info!("Calling resume analysis service: {}", url);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        let mut result = interpret_response(status, &body)?;

        if result.file_name.is_none() {
            result.file_name = Some(upload.file_name.clone());
        }

        Ok(result)
    }
}

/// Turn a status code and raw body into an analysis result or a classified error.
///
/// A non-empty `error` field fails the call whatever the status. Otherwise 5xx is
/// a server error and any other non-2xx, or a 2xx body that is not JSON, means
/// the resume could not be analyzed.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<AnalysisResult> {
    let parsed = match serde_json::from_str::<AnalysisResponse>(body) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Failed to parse analysis service response: {}", e);
            None
        }
    };

    if let Some(message) = parsed.as_ref().and_then(|p| p.error_message()) {
        return Err(SkillSparkError::ServiceRejected(message.to_string()));
    }

    if status.is_server_error() {
        return Err(SkillSparkError::ServerError);
    }

    if !status.is_success() {
        return Err(SkillSparkError::AnalysisUnavailable);
    }

    parsed
        .map(|p| p.result)
        .ok_or(SkillSparkError::AnalysisUnavailable)
}
