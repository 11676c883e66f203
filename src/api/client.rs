//! Report backend client
//!
//! The `ReportBackend` trait is the seam the flows talk to; `HttpBackend`
//! implements it over HTTP with reqwest.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::file::UploadFile;
use crate::api::wire::{ChatEnvelope, ChatRequest, ErrorBody, UploadEnvelope, UploadResponse};
use crate::build_info::BuildInfo;
use crate::models::Insights;

/// Backend error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The backend answered with an `error` field
    #[error("{0}")]
    Application(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for backend operations
pub type ApiResult<T> = Result<T, ApiError>;

/// The two endpoints the viewer depends on
#[async_trait]
pub trait ReportBackend: Send + Sync {
    /// `POST /upload` with a single multipart file
    async fn upload(&self, file: &UploadFile) -> ApiResult<UploadResponse>;

    /// `POST /chat`; returns the assistant's markdown reply
    async fn chat(&self, request: &ChatRequest) -> ApiResult<String>;
}

/// HTTP implementation of [`ReportBackend`]
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(BuildInfo::current().short())
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ReportBackend for HttpBackend {
    async fn upload(&self, file: &UploadFile) -> ApiResult<UploadResponse> {
        let url = self.endpoint("upload");
        debug!(%url, file = %file.file_name, bytes = file.len(), "uploading report");

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let envelope: UploadEnvelope = read_body(response).await?;

        application_error(envelope.error)?;
        let report = envelope.report.ok_or(ApiError::MissingField("report"))?;
        let insights = envelope.insights.and_then(parse_insights);

        Ok(UploadResponse { report, insights })
    }

    async fn chat(&self, request: &ChatRequest) -> ApiResult<String> {
        let url = self.endpoint("chat");
        debug!(%url, session_id = %request.session_id, role = %request.role, "sending chat message");

        let response = self.client.post(&url).json(request).send().await?;
        let envelope: ChatEnvelope = read_body(response).await?;

        application_error(envelope.error)?;
        envelope.response.ok_or(ApiError::MissingField("response"))
    }
}

/// Decode a JSON body, turning non-success statuses into errors
///
/// A non-success response that carries an `error` message reports that
/// message; otherwise only the status code is known.
async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|message| !message.is_empty());
        return Err(match message {
            Some(message) => ApiError::Application(message),
            None => ApiError::Status(status.as_u16()),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// A non-empty `error` field fails the request; an empty one is ignored
fn application_error(error: Option<String>) -> ApiResult<()> {
    match error {
        Some(message) if !message.is_empty() => Err(ApiError::Application(message)),
        _ => Ok(()),
    }
}

/// Insights are optional extras; a shape we can't read is dropped, not fatal
fn parse_insights(value: serde_json::Value) -> Option<Insights> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value::<Insights>(value) {
        Ok(insights) => Some(insights),
        Err(e) => {
            warn!(error = %e, "ignoring unreadable insights");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_joins_paths() {
        let backend = HttpBackend::with_client(reqwest::Client::new(), "http://localhost:5000/");
        assert_eq!(backend.endpoint("upload"), "http://localhost:5000/upload");
        assert_eq!(backend.endpoint("/chat"), "http://localhost:5000/chat");
        assert_eq!(backend.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error! status: 500");
        assert_eq!(
            ApiError::Application("No file selected".to_string()).to_string(),
            "No file selected"
        );
        assert_eq!(
            ApiError::MissingField("report").to_string(),
            "Response is missing the `report` field"
        );
    }

    #[test]
    fn test_empty_error_field_is_not_an_error() {
        assert!(application_error(None).is_ok());
        assert!(application_error(Some(String::new())).is_ok());
        assert!(matches!(
            application_error(Some("Unreadable PDF".to_string())),
            Err(ApiError::Application(ref m)) if m == "Unreadable PDF"
        ));
    }

    #[test]
    fn test_parse_insights() {
        assert!(parse_insights(json!(null)).is_none());
        assert!(parse_insights(json!("not insights")).is_none());
        let insights = parse_insights(json!({"abnormal_parameters": [{"parameter": "LDL"}]}));
        assert_eq!(insights.unwrap().abnormal_parameters[0].parameter, "LDL");
    }
}
