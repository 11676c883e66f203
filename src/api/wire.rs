//! Request and response bodies for the report backend

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Insights, Report};

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub role: String,
    pub report: Report,
    pub session_id: String,
}

/// Successful upload: the parsed report and any insights
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResponse {
    pub report: Report,
    pub insights: Option<Insights>,
}

/// Raw `POST /upload` body before the `error` field is checked
#[derive(Debug, Deserialize)]
pub(crate) struct UploadEnvelope {
    #[serde(default)]
    pub report: Option<Report>,
    #[serde(default)]
    pub insights: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw `POST /chat` body before the `error` field is checked
#[derive(Debug, Deserialize)]
pub(crate) struct ChatEnvelope {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body some non-success responses carry
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
