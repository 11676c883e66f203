//! Report download
//!
//! Serializes the current report into a JSON file offered to the user.
//! Purely local: no network call, no change to the session.

use crate::models::Report;

pub const DOWNLOAD_FILE_NAME: &str = "blood_report.json";
pub const DOWNLOAD_MIME_TYPE: &str = "application/json";

/// A client-side file download
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

impl Download {
    /// Pretty-printed (2-space indented) JSON of the report
    pub fn from_report(report: &Report) -> serde_json::Result<Self> {
        Ok(Self {
            file_name: DOWNLOAD_FILE_NAME.to_string(),
            mime_type: DOWNLOAD_MIME_TYPE.to_string(),
            content: serde_json::to_string_pretty(report)?,
        })
    }

    /// `data:` URI suitable for an anchor's `href`
    pub fn data_uri(&self) -> String {
        format!(
            "data:text/json;charset=utf-8,{}",
            urlencoding::encode(&self.content)
        )
    }
}
