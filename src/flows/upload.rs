//! Upload flow
//!
//! Sends the selected file to the backend and, on success, swaps in the new
//! report, clears the transcript and renders every view.

use tracing::{info, warn};

use crate::api::{ReportBackend, UploadFile, UploadResponse};
use crate::render::{insights_view, plots_view, report_view};
use crate::session::SessionState;
use crate::ui::{Region, Surface};

pub const NO_FILE_MESSAGE: &str = "Please select a file first.";

/// Backend request cap (16 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub max_upload_bytes: u64,
    /// Prefix for plot image URLs
    pub asset_base: String,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            asset_base: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Validation failed; nothing was sent
    Rejected(String),
    /// The request failed; the previous report is still in place
    Failed(String),
    Loaded { results: usize, abnormal: usize },
}

pub async fn submit_upload(
    session: &mut SessionState,
    backend: &dyn ReportBackend,
    surface: &mut dyn Surface,
    file: Option<UploadFile>,
    options: &UploadOptions,
) -> UploadOutcome {
    let Some(file) = file else {
        surface.alert(NO_FILE_MESSAGE);
        return UploadOutcome::Rejected(NO_FILE_MESSAGE.to_string());
    };

    if file.len() > options.max_upload_bytes {
        let message = format!(
            "File is too large ({} bytes); the limit is {} bytes.",
            file.len(),
            options.max_upload_bytes
        );
        surface.alert(&message);
        return UploadOutcome::Rejected(message);
    }

    info!(file = %file.file_name, bytes = file.len(), "uploading report");

    surface.set_loading(true);
    let result = backend.upload(&file).await;
    surface.set_loading(false);

    match result {
        Ok(response) => apply_upload(session, surface, response, &options.asset_base),
        Err(e) => {
            warn!(error = %e, file = %file.file_name, "upload failed");
            let message = format!("Error: {}", e);
            surface.alert(&message);
            UploadOutcome::Failed(message)
        }
    }
}

/// Install a successful upload into the session and render it
pub fn apply_upload(
    session: &mut SessionState,
    surface: &mut dyn Surface,
    response: UploadResponse,
    asset_base: &str,
) -> UploadOutcome {
    let UploadResponse { report, insights } = response;

    let report_html = report_view(&report);
    let plots_html = plots_view(&report, asset_base);
    let insights_html = insights_view(insights.as_ref()).unwrap_or_default();
    let results = report.lab_results.len();
    let abnormal = report.abnormal_count();

    session.set_report(report);
    surface.clear_chat();

    surface.render(Region::ReportContent, report_html);
    surface.render(Region::PlotsContent, plots_html);
    surface.render(Region::InsightsContent, insights_html);
    surface.show_results();

    info!(results, abnormal, "report loaded");
    UploadOutcome::Loaded { results, abnormal }
}
