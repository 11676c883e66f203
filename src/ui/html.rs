//! In-memory HTML surface
//!
//! Keeps region markup, chat entries and UI flags in memory and can write the
//! whole page as a standalone `index.html`, plus any offered downloads, into
//! a directory.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::download::Download;
use crate::render::page::{document, PageView};
use crate::ui::{Region, Surface, Tab};

pub const PAGE_FILE_NAME: &str = "index.html";

#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    regions: HashMap<Region, String>,
    chat_entries: Vec<String>,
    alerts: Vec<String>,
    loading: bool,
    loading_changes: Vec<bool>,
    results_visible: bool,
    active_tab: Tab,
    message_input: String,
    role: String,
    downloads: Vec<Download>,
}

impl HtmlSurface {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..Self::default()
        }
    }

    pub fn region(&self, region: Region) -> &str {
        self.regions.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn chat_entries(&self) -> &[String] {
        &self.chat_entries
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Hand over alerts raised since the last call
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Every loader toggle in order, for checking show/hide pairing
    pub fn loading_changes(&self) -> &[bool] {
        &self.loading_changes
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn downloads(&self) -> &[Download] {
        &self.downloads
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    pub fn to_document(&self) -> String {
        document(&PageView {
            report_html: self.region(Region::ReportContent),
            plots_html: self.region(Region::PlotsContent),
            insights_html: self.region(Region::InsightsContent),
            chat_entries: &self.chat_entries,
            alerts: &self.alerts,
            loading: self.loading,
            results_visible: self.results_visible,
            active_tab: self.active_tab,
            message_input: &self.message_input,
            role: &self.role,
        })
    }

    /// Write `index.html` and pending downloads into `dir`
    ///
    /// Downloads are written once and then dropped from the surface.
    pub fn write_to(&mut self, dir: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let page_path = dir.join(PAGE_FILE_NAME);
        std::fs::write(&page_path, self.to_document())?;
        debug!(path = %page_path.display(), "wrote page");

        for download in self.downloads.drain(..) {
            let path = dir.join(&download.file_name);
            std::fs::write(&path, &download.content)?;
            info!(path = %path.display(), "saved download");
        }

        Ok(page_path)
    }
}

impl Surface for HtmlSurface {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.loading_changes.push(visible);
    }

    fn render(&mut self, region: Region, html: String) {
        self.regions.insert(region, html);
    }

    fn append_chat_entry(&mut self, html: String) {
        self.chat_entries.push(html);
    }

    fn clear_chat(&mut self) {
        self.chat_entries.clear();
    }

    fn show_results(&mut self) {
        self.results_visible = true;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn message_input(&self) -> String {
        self.message_input.clone()
    }

    fn set_message_input(&mut self, text: &str) {
        self.message_input = text.to_string();
    }

    fn selected_role(&self) -> String {
        self.role.clone()
    }

    fn activate_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    fn offer_download(&mut self, download: Download) {
        self.downloads.push(download);
    }
}
