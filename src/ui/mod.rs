//! UI abstraction
//!
//! The flows never touch a concrete toolkit. They talk to a [`Surface`]: a
//! set of capabilities (render markup into a region, append chat entries,
//! alert, read and write the message input, toggle the loader, switch tabs,
//! offer a download). User actions come back in as [`UiEvent`]s.

pub mod html;

use crate::api::UploadFile;
use crate::download::Download;

pub use html::HtmlSurface;

/// Display regions the render pipeline writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ReportContent,
    PlotsContent,
    InsightsContent,
}

impl Region {
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::ReportContent => "reportContent",
            Region::PlotsContent => "plotsContent",
            Region::InsightsContent => "insightsContent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Report,
    Plots,
    Insights,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Report, Tab::Plots, Tab::Insights, Tab::Chat];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Report => "report",
            Tab::Plots => "plots",
            Tab::Insights => "insights",
            Tab::Chat => "chat",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Report => "Report",
            Tab::Plots => "Plots",
            Tab::Insights => "Insights",
            Tab::Chat => "Chat",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "report" | "results" => Some(Tab::Report),
            "plots" | "plot" | "charts" => Some(Tab::Plots),
            "insights" | "insight" => Some(Tab::Insights),
            "chat" => Some(Tab::Chat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
}

/// A key press in the message input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
}

impl KeyEvent {
    pub fn enter() -> Self {
        Self {
            key: Key::Enter,
            shift: false,
        }
    }

    pub fn char(c: char) -> Self {
        Self {
            key: Key::Char(c),
            shift: false,
        }
    }

    pub fn shift_enter() -> Self {
        Self {
            key: Key::Enter,
            shift: true,
        }
    }

    /// Plain Enter sends; Shift+Enter inserts a line break instead
    pub fn submits_message(&self) -> bool {
        self.key == Key::Enter && !self.shift
    }
}

/// User actions the app handles
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    UploadSubmitted(Option<UploadFile>),
    SendClicked,
    KeyPressed(KeyEvent),
    TabClicked(Tab),
    DownloadClicked,
}

impl UiEvent {
    /// Short name for logs; uploads carry whole files so `Debug` is too noisy
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::UploadSubmitted(_) => "upload_submitted",
            UiEvent::SendClicked => "send_clicked",
            UiEvent::KeyPressed(_) => "key_pressed",
            UiEvent::TabClicked(_) => "tab_clicked",
            UiEvent::DownloadClicked => "download_clicked",
        }
    }
}

/// Capabilities the flows need from a user interface
pub trait Surface {
    fn set_loading(&mut self, visible: bool);

    /// Replace the content of a region
    fn render(&mut self, region: Region, html: String);

    fn append_chat_entry(&mut self, html: String);

    fn clear_chat(&mut self);

    /// Reveal the results section once a report has been rendered
    fn show_results(&mut self);

    fn alert(&mut self, message: &str);

    fn message_input(&self) -> String;

    fn set_message_input(&mut self, text: &str);

    fn selected_role(&self) -> String;

    fn activate_tab(&mut self, tab: Tab);

    fn offer_download(&mut self, download: Download);
}
