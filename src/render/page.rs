//! Standalone page
//!
//! Wraps the rendered regions in a full HTML document: upload form, loader,
//! tab bar, results section and chat panel.

use crate::build_info::BuildInfo;
use crate::render::text::html_escape;
use crate::ui::{Region, Tab};

const STYLE: &str = "body{font-family:system-ui,-apple-system,Segoe UI,Arial,sans-serif;margin:0;background:#f7fafc;color:#111827}\
.container{max-width:1100px;margin:0 auto;padding:24px}\
.tab-btn{border:1px solid #e5e7eb;background:#fff;padding:8px 14px;border-radius:6px;cursor:pointer}\
.tab-btn.active{background:#2563eb;color:#fff}\
.tab-content{display:none}.tab-content.active{display:block}\
.results-table{width:100%;border-collapse:collapse}.results-table td,.results-table th{border-bottom:1px solid #e5e7eb;padding:8px;text-align:left}\
tr.status-normal td{color:#16a34a}tr.status-high td,tr.status-low td{color:#dc2626}\
.plots-container{display:grid;grid-template-columns:repeat(auto-fill,minmax(320px,1fr));gap:12px}\
.plot-card,.insight-card{background:#fff;border:1px solid #e5e7eb;border-radius:10px;padding:12px}\
.result-plot{max-width:100%}.plot-error{color:#6b7280}\
.message{border-radius:8px;padding:8px 12px;margin:6px 0;background:#fff;border:1px solid #e5e7eb}\
.message-you{background:#eef2ff}.message-system{background:#fef2f2}\
.message-header{display:flex;justify-content:space-between;font-size:12px;color:#6b7280}\
.alert{background:#fee2e2;border:1px solid #fecaca;padding:8px 12px;border-radius:8px}\
.footer{margin-top:22px;color:#6b7280;font-size:12px}";

/// Everything the page shell needs from the surface
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub report_html: &'a str,
    pub plots_html: &'a str,
    pub insights_html: &'a str,
    pub chat_entries: &'a [String],
    pub alerts: &'a [String],
    pub loading: bool,
    pub results_visible: bool,
    pub active_tab: Tab,
    pub message_input: &'a str,
    pub role: &'a str,
}

fn region_div(region: Region, html: &str) -> String {
    format!("<div id=\"{}\">{}</div>", region.element_id(), html)
}

fn tab_body(tab: Tab, view: &PageView<'_>) -> String {
    match tab {
        Tab::Report => region_div(Region::ReportContent, view.report_html),
        Tab::Plots => region_div(Region::PlotsContent, view.plots_html),
        Tab::Insights => region_div(Region::InsightsContent, view.insights_html),
        Tab::Chat => format!(
            "<div class=\"chat-panel\"><div id=\"chatMessages\">\n{}</div>\
             <select id=\"roleSelect\"><option selected>{}</option></select>\
             <textarea id=\"messageInput\">{}</textarea>\
             <button id=\"sendMessage\">Send</button></div>",
            view.chat_entries.concat(),
            html_escape(view.role),
            html_escape(view.message_input)
        ),
    }
}

pub fn document(view: &PageView<'_>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str("<title>Blood Report Analysis</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body><div class=\"container\">\n");
    html.push_str("<h1>Blood Report Analysis</h1>\n");

    html.push_str(
        "<form id=\"uploadForm\"><input type=\"file\" id=\"reportFile\">\
         <button type=\"submit\">Upload</button></form>\n",
    );
    html.push_str(&format!(
        "<div id=\"loader\" style=\"display:{}\">Analyzing report...</div>\n",
        if view.loading { "block" } else { "none" }
    ));
    for alert in view.alerts {
        html.push_str(&format!("<div class=\"alert\">{}</div>\n", html_escape(alert)));
    }

    html.push_str(&format!(
        "<div class=\"results-section\" style=\"display:{}\">\n<div class=\"tabs\">",
        if view.results_visible { "block" } else { "none" }
    ));
    for tab in Tab::ALL {
        let active = if tab == view.active_tab { " active" } else { "" };
        html.push_str(&format!(
            "<button class=\"tab-btn{}\" data-tab=\"{}\">{}</button>",
            active,
            tab.id(),
            tab.title()
        ));
    }
    html.push_str("</div>\n");
    for tab in Tab::ALL {
        let active = if tab == view.active_tab { " active" } else { "" };
        html.push_str(&format!(
            "<div id=\"{}\" class=\"tab-content{}\">{}</div>\n",
            tab.id(),
            active,
            tab_body(tab, view)
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"footer\">{}</div>\n",
        html_escape(&BuildInfo::current().short())
    ));
    html.push_str("</div></body></html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(chat: &'a [String], alerts: &'a [String]) -> PageView<'a> {
        PageView {
            report_html: "<p>report</p>",
            plots_html: "<p>plots</p>",
            insights_html: "",
            chat_entries: chat,
            alerts,
            loading: false,
            results_visible: true,
            active_tab: Tab::Plots,
            message_input: "draft <text>",
            role: "Patient",
        }
    }

    #[test]
    fn test_document_marks_only_active_tab() {
        let html = document(&view(&[], &[]));
        assert_eq!(html.matches("tab-btn active").count(), 1);
        assert!(html.contains("<div id=\"plots\" class=\"tab-content active\">"));
        assert!(html.contains("<div id=\"report\" class=\"tab-content\">"));
    }

    #[test]
    fn test_document_contains_regions_and_escaped_input() {
        let chat = vec!["<div class=\"message\">hi</div>".to_string()];
        let alerts = vec!["Error: <bad>".to_string()];
        let html = document(&view(&chat, &alerts));
        assert!(html.contains("<div id=\"reportContent\"><p>report</p></div>"));
        assert!(html.contains("<div class=\"message\">hi</div>"));
        assert!(html.contains("draft &lt;text&gt;"));
        assert!(html.contains("Error: &lt;bad&gt;"));
        assert!(html.contains("id=\"loader\" style=\"display:none\""));
    }
}
