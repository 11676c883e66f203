//! Report tables
//!
//! Patient information, laboratory information and test results.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::warn;

use crate::download::Download;
use crate::models::{LabResult, Report};
use crate::render::text::{display_field, display_value, format_label, html_escape, NOT_AVAILABLE};

/// Column headers of the results table, in display order
pub const RESULT_COLUMNS: [&str; 5] = ["Parameter", "Value", "Reference Range", "Unit", "Status"];

fn label_row(label: &str, value: &str) -> String {
    format!(
        "<tr><td><strong>{}</strong></td><td>{}</td></tr>\n",
        html_escape(label),
        html_escape(value)
    )
}

/// One row per patient-info entry
pub fn patient_info_rows(patient_info: &Map<String, Value>) -> String {
    patient_info
        .iter()
        .map(|(key, value)| label_row(&format_label(key), &display_value(value)))
        .collect()
}

/// One row per lab-info entry; nested mappings are flattened one level
pub fn lab_info_rows(lab_info: &Map<String, Value>) -> String {
    let mut rows = String::new();
    for (key, value) in lab_info {
        match value {
            Value::Object(nested) => {
                for (sub_key, sub_value) in nested {
                    rows.push_str(&label_row(&format_label(sub_key), &display_value(sub_value)));
                }
            }
            _ => rows.push_str(&label_row(&format_label(key), &display_value(value))),
        }
    }
    rows
}

/// One row per lab result, columns in [`RESULT_COLUMNS`] order
pub fn result_rows(results: &IndexMap<String, LabResult>) -> String {
    results
        .iter()
        .map(|(parameter, result)| {
            format!(
                "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&result.status_class()),
                html_escape(parameter),
                html_escape(&display_field(&result.value)),
                html_escape(&display_field(&result.reference_range)),
                html_escape(&display_field(&result.unit)),
                html_escape(&result.status),
            )
        })
        .collect()
}

/// Download trigger placed at the top of the report view
pub fn download_action(report: &Report) -> String {
    match Download::from_report(report) {
        Ok(download) => format!(
            "<div class=\"report-actions\">\
             <a id=\"downloadReportBtn\" class=\"download-btn\" href=\"{}\" download=\"{}\">\
             Download Report (JSON)</a></div>\n",
            html_escape(&download.data_uri()),
            html_escape(&download.file_name)
        ),
        Err(e) => {
            warn!(error = %e, "could not serialize report for download");
            String::new()
        }
    }
}

fn table_section(title: &str, head: &str, body: &str) -> String {
    format!(
        "<div class=\"table-section\"><h3>{}</h3><div class=\"table-container\">\
         <table class=\"results-table\">{}<tbody>\n{}</tbody></table></div></div>\n",
        html_escape(title),
        head,
        body
    )
}

/// Complete report view: download trigger plus the three tables
pub fn report_view(report: &Report) -> String {
    let mut html = download_action(report);
    html.push_str("<div class=\"report-tables\">\n");

    html.push_str(&table_section(
        "Patient Information",
        "",
        &patient_info_rows(&report.patient_info),
    ));

    let mut lab_rows = label_row(
        "Test Name",
        report
            .test_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(NOT_AVAILABLE),
    );
    lab_rows.push_str(&lab_info_rows(&report.lab_info));
    html.push_str(&table_section("Laboratory Information", "", &lab_rows));

    let head = format!(
        "<thead><tr>{}</tr></thead>",
        RESULT_COLUMNS
            .iter()
            .map(|c| format!("<th>{}</th>", c))
            .collect::<String>()
    );
    html.push_str(&table_section("Test Results", &head, &result_rows(&report.lab_results)));

    html.push_str("</div>\n");
    html
}
