//! Plot gallery
//!
//! One card per abnormal lab result, pointing at the plot image the backend
//! generated for it. Images that fail to load swap to a fixed placeholder.

use crate::models::Report;
use crate::render::text::{html_escape, normalize_parameter_name};

pub const PLOTS_PATH: &str = "/static/plots";
pub const PLOT_FALLBACK_PATH: &str = "/static/images/plot-error.png";
pub const NO_ABNORMAL_MESSAGE: &str = "No abnormal parameters to display";

/// Image reference for one abnormal parameter
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRef {
    pub parameter: String,
    pub status: String,
    pub src: String,
    pub fallback_src: String,
}

/// Abnormal parameters of the report, in report order
///
/// `asset_base` is prepended to the static paths; pass "" when the markup is
/// served by the backend itself.
pub fn plot_refs(report: &Report, asset_base: &str) -> Vec<PlotRef> {
    let base = asset_base.trim_end_matches('/');
    report
        .abnormal_results()
        .map(|(name, result)| PlotRef {
            parameter: name.clone(),
            status: result.status.clone(),
            src: format!("{}{}/{}.png", base, PLOTS_PATH, normalize_parameter_name(name)),
            fallback_src: format!("{}{}", base, PLOT_FALLBACK_PATH),
        })
        .collect()
}

fn plot_card(plot: &PlotRef) -> String {
    format!(
        "<div class=\"plot-card\"><h4>{name} ({status})</h4>\
         <img src=\"{src}\" alt=\"{name} Plot\" class=\"result-plot\" \
         onerror=\"this.onerror=null; this.src='{fallback}';\"></div>\n",
        name = html_escape(&plot.parameter),
        status = html_escape(&plot.status),
        src = html_escape(&plot.src),
        fallback = html_escape(&plot.fallback_src),
    )
}

/// Gallery markup, or a single placeholder when nothing is abnormal
pub fn plots_view(report: &Report, asset_base: &str) -> String {
    let plots = plot_refs(report, asset_base);
    let inner = if plots.is_empty() {
        format!("<div class=\"plot-error\">{}</div>\n", NO_ABNORMAL_MESSAGE)
    } else {
        plots.iter().map(plot_card).collect()
    };
    format!("<div class=\"plots-container\">\n{}</div>\n", inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabResult;

    fn report(results: &[(&str, &str)]) -> Report {
        let mut report = Report::default();
        for (name, status) in results {
            report
                .lab_results
                .insert(name.to_string(), LabResult::new(1, "0-2", "mg/dL", status));
        }
        report
    }

    #[test]
    fn test_empty_results_render_placeholder() {
        let html = plots_view(&Report::default(), "");
        assert!(html.contains(NO_ABNORMAL_MESSAGE));
        assert_eq!(html.matches("<img").count(), 0);
    }

    #[test]
    fn test_all_normal_renders_placeholder() {
        let html = plots_view(&report(&[("Glucose", "Normal"), ("Sodium", "Normal")]), "");
        assert!(html.contains(NO_ABNORMAL_MESSAGE));
        assert_eq!(html.matches("<img").count(), 0);
    }

    #[test]
    fn test_only_abnormal_results_are_plotted() {
        let r = report(&[("Glucose", "Normal"), ("WBC Count", "High"), ("Iron", "Borderline")]);
        let plots = plot_refs(&r, "");
        let names: Vec<&str> = plots.iter().map(|p| p.parameter.as_str()).collect();
        assert_eq!(names, vec!["WBC Count", "Iron"]);
        assert_eq!(plots[0].src, "/static/plots/wbc_count.png");
        assert_eq!(plots[0].fallback_src, "/static/images/plot-error.png");

        let html = plots_view(&r, "");
        assert_eq!(html.matches("<img").count(), 2);
        assert!(!html.contains(NO_ABNORMAL_MESSAGE));
        assert!(html.contains("<h4>WBC Count (High)</h4>"));
        assert!(html.contains("this.src='/static/images/plot-error.png'"));
    }

    #[test]
    fn test_padded_name_keeps_edge_underscores() {
        let plots = plot_refs(&report(&[(" LDL Chol ", "High")]), "");
        assert_eq!(plots[0].src, "/static/plots/_ldl_chol_.png");
    }

    #[test]
    fn test_asset_base_prefix() {
        let plots = plot_refs(&report(&[("LDL", "High")]), "http://localhost:5000/");
        assert_eq!(plots[0].src, "http://localhost:5000/static/plots/ldl.png");
        assert_eq!(
            plots[0].fallback_src,
            "http://localhost:5000/static/images/plot-error.png"
        );
    }
}
