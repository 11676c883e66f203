//! Insights panel

use crate::models::{Insights, ParameterInsight};
use crate::render::text::html_escape;

fn list_section(title: &str, items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect();
    format!(
        "<div class=\"insight-section\"><h4>{}</h4><ul>{}</ul></div>\n",
        title, items
    )
}

fn insight_card(insight: &ParameterInsight) -> String {
    let mut html = format!(
        "<div class=\"insight-card\"><h3>{} ({})</h3>\n",
        html_escape(&insight.parameter),
        html_escape(&insight.status)
    );
    html.push_str(&list_section("Possible Health Effects", &insight.possible_disease));
    html.push_str(&list_section("Possible Causes", &insight.possible_causes));
    html.push_str(&list_section("Dietary Suggestions", &insight.dietary_suggestions));
    html.push_str(&list_section("Lifestyle Changes", &insight.lifestyle_changes));
    html.push_str(&format!(
        "<div class=\"insight-section\"><h4>Medical Advice</h4><p>{}</p></div>\n",
        html_escape(&insight.medical_advice)
    ));
    html.push_str("</div>\n");
    html
}

/// Insights markup; `None` when there is nothing to show
pub fn insights_view(insights: Option<&Insights>) -> Option<String> {
    let insights = insights?;
    let cards: String = insights.abnormal_parameters.iter().map(insight_card).collect();
    Some(format!("<div class=\"insights-container\">\n{}</div>\n", cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insight() -> ParameterInsight {
        ParameterInsight {
            parameter: "Hemoglobin".to_string(),
            status: "Low".to_string(),
            possible_disease: vec!["Anemia".to_string()],
            possible_causes: vec!["Iron deficiency".to_string(), "Blood loss".to_string()],
            dietary_suggestions: vec!["Leafy greens".to_string()],
            lifestyle_changes: vec!["Rest".to_string()],
            medical_advice: "See a physician".to_string(),
        }
    }

    #[test]
    fn test_absent_insights_render_nothing() {
        assert!(insights_view(None).is_none());
    }

    #[test]
    fn test_card_sections_in_fixed_order() {
        let insights = Insights {
            abnormal_parameters: vec![insight()],
        };
        let html = insights_view(Some(&insights)).unwrap();

        let order = [
            "Possible Health Effects",
            "Possible Causes",
            "Dietary Suggestions",
            "Lifestyle Changes",
            "Medical Advice",
        ];
        let positions: Vec<usize> = order.iter().map(|t| html.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(html.contains("<h3>Hemoglobin (Low)</h3>"));
        assert_eq!(html.matches("<li>").count(), 5);
        assert!(html.contains("<p>See a physician</p>"));
    }

    #[test]
    fn test_one_card_per_parameter() {
        let mut second = insight();
        second.parameter = "Platelets".to_string();
        let insights = Insights {
            abnormal_parameters: vec![insight(), second],
        };
        let html = insights_view(Some(&insights)).unwrap();
        assert_eq!(html.matches("class=\"insight-card\"").count(), 2);
    }
}
