//! Insights model
//!
//! Per-parameter recommendations the backend attaches to an upload response.

use serde::{Deserialize, Serialize};

/// Insights for the abnormal parameters of a report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub abnormal_parameters: Vec<ParameterInsight>,
}

/// Recommendations for one abnormal parameter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterInsight {
    pub parameter: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub possible_disease: Vec<String>,
    #[serde(default)]
    pub possible_causes: Vec<String>,
    #[serde(default)]
    pub dietary_suggestions: Vec<String>,
    #[serde(default)]
    pub lifestyle_changes: Vec<String>,
    #[serde(default)]
    pub medical_advice: String,
}
