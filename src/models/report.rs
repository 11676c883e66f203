//! Report model
//!
//! The structured lab report returned by the backend after an upload.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Status value that marks a lab result as within its reference range
pub const STATUS_NORMAL: &str = "Normal";

/// Parsed lab report
///
/// Mappings keep the backend's key order so tables render in the order the
/// report lists them. Fields this client doesn't know about are carried in
/// `extra` so the report goes back to the backend (and into downloads)
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub patient_info: Map<String, Value>,
    #[serde(default)]
    pub lab_info: Map<String, Value>,
    /// `None` when the key is absent, `Some(None)` when it was sent as null
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub test_name: Option<Option<String>>,
    #[serde(default)]
    pub lab_results: IndexMap<String, LabResult>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single lab parameter result
///
/// `None` marks a key the backend left out; an explicit null is kept as
/// `Some(Value::Null)` so it is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_range: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<Value>,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LabResult {
    /// Create a result with string fields, mostly for building reports in code
    pub fn new(value: impl Into<Value>, reference_range: &str, unit: &str, status: &str) -> Self {
        Self {
            value: Some(value.into()),
            reference_range: Some(Value::String(reference_range.to_string())),
            unit: Some(Value::String(unit.to_string())),
            status: status.to_string(),
            extra: Map::new(),
        }
    }

    /// Anything other than an exact "Normal" counts as abnormal
    pub fn is_abnormal(&self) -> bool {
        self.status != STATUS_NORMAL
    }

    /// CSS class for the result row
    pub fn status_class(&self) -> String {
        format!("status-{}", self.status.to_lowercase())
    }
}

/// A key that is present deserializes to `Some`, even when its value is null
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Report {
    pub fn test_name(&self) -> Option<&str> {
        self.test_name.as_ref().and_then(|name| name.as_deref())
    }

    pub fn set_test_name(&mut self, name: impl Into<String>) {
        self.test_name = Some(Some(name.into()));
    }

    /// Abnormal results in report order
    pub fn abnormal_results(&self) -> impl Iterator<Item = (&String, &LabResult)> {
        self.lab_results.iter().filter(|(_, r)| r.is_abnormal())
    }

    pub fn abnormal_count(&self) -> usize {
        self.abnormal_results().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> Value {
        json!({
            "patient_info": {"name": "Jane Doe", "age": 42, "sample_id": ""},
            "lab_info": {
                "lab_name": "City Lab",
                "lab_contact": {"phone": "555-0100", "email": "lab@example.com"}
            },
            "test_name": "Complete Blood Count",
            "lab_results": {
                "Hemoglobin": {"value": 11.2, "reference_range": "12-16", "unit": "g/dL", "status": "Low"},
                "WBC Count": {"value": "7.1", "reference_range": "4-11", "unit": "10^3/uL", "status": "Normal"},
                "Platelets": {"value": 480, "reference_range": "150-450", "unit": "10^3/uL", "status": "High"}
            },
            "report_date": "2024-03-01"
        })
    }

    #[test]
    fn test_deserialize_keeps_order_and_extras() {
        let report: Report = serde_json::from_value(sample_json()).unwrap();
        let keys: Vec<&str> = report.lab_results.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Hemoglobin", "WBC Count", "Platelets"]);
        assert_eq!(report.extra.get("report_date"), Some(&json!("2024-03-01")));
        assert_eq!(report.test_name(), Some("Complete Blood Count"));
    }

    #[test]
    fn test_serialize_is_lossless() {
        let original = sample_json();
        let report: Report = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&report).unwrap(), original);
    }

    #[test]
    fn test_nulls_survive_serialization() {
        let original = json!({
            "patient_info": {"name": "Jane"},
            "lab_info": {},
            "test_name": null,
            "lab_results": {
                "Hemoglobin": {"value": 11.2, "reference_range": "12-16", "unit": null, "status": "Low"},
                "Ferritin": {"status": "Normal"}
            }
        });
        let report: Report = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(report.test_name, Some(None));
        assert_eq!(report.test_name(), None);
        assert_eq!(report.lab_results["Hemoglobin"].unit, Some(Value::Null));
        assert_eq!(report.lab_results["Ferritin"].unit, None);

        assert_eq!(serde_json::to_value(&report).unwrap(), original);
    }

    #[test]
    fn test_status_is_required() {
        let result: Result<LabResult, _> =
            serde_json::from_value(json!({"value": 1, "unit": "mg"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_abnormal_results() {
        let report: Report = serde_json::from_value(sample_json()).unwrap();
        let names: Vec<&str> = report.abnormal_results().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Hemoglobin", "Platelets"]);
        assert_eq!(report.abnormal_count(), 2);
    }

    #[test]
    fn test_normal_is_case_sensitive() {
        assert!(!LabResult::new(5, "1-10", "mg", "Normal").is_abnormal());
        assert!(LabResult::new(5, "1-10", "mg", "normal").is_abnormal());
        assert!(LabResult::new(5, "1-10", "mg", "Borderline").is_abnormal());
    }

    #[test]
    fn test_status_class() {
        assert_eq!(LabResult::new(1, "", "", "High").status_class(), "status-high");
        assert_eq!(LabResult::new(1, "", "", "Normal").status_class(), "status-normal");
    }
}
