//! Text helpers shared by the renderers

use serde_json::Value;

/// Placeholder for missing values
pub const NOT_AVAILABLE: &str = "N/A";

/// Escape text for use in HTML element content and quoted attributes
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn a snake_case key into a Title Case label
pub fn format_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a JSON scalar as plain text; null and blank strings become "N/A"
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(s) if s.trim().is_empty() => NOT_AVAILABLE.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => NOT_AVAILABLE.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        // Only reached below the one level of flattening
        Value::Object(_) => value.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}

/// [`display_value`] for a field the backend may have left out
pub fn display_field(value: &Option<Value>) -> String {
    value
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), display_value)
}

/// Lowercased file stem used for plot images: each whitespace run becomes
/// one `_`, including runs at either end
pub fn normalize_parameter_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    stem
}
