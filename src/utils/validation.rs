// Validation utilities
// Author: Gabriel Demetrios Lafis

/// Expected columns that do not appear in `headers`, in expected order
pub fn missing_columns(headers: &[String], expected: &[&str]) -> Vec<String> {
    expected
        .iter()
        .filter(|column| !headers.iter().any(|header| header.as_str() == **column))
        .map(|column| column.to_string())
        .collect()
}
