use crate::collection::model::{Field, FieldType};
use regex::Regex;

/// One-pass field classifier: looks at the first data row and guesses a type
/// per column. Numbers without a decimal point become integers, numbers with
/// one become floats, values mentioning true/false become booleans, anything
/// else stays a string.
pub struct FieldSniffer {
    numeric: Regex,
}

impl FieldSniffer {
    pub fn new() -> Self {
        Self {
            numeric: Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$")
                .expect("numeric pattern is valid"),
        }
    }

    pub fn classify(&self, value: &str) -> FieldType {
        let trimmed = value.trim();
        if self.numeric.is_match(trimmed) {
            if trimmed.contains('.') {
                FieldType::Float
            } else {
                FieldType::Integer
            }
        } else {
            let lower = trimmed.to_lowercase();
            if lower.contains("true") || lower.contains("false") {
                FieldType::Boolean
            } else {
                FieldType::String
            }
        }
    }

    /// Builds a field list from a header row and the first data row. Columns
    /// beyond the header get empty names for the user to fill in.
    pub fn infer_fields(&self, header: &[String], first_row: &[String]) -> Vec<Field> {
        first_row
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let name = header.get(index).cloned().unwrap_or_default();
                Field::new(name, self.classify(value))
            })
            .collect()
    }
}

impl Default for FieldSniffer {
    fn default() -> Self {
        Self::new()
    }
}
