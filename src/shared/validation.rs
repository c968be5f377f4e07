//! Validation Utilities

use validator::ValidationErrors;

/// Names of the fields that failed validation, sorted for stable output.
pub fn failed_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}
