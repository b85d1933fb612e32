//! Validation helpers for request boundaries.

use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Extracts the per-field messages so API clients see what failed.
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}
