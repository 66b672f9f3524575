use crate::error::{AppError, AppResult};

/// Reject blank or over-long required string fields
pub fn validate_required(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if value.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(())
}

/// Length check for optional string fields; absent values pass
pub fn validate_optional(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(value) = value {
        if value.chars().count() > max_len {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                field, max_len
            )));
        }
    }
    Ok(())
}
