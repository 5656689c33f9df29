use crate::error::{JoinError, JoinResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> JoinResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(JoinError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates a minimal email shape: text, '@', text, '.', text.
/// Returns the trimmed address on success.
pub fn email(value: &str, field: &str) -> JoinResult<String> {
    let trimmed = non_blank(value, field)?;
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(trimmed)
    } else {
        Err(JoinError::InvalidEmail {
            field: field.to_string(),
        })
    }
}

/// Validates an optional email (None and blank are valid, anything else must parse).
pub fn optional_email(value: Option<&str>, field: &str) -> JoinResult<Option<String>> {
    match trim_optional(value) {
        None => Ok(None),
        Some(v) => email(&v, field).map(Some),
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
