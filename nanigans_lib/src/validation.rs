use chrono::NaiveDate;

use crate::error::NanigansError;

pub const MAX_FIELD_NAME_LENGTH: usize = 100;
pub const MAX_VIEW_ID_LENGTH: usize = 64;

/// Validate an attribute or metric name: trimmed, non-empty, bounded, and
/// limited to ASCII alphanumerics plus `_`, `.` and `-`.
pub fn validate_field_name(input: &str) -> Result<String, NanigansError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NanigansError::InvalidInput(
            "field name is empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_FIELD_NAME_LENGTH {
        return Err(NanigansError::InvalidInput(format!(
            "field name exceeds maximum length of {} bytes",
            MAX_FIELD_NAME_LENGTH
        )));
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
    {
        return Err(NanigansError::InvalidInput(format!(
            "field name '{}' contains unsupported character {:?}",
            trimmed, bad
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a saved view id: non-empty after trimming, no control
/// characters or slashes, bounded length.
pub fn validate_view_id(input: &str) -> Result<String, NanigansError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NanigansError::InvalidInput("view id is empty".to_string()));
    }
    if trimmed.len() > MAX_VIEW_ID_LENGTH {
        return Err(NanigansError::InvalidInput(format!(
            "view id exceeds maximum length of {} bytes",
            MAX_VIEW_ID_LENGTH
        )));
    }
    if trimmed.chars().any(|c| c.is_control() || c == '/') {
        return Err(NanigansError::InvalidInput(format!(
            "view id '{}' contains unsupported characters",
            trimmed.escape_debug()
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a date in YYYY-MM-DD format.
pub fn validate_date(input: &str) -> Result<NaiveDate, NanigansError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        NanigansError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2024-06-01)",
            trimmed
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Field names --

    #[test]
    fn field_name_valid() {
        assert_eq!(validate_field_name("fbSpend").unwrap(), "fbSpend");
        assert_eq!(validate_field_name("budget_pool.id").unwrap(), "budget_pool.id");
    }

    #[test]
    fn field_name_trimmed() {
        assert_eq!(validate_field_name("  clicks ").unwrap(), "clicks");
    }

    #[test]
    fn field_name_empty() {
        assert!(validate_field_name("").is_err());
        assert!(validate_field_name("   ").is_err());
    }

    #[test]
    fn field_name_bad_chars() {
        assert!(validate_field_name("clicks&depth=9").is_err());
        assert!(validate_field_name("ad plan").is_err());
    }

    #[test]
    fn field_name_too_long() {
        let long = "a".repeat(MAX_FIELD_NAME_LENGTH + 1);
        assert!(validate_field_name(&long).is_err());
    }

    // -- View ids --

    #[test]
    fn view_id_valid() {
        assert_eq!(validate_view_id(" 12345 ").unwrap(), "12345");
    }

    #[test]
    fn view_id_rejected() {
        assert!(validate_view_id("").is_err());
        assert!(validate_view_id("12/34").is_err());
        assert!(validate_view_id("12\n34").is_err());
    }

    // -- Dates --

    #[test]
    fn date_valid() {
        let d = validate_date("2024-06-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn date_with_whitespace() {
        let d = validate_date("  2024-01-15  ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn date_invalid() {
        assert!(validate_date("06/01/2024").is_err());
        assert!(validate_date("2024-13-01").is_err());
        assert!(validate_date("2023-02-29").is_err());
    }
}
