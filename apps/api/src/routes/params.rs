//! Lenient request-field parsing. Clients send ids and required strings as
//! plain (possibly null or empty) JSON/query values; failures become
//! `AppError::Validation` instead of extractor rejections.

use uuid::Uuid;

use crate::errors::AppError;

/// A missing, null or blank value is `None`; anything else must be a UUID.
pub fn optional_uuid(field: &str, raw: Option<&str>) -> Result<Option<Uuid>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(|_| AppError::Validation(format!("Invalid {field}: {s}"))),
    }
}

/// True when the value is missing, null or only whitespace.
pub fn is_blank(raw: Option<&str>) -> bool {
    raw.map_or(true, |s| s.trim().is_empty())
}
