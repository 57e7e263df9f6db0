//! Field checks shared by the public submission forms.

use crate::http_error::AppError;

pub const MAX_SHORT_FIELD: usize = 200;
pub const MAX_LONG_FIELD: usize = 5000;

/// Trims `value` and rejects it when empty or longer than `max_len` chars.
pub fn required(field: &str, value: &str, max_len: usize) -> Result<String, AppError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::bad_request("missing_field", format!("{} is required", field)));
    }
    if v.chars().count() > max_len {
        return Err(AppError::bad_request("field_too_long", format!("{} is too long", field)));
    }
    Ok(v.to_string())
}

/// Empty optional fields are stored as `None`.
pub fn optional(field: &str, value: Option<&str>, max_len: usize) -> Result<Option<String>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => required(field, v, max_len).map(Some),
        None => Ok(None),
    }
}

/// Requires a local part and a dotted domain; the result is lowercased.
pub fn email(value: &str) -> Result<String, AppError> {
    let v = required("email", value, MAX_SHORT_FIELD)?;
    match v.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') => {
            Ok(v.to_lowercase())
        }
        _ => Err(AppError::bad_request("invalid_email", "invalid email")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("name", "  Ana ", 10).unwrap(), "Ana");
        assert_eq!(required("name", "   ", 10).unwrap_err().code.as_deref(), Some("missing_field"));
        assert_eq!(required("name", "abcdef", 5).unwrap_err().code.as_deref(), Some("field_too_long"));
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional("phone", Some("  "), 10).unwrap(), None);
        assert_eq!(optional("phone", None, 10).unwrap(), None);
        assert_eq!(optional("phone", Some(" 555 "), 10).unwrap(), Some("555".to_string()));
    }

    #[test]
    fn email_shape() {
        assert_eq!(email(" Dancer@Studio.com ").unwrap(), "dancer@studio.com");
        for bad in ["", "nobody", "@studio.com", "a@studio", "rita@localhost", "a@.com"] {
            assert!(email(bad).is_err(), "{:?} accepted", bad);
        }
    }
}
