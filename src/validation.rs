//! Shared request validation.
//!
//! One validation layer consumed by every module entry point, so the form
//! contract and the persistence contract cannot drift apart. Payload structs
//! derive `validator::Validate`; the helpers here turn serde and validator
//! failures into the field-level 400 responses the admin console renders
//! inline.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::{Validate, ValidationError};

use agentpath_http::error::AppError;

/// Indian mobile numbers: 10 digits, first digit 6-9.
pub static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("mobile regex is valid"));

/// Decode a JSON body into a payload type, reporting malformed or
/// wrongly-typed fields as a validation error rather than a serde 422.
pub fn parse_payload<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| {
        AppError::validation(
            vec![json!({"error": e.to_string()})],
            "Invalid request payload",
        )
    })
}

/// Run the derived validators and map failures to field-level details.
pub fn check<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|errors| {
        let mut details = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                details.push(json!({"field": camel_case(field), "error": message}));
            }
        }
        AppError::validation(details, "Invalid form data")
    })
}

/// Names may contain letters and spaces only.
pub fn letters_and_spaces(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        Ok(())
    } else {
        let mut error = ValidationError::new("letters_and_spaces");
        error.message = Some("Name can only contain letters and spaces".into());
        Err(error)
    }
}

/// Required text fields must contain something besides whitespace.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("non_blank");
        error.message = Some("This field is required".into());
        Err(error)
    } else {
        Ok(())
    }
}

/// Rust field names are snake_case; the API speaks camelCase.
fn camel_case(field: &str) -> String {
    let mut parts = field.split('_');
    let mut out = String::with_capacity(field.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
