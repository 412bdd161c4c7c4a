//! One normalizer per canonical field. Absent or `null` input maps to the
//! field default without error.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::config::StatusMapping;
use crate::fields::errors::{raw_text, FieldError};
use crate::types::{Money, Quantity, TransactionId};

pub const DEFAULT_CUSTOMER_NAME: &str = "Unknown";
pub const DEFAULT_STATUS: &str = "Unknown";
pub const DEFAULT_ITEM_NAME: &str = "Unknown Item";
pub const DEFAULT_QUANTITY: Quantity = 1;

/// Digits of a text identifier (`"TX-011"` becomes `11`) or a non-negative
/// integral number. Absent input yields `0`.
pub fn identifier(field: &str, value: Option<&Value>) -> Result<TransactionId, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(raw @ Value::String(text)) => {
            let digits: String = text.chars().filter(char::is_ascii_digit).collect();

            if digits.is_empty() {
                return Err(FieldError::invalid_identifier(field, raw));
            }

            //NOTE: only digits remain, so the parse can fail on overflow alone
            digits.parse().map_err(|_| FieldError::identifier_overflow(field, raw))
        }
        Some(raw @ Value::Number(number)) => number.as_u64()
            .map(TransactionId::from)
            .or_else(|| integral(number.as_f64()).and_then(|value| TransactionId::try_from(value).ok()))
            .ok_or_else(|| FieldError::invalid_identifier(field, raw)),
        Some(other) => Err(FieldError::unsupported_type(field, other))
    }
}

/// Display name with whitespace runs collapsed. An object is composed from its
/// `first_name` and `last_name` parts, anything else is taken as text.
pub fn customer_name(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => DEFAULT_CUSTOMER_NAME.to_string(),
        Some(Value::Object(parts)) => {
            let first = name_part(parts, "first_name");
            let last = name_part(parts, "last_name");

            collapse_whitespace(&format!("{first} {last}"))
        }
        Some(other) => collapse_whitespace(&raw_text(other))
    }
}

pub fn purchase_date(value: Option<&Value>, formats: &[String], today: NaiveDate) -> Result<NaiveDate, FieldError> {
    let raw = match value {
        None | Some(Value::Null) => return Ok(today),
        Some(raw) => raw
    };

    let text = scalar_text(raw)
        .ok_or_else(|| FieldError::unsupported_type("purchase_date", raw))?;
    let text = text.trim();

    formats.iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| FieldError::invalid_date("purchase_date", raw))
}

pub fn money(field: &str, value: Option<&Value>) -> Result<Money, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(Money::zero()),
        Some(raw) => Money::from_json(raw)
            .map_err(|error| FieldError::invalid_amount(field, raw, error))
    }
}

pub fn status(value: Option<&Value>, mapping: &StatusMapping) -> String {
    match value {
        None | Some(Value::Null) => DEFAULT_STATUS.to_string(),
        Some(raw) => canonical_status(&raw_text(raw), mapping)
    }
}

/// The first canonical status listing the trimmed raw value as a variant, or
/// the trimmed value itself.
pub fn canonical_status(raw: &str, mapping: &StatusMapping) -> String {
    let trimmed = raw.trim();

    mapping.entries()
        .find(|(_, variants)| variants.iter().any(|variant| variant == trimmed))
        .map(|(canonical, _)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

pub fn item_name(value: Option<&Value>) -> Result<String, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(DEFAULT_ITEM_NAME.to_string()),
        Some(Value::String(text)) => Ok(text.trim().to_string()),
        Some(other) => Err(FieldError::unsupported_type("item", other))
    }
}

/// Whole numbers, integral text, or fractional numbers truncated toward zero.
pub fn quantity(value: Option<&Value>) -> Result<Quantity, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(DEFAULT_QUANTITY),
        Some(raw @ Value::Number(number)) => number.as_i64()
            .or_else(|| truncated(number.as_f64()))
            .ok_or_else(|| FieldError::invalid_quantity("quantity", raw)),
        Some(raw @ Value::String(text)) => text.trim().parse()
            .map_err(|_| FieldError::invalid_quantity("quantity", raw)),
        Some(other) => Err(FieldError::unsupported_type("quantity", other))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None
    }
}

fn name_part(parts: &Map<String, Value>, key: &str) -> String {
    parts.get(key).and_then(scalar_text).unwrap_or_default()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn integral(value: Option<f64>) -> Option<i64> {
    value.filter(|value| value.fract() == 0.0).and_then(|value| truncated(Some(value)))
}

fn truncated(value: Option<f64>) -> Option<i64> {
    //NOTE: `as` saturates, so out-of-range values are rejected before the cast
    value.filter(|value| value.is_finite() && value.abs() < i64::MAX as f64)
        .map(|value| value.trunc() as i64)
}
