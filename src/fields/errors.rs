use serde_json::Value;
use thiserror::Error;

use crate::types::MoneyError;

//NOTE: whether an error aborts a record or degrades to the field default is decided by the record builders
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Invalid identifier for field [{field}]: '{raw}'")]
    InvalidIdentifier {
        field: String,
        raw: String
    },
    #[error("Identifier for field [{field}] is too large: '{raw}'")]
    IdentifierOverflow {
        field: String,
        raw: String
    },
    #[error("Unable to parse '{raw}' as a date for field [{field}]")]
    InvalidDate {
        field: String,
        raw: String
    },
    #[error("Unable to parse '{raw}' as an amount for field [{field}]: {source}")]
    InvalidAmount {
        field: String,
        raw: String,
        source: MoneyError
    },
    #[error("Invalid quantity for field [{field}]: '{raw}'")]
    InvalidQuantity {
        field: String,
        raw: String
    },
    #[error("Unsupported value for field [{field}]: {raw}")]
    UnsupportedType {
        field: String,
        raw: String
    }
}

impl FieldError {
    pub fn invalid_identifier(field: &str, raw: &Value) -> Self {
        Self::InvalidIdentifier { field: field.to_string(), raw: raw_text(raw) }
    }

    pub fn identifier_overflow(field: &str, raw: &Value) -> Self {
        Self::IdentifierOverflow { field: field.to_string(), raw: raw_text(raw) }
    }

    pub fn invalid_date(field: &str, raw: &Value) -> Self {
        Self::InvalidDate { field: field.to_string(), raw: raw_text(raw) }
    }

    pub fn invalid_amount(field: &str, raw: &Value, source: MoneyError) -> Self {
        Self::InvalidAmount { field: field.to_string(), raw: raw_text(raw), source }
    }

    pub fn invalid_quantity(field: &str, raw: &Value) -> Self {
        Self::InvalidQuantity { field: field.to_string(), raw: raw_text(raw) }
    }

    pub fn unsupported_type(field: &str, raw: &Value) -> Self {
        Self::UnsupportedType { field: field.to_string(), raw: raw_text(raw) }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::InvalidIdentifier { field, .. }
            | Self::IdentifierOverflow { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::InvalidAmount { field, .. }
            | Self::InvalidQuantity { field, .. }
            | Self::UnsupportedType { field, .. } => field.as_str()
        }
    }
}

/// Strings are reported without their JSON quotes, everything else as JSON text.
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string()
    }
}
