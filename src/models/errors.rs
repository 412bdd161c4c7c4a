use serde_json::Value;
use thiserror::Error;

use crate::fields::{raw_text, FieldError};

const RAW_PREVIEW_LIMIT: usize = 80;

/// A fatal problem with an input record. The record and all of its line items
/// are dropped.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Field(#[from] FieldError),
    #[error("Record is not an object: {raw}")]
    NotAnObject {
        raw: String
    },
    #[error("Line items under [{field}] must be a list of objects: {raw}")]
    MalformedItems {
        field: String,
        raw: String
    }
}

impl ValidationError {
    pub fn not_an_object(raw: &Value) -> Self {
        Self::NotAnObject { raw: preview(raw) }
    }

    pub fn malformed_items(field: &str, raw: &Value) -> Self {
        Self::MalformedItems { field: field.to_string(), raw: preview(raw) }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Field(error) => Some(error.field()),
            Self::NotAnObject { .. } => None,
            Self::MalformedItems { field, .. } => Some(field.as_str())
        }
    }
}

fn preview(raw: &Value) -> String {
    let text = raw_text(raw);

    match text.char_indices().nth(RAW_PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text
    }
}
