use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::config::Settings;
use crate::fields::resolve;
use crate::models::errors::ValidationError;
use crate::models::{ItemDetail, Transaction};
use crate::types::DetailsId;

/// One input object that passed validation: its transaction plus the raw line
/// items still waiting for their run-scoped identifiers.
#[derive(Debug, Clone)]
pub struct ValidatedRecord<'a> {
    pub transaction: Transaction,
    items: Vec<&'a Map<String, Value>>
}

impl<'a> ValidatedRecord<'a> {
    //NOTE: the whole object is validated before anything from it is emitted
    pub fn from_raw(raw: &'a Value, settings: &Settings, today: NaiveDate) -> Result<Self, ValidationError> {
        let record = raw.as_object().ok_or_else(|| ValidationError::not_an_object(raw))?;
        let transaction = Transaction::build(record, settings, today)?;
        let items = line_items(record, &settings.transaction_aliases.items)?;

        Ok(Self { transaction, items })
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn details(&self, settings: &Settings, mut next_id: impl FnMut() -> DetailsId) -> Vec<ItemDetail> {
        self.items.iter()
            .map(|item| ItemDetail::build_for(item, &settings.detail_aliases, next_id(), self.transaction.transaction_id))
            .collect()
    }
}

fn line_items<'a>(record: &'a Map<String, Value>, aliases: &[String]) -> Result<Vec<&'a Map<String, Value>>, ValidationError> {
    match resolve("items", aliases, record) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter()
            .map(|item| item.as_object().ok_or_else(|| ValidationError::malformed_items("items", item)))
            .collect(),
        Some(other) => Err(ValidationError::malformed_items("items", other))
    }
}
