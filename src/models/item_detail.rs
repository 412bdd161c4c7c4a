use std::fmt::Display;

use serde_json::{Map, Value};
use tracing::warn;

use crate::config::DetailAliases;
use crate::fields::{self, resolve, unwrap_nested, FieldError, DEFAULT_ITEM_NAME, DEFAULT_QUANTITY};
use crate::models::DetailColumn;
use crate::types::{DetailsId, Money, Quantity, TransactionId};

/// A normalized line item. Every field problem degrades to the field default.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ItemDetail {
    pub details_id: DetailsId,
    pub transaction_id: TransactionId,
    pub item: String,
    pub quantity: Quantity,
    pub price: Money
}

impl ItemDetail {
    /// Library entry point for detail records read on their own, outside any
    /// transaction's item list. Both identifiers come from the raw object and an
    /// unusable one is logged and replaced by `0`. The pipeline uses `build_for`.
    pub fn build(record: &Map<String, Value>, aliases: &DetailAliases) -> Self {
        let details_id = recover(fields::identifier(
            "details_id",
            unwrap_nested(&aliases.details_id, resolve("details_id", &aliases.details_id, record))
        ), 0);

        let transaction_id = recover(fields::identifier(
            "transaction_id",
            unwrap_nested(&aliases.transaction_id, resolve("transaction_id", &aliases.transaction_id, record))
        ), 0);

        Self::build_for(record, aliases, details_id, transaction_id)
    }

    //NOTE: identifiers are assigned by the caller and never read from the raw object
    pub fn build_for(record: &Map<String, Value>, aliases: &DetailAliases, details_id: DetailsId, transaction_id: TransactionId) -> Self {
        let item = recover(
            fields::item_name(unwrap_nested(&aliases.item, resolve("item", &aliases.item, record))),
            DEFAULT_ITEM_NAME.to_string()
        );

        let quantity = recover(
            fields::quantity(unwrap_nested(&aliases.quantity, resolve("quantity", &aliases.quantity, record))),
            DEFAULT_QUANTITY
        );

        let price = recover(
            fields::money("price", unwrap_nested(&aliases.price, resolve("price", &aliases.price, record))),
            Money::zero()
        );

        Self { details_id, transaction_id, item, quantity, price }
    }

    pub fn value(&self, column: DetailColumn) -> String {
        match column {
            DetailColumn::DetailsId => self.details_id.to_string(),
            DetailColumn::TransactionId => self.transaction_id.to_string(),
            DetailColumn::Item => self.item.clone(),
            DetailColumn::Quantity => self.quantity.to_string(),
            DetailColumn::Price => self.price.to_string()
        }
    }
}

fn recover<T: Display>(result: Result<T, FieldError>, default: T) -> T {
    result.unwrap_or_else(|error| {
        warn!("{error}, defaulting to '{default}'");
        default
    })
}
