use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::config::Settings;
use crate::fields::{self, resolve, unwrap_nested};
use crate::models::errors::ValidationError;
use crate::models::TransactionColumn;
use crate::types::{Money, TransactionId};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A normalized transaction, ready for export.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub customer_name: String,
    pub purchase_date: NaiveDate,
    pub total_amount: Money,
    pub status: String
}

impl Transaction {
    //NOTE: only the identifier, date and amount can reject a record
    pub fn build(record: &Map<String, Value>, settings: &Settings, today: NaiveDate) -> Result<Self, ValidationError> {
        let aliases = &settings.transaction_aliases;

        let transaction_id = fields::identifier(
            "transaction_id",
            unwrap_nested(&aliases.transaction_id, resolve("transaction_id", &aliases.transaction_id, record))
        )?;

        let customer_name = fields::customer_name(
            unwrap_nested(&aliases.customer_name, resolve("customer_name", &aliases.customer_name, record))
        );

        let purchase_date = fields::purchase_date(
            unwrap_nested(&aliases.purchase_date, resolve("purchase_date", &aliases.purchase_date, record)),
            &settings.date_formats,
            today
        )?;

        let total_amount = fields::money(
            "total_amount",
            unwrap_nested(&aliases.total_amount, resolve("total_amount", &aliases.total_amount, record))
        )?;

        let status = fields::status(
            unwrap_nested(&aliases.status, resolve("status", &aliases.status, record)),
            &settings.status_mapping
        );

        Ok(Self { transaction_id, customer_name, purchase_date, total_amount, status })
    }

    pub fn value(&self, column: TransactionColumn) -> String {
        match column {
            TransactionColumn::TransactionId => self.transaction_id.to_string(),
            TransactionColumn::CustomerName => self.customer_name.clone(),
            TransactionColumn::PurchaseDate => self.purchase_date.format(DATE_FORMAT).to_string(),
            TransactionColumn::TotalAmount => self.total_amount.to_string(),
            TransactionColumn::Status => self.status.clone()
        }
    }
}
