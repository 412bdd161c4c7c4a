use super::{DetailColumn, ItemDetail, Transaction, TransactionColumn, ValidatedRecord, ValidationError};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use crate::config::{sample_settings, Settings};
use crate::fields::FieldError;

fn object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("expected an object, got {other}"))
    }
}

fn today() -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 10, 15).ok_or_else(|| anyhow!("invalid test date"))
}

fn build(value: Value) -> Result<Transaction, ValidationError> {
    let settings = sample_settings();
    let record = match value {
        Value::Object(map) => map,
        other => return Err(ValidationError::not_an_object(&other))
    };

    Transaction::build(&record, &settings, today().expect("valid test date"))
}

fn row(transaction: &Transaction) -> Vec<String> {
    TransactionColumn::ALL.iter().map(|column| transaction.value(*column)).collect()
}

#[test]
fn test_transaction_normalizes_every_field() -> Result<()> {
    let transaction = build(json!({
        "transaction_id": 1,
        "customer_name": " John  Doe ",
        "purchase_date": "2024-01-10",
        "total_amount": "1,200.50€",
        "status": "Completed"
    }))?;

    assert_eq!(row(&transaction), vec!["1", "John Doe", "2024-01-10", "1200.5", "Completed"]);

    Ok(())
}

#[test]
fn test_transaction_resolves_aliases_and_composed_names() -> Result<()> {
    let transaction = build(json!({
        "id": "002",
        "client": {"first_name": "Jane", "last_name": "Smith"},
        "date": "10/02/24",
        "amount": "950.00",
        "state": "Paid"
    }))?;

    assert_eq!(row(&transaction), vec!["2", "Jane Smith", "2024-02-10", "950.0", "Completed"]);

    Ok(())
}

#[test]
fn test_transaction_reads_nested_buyer_name() -> Result<()> {
    let transaction = build(json!({
        "transaction_id": 1,
        "buyer": {"full_name": "Alice    Brown"},
        "purchase_date": "2024-01-10",
        "total_amount": "€1.500,75",
        "status": "Completed"
    }))?;

    assert_eq!(transaction.customer_name, "Alice Brown");
    assert_eq!(transaction.total_amount.to_string(), "1500.75");

    Ok(())
}

#[test]
fn test_transaction_defaults_missing_fields() -> Result<()> {
    let transaction = build(json!({}))?;

    assert_eq!(transaction.transaction_id, 0);
    assert_eq!(transaction.customer_name, "Unknown");
    assert_eq!(transaction.purchase_date, today()?);
    assert_eq!(transaction.total_amount.to_string(), "0.0");
    assert_eq!(transaction.status, "Unknown");

    Ok(())
}

#[test]
fn test_transaction_keeps_unmapped_status_verbatim() -> Result<()> {
    let transaction = build(json!({"id": 5, "status": "  On Hold "}))?;

    assert_eq!(transaction.status, "On Hold");

    Ok(())
}

#[test]
fn test_transaction_unwraps_amount_objects_through_aliases() -> Result<()> {
    let transaction = build(json!({"id": 5, "total": {"amount": "12,50", "currency": "EUR"}}))?;

    assert_eq!(transaction.total_amount.to_string(), "12.5");

    Ok(())
}

#[test]
fn test_transaction_rejects_unidentifiable_records() {
    let result = build(json!({"id": "abc", "total_amount": "10"}));

    assert!(matches!(result, Err(ValidationError::Field(FieldError::InvalidIdentifier { .. }))));
}

#[test]
fn test_transaction_rejects_unparseable_dates_and_amounts() {
    let bad_date = build(json!({"id": 1, "purchase_date": "yesterday"}));
    let bad_amount = build(json!({"id": 1, "total_amount": "free"}));

    assert!(matches!(&bad_date, Err(error) if error.field() == Some("purchase_date")));
    assert!(matches!(&bad_amount, Err(error) if error.field() == Some("total_amount")));
}

#[test]
fn test_item_detail_resolves_aliases_and_defaults() -> Result<()> {
    let settings = sample_settings();
    let raw = object(json!({"product": " Mouse ", "qty": "2", "unit_price": "25,00"}))?;
    let detail = ItemDetail::build_for(&raw, &settings.detail_aliases, 3, 11);

    assert_eq!(detail, ItemDetail {
        details_id: 3,
        transaction_id: 11,
        item: "Mouse".to_string(),
        quantity: 2,
        price: detail.price
    });
    assert_eq!(detail.value(DetailColumn::Price), "25.0");

    Ok(())
}

#[test]
fn test_item_detail_recovers_from_malformed_fields() -> Result<()> {
    let settings = sample_settings();
    let raw = object(json!({"item": 42, "quantity": "several", "price": "call us"}))?;
    let detail = ItemDetail::build_for(&raw, &settings.detail_aliases, 1, 1);

    assert_eq!(detail.item, "Unknown Item");
    assert_eq!(detail.quantity, 1);
    assert_eq!(detail.price.to_string(), "0.0");

    Ok(())
}

#[test]
fn test_item_detail_ignores_identifiers_in_nested_items() -> Result<()> {
    let settings = sample_settings();
    let raw = object(json!({"details_id": 99, "transaction_id": 98, "item": "Cable"}))?;
    let detail = ItemDetail::build_for(&raw, &settings.detail_aliases, 4, 12);

    assert_eq!((detail.details_id, detail.transaction_id), (4, 12));

    Ok(())
}

#[test]
fn test_standalone_item_detail_degrades_bad_identifiers_to_zero() -> Result<()> {
    let settings = sample_settings();

    let valid = object(json!({"details_id": 1, "transaction_id": 100, "item": "Laptop", "qty": 1, "price": 1300.50}))?;
    let detail = ItemDetail::build(&valid, &settings.detail_aliases);

    assert_eq!((detail.details_id, detail.transaction_id, detail.quantity), (1, 100, 1));
    assert_eq!(detail.price.to_string(), "1300.5");

    let invalid = object(json!({"detail_id": "n/a", "txn_id": "#7"}))?;
    let detail = ItemDetail::build(&invalid, &settings.detail_aliases);

    assert_eq!((detail.details_id, detail.transaction_id), (0, 7));

    Ok(())
}

#[test]
fn test_validated_record_collects_items_from_aliases() -> Result<()> {
    let settings = sample_settings();
    let raw = json!({"id": 8, "line_items": [{"item": "A"}, {"item": "B"}]});
    let record = ValidatedRecord::from_raw(&raw, &settings, today()?)?;

    let mut next = 0;
    let details = record.details(&settings, || { next += 1; next });

    assert_eq!(record.item_count(), 2);
    assert_eq!(details.iter().map(|detail| detail.details_id).collect::<Vec<_>>(), vec![1, 2]);
    assert!(details.iter().all(|detail| detail.transaction_id == 8));

    Ok(())
}

#[test]
fn test_validated_record_rejects_malformed_item_lists() -> Result<()> {
    let settings: Settings = sample_settings();
    let not_a_list = json!({"id": 1, "items": "Laptop"});
    let mixed = json!({"id": 1, "items": [{"item": "A"}, "B"]});

    assert!(matches!(ValidatedRecord::from_raw(&not_a_list, &settings, today()?), Err(ValidationError::MalformedItems { .. })));
    assert!(matches!(ValidatedRecord::from_raw(&mixed, &settings, today()?), Err(ValidationError::MalformedItems { .. })));

    Ok(())
}

#[test]
fn test_validated_record_rejects_non_objects() -> Result<()> {
    let settings = sample_settings();

    assert!(matches!(ValidatedRecord::from_raw(&json!([1, 2]), &settings, today()?), Err(ValidationError::NotAnObject { .. })));

    Ok(())
}
