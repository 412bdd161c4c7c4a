use super::{DedupKey, DedupStore};
use crate::models::Transaction;
use crate::types::{Money, TransactionId};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

fn create_transaction(transaction_id: TransactionId, customer_name: &str, date: (i32, u32, u32), amount: &str, status: &str) -> Result<Transaction> {
    Ok(Transaction {
        transaction_id,
        customer_name: customer_name.to_string(),
        purchase_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).ok_or_else(|| anyhow!("invalid test date"))?,
        total_amount: Money::from_str(amount)?,
        status: status.to_string()
    })
}

#[test]
fn test_store_reports_recorded_transactions() -> Result<()> {
    let mut store = DedupStore::new();
    let transaction = create_transaction(1, "Joe Doe", (2024, 1, 10), "1200.50", "Completed")?;

    assert!(!store.seen(&transaction));

    store.record(&transaction);

    assert!(store.seen(&transaction));

    Ok(())
}

#[test]
fn test_key_ignores_identifier_and_customer_name() -> Result<()> {
    // Known quirk: distinct orders sharing date, amount and status collapse into one
    let mut store = DedupStore::new();
    let first = create_transaction(1, "Joe Doe", (2024, 1, 10), "1200.50", "Completed")?;
    let second = create_transaction(2, "Jane Smith", (2024, 1, 10), "1.200,5", "Completed")?;

    store.record(&first);

    assert!(store.seen(&second));
    assert_eq!(DedupKey::from(&first), DedupKey::from(&second));

    Ok(())
}

#[test]
fn test_key_distinguishes_date_amount_and_status() -> Result<()> {
    let mut store = DedupStore::new();
    store.record(&create_transaction(1, "A", (2024, 1, 10), "10", "Completed")?);

    assert!(!store.seen(&create_transaction(1, "A", (2024, 1, 11), "10", "Completed")?));
    assert!(!store.seen(&create_transaction(1, "A", (2024, 1, 10), "10.01", "Completed")?));
    assert!(!store.seen(&create_transaction(1, "A", (2024, 1, 10), "10", "Pending")?));

    Ok(())
}

#[test]
fn test_new_store_has_seen_nothing() -> Result<()> {
    let store = DedupStore::new();

    assert!(!store.seen(&create_transaction(0, "Unknown", (2024, 1, 1), "0", "Unknown")?));

    Ok(())
}
