use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use tempfile::tempdir;

const EXPECTED_TRANSACTIONS: &str = "\
transaction_id,customer_name,purchase_date,total_amount,status
11,Joe Doe,2024-01-10,1200.5,Completed
2,Jane Smith,2024-02-10,950.0,Completed
3,Alice Brown,2024-03-05,1250.5,Pending
6,Carol King,2024-04-02,1500.75,Shipped
";

const EXPECTED_DETAILS: &str = "\
details_id,transaction_id,item,quantity,price
1,11,Laptop,1,1200.5
2,2,Monitor,2,400.0
3,2,Cable,1,150.0
4,3,Desk,1,1250.5
5,6,Chair,4,0.0
";

#[test]
fn test_cli_normalizes_sample_records() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-normalizer");
    let output_dir = tempdir()?;
    let transactions_path = output_dir.path().join("transactions.csv");
    let details_path = output_dir.path().join("details.csv");

    let output = Command::new(binary_path)
        .arg("--config").arg(Path::new("samples").join("config.toml"))
        .arg("--transactions").arg(&transactions_path)
        .arg("--details").arg(&details_path)
        .arg(Path::new("samples").join("records.json"))
        .output()?;

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&transactions_path)?, EXPECTED_TRANSACTIONS);
    assert_eq!(fs::read_to_string(&details_path)?, EXPECTED_DETAILS);

    Ok(())
}

#[test]
fn test_cli_strict_mode_fails_when_records_are_rejected() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-normalizer");
    let output_dir = tempdir()?;
    let transactions_path = output_dir.path().join("transactions.csv");
    let details_path = output_dir.path().join("details.csv");

    let output = Command::new(binary_path)
        .arg("--config").arg(Path::new("samples").join("config.toml"))
        .arg("--transactions").arg(&transactions_path)
        .arg("--details").arg(&details_path)
        .arg("--strict")
        .arg(Path::new("samples").join("records.json"))
        .output()?;

    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(&transactions_path)?, EXPECTED_TRANSACTIONS);

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Invalid identifier for field [transaction_id]: 'abc'"));

    Ok(())
}

#[test]
fn test_cli_fails_for_missing_configuration() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-normalizer");

    let output = Command::new(binary_path)
        .arg("--config").arg("does-not-exist.toml")
        .arg(Path::new("samples").join("records.json"))
        .output()?;

    assert!(!output.status.success());

    Ok(())
}
