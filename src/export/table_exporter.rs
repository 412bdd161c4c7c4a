use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, Writer, WriterBuilder};
use tracing::debug;

use crate::models::{DetailColumn, ItemDetail, Transaction, TransactionColumn};

/// Writes accepted transactions and their line items to two delimited tables.
/// Headers are written on construction, so an empty run still yields both.
pub struct TableExporter<W: Write> {
    transactions: Writer<W>,
    details: Writer<W>,
    transaction_columns: Vec<TransactionColumn>,
    detail_columns: Vec<DetailColumn>,
    transactions_written: usize,
    details_written: usize
}

impl TableExporter<File> {
    pub fn create(
        transaction_path: &Path,
        details_path: &Path,
        transaction_columns: Vec<TransactionColumn>,
        detail_columns: Vec<DetailColumn>
    ) -> Result<Self> {
        let transactions = create_file(transaction_path)?;
        let details = create_file(details_path)?;

        Self::new(transactions, details, transaction_columns, detail_columns)
    }
}

impl<W: Write> TableExporter<W> {
    pub fn new(transactions: W, details: W, transaction_columns: Vec<TransactionColumn>, detail_columns: Vec<DetailColumn>) -> Result<Self> {
        let mut exporter = Self {
            transactions: writer(transactions),
            details: writer(details),
            transaction_columns,
            detail_columns,
            transactions_written: 0,
            details_written: 0
        };

        exporter.transactions.write_record(exporter.transaction_columns.iter().map(TransactionColumn::name))
            .context("Failed to write transactions header")?;
        exporter.details.write_record(exporter.detail_columns.iter().map(DetailColumn::name))
            .context("Failed to write details header")?;

        Ok(exporter)
    }

    pub fn write_transaction(&mut self, transaction: &Transaction) -> Result<()> {
        self.transactions.write_record(self.transaction_columns.iter().map(|column| transaction.value(*column)))
            .with_context(|| format!("Failed to write transaction [{}]", transaction.transaction_id))?;

        self.transactions_written += 1;

        Ok(())
    }

    pub fn write_detail(&mut self, detail: &ItemDetail) -> Result<()> {
        self.details.write_record(self.detail_columns.iter().map(|column| detail.value(*column)))
            .with_context(|| format!("Failed to write details [{}] of transaction [{}]", detail.details_id, detail.transaction_id))?;

        self.details_written += 1;

        Ok(())
    }

    /// Writes a transaction row followed by all of its line-item rows.
    pub fn write(&mut self, transaction: &Transaction, details: &[ItemDetail]) -> Result<()> {
        self.write_transaction(transaction)?;

        for detail in details {
            self.write_detail(detail)?;
        }

        Ok(())
    }

    pub fn finish(self) -> Result<(W, W)> {
        debug!("Flushing {} transactions and {} details", self.transactions_written, self.details_written);

        let transactions = self.transactions.into_inner()
            .map_err(|error| error.into_error())
            .context("Failed to flush transactions table")?;
        let details = self.details.into_inner()
            .map_err(|error| error.into_error())
            .context("Failed to flush details table")?;

        Ok((transactions, details))
    }
}

fn writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory [{}]", parent.display()))?;
    }

    File::create(path).with_context(|| format!("Failed to create output file [{}]", path.display()))
}
