use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::slice;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::export::{DetailsIdSequence, TableExporter};
use crate::models::{ValidatedRecord, ValidationError};
use crate::storage::DedupStore;

/// An input record that was dropped, with its position in the run.
#[derive(Debug)]
pub struct Rejection {
    pub document: usize,
    pub index: usize,
    pub error: ValidationError
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub accepted: usize,
    pub duplicates: usize,
    pub details: usize,
    pub rejected: Vec<Rejection>
}

//NOTE: built fresh per run so nothing carries over between runs
#[derive(Debug, Default)]
struct RunState {
    dedup: DedupStore,
    details_ids: DetailsIdSequence
}

//NOTE: records are handled strictly in input order, dedup and detail ids depend on it
pub struct Pipeline<'a> {
    settings: &'a Settings,
    processing_date: Option<NaiveDate>
}

impl<'a> Pipeline<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            processing_date: None
        }
    }

    /// Date used for records without a purchase date. Defaults to the local date
    /// at the start of each run.
    pub fn with_processing_date(mut self, date: NaiveDate) -> Self {
        self.processing_date = Some(date);
        self
    }

    //NOTE: every input is parsed before the outputs are created
    pub fn run_files(&self, inputs: &[PathBuf], transaction_path: &Path, details_path: &Path) -> Result<RunReport> {
        let documents = inputs.iter()
            .map(|path| read_document(path))
            .collect::<Result<Vec<_>>>()?;

        let mut exporter = TableExporter::create(
            transaction_path,
            details_path,
            self.settings.transaction_columns.clone(),
            self.settings.detail_columns.clone()
        )?;

        let report = self.run(&documents, &mut exporter)?;
        exporter.finish()?;

        Ok(report)
    }

    /// Each document is either an array of records or a single record. Invalid
    /// records land in the report, only output failures are returned.
    pub fn run<W: Write>(&self, documents: &[Value], exporter: &mut TableExporter<W>) -> Result<RunReport> {
        let today = self.processing_date.unwrap_or_else(|| Local::now().date_naive());
        let mut state = RunState::default();
        let mut report = RunReport::default();

        for (document, value) in documents.iter().enumerate() {
            for (index, raw) in records(value).iter().enumerate() {
                let record = match ValidatedRecord::from_raw(raw, self.settings, today) {
                    Ok(record) => record,
                    Err(error) => {
                        warn!("Rejected record [{document}:{index}]: {error}");
                        report.rejected.push(Rejection { document, index, error });
                        continue;
                    }
                };

                let transaction = &record.transaction;

                if state.dedup.seen(transaction) {
                    warn!(
                        "Duplicate transaction [{}] dropped with {} items",
                        transaction.transaction_id,
                        record.item_count()
                    );
                    report.duplicates += 1;
                    continue;
                }

                state.dedup.record(transaction);

                let details = record.details(self.settings, || state.details_ids.next_id());
                exporter.write(transaction, &details)?;

                debug!("Transaction [{}] exported with {} items", transaction.transaction_id, details.len());

                report.accepted += 1;
                report.details += details.len();
            }
        }

        Ok(report)
    }
}

fn records(document: &Value) -> &[Value] {
    match document {
        Value::Array(records) => records,
        other => slice::from_ref(other)
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input [{}]", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON input [{}]", path.display()))
}
