use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use toml::Table;

use crate::config::errors::ConfigError;
use crate::config::source::ConfigSource;
use crate::models::{DetailColumn, TransactionColumn};

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_ITEMS_FIELD: &str = "items";
const DEFAULT_TRANSACTION_OUTPUT: &str = "transactions.csv";
const DEFAULT_DETAILS_OUTPUT: &str = "details.csv";

/// Candidate source keys for each canonical transaction field, in priority order.
#[derive(Debug, Clone, Default)]
pub struct TransactionAliases {
    pub transaction_id: Vec<String>,
    pub customer_name: Vec<String>,
    pub purchase_date: Vec<String>,
    pub total_amount: Vec<String>,
    pub status: Vec<String>,
    pub items: Vec<String>
}

/// Candidate source keys for each canonical line-item field, in priority order.
#[derive(Debug, Clone, Default)]
pub struct DetailAliases {
    pub details_id: Vec<String>,
    pub transaction_id: Vec<String>,
    pub item: Vec<String>,
    pub quantity: Vec<String>,
    pub price: Vec<String>
}

//NOTE: entry order is file order, the first canonical name listing a spelling wins
#[derive(Debug, Clone, Default)]
pub struct StatusMapping(Vec<(String, Vec<String>)>);

impl StatusMapping {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        StatusMapping(entries)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(canonical, variants)| (canonical.as_str(), variants.as_slice()))
    }

    fn from_table(table: Table) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(table.len());

        for (canonical, variants) in table {
            let variants: Vec<String> = variants.try_into()
                .map_err(|error| ConfigError::invalid_value(&format!("status_mapping.{canonical}"), error))?;

            entries.push((canonical, variants));
        }

        Ok(StatusMapping(entries))
    }
}

#[derive(Debug, Clone)]
pub struct FileSettings {
    pub input: Vec<PathBuf>,
    pub transaction_output: PathBuf,
    pub details_output: PathBuf
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            transaction_output: PathBuf::from(DEFAULT_TRANSACTION_OUTPUT),
            details_output: PathBuf::from(DEFAULT_DETAILS_OUTPUT)
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(PathBuf),
    Many(Vec<PathBuf>)
}

#[derive(Debug, Default, Deserialize)]
struct RawFileSettings {
    input: Option<OneOrMany>,
    transaction_output: Option<PathBuf>,
    details_output: Option<PathBuf>
}

impl From<RawFileSettings> for FileSettings {
    fn from(raw: RawFileSettings) -> Self {
        let defaults = FileSettings::default();

        Self {
            input: match raw.input {
                Some(OneOrMany::One(path)) => vec![path],
                Some(OneOrMany::Many(paths)) => paths,
                None => defaults.input
            },
            transaction_output: raw.transaction_output.unwrap_or(defaults.transaction_output),
            details_output: raw.details_output.unwrap_or(defaults.details_output)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub transaction_aliases: TransactionAliases,
    pub detail_aliases: DetailAliases,
    pub date_formats: Vec<String>,
    pub status_mapping: StatusMapping,
    pub transaction_columns: Vec<TransactionColumn>,
    pub detail_columns: Vec<DetailColumn>,
    pub files: FileSettings
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_source(&ConfigSource::load(path)?)
    }

    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        let transaction_aliases = TransactionAliases {
            transaction_id: source.get("id_fields", Vec::new())?,
            customer_name: source.get("name_fields", Vec::new())?,
            purchase_date: source.get("date_fields", Vec::new())?,
            total_amount: source.get("amount_fields", Vec::new())?,
            status: source.get("status_fields", Vec::new())?,
            items: source.get("items_fields", vec![DEFAULT_ITEMS_FIELD.to_string()])?
        };

        let detail_aliases = DetailAliases {
            details_id: source.get("details_id_fields", Vec::new())?,
            transaction_id: source.get("transaction_id_fields", Vec::new())?,
            item: source.get("item_fields", Vec::new())?,
            quantity: source.get("quantity_fields", Vec::new())?,
            price: source.get("price_fields", Vec::new())?
        };

        let date_formats: Vec<String> = source.get("date_formats", vec![DEFAULT_DATE_FORMAT.to_string()])?;
        let status_mapping = StatusMapping::from_table(source.get("status_mapping", Table::new())?)?;

        let transaction_columns = parse_columns(source, "transaction_fields", TransactionColumn::ALL)?;
        let detail_columns = parse_columns(source, "detail_fields", DetailColumn::ALL)?;

        let files = FileSettings::from(source.get("files", RawFileSettings::default())?);

        Ok(Self {
            transaction_aliases,
            detail_aliases,
            date_formats,
            status_mapping,
            transaction_columns,
            detail_columns,
            files
        })
    }
}

fn parse_columns<C>(source: &ConfigSource, key: &str, all: &[C]) -> Result<Vec<C>, ConfigError>
where
    C: FromStr + Copy
{
    if !source.contains(key) {
        return Ok(all.to_vec());
    }

    let names: Vec<String> = source.get(key, Vec::new())?;

    names.iter()
        .map(|name| C::from_str(name).map_err(|_| ConfigError::unknown_column(key, name)))
        .collect()
}
