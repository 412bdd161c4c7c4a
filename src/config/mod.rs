mod errors;
mod settings;
mod source;

pub use errors::ConfigError;
pub use settings::{DetailAliases, FileSettings, Settings, StatusMapping, TransactionAliases};
pub use source::ConfigSource;

/// Settings parsed from the bundled sample configuration.
#[cfg(test)]
pub(crate) fn sample_settings() -> Settings {
    use std::str::FromStr;

    let source = ConfigSource::from_str(include_str!("../../samples/config.toml"))
        .unwrap_or_else(|error| panic!("sample configuration must parse: {error}"));

    Settings::from_source(&source)
        .unwrap_or_else(|error| panic!("sample configuration must be valid: {error}"))
}
