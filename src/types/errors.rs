use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("Money error: {0}")]
    InvalidFormat(String),
    #[error("Money error: negative value '{0}'")]
    Negative(String),
    #[error("Money error: unsupported value {0}")]
    UnsupportedType(String)
}
