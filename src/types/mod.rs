mod errors;
mod money;

pub use errors::MoneyError;
pub use money::Money;

pub type TransactionId = u128;
pub type DetailsId = u128;
pub type Quantity = i64;
