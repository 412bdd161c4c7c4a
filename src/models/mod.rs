mod columns;
mod errors;
mod item_detail;
mod record;
#[cfg(test)]
mod tests;
mod transaction;

pub use columns::{DetailColumn, TransactionColumn, UnknownColumn};
pub use errors::ValidationError;
pub use item_detail::ItemDetail;
pub use record::ValidatedRecord;
pub use transaction::Transaction;
