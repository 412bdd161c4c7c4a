mod dedup_store;
#[cfg(test)]
mod tests;

pub use dedup_store::{DedupKey, DedupStore};
