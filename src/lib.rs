//! Normalizes heterogeneous JSON transaction feeds into a transactions table
//! and a line-item details table.

pub mod config;
pub mod engine;
pub mod export;
pub mod fields;
pub mod models;
pub mod storage;
pub mod types;
