use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::Transaction;
use crate::types::Money;

//NOTE: identifier and customer name are not part of the key
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DedupKey {
    purchase_date: NaiveDate,
    total_amount: Money,
    status: String
}

impl From<&Transaction> for DedupKey {
    fn from(transaction: &Transaction) -> Self {
        Self {
            purchase_date: transaction.purchase_date,
            total_amount: transaction.total_amount,
            status: transaction.status.clone()
        }
    }
}

#[derive(Debug, Default)]
pub struct DedupStore {
    seen: HashSet<DedupKey>
}

impl DedupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self, transaction: &Transaction) -> bool {
        self.seen.contains(&DedupKey::from(transaction))
    }

    pub fn record(&mut self, transaction: &Transaction) {
        self.seen.insert(DedupKey::from(transaction));
    }
}
