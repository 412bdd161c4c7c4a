use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Canonical transaction fields, usable as output columns.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionColumn {
    TransactionId,
    CustomerName,
    PurchaseDate,
    TotalAmount,
    Status
}

impl TransactionColumn {
    pub const ALL: &'static [TransactionColumn] = &[
        TransactionColumn::TransactionId,
        TransactionColumn::CustomerName,
        TransactionColumn::PurchaseDate,
        TransactionColumn::TotalAmount,
        TransactionColumn::Status
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TransactionColumn::TransactionId => "transaction_id",
            TransactionColumn::CustomerName => "customer_name",
            TransactionColumn::PurchaseDate => "purchase_date",
            TransactionColumn::TotalAmount => "total_amount",
            TransactionColumn::Status => "status"
        }
    }
}

/// Canonical line-item fields, usable as output columns.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DetailColumn {
    DetailsId,
    TransactionId,
    Item,
    Quantity,
    Price
}

impl DetailColumn {
    pub const ALL: &'static [DetailColumn] = &[
        DetailColumn::DetailsId,
        DetailColumn::TransactionId,
        DetailColumn::Item,
        DetailColumn::Quantity,
        DetailColumn::Price
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DetailColumn::DetailsId => "details_id",
            DetailColumn::TransactionId => "transaction_id",
            DetailColumn::Item => "item",
            DetailColumn::Quantity => "quantity",
            DetailColumn::Price => "price"
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct UnknownColumn;

impl FromStr for TransactionColumn {
    type Err = UnknownColumn;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|column| column.name() == name).ok_or(UnknownColumn)
    }
}

impl FromStr for DetailColumn {
    type Err = UnknownColumn;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|column| column.name() == name).ok_or(UnknownColumn)
    }
}

impl Display for TransactionColumn {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl Display for DetailColumn {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
