mod errors;
mod normalizers;
mod resolver;

pub use errors::{raw_text, FieldError};
pub use normalizers::{
    canonical_status, customer_name, identifier, item_name, money, purchase_date, quantity, status,
    DEFAULT_CUSTOMER_NAME, DEFAULT_ITEM_NAME, DEFAULT_QUANTITY, DEFAULT_STATUS
};
pub use resolver::{resolve, unwrap_nested};
