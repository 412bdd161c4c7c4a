use crate::types::errors::MoneyError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// A non-negative amount rounded half-up to two fractional digits.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Money(Decimal);

impl Money {
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    pub fn from_decimal(value: Decimal) -> Result<Self, MoneyError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::Negative(value.to_string()));
        }

        let rounded = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        Ok(Money(rounded.normalize()))
    }

    pub fn from_json(value: &Value) -> Result<Self, MoneyError> {
        match value {
            Value::String(text) => Money::from_str(text),
            Value::Number(number) => {
                //NOTE: rust_decimal holds at most 28 fractional digits, so exponents like `1e300` are rejected
                let text = number.to_string();
                let decimal = Decimal::from_str(&text)
                    .or_else(|_| Decimal::from_scientific(&text))
                    .map_err(|error| MoneyError::InvalidFormat(format!("'{text}': {error}")))?;

                Money::from_decimal(decimal)
            }
            other => Err(MoneyError::UnsupportedType(other.to_string()))
        }
    }
}

impl Display for Money {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        //NOTE: Whole amounts keep one fractional digit so `950` renders as `950.0`
        let value = self.0.normalize();

        if value.scale() == 0 {
            write!(formatter, "{value}.0")
        } else {
            write!(formatter, "{value}")
        }
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let cleaned: String = value.chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .collect();

        let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
            (Some(dot), Some(comma)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
            (Some(_), _) => cleaned.replace(',', ""),
            (None, Some(_)) => cleaned.replace(',', "."),
            (None, None) => cleaned
        };

        let (integer, fraction) = normalized.split_once('.').unwrap_or((normalized.as_str(), ""));

        if integer.is_empty() && fraction.is_empty() {
            return Err(MoneyError::InvalidFormat(format!("'{value}' has no digits")));
        }

        if fraction.contains('.') {
            return Err(MoneyError::InvalidFormat(format!("'{value}' has more than one decimal point")));
        }

        let integer = if integer.is_empty() { "0" } else { integer };
        let canonical = if fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{integer}.{fraction}")
        };

        let decimal = Decimal::from_str(&canonical)
            .map_err(|error| MoneyError::InvalidFormat(format!("'{value}': {error}")))?;

        Money::from_decimal(decimal)
    }
}
