use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Filter sentinel meaning "show every category".
pub const ALL_CATEGORIES: &str = "All";

macro_rules! string_id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id_newtype!(ItemId);
string_id_newtype!(TableId);

impl TableId {
    /// Numeric form sent as `table_number`; `None` unless the whole label is an integer.
    pub fn number(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Largest unit price, in cents, for which any `u32` quantity still fits in an `i64`.
pub const MAX_PRICE_CENTS: i64 = i64::MAX / u32::MAX as i64;

/// Currency amount in minor units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts a wire price into cents, rounding to the nearest cent.
    pub fn from_major(amount: f64) -> Result<Self, ModelError> {
        if !amount.is_finite() {
            return Err(ModelError::NonFinitePrice);
        }
        if amount < 0.0 {
            return Err(ModelError::NegativePrice(amount));
        }
        let cents = (amount * 100.0).round();
        if cents > MAX_PRICE_CENTS as f64 {
            return Err(ModelError::PriceOutOfRange(amount));
        }
        Ok(Self(cents as i64))
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Saturates instead of overflowing for amounts built with `from_cents`.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Two-decimal label with the given currency symbol, e.g. `$5.00`.
    pub fn label(self, symbol: &str) -> String {
        format!("{symbol}{self}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub is_veg: bool,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Counter,
    Online,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Counter => "counter",
            PaymentMethod::Online => "online",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "counter" => Ok(PaymentMethod::Counter),
            "online" => Ok(PaymentMethod::Online),
            _ => Err(ModelError::UnknownPaymentMethod(raw.to_string())),
        }
    }
}
