use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ItemId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Internal,
}

/// Error body a server may return alongside a non-success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Boundary validation failures when turning wire data into domain values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("price must not be negative: {0}")]
    NegativePrice(f64),
    #[error("price {0} is outside the supported range")]
    PriceOutOfRange(f64),
    #[error("price must be a finite number")]
    NonFinitePrice,
    #[error("menu item id must not be empty")]
    EmptyId,
    #[error("duplicate menu item id {0}")]
    DuplicateId(ItemId),
    #[error("unrecognized payment method '{0}'")]
    UnknownPaymentMethod(String),
}
