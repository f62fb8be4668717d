use reqwest::StatusCode;
use shared::{domain::ItemId, error::ModelError};
use thiserror::Error;

use crate::view::View;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please enter a table number")]
    EmptyTableNumber,
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("cart is empty")]
    EmptyCart,
    #[error("no table number set for this session")]
    NoTable,
    #[error("cannot {action} while the {view} view is active")]
    InvalidView { action: &'static str, view: View },
    #[error("an order submission is already in flight")]
    SubmissionInFlight,
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("transport failure calling {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned {status}: {message}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        message: String,
    },
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid menu: {0}")]
    InvalidMenu(#[from] ModelError),
}

/// Failure of a full order submission as seen by the view controller.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Error submitting order: {0}")]
    Api(#[from] ApiClientError),
}
