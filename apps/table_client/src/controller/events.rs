//! UI events and user-facing error modeling for the terminal front-end.

use client_core::{ApiClientError, SessionError, SubmitError};

pub enum UiEvent {
    /// State changed; redraw the active view.
    Redraw,
    /// Informational line that does not change the view.
    Info(String),
    Error(UiError),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Session,
    Menu,
    Cart,
    Order,
    Input,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

fn api_category(err: &ApiClientError) -> UiErrorCategory {
    match err {
        ApiClientError::Transport { .. } => UiErrorCategory::Transport,
        ApiClientError::Status { status, .. } if status.is_server_error() => {
            UiErrorCategory::Transport
        }
        ApiClientError::Status { .. } | ApiClientError::InvalidMenu(_) => {
            UiErrorCategory::Validation
        }
        ApiClientError::Decode { .. } => UiErrorCategory::Unknown,
    }
}

impl UiError {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Input,
            message: message.into(),
        }
    }

    /// Session errors never involve the network.
    pub fn from_session(context: UiErrorContext, err: &SessionError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_submit(err: &SubmitError) -> Self {
        match err {
            SubmitError::Session(inner) => Self::from_session(UiErrorContext::Order, inner),
            SubmitError::Api(inner) => Self {
                category: api_category(inner),
                context: UiErrorContext::Order,
                message: "Error submitting order".to_string(),
            },
        }
    }

    /// Order failures interrupt the customer; everything else is an inline hint.
    pub fn is_blocking(&self) -> bool {
        self.context == UiErrorContext::Order
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use client_core::View;
    use reqwest::StatusCode;
    use shared::domain::ItemId;

    use super::*;

    #[test]
    fn order_transport_failure_is_blocking_generic_notice() {
        let err = SubmitError::Api(ApiClientError::Status {
            endpoint: "/api/order",
            status: StatusCode::BAD_GATEWAY,
            message: "upstream".to_string(),
        });
        let ui = UiError::from_submit(&err);
        assert!(ui.is_blocking());
        assert_eq!(ui.category(), UiErrorCategory::Transport);
        assert_eq!(ui.message(), "Error submitting order");
    }

    #[test]
    fn rejected_order_is_validation() {
        let err = SubmitError::Api(ApiClientError::Status {
            endpoint: "/api/order",
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "bad payload".to_string(),
        });
        assert_eq!(
            UiError::from_submit(&err).category(),
            UiErrorCategory::Validation
        );
    }

    #[test]
    fn session_errors_are_inline_hints() {
        let ui = UiError::from_session(
            UiErrorContext::Cart,
            &SessionError::ItemNotFound(ItemId::from("zz9")),
        );
        assert!(!ui.is_blocking());
        assert_eq!(ui.context(), UiErrorContext::Cart);
        assert_eq!(ui.message(), "item not found: zz9");

        let ui = UiError::from_session(
            UiErrorContext::Menu,
            &SessionError::InvalidView {
                action: "add items",
                view: View::Scan,
            },
        );
        assert_eq!(ui.message(), "cannot add items while the scan view is active");
    }
}
