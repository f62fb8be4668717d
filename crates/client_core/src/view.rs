//! View controller: owns the session and moves between the four mutually
//! exclusive views.
//!
//! ```text
//! Scan ──start_session──▶ Menu ──show_checkout (cart not empty)──▶ Checkout
//!                          ▲                                          │
//!                          └──────────────show_menu───────────────────┤
//!                                                                     │
//!                                              submission accepted ───▶ Success
//! ```
//!
//! `Success` is terminal for the controller instance.

use std::fmt;

use shared::{
    domain::{ItemId, PaymentMethod},
    protocol::{OrderAck, OrderPayload},
};
use tracing::{debug, info, warn};

use crate::{
    error::{ApiClientError, SessionError, SubmitError},
    session::{EntryOrigin, Session},
    MenuProvider, OrderReceiver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Scan,
    Menu,
    Checkout,
    Success,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Scan => "scan",
            View::Menu => "menu",
            View::Checkout => "checkout",
            View::Success => "success",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Default)]
pub struct ViewController {
    session: Session,
    view: View,
    cart_affordance_visible: bool,
    payment_method: PaymentMethod,
    submitting: bool,
    last_ack: Option<OrderAck>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn cart_affordance_visible(&self) -> bool {
        self.cart_affordance_visible
    }

    pub fn table_indicator(&self) -> Option<&str> {
        self.session.table().map(|table| table.as_str())
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_ack(&self) -> Option<&OrderAck> {
        self.last_ack.as_ref()
    }

    fn require_view(&self, expected: View, action: &'static str) -> Result<(), SessionError> {
        if self.view == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidView {
                action,
                view: self.view,
            })
        }
    }

    fn switch_view(&mut self, next: View) {
        debug!(from = %self.view, to = %next, "switching view");
        self.view = next;
    }

    /// Scan → Menu. Rejected input leaves the controller on the scan view.
    pub fn start_session(&mut self, raw: &str, origin: EntryOrigin) -> Result<(), SessionError> {
        self.require_view(View::Scan, "start a session")?;
        self.session.start(raw, origin)?;
        self.switch_view(View::Menu);
        self.cart_affordance_visible = true;
        Ok(())
    }

    pub async fn load_menu<P>(&mut self, provider: &P) -> Result<usize, ApiClientError>
    where
        P: MenuProvider + ?Sized,
    {
        self.session.load_menu(provider).await
    }

    pub fn set_filter(&mut self, category: impl Into<String>) -> Result<(), SessionError> {
        self.require_view(View::Menu, "change the category filter")?;
        self.session.set_filter(category);
        Ok(())
    }

    /// Adds one unit and returns the line's new quantity.
    pub fn add_to_cart(&mut self, item_id: &ItemId) -> Result<u32, SessionError> {
        self.require_view(View::Menu, "add items")?;
        let line = self.session.add_to_cart(item_id)?;
        debug!(item_id = %line.item_id, quantity = line.quantity, "added to cart");
        Ok(line.quantity)
    }

    /// Menu → Checkout. Returns `false` and stays put when the cart is empty.
    pub fn show_checkout(&mut self) -> bool {
        if self.view != View::Menu || self.session.cart().is_empty() {
            return false;
        }
        self.switch_view(View::Checkout);
        self.cart_affordance_visible = false;
        true
    }

    /// Checkout → Menu.
    pub fn show_menu(&mut self) -> bool {
        if self.view != View::Checkout {
            return self.view == View::Menu;
        }
        self.switch_view(View::Menu);
        self.cart_affordance_visible = true;
        true
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Builds the outbound order and marks a submission as in flight.
    ///
    /// Front-ends that keep redrawing while the request runs call this and
    /// [`finish_submission`](Self::finish_submission) around their own await;
    /// the flag is what `render` reports as `submitting` in between.
    pub fn begin_submission(&mut self) -> Result<OrderPayload, SessionError> {
        self.require_view(View::Checkout, "submit an order")?;
        if self.submitting {
            return Err(SessionError::SubmissionInFlight);
        }
        let payload = self.session.build_order(self.payment_method)?;
        self.submitting = true;
        Ok(payload)
    }

    /// Applies the receiver's answer. Success clears the cart and enters the
    /// success view in one step; failure leaves cart and view untouched.
    pub fn finish_submission(
        &mut self,
        outcome: Result<OrderAck, ApiClientError>,
    ) -> Result<(), SubmitError> {
        self.submitting = false;
        match outcome {
            Ok(ack) => {
                self.session.clear_cart();
                self.switch_view(View::Success);
                info!(message = %ack.message, "order confirmed");
                self.last_ack = Some(ack);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "order submission failed; cart preserved");
                Err(err.into())
            }
        }
    }

    /// Begin, send and finish in one call. Dropping the returned future before
    /// it completes releases the in-flight flag and leaves the cart as it was.
    pub async fn submit_order<R>(
        &mut self,
        receiver: &R,
        payment_method: PaymentMethod,
    ) -> Result<(), SubmitError>
    where
        R: OrderReceiver + ?Sized,
    {
        self.select_payment_method(payment_method);
        let payload = self.begin_submission()?;
        let mut in_flight = InFlight(self);
        let outcome = receiver.submit_order(&payload).await;
        in_flight.0.finish_submission(outcome)
    }
}

struct InFlight<'a>(&'a mut ViewController);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.0.submitting {
            debug!("order submission abandoned before a reply");
            self.0.submitting = false;
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
