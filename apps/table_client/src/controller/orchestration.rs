//! Routes customer commands into the view controller and reports what the
//! front-end should do next.

use client_core::{EntryOrigin, OrderReceiver, ViewController};

use crate::controller::{
    commands::{UiCommand, HELP},
    events::{UiError, UiErrorContext, UiEvent},
};

pub async fn dispatch_command<R>(
    controller: &mut ViewController,
    receiver: &R,
    cmd: UiCommand,
) -> UiEvent
where
    R: OrderReceiver + ?Sized,
{
    tracing::debug!(command = cmd.name(), view = %controller.view(), "dispatching command");

    match cmd {
        UiCommand::StartSession { table } => {
            match controller.start_session(&table, EntryOrigin::Manual) {
                Ok(()) => UiEvent::Redraw,
                Err(err) => UiEvent::Error(UiError::from_session(UiErrorContext::Session, &err)),
            }
        }
        UiCommand::SetFilter { category } => match controller.set_filter(category) {
            Ok(()) => UiEvent::Redraw,
            Err(err) => UiEvent::Error(UiError::from_session(UiErrorContext::Menu, &err)),
        },
        UiCommand::AddToCart { item_id } => match controller.add_to_cart(&item_id) {
            Ok(_) => UiEvent::Redraw,
            Err(err) => UiEvent::Error(UiError::from_session(UiErrorContext::Cart, &err)),
        },
        UiCommand::ShowCheckout => {
            if controller.show_checkout() {
                UiEvent::Redraw
            } else {
                UiEvent::Info("Nothing to check out yet.".to_string())
            }
        }
        UiCommand::ShowMenu => {
            if controller.show_menu() {
                UiEvent::Redraw
            } else {
                UiEvent::Info(format!("The menu is not available from the {} view.", controller.view()))
            }
        }
        UiCommand::SelectPayment { method } => {
            controller.select_payment_method(method);
            UiEvent::Redraw
        }
        UiCommand::Submit => {
            let method = controller.payment_method();
            match controller.submit_order(receiver, method).await {
                Ok(()) => UiEvent::Redraw,
                Err(err) => UiEvent::Error(UiError::from_submit(&err)),
            }
        }
        UiCommand::Help => UiEvent::Info(HELP.to_string()),
        UiCommand::Quit => UiEvent::Quit,
    }
}
