//! Pure view-model rendering. Nothing here touches a UI toolkit; the
//! front-end draws whatever these functions return.

use shared::domain::{ItemId, PaymentMethod};

use crate::{
    session::Session,
    view::{View, ViewController},
};

const DEFAULT_SUCCESS_MESSAGE: &str = "Order placed! Your food is on its way.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemView {
    /// Parameter of this entry's "add" action.
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price_label: String,
    pub is_veg: bool,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuListView {
    pub tabs: Vec<CategoryTab>,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummaryView {
    pub count: u32,
    pub total_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRow {
    pub label: String,
    pub amount_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub rows: Vec<CheckoutRow>,
    pub total_label: String,
    pub payment_method: PaymentMethod,
    pub payment_form_visible: bool,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Scan,
    Menu(MenuListView),
    Checkout(CheckoutView),
    Success { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub view: View,
    pub table_indicator: Option<String>,
    pub cart: CartSummaryView,
    pub cart_affordance_visible: bool,
    pub panel: Panel,
}

pub fn render_menu(session: &Session, currency: &str) -> MenuListView {
    let tabs = session
        .categories()
        .into_iter()
        .map(|name| CategoryTab {
            active: name == session.filter(),
            name,
        })
        .collect();
    let items = session
        .visible_items()
        .map(|item| MenuItemView {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            price_label: item.price.label(currency),
            is_veg: item.is_veg,
            image: item.image.clone(),
        })
        .collect();
    MenuListView { tabs, items }
}

pub fn render_cart_summary(session: &Session, currency: &str) -> CartSummaryView {
    CartSummaryView {
        count: session.cart_count(),
        total_label: session.cart_total().label(currency),
    }
}

/// The online-payment form is shown for every method except paying at the counter.
pub fn payment_form_visible(method: PaymentMethod) -> bool {
    method != PaymentMethod::Counter
}

pub fn render_checkout(controller: &ViewController, currency: &str) -> CheckoutView {
    let session = controller.session();
    let rows = session
        .cart()
        .lines()
        .iter()
        .map(|line| CheckoutRow {
            label: format!("{}x {}", line.quantity, line.name),
            amount_label: line.line_total().label(currency),
        })
        .collect();
    CheckoutView {
        rows,
        total_label: session.cart_total().label(currency),
        payment_method: controller.payment_method(),
        payment_form_visible: payment_form_visible(controller.payment_method()),
        submitting: controller.is_submitting(),
    }
}

pub fn render(controller: &ViewController, currency: &str) -> ViewModel {
    let session = controller.session();
    let panel = match controller.view() {
        View::Scan => Panel::Scan,
        View::Menu => Panel::Menu(render_menu(session, currency)),
        View::Checkout => Panel::Checkout(render_checkout(controller, currency)),
        View::Success => Panel::Success {
            message: controller
                .last_ack()
                .map(|ack| ack.message.as_str())
                .filter(|message| !message.is_empty())
                .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
                .to_string(),
        },
    };
    ViewModel {
        view: controller.view(),
        table_indicator: controller.table_indicator().map(str::to_string),
        cart: render_cart_summary(session, currency),
        cart_affordance_visible: controller.cart_affordance_visible(),
        panel,
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
