//! Plain-text drawing of the view model.

use std::fmt::Write as _;

use client_core::render::{CheckoutView, MenuListView, Panel, ViewModel};

use crate::controller::events::{UiError, UiErrorCategory};

const RULE: &str = "--------------------------------";

fn draw_menu(out: &mut String, menu: &MenuListView) {
    let tabs: Vec<String> = menu
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.name)
            } else {
                tab.name.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" | "));
    let _ = writeln!(out, "{RULE}");
    if menu.items.is_empty() {
        let _ = writeln!(out, "(no items)");
    }
    for item in &menu.items {
        let diet = if item.is_veg { "veg" } else { "non-veg" };
        let _ = writeln!(
            out,
            "{:<8} {:<32} {:>10}  {} ({diet})",
            item.id.as_str(),
            item.name,
            item.price_label,
            item.category
        );
    }
}

fn draw_checkout(out: &mut String, checkout: &CheckoutView) {
    let _ = writeln!(out, "Your order");
    let _ = writeln!(out, "{RULE}");
    for row in &checkout.rows {
        let _ = writeln!(out, "{:<32} {:>10}", row.label, row.amount_label);
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<32} {:>10}", "Total", checkout.total_label);
    let _ = writeln!(out, "Payment: {}", checkout.payment_method);
    if checkout.payment_form_visible {
        let _ = writeln!(out, "You will be asked for payment details when the order is placed.");
    }
    if checkout.submitting {
        let _ = writeln!(out, "Submitting...");
    }
}

pub fn draw(model: &ViewModel) -> String {
    let mut out = String::new();
    if let Some(table) = &model.table_indicator {
        let _ = writeln!(out, "Table {table}");
    }

    match &model.panel {
        Panel::Scan => {
            let _ = writeln!(out, "Scan the QR code on your table, or type `table <number>`.");
        }
        Panel::Menu(menu) => draw_menu(&mut out, menu),
        Panel::Checkout(checkout) => draw_checkout(&mut out, checkout),
        Panel::Success { message } => {
            let _ = writeln!(out, "{message}");
        }
    }

    if model.cart_affordance_visible {
        let _ = writeln!(
            out,
            "Cart: {} item(s), {} (type `checkout`)",
            model.cart.count, model.cart.total_label
        );
    }
    out
}

pub fn draw_error(err: &UiError) -> String {
    let mut text = if err.is_blocking() {
        format!("!! {} !!", err.message())
    } else {
        err.message().to_string()
    };
    if err.category() == UiErrorCategory::Transport {
        text.push_str("\nCould not reach the restaurant; please try again.");
    }
    text
}
