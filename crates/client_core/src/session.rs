//! Session/cart state: the single source of truth for table identity, menu
//! cache, active category filter and cart contents.

use shared::{
    domain::{ItemId, MenuItem, Money, PaymentMethod, TableId, ALL_CATEGORIES},
    protocol::OrderPayload,
};
use tracing::{error, info};

use crate::{
    cart::{Cart, CartLine},
    error::{ApiClientError, SessionError},
    MenuProvider,
};

/// How the table number reached the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrigin {
    /// Typed by the customer on the scan view.
    Manual,
    /// Carried by the `table` query parameter of the link the client was opened with.
    UrlParameter,
}

#[derive(Debug, Clone)]
pub struct Session {
    table: Option<TableId>,
    menu: Vec<MenuItem>,
    filter: String,
    cart: Cart,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            table: None,
            menu: Vec::new(),
            filter: ALL_CATEGORIES.to_string(),
            cart: Cart::default(),
        }
    }

    /// Records the table identifier. Blank manual input and an empty URL
    /// parameter are rejected without touching any state.
    pub fn start(&mut self, raw: &str, origin: EntryOrigin) -> Result<&TableId, SessionError> {
        let table = TableId::from(raw);
        let table = match origin {
            EntryOrigin::Manual if table.is_blank() => {
                return Err(SessionError::EmptyTableNumber)
            }
            EntryOrigin::Manual => TableId::from(raw.trim()),
            EntryOrigin::UrlParameter if raw.is_empty() => {
                return Err(SessionError::EmptyTableNumber)
            }
            EntryOrigin::UrlParameter => table,
        };
        info!(%table, ?origin, "table session started");
        Ok(&*self.table.insert(table))
    }

    pub fn table(&self) -> Option<&TableId> {
        self.table.as_ref()
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Replaces the menu cache wholesale.
    pub fn install_menu(&mut self, menu: Vec<MenuItem>) {
        self.menu = menu;
    }

    /// Fetches the menu once. A failure is logged and leaves the cache as it was.
    pub async fn load_menu<P>(&mut self, provider: &P) -> Result<usize, ApiClientError>
    where
        P: MenuProvider + ?Sized,
    {
        match provider.fetch_menu().await {
            Ok(menu) => {
                let count = menu.len();
                self.install_menu(menu);
                info!(items = count, "menu loaded");
                Ok(count)
            }
            Err(err) => {
                error!(error = %err, "failed to load menu");
                Err(err)
            }
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, category: impl Into<String>) {
        self.filter = category.into();
    }

    /// Menu items matching the active filter, in menu order.
    pub fn visible_items(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        let show_all = self.filter == ALL_CATEGORIES;
        self.menu
            .iter()
            .filter(move |item| show_all || item.category == self.filter)
    }

    /// `All` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &self.menu {
            if !categories.iter().any(|c| c == &item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    pub fn add_to_cart(&mut self, item_id: &ItemId) -> Result<&CartLine, SessionError> {
        let item = self
            .menu
            .iter()
            .find(|item| &item.id == item_id)
            .ok_or_else(|| SessionError::ItemNotFound(item_id.clone()))?;
        Ok(self.cart.add(item))
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn build_order(&self, payment_method: PaymentMethod) -> Result<OrderPayload, SessionError> {
        let table = self.table.as_ref().ok_or(SessionError::NoTable)?;
        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        Ok(OrderPayload {
            items: self.cart.lines().iter().map(CartLine::to_order_line).collect(),
            total: self.cart_total().to_major(),
            table_number: table.number(),
            payment_method,
        })
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
