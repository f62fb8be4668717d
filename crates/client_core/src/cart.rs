//! Cart contents: one line per menu item, kept in insertion order.

use shared::{
    domain::{ItemId, MenuItem, Money},
    protocol::OrderLine,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub is_veg: bool,
    pub quantity: u32,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            unit_price: item.price,
            is_veg: item.is_veg,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            id: self.item_id.clone(),
            name: self.name.clone(),
            price: self.unit_price.to_major(),
            quantity: self.quantity,
            is_veg: self.is_veg,
            category: self.category.clone(),
        }
    }
}

/// Totals are derived from the lines on every call and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Adds one unit of `item`, merging into an existing line for the same id.
    pub fn add(&mut self, item: &MenuItem) -> &CartLine {
        let index = match self.lines.iter().position(|line| line.item_id == item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.lines.push(CartLine::from_item(item));
                self.lines.len() - 1
            }
        };
        &self.lines[index]
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64) -> MenuItem {
        MenuItem {
            id: ItemId::from(id),
            name: format!("item {id}"),
            category: "Snacks".to_string(),
            price: Money::from_cents(cents),
            is_veg: true,
            image: None,
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::default();
        let samosa = item("sn1", 3000);
        let chai = item("dr2", 3000);

        cart.add(&samosa);
        cart.add(&chai);
        let line = cart.add(&samosa);
        assert_eq!(line.quantity, 2);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].item_id, ItemId::from("sn1"));
        assert_eq!(cart.lines()[1].item_id, ItemId::from("dr2"));
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Money::from_cents(9000));
    }

    #[test]
    fn line_keeps_price_snapshot() {
        let mut cart = Cart::default();
        let mut tea = item("1", 250);
        cart.add(&tea);
        tea.price = Money::from_cents(999);
        assert_eq!(cart.lines()[0].unit_price, Money::from_cents(250));
    }

    #[test]
    fn clear_resets_derived_totals() {
        let mut cart = Cart::default();
        cart.add(&item("1", 250));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.count(), 0);
    }
}
