use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ItemId, MenuItem, Money, PaymentMethod},
    error::ModelError,
};

/// One entry of the `GET /api/menu` array, as sent on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemWire {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub is_veg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl TryFrom<MenuItemWire> for MenuItem {
    type Error = ModelError;

    fn try_from(wire: MenuItemWire) -> Result<Self, Self::Error> {
        if wire.id.trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        Ok(MenuItem {
            id: ItemId::from(wire.id),
            name: wire.name,
            category: wire.category,
            price: Money::from_major(wire.price)?,
            is_veg: wire.is_veg.unwrap_or(false),
            image: wire.image.filter(|image| !image.is_empty()),
        })
    }
}

/// Validates a whole menu response. Either every entry converts or none does.
pub fn decode_menu(items: Vec<MenuItemWire>) -> Result<Vec<MenuItem>, ModelError> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut menu = Vec::with_capacity(items.len());
    for wire in items {
        let item = MenuItem::try_from(wire)?;
        if !seen.insert(item.id.clone()) {
            return Err(ModelError::DuplicateId(item.id));
        }
        menu.push(item);
    }
    Ok(menu)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub is_veg: bool,
    pub category: String,
}

/// Body of `POST /api/order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub table_number: Option<i64>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderAck {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(id: &str, price: f64) -> MenuItemWire {
        MenuItemWire {
            id: id.to_string(),
            name: format!("item {id}"),
            category: "Drinks".to_string(),
            price,
            is_veg: None,
            image: Some(String::new()),
        }
    }

    #[test]
    fn decodes_menu_with_optional_fields_defaulted() {
        let raw = r#"[{"id":"1","name":"Tea","category":"Drinks","price":2.5}]"#;
        let items: Vec<MenuItemWire> = serde_json::from_str(raw).expect("json");
        let menu = decode_menu(items).expect("menu");
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].price, Money::from_cents(250));
        assert!(!menu[0].is_veg);
        assert_eq!(menu[0].image, None);
    }

    #[test]
    fn empty_image_reference_is_dropped() {
        let menu = decode_menu(vec![wire("a", 1.0)]).expect("menu");
        assert_eq!(menu[0].image, None);
    }

    #[test]
    fn rejects_whole_menu_on_duplicate_or_negative_entry() {
        let err = decode_menu(vec![wire("a", 1.0), wire("a", 2.0)]).expect_err("duplicate");
        assert_eq!(err, ModelError::DuplicateId(ItemId::from("a")));

        let err = decode_menu(vec![wire("a", 1.0), wire("b", -3.0)]).expect_err("negative");
        assert_eq!(err, ModelError::NegativePrice(-3.0));
    }

    #[test]
    fn rejects_whole_menu_when_a_price_is_out_of_range() {
        let raw = r#"[{"id":"a","name":"Tea","category":"Drinks","price":2.5},
                      {"id":"big","name":"Gold","category":"Mains","price":1e17}]"#;
        let items: Vec<MenuItemWire> = serde_json::from_str(raw).expect("json");
        let err = decode_menu(items).expect_err("out of range");
        assert_eq!(err, ModelError::PriceOutOfRange(1e17));
    }

    #[test]
    fn order_payload_serializes_wire_field_names() {
        let payload = OrderPayload {
            items: vec![OrderLine {
                id: ItemId::from("1"),
                name: "Tea".to_string(),
                price: 2.5,
                quantity: 2,
                is_veg: true,
                category: "Drinks".to_string(),
            }],
            total: 5.0,
            table_number: None,
            payment_method: PaymentMethod::Online,
        };
        let value = serde_json::to_value(&payload).expect("json");
        assert_eq!(value["payment_method"], "online");
        assert!(value["table_number"].is_null());
        assert_eq!(value["items"][0]["id"], "1");
        assert_eq!(value["items"][0]["quantity"], 2);
        assert_eq!(value["total"], 5.0);
    }
}
