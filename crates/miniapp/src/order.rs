//! The checkout snapshot handed to the host platform.
//!
//! Built only at checkout time, submitted once, then discarded. Field names
//! are the wire format the host-side bot consumes.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::cart::Cart;
use crate::catalog::Catalog;

/// One submitted line; keyed by item display name in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub quantity: u32,
    /// Unit price.
    pub price: Decimal,
}

/// The order payload submitted as the session's result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    /// Display name → quantity and unit price.
    pub cart: BTreeMap<String, OrderLine>,
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
    /// Opaque user context from the host; `null` outside the platform.
    #[serde(rename = "userInfo")]
    pub user_info: Value,
}

/// Build the order snapshot from the cart.
///
/// Each entry is resolved against the catalog; ids with no matching item
/// are skipped, and the total covers only the resolved lines.
#[must_use]
pub fn build_order(catalog: &Catalog, cart: &Cart, user_info: Option<Value>) -> OrderPayload {
    let mut lines = BTreeMap::new();
    let mut total = Decimal::ZERO;
    for (id, quantity) in cart.iter() {
        let Some(item) = catalog.get(id) else {
            continue;
        };
        total += item.price.amount() * Decimal::from(quantity);
        lines.insert(
            item.name.clone(),
            OrderLine {
                quantity,
                price: item.price.amount(),
            },
        );
    }
    OrderPayload {
        cart: lines,
        total_price: total,
        user_info: user_info.unwrap_or(Value::Null),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use samovar_core::{Currency, ItemId};
    use serde_json::json;

    use crate::catalog::parse_menu;

    use super::*;

    fn catalog() -> Catalog {
        let csv = "id,category,name,price,image\n\
                   A1,Drinks,Cola,150,http://img/cola.png\n\
                   A2,Drinks,Juice,120,http://img/juice.png\n";
        Catalog::new(parse_menu(csv, Currency::Rub), Currency::Rub)
    }

    #[test]
    fn test_order_resolves_names_and_totals() {
        let mut cart = Cart::new();
        cart.increment(ItemId::new("A1"));
        cart.increment(ItemId::new("A1"));
        cart.increment(ItemId::new("A2"));

        let order = build_order(&catalog(), &cart, None);
        assert_eq!(order.total_price, Decimal::from(420));
        assert_eq!(order.cart.len(), 2);
        assert_eq!(order.cart["Cola"].quantity, 2);
        assert_eq!(order.cart["Cola"].price, Decimal::from(150));
        assert_eq!(order.cart["Juice"].quantity, 1);
    }

    #[test]
    fn test_order_skips_stale_ids() {
        let mut cart = Cart::new();
        cart.increment(ItemId::new("GONE"));
        cart.increment(ItemId::new("A2"));

        let order = build_order(&catalog(), &cart, None);
        assert_eq!(order.cart.len(), 1);
        assert_eq!(order.total_price, Decimal::from(120));
    }

    #[test]
    fn test_payload_wire_shape() {
        let mut cart = Cart::new();
        cart.increment(ItemId::new("A1"));

        let order = build_order(&catalog(), &cart, Some(json!({"id": 99})));
        let payload = serde_json::to_value(&order).unwrap();

        // rust_decimal's serde-with-str writes amounts as strings.
        assert_eq!(payload["cart"]["Cola"]["quantity"], 1);
        assert_eq!(payload["cart"]["Cola"]["price"], "150");
        assert_eq!(payload["totalPrice"], "150");
        assert_eq!(payload["userInfo"]["id"], 99);
    }

    #[test]
    fn test_user_info_defaults_to_null() {
        let order = build_order(&catalog(), &Cart::new(), None);
        let payload = serde_json::to_value(&order).unwrap();
        assert!(payload["userInfo"].is_null());
        assert_eq!(payload["totalPrice"], "0");
    }
}
