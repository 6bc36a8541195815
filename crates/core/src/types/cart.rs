//! Collection entry types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::key::ProductKey;
use crate::types::product::ProductSnapshot;

/// A line item in the cart: one product, its snapshot, and a quantity.
///
/// Invariants, enforced by the cart manager:
/// - `quantity >= 1` for any line present in a collection;
/// - at most one line per [`ProductKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Canonical product key.
    pub key: ProductKey,
    /// Price and display fields copied at add time.
    pub snapshot: ProductSnapshot,
    /// Number of units.
    pub quantity: u32,
}

impl CartLine {
    /// This line's contribution to the cart subtotal.
    #[must_use]
    pub fn line_subtotal(&self) -> Decimal {
        self.snapshot.effective_unit_price() * Decimal::from(self.quantity)
    }
}

/// A wishlist entry: one product and its snapshot, no quantity.
///
/// Invariant: at most one entry per [`ProductKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItem {
    /// Canonical product key.
    pub key: ProductKey,
    /// Display fields copied at save time.
    pub snapshot: ProductSnapshot,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn snapshot(price: i64, sale_price: Option<i64>) -> ProductSnapshot {
        ProductSnapshot {
            name: Some("Wayfarer".to_owned()),
            price: Some(Decimal::from(price)),
            sale_price: sale_price.map(Decimal::from),
            brand: None,
            image: None,
            slug: None,
        }
    }

    #[test]
    fn line_subtotal_multiplies_effective_price_by_quantity() {
        let line = CartLine {
            key: ProductKey::from("p1"),
            snapshot: snapshot(20, None),
            quantity: 2,
        };
        assert_eq!(line.line_subtotal(), Decimal::from(40));
    }

    #[test]
    fn line_subtotal_uses_sale_price_when_lower() {
        let line = CartLine {
            key: ProductKey::from("p2"),
            snapshot: snapshot(50, Some(40)),
            quantity: 1,
        };
        assert_eq!(line.line_subtotal(), Decimal::from(40));
    }
}
