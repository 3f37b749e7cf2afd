use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Ordered collection of line items, unique by product id. Adding the same
/// product twice merges by summed quantity instead of creating a second
/// entry; removal is all-or-nothing via [`Cart::clear`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product` and returns a snapshot of the
    /// resulting line item. Quantity must already have been validated by the
    /// caller; a zero quantity is refused rather than stored, since a
    /// zero-quantity line item is not representable.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<LineItem, DomainError> {
        if quantity == 0 {
            return Err(DomainError::ZeroQuantity { product_id: product.id });
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product.id) {
            // A merge that cannot be represented is refused whole; the
            // existing line item keeps its quantity.
            let merged = item
                .quantity
                .checked_add(quantity)
                .ok_or(DomainError::QuantityOverflow { product_id: product.id })?;
            item.quantity = merged;
            return Ok(item.clone());
        }

        let item = LineItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Discards all line items. Irreversible; there is no single-item removal
    /// and no undo.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Derived total, recomputed on every observation and never stored.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
