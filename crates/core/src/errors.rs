use thiserror::Error;

use crate::domain::product::ProductId;

/// Domain invariant violations. Expected outcomes (a validation failure, a
/// catalog lookup miss) are values, not errors; only a broken caller contract
/// surfaces here.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("cart line quantity must be at least 1 for product {product_id:?}")]
    ZeroQuantity { product_id: ProductId },
    #[error("cart line quantity for product {product_id:?} would exceed the supported maximum")]
    QuantityOverflow { product_id: ProductId },
}
