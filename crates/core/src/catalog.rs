use rust_decimal::Decimal;

use crate::domain::product::{Product, ProductId};

/// Fixed, read-only product list the form sells against.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The static seed catalog. Compiled in; nothing is loaded from disk or
    /// the network at runtime.
    pub fn seed() -> Self {
        let seed: [(u32, &str, Decimal); 7] = [
            (1, "Manzanas", Decimal::new(12_50, 2)),
            (2, "Suavitel", Decimal::new(28_50, 2)),
            (3, "Leche", Decimal::new(22_00, 2)),
            (4, "Salchichas", Decimal::new(30_00, 2)),
            (5, "Huevos", Decimal::new(7_50, 2)),
            (6, "Nuggets", Decimal::new(45_00, 2)),
            (7, "Servitoallas", Decimal::new(45_00, 2)),
        ];

        Self::new(
            seed.into_iter()
                .map(|(id, name, unit_price)| Product {
                    id: ProductId(id),
                    name: name.to_string(),
                    unit_price,
                })
                .collect(),
        )
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    /// Case-insensitive exact match on the product name. No fuzzy or partial
    /// matching. `None` is a lookup miss, not an error; callers treat it as
    /// "selection cleared".
    pub fn find_by_name(&self, query: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name.eq_ignore_ascii_case(query))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
