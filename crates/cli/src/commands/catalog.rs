use mercado_core::catalog::Catalog;
use mercado_core::config::{AppConfig, LoadOptions};

use crate::table::format_price;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    render(&Catalog::seed(), &config.display.currency_symbol)
}

/// One `Name: $price` line per product, prices with two decimals.
pub fn render(catalog: &Catalog, currency_symbol: &str) -> String {
    catalog
        .products()
        .iter()
        .map(|product| {
            format!("{}: {}", product.name, format_price(product.unit_price, currency_symbol))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
