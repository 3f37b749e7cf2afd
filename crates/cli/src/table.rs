use mercado_core::LineItem;
use rust_decimal::Decimal;

/// Declarative column: a header plus a cell renderer applied to each row.
pub struct Column<R> {
    pub header: &'static str,
    pub cell: Box<dyn Fn(&R) -> String>,
}

/// Renders rows under the declared columns as a padded text table.
pub fn render<R>(columns: &[Column<R>], rows: &[R]) -> String {
    let mut widths: Vec<usize> =
        columns.iter().map(|column| column.header.chars().count()).collect();

    let mut cells = Vec::with_capacity(rows.len());
    for row in rows {
        let mut rendered = Vec::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            let cell = (column.cell)(row);
            widths[index] = widths[index].max(cell.chars().count());
            rendered.push(cell);
        }
        cells.push(rendered);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(joined_row(
        columns.iter().map(|column| column.header.to_string()).collect(),
        &widths,
    ));
    lines.push(widths.iter().map(|width| "-".repeat(*width)).collect::<Vec<_>>().join("  "));
    for rendered in cells {
        lines.push(joined_row(rendered, &widths));
    }

    lines.join("\n")
}

/// The cart table as the form renders it: one row per line item, prices with
/// two decimals.
pub fn cart_columns(currency_symbol: &str) -> Vec<Column<LineItem>> {
    let price_symbol = currency_symbol.to_string();
    vec![
        Column { header: "Producto", cell: Box::new(|item: &LineItem| item.name.clone()) },
        Column {
            header: "Precio",
            cell: Box::new(move |item: &LineItem| format_price(item.unit_price, &price_symbol)),
        },
        Column { header: "Cantidad", cell: Box::new(|item: &LineItem| item.quantity.to_string()) },
    ]
}

pub fn format_price(value: Decimal, currency_symbol: &str) -> String {
    format!("{currency_symbol}{value:.2}")
}

fn joined_row(cells: Vec<String>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use mercado_core::{LineItem, ProductId};
    use rust_decimal::Decimal;

    use super::{cart_columns, format_price, render};

    fn line(name: &str, cents: i64, quantity: u32) -> LineItem {
        LineItem {
            product_id: ProductId(1),
            name: name.to_string(),
            unit_price: Decimal::new(cents, 2),
            quantity,
        }
    }

    #[test]
    fn formats_prices_with_two_decimals() {
        assert_eq!(format_price(Decimal::new(12_50, 2), "$"), "$12.50");
        assert_eq!(format_price(Decimal::new(250, 1), "$"), "$25.00");
        assert_eq!(format_price(Decimal::ZERO, "$"), "$0.00");
    }

    #[test]
    fn renders_one_row_per_line_item_with_headers() {
        let rows = vec![line("Manzanas", 12_50, 2), line("Huevos", 7_50, 1)];
        let table = render(&cart_columns("$"), &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Producto"));
        assert!(lines[0].contains("Precio"));
        assert!(lines[0].contains("Cantidad"));
        assert!(lines[2].starts_with("Manzanas"));
        assert!(lines[2].contains("$12.50"));
        assert!(lines[3].starts_with("Huevos"));
        assert!(lines[3].contains("1"));
    }

    #[test]
    fn pads_columns_to_widest_cell() {
        let rows = vec![line("Servitoallas", 45_00, 10)];
        let table = render(&cart_columns("$"), &rows);
        let header = table.lines().next().unwrap_or_default();

        // "Servitoallas" is wider than "Producto", so the header pads out.
        assert!(header.find("Precio").unwrap_or(0) > "Servitoallas".len());
    }
}
