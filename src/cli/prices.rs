use super::ui;
use crate::core::PriceTable;
use comfy_table::{Cell, CellAlignment};

pub fn render(prices: &PriceTable) -> String {
    if prices.is_empty() {
        return ui::style_text("No prices available.", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Symbol"), ui::header_cell("Price (USD)")]);
    for (symbol, price) in prices.sorted() {
        table.add_row(vec![
            Cell::new(symbol),
            Cell::new(format!("{price}")).set_alignment(CellAlignment::Right),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Prices", ui::StyleType::Title),
        table
    )
}
