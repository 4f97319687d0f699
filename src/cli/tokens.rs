use super::ui;
use crate::core::SwapForm;
use comfy_table::Cell;

/// Lists the catalog with each token's price, where one is known.
pub fn render(form: &SwapForm) -> String {
    if form.tokens().is_empty() {
        return ui::style_text("No tokens available.", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Symbol"),
        ui::header_cell("Name"),
        ui::header_cell("Price (USD)"),
        ui::header_cell("Icon"),
    ]);

    let mut priced = 0;
    for token in form.tokens() {
        let price = form.prices().get(&token.symbol);
        if price.is_some() {
            priced += 1;
        }
        table.add_row(vec![
            Cell::new(&token.symbol),
            Cell::new(&token.name),
            ui::format_optional_cell(price, |p| format!("{p}")),
            Cell::new(&token.icon),
        ]);
    }

    format!(
        "{}\n\n{}\n\n{}",
        ui::style_text("Tokens", ui::StyleType::Title),
        table,
        ui::style_text(
            &format!("{priced} of {} tokens have a price", form.tokens().len()),
            ui::StyleType::Subtle
        )
    )
}
