use super::ui;
use crate::core::{BASE_CURRENCY, RateTable};
use comfy_table::Cell;

/// Renders the rate table in declaration order.
pub fn render(table: &RateTable) -> String {
    let mut out = ui::new_styled_table();
    out.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Per 1 {BASE_CURRENCY}")),
        ui::header_cell(&format!("Value in {BASE_CURRENCY}")),
    ]);

    for (code, factor) in table.entries() {
        let label = if code == BASE_CURRENCY {
            format!("{code} (base)")
        } else {
            code.clone()
        };
        out.add_row(vec![
            Cell::new(label),
            ui::number_cell(*factor, 2),
            ui::number_cell(1.0 / factor, 4),
        ]);
    }

    out.to_string()
}

pub fn run(table: &RateTable) {
    println!("{}", ui::style_text("Exchange Rates", ui::StyleType::Title));
    println!("{}", render(table));
}
