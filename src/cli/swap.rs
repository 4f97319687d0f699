use super::ui;
use crate::core::{Conversion, FormInput, SwapForm};

/// Submits the form and renders either the converted amount or the failure
/// message, the way the result region of the form would show it.
pub fn render(form: &SwapForm, input: &FormInput, decimals: usize) -> String {
    match form.submit(input) {
        Ok(conversion) => ui::style_text(
            &format_conversion(&conversion, decimals),
            ui::StyleType::Result,
        ),
        Err(e) => ui::style_text(&e.to_string(), ui::StyleType::Error),
    }
}

pub fn format_conversion(conversion: &Conversion, decimals: usize) -> String {
    let request = &conversion.request;
    format!(
        "{} {} = {:.decimals$} {}",
        request.amount, request.from, conversion.converted, request.to
    )
}
