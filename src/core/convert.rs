use crate::core::error::SwapError;
use crate::core::price::PriceTable;

/// Converts `amount` of `from` into `to` using USD prices from `table`.
///
/// Returns `amount * price(from) / price(to)` without rounding. Fails when
/// either symbol has no price, when a price is negative or not finite, when
/// the divisor price is zero, or when the result is not finite.
pub fn convert(table: &PriceTable, from: &str, to: &str, amount: f64) -> Result<f64, SwapError> {
    let from_price = lookup(table, from)?;
    let to_price = lookup(table, to)?;

    if !from_price.is_finite() || from_price < 0.0 {
        return Err(SwapError::InvalidPrice {
            symbol: from.to_string(),
            price: from_price,
        });
    }
    if !to_price.is_finite() || to_price <= 0.0 {
        return Err(SwapError::InvalidPrice {
            symbol: to.to_string(),
            price: to_price,
        });
    }

    let converted = amount * from_price / to_price;
    if !converted.is_finite() {
        return Err(SwapError::Overflow {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        });
    }
    Ok(converted)
}

fn lookup(table: &PriceTable, symbol: &str) -> Result<f64, SwapError> {
    table.get(symbol).ok_or_else(|| SwapError::Lookup {
        symbol: symbol.to_string(),
    })
}
