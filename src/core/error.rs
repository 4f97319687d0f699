//! Failure kinds surfaced by the loaders, the form and the converter.

use thiserror::Error;

/// Message shown when the form is submitted with missing or invalid input.
pub const INVALID_INPUT_MESSAGE: &str =
    "Please choose both tokens and enter an amount greater than zero.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// Endpoint unreachable or answered with a non-success status
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// Endpoint answered with a body of unexpected shape
    #[error("Unexpected response from {url}: {reason}")]
    Parse { url: String, reason: String },

    /// Form input rejected before conversion
    #[error("{0}")]
    Validation(String),

    /// Symbol has no price in the table
    #[error("No valid price for {symbol}")]
    Lookup { symbol: String },

    /// Price exists but cannot be used in the conversion ratio
    #[error("Price {price} for {symbol} cannot be used for conversion")]
    InvalidPrice { symbol: String, price: f64 },

    /// Converted amount does not fit in a finite number
    #[error("Converting {amount} {from} to {to} does not give a finite amount")]
    Overflow {
        from: String,
        to: String,
        amount: f64,
    },
}

impl SwapError {
    pub fn network(url: &str, reason: impl ToString) -> Self {
        SwapError::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(url: &str, reason: impl ToString) -> Self {
        SwapError::Parse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_input() -> Self {
        SwapError::Validation(INVALID_INPUT_MESSAGE.to_string())
    }
}
