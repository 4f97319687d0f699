//! Swap form state: the loaded catalog and price table, plus input validation.

use crate::core::convert::convert;
use crate::core::error::SwapError;
use crate::core::price::{PriceTable, PriceTableProvider};
use crate::core::token::{Token, TokenCatalogProvider};
use tracing::{debug, warn};

/// Raw user input, before validation.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub converted: f64,
}

#[derive(Debug)]
pub struct SwapForm {
    tokens: Vec<Token>,
    prices: PriceTable,
    loading: bool,
}

impl Default for SwapForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapForm {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            prices: PriceTable::new(),
            loading: true,
        }
    }

    /// Runs both loaders concurrently. A failed load leaves that half of the
    /// form empty; loading always ends.
    pub async fn load(
        &mut self,
        catalog: &dyn TokenCatalogProvider,
        prices: &dyn PriceTableProvider,
    ) {
        self.loading = true;
        let (tokens, table) = futures::join!(catalog.load_tokens(), prices.load_prices());

        self.tokens = tokens.unwrap_or_else(|e| {
            warn!(error = %e, "Token catalog unavailable, continuing with no tokens");
            Vec::new()
        });
        self.prices = table.unwrap_or_else(|e| {
            warn!(error = %e, "Price table unavailable, continuing with no prices");
            PriceTable::new()
        });
        self.loading = false;

        debug!(
            tokens = self.tokens.len(),
            prices = self.prices.len(),
            "Swap form loaded"
        );
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Both symbols must be chosen and the amount must be a finite number above zero.
    pub fn validate(input: &FormInput) -> Result<ConversionRequest, SwapError> {
        let pick = |symbol: &Option<String>| {
            symbol
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_uppercase)
        };

        match (pick(&input.from), pick(&input.to), input.amount) {
            (Some(from), Some(to), Some(amount)) if amount.is_finite() && amount > 0.0 => {
                Ok(ConversionRequest { from, to, amount })
            }
            _ => Err(SwapError::invalid_input()),
        }
    }

    pub fn submit(&self, input: &FormInput) -> Result<Conversion, SwapError> {
        let request = Self::validate(input)?;
        let converted = convert(&self.prices, &request.from, &request.to, request.amount)?;
        debug!(?request, converted, "Converted");
        Ok(Conversion { request, converted })
    }
}
