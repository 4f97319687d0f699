use super::util::fetch_text;
use crate::core::SwapError;
use crate::core::price::{PriceTable, PriceTableProvider};
use async_trait::async_trait;
use tracing::{debug, error};

/// Price table read from a static JSON document.
pub struct PriceFeedProvider {
    url: String,
}

impl PriceFeedProvider {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl PriceTableProvider for PriceFeedProvider {
    async fn load_prices(&self) -> Result<PriceTable, SwapError> {
        let response_text = fetch_text(&self.url).await?;

        if response_text.trim().is_empty() {
            return Err(SwapError::parse(&self.url, "empty response"));
        }

        let table = PriceTable::from_json(&response_text).map_err(|e| {
            error!(
                error = ?e,
                response = %response_text,
                "Failed to parse price table response"
            );
            SwapError::parse(&self.url, e)
        })?;

        debug!("Loaded {} prices from {}", table.len(), self.url);
        Ok(table)
    }
}
