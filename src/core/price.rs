//! Price table and the wire shapes it can be read from

use crate::core::error::SwapError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// USD price per symbol. Symbols are stored upper-cased so lookups ignore case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: &str, price: f64) {
        self.prices.insert(symbol.trim().to_uppercase(), price);
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.prices.get(&symbol.trim().to_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Entries ordered by symbol.
    pub fn sorted(&self) -> BTreeMap<&str, f64> {
        self.prices
            .iter()
            .map(|(symbol, price)| (symbol.as_str(), *price))
            .collect()
    }

    /// Parses any of the accepted price documents.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let document: PriceDocument = serde_json::from_str(body)?;
        Ok(document.into())
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = PriceTable::new();
        for (symbol, price) in iter {
            table.insert(symbol.as_ref(), price);
        }
        table
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceDocument {
    /// `{"ETH": 3000.0}` or `{"ETH": {"USD": 3000.0}}`
    Map(BTreeMap<String, Option<PriceQuote>>),
    /// `[{"currency": "ETH", "date": "...", "price": 3000.0}]`
    Quotes(Vec<DatedQuote>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceQuote {
    Flat(f64),
    Nested(NestedQuote),
}

#[derive(Debug, Deserialize)]
struct NestedQuote {
    #[serde(rename = "USD")]
    usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DatedQuote {
    currency: String,
    date: Option<DateTime<Utc>>,
    price: Option<f64>,
}

impl From<PriceDocument> for PriceTable {
    fn from(document: PriceDocument) -> Self {
        match document {
            PriceDocument::Map(map) => {
                let mut priced: Vec<(String, f64)> = map
                    .into_iter()
                    .filter_map(|(symbol, quote)| {
                        let price = match quote? {
                            PriceQuote::Flat(price) => price,
                            PriceQuote::Nested(nested) => nested.usd?,
                        };
                        Some((symbol, price))
                    })
                    .collect();
                // Keys differing only in case collapse to one symbol; the
                // upper-case spelling is inserted last so it wins
                priced.sort_by_key(|(symbol, _)| *symbol == symbol.to_uppercase());
                priced.into_iter().collect()
            }
            PriceDocument::Quotes(quotes) => {
                let mut latest: HashMap<String, (Option<DateTime<Utc>>, f64)> = HashMap::new();
                for quote in quotes {
                    let Some(price) = quote.price else {
                        continue;
                    };
                    let symbol = quote.currency.trim().to_uppercase();
                    // Later entries win ties; undated entries lose to dated ones
                    let newer = latest
                        .get(&symbol)
                        .is_none_or(|(seen, _)| *seen <= quote.date);
                    if newer {
                        latest.insert(symbol, (quote.date, price));
                    }
                }
                latest
                    .into_iter()
                    .map(|(symbol, (_, price))| (symbol, price))
                    .collect()
            }
        }
    }
}

#[async_trait]
pub trait PriceTableProvider: Send + Sync {
    async fn load_prices(&self) -> Result<PriceTable, SwapError>;
}
