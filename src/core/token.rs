//! Token catalog types

use crate::core::error::SwapError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub icon: String,
}

/// One file in a directory listing, e.g. `{"name": "eth.svg", "download_url": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub download_url: Option<String>,
}

impl Token {
    /// Derives a token from a listing entry. The symbol is the upper-cased
    /// file name up to the first dot.
    pub fn from_entry(entry: &CatalogEntry) -> Option<Self> {
        let icon = entry.download_url.as_ref()?;
        let stem = entry.name.split('.').next().unwrap_or_default().trim();
        if stem.is_empty() {
            return None;
        }

        let symbol = stem.to_uppercase();
        Some(Token {
            name: symbol.clone(),
            symbol,
            icon: icon.clone(),
        })
    }
}

/// Builds the catalog from a listing, keeping the first entry per symbol.
pub fn tokens_from_entries(entries: &[CatalogEntry]) -> Vec<Token> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter_map(Token::from_entry)
        .filter(|token| seen.insert(token.symbol.clone()))
        .collect()
}

#[async_trait]
pub trait TokenCatalogProvider: Send + Sync {
    async fn load_tokens(&self) -> Result<Vec<Token>, SwapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, url: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            download_url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_symbol_is_uppercased_stem() {
        let token = Token::from_entry(&entry("usdc.svg", Some("https://icons/usdc.svg"))).unwrap();
        assert_eq!(token.symbol, "USDC");
        assert_eq!(token.name, "USDC");
        assert_eq!(token.icon, "https://icons/usdc.svg");

        let token = Token::from_entry(&entry("stATOM.min.svg", Some("https://icons/x"))).unwrap();
        assert_eq!(token.symbol, "STATOM");
    }

    #[test]
    fn test_entries_without_download_url_are_skipped() {
        assert!(Token::from_entry(&entry("nested", None)).is_none());
        assert!(Token::from_entry(&entry(".hidden", Some("https://icons/h"))).is_none());
    }

    #[test]
    fn test_duplicate_symbols_keep_first_entry() {
        let entries = vec![
            entry("eth.svg", Some("https://icons/eth.svg")),
            entry("atom.svg", Some("https://icons/atom.svg")),
            entry("ETH.png", Some("https://icons/ETH.png")),
            entry("docs", None),
        ];

        let tokens = tokens_from_entries(&entries);
        let symbols: Vec<_> = tokens.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ETH", "ATOM"]);
        assert_eq!(tokens[0].icon, "https://icons/eth.svg");
    }
}
