//! Core swap logic: catalog and price types, conversion, and form state

pub mod config;
pub mod convert;
pub mod error;
pub mod form;
pub mod log;
pub mod price;
pub mod token;

// Re-export main types for cleaner imports
pub use convert::convert;
pub use error::SwapError;
pub use form::{Conversion, ConversionRequest, FormInput, SwapForm};
pub use price::{PriceTable, PriceTableProvider};
pub use token::{Token, TokenCatalogProvider};
