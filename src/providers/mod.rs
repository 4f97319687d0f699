pub mod github_catalog;
pub mod price_feed;
pub mod util;

pub use github_catalog::GithubCatalogProvider;
pub use price_feed::PriceFeedProvider;
