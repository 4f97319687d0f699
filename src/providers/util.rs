use crate::core::SwapError;
use tracing::debug;

const USER_AGENT: &str = concat!("tokswap/", env!("CARGO_PKG_VERSION"));

/// Performs a single GET and returns the body of a successful response.
///
/// Transport failures and non-success statuses both map to `SwapError::Network`.
pub async fn fetch_text(url: &str) -> Result<String, SwapError> {
    debug!("Requesting {}", url);

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SwapError::network(url, e))?;
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SwapError::network(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SwapError::network(url, format!("HTTP {status}")));
    }

    response
        .text()
        .await
        .map_err(|e| SwapError::network(url, e))
}
