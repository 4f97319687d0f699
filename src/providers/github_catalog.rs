use super::util::fetch_text;
use crate::core::SwapError;
use crate::core::token::{CatalogEntry, Token, TokenCatalogProvider, tokens_from_entries};
use async_trait::async_trait;
use tracing::{debug, error};

/// Token catalog backed by a GitHub "contents" directory listing of icon files.
pub struct GithubCatalogProvider {
    url: String,
}

impl GithubCatalogProvider {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl TokenCatalogProvider for GithubCatalogProvider {
    async fn load_tokens(&self) -> Result<Vec<Token>, SwapError> {
        let response_text = fetch_text(&self.url).await?;

        let entries: Vec<CatalogEntry> = match serde_json::from_str(&response_text) {
            Ok(data) => data,
            Err(e) => {
                error!(
                    error = ?e,
                    response = %response_text,
                    "Failed to parse token catalog response"
                );
                return Err(SwapError::parse(&self.url, e));
            }
        };

        let tokens = tokens_from_entries(&entries);
        debug!(
            "Loaded {} tokens from {} catalog entries",
            tokens.len(),
            entries.len()
        );
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LISTING_PATH: &str = "/repos/Switcheo/token-icons/contents/tokens";

    async fn create_catalog_mock_server(mock_response: &str, status_code: u16) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(mock_response))
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn provider_for(mock_server: &MockServer) -> GithubCatalogProvider {
        GithubCatalogProvider::new(&format!("{}{LISTING_PATH}", mock_server.uri()))
    }

    const MOCK_LISTING: &str = r#"[
        {
            "name": "ATOM.svg",
            "path": "tokens/ATOM.svg",
            "type": "file",
            "download_url": "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/ATOM.svg"
        },
        {
            "name": "bNEO.svg",
            "path": "tokens/bNEO.svg",
            "type": "file",
            "download_url": "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/bNEO.svg"
        },
        {
            "name": "archive",
            "path": "tokens/archive",
            "type": "dir",
            "download_url": null
        }
    ]"#;

    #[tokio::test]
    async fn test_successful_catalog_fetch() {
        let mock_server = create_catalog_mock_server(MOCK_LISTING, 200).await;
        let provider = provider_for(&mock_server);

        let tokens = provider.load_tokens().await.unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].symbol, "ATOM");
        assert_eq!(tokens[0].name, "ATOM");
        assert_eq!(
            tokens[0].icon,
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/ATOM.svg"
        );
        assert_eq!(tokens[1].symbol, "BNEO");
    }

    #[tokio::test]
    async fn test_catalog_server_error() {
        let mock_server = create_catalog_mock_server("Server Error", 500).await;
        let provider = provider_for(&mock_server);

        let err = provider.load_tokens().await.unwrap_err();
        match err {
            SwapError::Network { reason, .. } => assert!(reason.contains("500"), "{reason}"),
            other => panic!("Expected a network failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_catalog_malformed_response() {
        let mock_server =
            create_catalog_mock_server(r#"{"message": "API rate limit exceeded"}"#, 200).await;
        let provider = provider_for(&mock_server);

        let err = provider.load_tokens().await.unwrap_err();
        assert!(matches!(err, SwapError::Parse { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_catalog_unreachable() {
        let provider = GithubCatalogProvider::new("http://127.0.0.1:1/tokens");

        let err = provider.load_tokens().await.unwrap_err();
        assert!(matches!(err, SwapError::Network { .. }), "{err:?}");
    }
}
