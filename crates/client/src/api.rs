use crate::{ArticleSource, FetchError};
use async_trait::async_trait;
use folio_core::config::articles_endpoint;
use folio_core::{RemoteArticle, SiteConfig};

/// Article API client
///
/// Talks to `GET {api_base_url}/articles`. No authentication and no custom
/// headers; timeouts are whatever reqwest does by default.
pub struct ApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `api_base_url`
    pub fn new(api_base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, api_base_url))
    }

    /// Create a client from resolved site configuration
    pub fn from_config(config: &SiteConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: config.articles_endpoint(),
        })
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            client,
            endpoint: articles_endpoint(api_base_url),
        }
    }

    /// Full URL of the article list
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ArticleSource for ApiClient {
    async fn fetch_articles(&self) -> Result<Vec<RemoteArticle>, FetchError> {
        tracing::debug!(url = %self.endpoint, "fetching articles");

        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.endpoint.clone(),
                status,
            });
        }

        let body = response.bytes().await?;
        let articles: Vec<RemoteArticle> = serde_json::from_slice(&body)?;

        tracing::debug!(count = articles.len(), "fetched articles");
        Ok(articles)
    }
}
