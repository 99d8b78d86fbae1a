// Article sources for sitemap generation.
// The backend API client lives in `api`; tests substitute their own sources.

pub mod api;
pub mod error;

pub use api::ApiClient;
pub use error::FetchError;

use async_trait::async_trait;
use folio_core::RemoteArticle;

/// Somewhere a list of articles can be fetched from
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_articles(&self) -> Result<Vec<RemoteArticle>, FetchError>;
}
