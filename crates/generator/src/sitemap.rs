//! Sitemap route assembly.
//!
//! The home page and the article index are always listed. Every article the
//! backend reports adds an `/articles/{id}` entry. When the backend cannot be
//! reached, answers with an error status, or sends something that is not an
//! article list, the failure is logged and only the static routes are
//! returned. An article with an unreadable `created` stops the walk at that
//! article; routes already built are kept. Nothing is retried.

use folio_client::ArticleSource;
use folio_core::{ChangeFreq, RemoteArticle, Result, SitemapUrl};

/// `/` and `/articles`, present in every sitemap
pub fn static_routes() -> Vec<SitemapUrl> {
    vec![
        SitemapUrl::new("/", ChangeFreq::Daily, 0.5),
        SitemapUrl::new("/articles", ChangeFreq::Daily, 0.6),
    ]
}

/// Sitemap entry for a single fetched article
///
/// Fails when `created` is present but not a timestamp.
pub fn article_route(article: &RemoteArticle) -> Result<SitemapUrl> {
    let lastmod = article.created_at()?;
    Ok(
        SitemapUrl::new(format!("/articles/{}", article.id), ChangeFreq::Weekly, 0.8)
            .with_lastmod(lastmod),
    )
}

/// Build the complete URL list for the sitemap.
///
/// Never fails. A fetch error degrades the result to [`static_routes`]; a bad
/// article ends the list just before it.
pub async fn build_sitemap_urls<S>(source: &S) -> Vec<SitemapUrl>
where
    S: ArticleSource + ?Sized,
{
    let mut urls = static_routes();

    let articles = match source.fetch_articles().await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!("Error generating sitemap routes: {}", e);
            return urls;
        }
    };

    for article in &articles {
        match article_route(article) {
            Ok(url) => urls.push(url),
            Err(e) => {
                tracing::error!("Error generating sitemap routes: {}", e);
                return urls;
            }
        }
    }

    tracing::info!(
        articles = articles.len(),
        total = urls.len(),
        "sitemap routes generated"
    );
    urls
}
