// Sitemap generation: route assembly from static and fetched articles,
// then rendering to sitemaps.org XML or JSON.

pub mod render;
pub mod sitemap;

pub use render::{SITEMAP_NS, render_json, render_xml};
pub use sitemap::{article_route, build_sitemap_urls, static_routes};

use folio_core::SitemapUrl;

/// Output format of a generated sitemap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SitemapFormat {
    #[default]
    Xml,
    Json,
}

/// Render `urls` in the requested format
pub fn render(
    urls: &[SitemapUrl],
    site_url: &str,
    format: SitemapFormat,
) -> Result<String, serde_json::Error> {
    match format {
        SitemapFormat::Xml => Ok(render_xml(urls, site_url)),
        SitemapFormat::Json => render_json(urls),
    }
}
