//! Sitemap rendering.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>http://localhost:3001/articles/5</loc>
//!     <lastmod>2025-02-01T00:00:00.000Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use folio_core::{SitemapUrl, format_timestamp};
use std::borrow::Cow;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render a sitemaps.org `urlset`, making each `loc` absolute against `site_url`
pub fn render_xml(urls: &[SitemapUrl], site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    let mut xml = String::with_capacity(256 + urls.len() * 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in urls {
        let loc = absolute_loc(base, &entry.loc);

        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&loc));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(&format_timestamp(lastmod));
            xml.push_str("</lastmod>\n");
        }
        xml.push_str("    <changefreq>");
        xml.push_str(entry.changefreq.as_str());
        xml.push_str("</changefreq>\n");
        xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render the entries as a pretty-printed JSON array
pub fn render_json(urls: &[SitemapUrl]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(urls)
}

fn absolute_loc(base: &str, loc: &str) -> String {
    if loc.starts_with("http://") || loc.starts_with("https://") {
        return loc.to_string();
    }
    if loc.starts_with('/') {
        format!("{}{}", base, loc)
    } else {
        format!("{}/{}", base, loc)
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
