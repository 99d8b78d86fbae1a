use anyhow::{Context, Result};
use folio_client::{ApiClient, ArticleSource};
use folio_core::{SiteConfig, load_config};
use folio_generator::{SitemapFormat, build_sitemap_urls, render};
use std::fs;
use std::path::PathBuf;

/// Build the sitemap and print it, or write it to `output`.
///
/// Succeeds whenever configuration loads: an unreachable article API only
/// shrinks the sitemap to its static routes.
pub async fn run(
    config_path: Option<PathBuf>,
    format: SitemapFormat,
    output: Option<PathBuf>,
    site_url: Option<String>,
    api_base_url: Option<String>,
) -> Result<()> {
    let config = load_config(config_path.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(site_url, api_base_url)
        .context("Invalid command-line override")?;

    tracing::debug!(
        site_url = %config.site_url,
        api_base_url = %config.api_base_url,
        "resolved configuration"
    );

    let client = ApiClient::from_config(&config).context("Failed to create API client")?;
    let (count, rendered) = generate(&config, &client, format).await?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).context("Failed to create output directory")?;
            }
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote {} URLs to {}", count, path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Fetch routes from `source` and render them; returns the URL count and document
pub async fn generate<S>(
    config: &SiteConfig,
    source: &S,
    format: SitemapFormat,
) -> Result<(usize, String)>
where
    S: ArticleSource + ?Sized,
{
    let urls = build_sitemap_urls(source).await;
    let rendered =
        render(&urls, &config.site_url, format).context("Failed to render sitemap")?;
    Ok((urls.len(), rendered))
}
