use anyhow::{Context, Result};
use folio_core::config::{
    CONFIG_FILE_NAME, DEFAULT_API_BASE_URL, DEFAULT_SITE_URL, ENV_API_BASE_URL, ENV_SITE_URL,
};
use folio_core::parse_config_str;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a default folio.toml into `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The directory doesn't exist
/// - folio.toml already exists in the directory
/// - The file cannot be written
pub async fn run(path: PathBuf) -> Result<()> {
    println!("Initializing folio config in: {}", path.display());

    let config_path = write_config(&path)?;

    println!("\n✓ Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Set [site] url to the public address of the site");
    println!("  2. Point [api] base_url at the article API");
    println!("  3. Generate: folio sitemap --output public/sitemap.xml");

    Ok(())
}

fn write_config(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            dir.display(),
            dir.display()
        );
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            CONFIG_FILE_NAME,
            config_path.display()
        );
    }

    let template = config_template();

    // Validate the generated TOML before writing it
    parse_config_str(&template)
        .context("Generated config is invalid - this is a bug in the template generator")?;

    fs::write(&config_path, template)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(config_path)
}

fn config_template() -> String {
    format!(
        "# Generated by folio init\n\
# Environment variables {ENV_SITE_URL} and {ENV_API_BASE_URL} override these values.\n\
\n\
[site]\n\
# Public origin used to build absolute sitemap locations\n\
url = \"{DEFAULT_SITE_URL}\"\n\
\n\
[api]\n\
# Article API; the sitemap lists every article from {{base_url}}/articles\n\
base_url = \"{DEFAULT_API_BASE_URL}\"\n"
    )
}
