use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3001";

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "folio.toml";

pub const ENV_SITE_URL: &str = "FOLIO_SITE_URL";
pub const ENV_API_BASE_URL: &str = "FOLIO_API_BASE_URL";

/// Resolved site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Public origin of the site, used to make sitemap locations absolute
    pub site_url: String,
    /// Base URL of the article API (without the trailing `/articles`)
    pub api_base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Raw TOML configuration structure
/// This matches the folio.toml file structure exactly
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    api: RawApi,
}

#[derive(Debug, Default, Deserialize)]
struct RawSite {
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawApi {
    base_url: Option<String>,
}

impl SiteConfig {
    /// Overlay values from an environment lookup. Empty values count as unset.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_SITE_URL) {
            tracing::debug!("{} overrides site url", ENV_SITE_URL);
            self.site_url = url;
        }
        if let Some(url) = get(ENV_API_BASE_URL) {
            tracing::debug!("{} overrides api base url", ENV_API_BASE_URL);
            self.api_base_url = url;
        }
        self
    }

    /// Overlay values from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply command-line overrides and re-validate
    pub fn with_overrides(
        mut self,
        site_url: Option<String>,
        api_base_url: Option<String>,
    ) -> Result<Self> {
        if let Some(url) = site_url {
            self.site_url = url;
        }
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        self.validate()?;
        Ok(self)
    }

    /// Endpoint listing all articles: `{api_base_url}/articles`
    pub fn articles_endpoint(&self) -> String {
        articles_endpoint(&self.api_base_url)
    }

    fn validate(&self) -> Result<()> {
        validate_url(&self.site_url, "site.url")?;
        validate_url(&self.api_base_url, "api.base_url")
    }
}

/// `{api_base_url}/articles`, with one trailing `/` on the base dropped
pub fn articles_endpoint(api_base_url: &str) -> String {
    let base = api_base_url.strip_suffix('/').unwrap_or(api_base_url);
    format!("{}/articles", base)
}

fn validate_url(url: &str, field_name: &str) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty URL in '{}' field",
            field_name
        )));
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::InvalidData(format!(
            "'{}' must be an http(s) URL, got '{}'",
            field_name, url
        )));
    }

    Ok(())
}

/// Parse folio.toml from a string (useful for testing)
///
/// Keys missing from the file keep their defaults.
pub fn parse_config_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = SiteConfig::default();

    let config = SiteConfig {
        site_url: raw.site.url.unwrap_or(defaults.site_url),
        api_base_url: raw.api.base_url.unwrap_or(defaults.api_base_url),
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration: defaults, then the config file, then the environment.
///
/// An explicit `path` must exist. Without one, `folio.toml` in the working
/// directory is used when present.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config_str(&fs::read_to_string(path)?)?
        }
        None if Path::new(CONFIG_FILE_NAME).exists() => {
            tracing::debug!("loading config from ./{}", CONFIG_FILE_NAME);
            parse_config_str(&fs::read_to_string(CONFIG_FILE_NAME)?)?
        }
        None => SiteConfig::default(),
    };

    let config = config.apply_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site_url, "http://localhost:3001");
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(
            config.articles_endpoint(),
            "http://localhost:8000/api/articles"
        );
    }

    #[test]
    fn test_articles_endpoint_trims_trailing_slash() {
        let config = SiteConfig {
            api_base_url: "https://api.example.com/v1/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.articles_endpoint(),
            "https://api.example.com/v1/articles"
        );
    }

    #[test]
    fn test_articles_endpoint_trims_only_one_slash() {
        assert_eq!(
            articles_endpoint("https://api.example.com/v1//"),
            "https://api.example.com/v1//articles"
        );
        assert_eq!(
            articles_endpoint("https://api.example.com/v1"),
            "https://api.example.com/v1/articles"
        );
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r##"
[site]
url = "https://site.com"

[api]
base_url = "https://api.site.com"
        "##;

        let config = parse_config_str(toml).unwrap();
        assert_eq!(config.site_url, "https://site.com");
        assert_eq!(config.api_base_url, "https://api.site.com");
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config_str("[site]\nurl = \"https://site.com\"\n").unwrap();
        assert_eq!(config.site_url, "https://site.com");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = parse_config_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_parse_config_rejects_malformed_toml() {
        let result = parse_config_str("[site\nurl = ");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Configuration parse error")
        );
    }

    #[test]
    fn test_parse_config_rejects_empty_url() {
        let result = parse_config_str("[api]\nbase_url = \"  \"\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("api.base_url"));
    }

    #[test]
    fn test_parse_config_rejects_non_http_url() {
        let result = parse_config_str("[site]\nurl = \"ftp://site.com\"\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("site.url"));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = SiteConfig::default().apply_env_with(lookup(&[
            (ENV_SITE_URL, "https://site.com"),
            (ENV_API_BASE_URL, "https://api.site.com"),
        ]));
        assert_eq!(config.site_url, "https://site.com");
        assert_eq!(config.api_base_url, "https://api.site.com");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = SiteConfig::default().apply_env_with(lookup(&[(ENV_SITE_URL, "")]));
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = SiteConfig::default()
            .with_overrides(None, Some("http://127.0.0.1:9000/api".to_string()))
            .unwrap();
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/api");

        let result = SiteConfig::default().with_overrides(Some(String::new()), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[site]\nurl = \"https://blog.example.com\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        // FOLIO_SITE_URL may be set in the environment running the tests
        if std::env::var(ENV_SITE_URL).map_or(true, |v| v.trim().is_empty()) {
            assert_eq!(config.site_url, "https://blog.example.com");
        }
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
