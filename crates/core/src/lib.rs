pub mod articles;
pub mod config;
pub mod error;
pub mod types;

pub use articles::{ArticleKey, articles, get_article_by_id, get_related_articles};
pub use config::{SiteConfig, load_config, parse_config_str};
pub use error::{Error, Result};
pub use types::*;
