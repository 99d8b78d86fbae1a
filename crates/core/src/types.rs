use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Article bundled with the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: i64,
    pub title: &'static str,
    /// Publication date (YYYY-MM-DD)
    pub date: &'static str,
    pub excerpt: &'static str,
    /// Markdown body
    pub content: &'static str,
}

/// Article as served by the backend API
///
/// Only `id` is required on the wire; everything else defaults to empty.
/// `created` is kept as sent and parsed per article by [`RemoteArticle::created_at`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteArticle {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(default)]
    pub created: Option<String>,
}

impl RemoteArticle {
    /// Creation time. `None` when `created` is absent or blank.
    pub fn created_at(&self) -> Result<Option<DateTime<Utc>>> {
        match self.created.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_timestamp(s).map(Some).ok_or_else(|| {
                Error::InvalidData(format!(
                    "invalid timestamp '{}' on article {}",
                    s, self.id
                ))
            }),
        }
    }
}

/// How often a page is expected to change (sitemaps.org vocabulary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` entry of the sitemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapUrl {
    /// Site-relative path, e.g. `/articles/5`
    pub loc: String,
    pub changefreq: ChangeFreq,
    /// Crawl priority in `[0, 1]`
    pub priority: f32,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<DateTime<Utc>>,
}

impl SitemapUrl {
    /// `priority` is clamped to `[0, 1]`; NaN becomes 0.
    pub fn new(loc: impl Into<String>, changefreq: ChangeFreq, priority: f32) -> Self {
        let priority = if priority.is_nan() {
            0.0
        } else {
            priority.clamp(0.0, 1.0)
        };
        Self {
            loc: loc.into(),
            changefreq,
            priority,
            lastmod: None,
        }
    }

    pub fn with_lastmod(mut self, lastmod: Option<DateTime<Utc>>) -> Self {
        self.lastmod = lastmod;
        self
    }
}

/// Parse an API timestamp.
///
/// Accepts RFC 3339 with any offset (normalised to UTC), ISO datetimes
/// without an offset (`T` or space separated, read as UTC) and bare
/// `YYYY-MM-DD` dates, which are taken as midnight UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format as ISO-8601 with millisecond precision, e.g. `2025-02-01T00:00:00.000Z`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `SitemapUrl::lastmod`. `null`, missing and `""` all read as `None`.
mod timestamp {
    use super::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_timestamp(s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", s))),
        }
    }
}
