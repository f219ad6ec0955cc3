pub mod http;

use std::{fmt::Debug, future::Future};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

pub trait Crawler {
    type Error: Debug;

    fn crawl(
        &self,
        request: CrawlRequest,
    ) -> impl Future<Output = Result<CrawlResult, Self::Error>> + Send;
}

/// A single crawl job: the seed page plus the link-follow policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    pub url: String,
    /// Link-hops followed from the seed. Zero fetches the seed page only.
    pub max_depth: u8,
    /// New links followed from each crawled page.
    pub max_links: usize,
}

/// Pages produced by a crawl, keyed by URL in visit order.
///
/// Ancillary fields a crawler backend may report alongside `pages` are
/// ignored; only the page texts feed the rest of the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrawlResult {
    #[serde(default)]
    pub pages: IndexMap<String, PageRecord>,
}

/// One crawled page. `text_content` is absent when the page yielded no
/// usable text, including non-string payloads from a crawler backend.
/// `title` is ancillary; nothing downstream consumes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRecord {
    #[serde(default, deserialize_with = "lenient_text_content")]
    pub text_content: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Accepts any JSON value for `text_content` and keeps only strings.
fn lenient_text_content<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}
