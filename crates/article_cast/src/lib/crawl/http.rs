use std::collections::{HashSet, VecDeque};

use anyhow::Context;
use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::crawl::{CrawlRequest, CrawlResult, Crawler, PageRecord};

/// Elements whose text makes up the readable body of an article page.
const CONTENT_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, li";

/// Breadth-first crawler backed by plain HTTP fetches and local HTML
/// parsing. Suitable for static article pages; no JavaScript rendering.
#[derive(Debug, Clone, Default)]
pub struct HttpCrawler {
    client: reqwest::Client,
}

impl HttpCrawler {
    pub fn new() -> Self {
        HttpCrawler {
            client: reqwest::Client::new(),
        }
    }

    /// Fetches a page, returning its body only when the response is HTML.
    /// A non-HTML response yields `None` so the caller can record the page
    /// without text.
    async fn fetch_page(&self, url: &str) -> anyhow::Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {status} for {url}");
        }

        let is_html = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("html"))
            .unwrap_or(true);
        if !is_html {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        Ok(Some(body))
    }
}

/// Extracts readable text from a parsed page.
///
/// Pulls the text of common content elements first, one line per outermost
/// match; an element nested inside another match contributes through its
/// ancestor only, so nothing is collected twice. Pages without any content
/// element fall back to the visible text of `<body>`, skipping `<script>`
/// and `<style>` contents.
fn extract_text(document: &Html) -> String {
    let content = Selector::parse(CONTENT_SELECTOR)
        .map(|selector| {
            document
                .select(&selector)
                .filter(|el| !has_matching_ancestor(el, &selector))
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|text| !text.is_empty())
                .join("\n")
        })
        .unwrap_or_default();

    if !content.is_empty() {
        return content;
    }

    Selector::parse("body")
        .map(|selector| {
            document
                .select(&selector)
                .flat_map(|body| body.descendants())
                .filter_map(|node| {
                    let text = node.value().as_text()?;
                    let parent = node.parent()?.value().as_element()?;
                    if matches!(parent.name(), "script" | "style") {
                        return None;
                    }
                    Some(text.trim())
                })
                .filter(|text| !text.is_empty())
                .join("\n")
        })
        .unwrap_or_default()
}

/// True when a strict ancestor of `element` also matches `selector`. The
/// text of such an element is already part of its ancestor's text.
fn has_matching_ancestor(element: &ElementRef, selector: &Selector) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| selector.matches(&ancestor))
}

/// The page's `<title>` text, if it has one.
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let title = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    (!title.is_empty()).then_some(title)
}

/// Extracts candidate links to follow from a parsed page.
///
/// Relative hrefs are resolved against the page URL. Only http(s) links on
/// the same host survive; fragments are stripped so in-page anchors collapse
/// onto their page.
fn extract_links(document: &Html, page_url: &Url) -> Vec<Url> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let page_host = page_url.host_str().unwrap_or("");

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .filter_map(|href| page_url.join(href).ok())
        .update(|url| url.set_fragment(None))
        .filter(|url| {
            (url.scheme() == "http" || url.scheme() == "https")
                && url.host_str() == Some(page_host)
        })
        .unique_by(|url| url.to_string())
        .collect()
}

impl Crawler for HttpCrawler {
    type Error = anyhow::Error;

    #[tracing::instrument(skip(self))]
    async fn crawl(&self, request: CrawlRequest) -> Result<CrawlResult, Self::Error> {
        let seed = Url::parse(&request.url)
            .with_context(|| format!("Invalid article URL: {}", request.url))?;

        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(Url, u8)> = VecDeque::new();
        let mut result = CrawlResult::default();

        visited.insert(seed.to_string());
        queue.push_back((seed, 0));

        while let Some((url, depth)) = queue.pop_front() {
            let body = match self.fetch_page(url.as_str()).await {
                Ok(body) => body,
                // The seed page is the article itself; without it there is
                // no run. Pages found by following links are best-effort.
                Err(e) if depth == 0 => {
                    return Err(e.context(format!("Failed to fetch seed page {url}")));
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = ?e, "Skipping page that failed to fetch");
                    continue;
                }
            };

            let Some(html) = body else {
                tracing::debug!(url = %url, depth, "Recording non-HTML page without text");
                result.pages.insert(url.to_string(), PageRecord::default());
                continue;
            };

            // `Html` is parsed and dropped between fetches; it must not be
            // held across an await.
            let record = {
                let document = Html::parse_document(&html);

                if depth < request.max_depth {
                    let mut followed = 0usize;
                    for link in extract_links(&document, &url) {
                        if followed >= request.max_links {
                            break;
                        }
                        if visited.insert(link.to_string()) {
                            queue.push_back((link, depth + 1));
                            followed += 1;
                        }
                    }
                }

                let text = extract_text(&document);
                tracing::debug!(url = %url, depth, chars = text.chars().count(), "Crawled page");
                PageRecord {
                    text_content: Some(text),
                    title: extract_title(&document),
                }
            };
            result.pages.insert(url.to_string(), record);
        }

        tracing::info!(pages = result.pages.len(), "Crawl completed");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_text_reads_content_elements() {
        let html = r#"
            <html><head><script>var tracking = true;</script></head>
            <body>
                <h1>Headline</h1>
                <p>First paragraph.</p>
                <p>Second paragraph.</p>
            </body></html>
        "#;
        let document = Html::parse_document(html);

        let text = extract_text(&document);

        assert_eq!(text, "Headline\nFirst paragraph.\nSecond paragraph.");
    }

    #[test]
    fn extract_text_skips_script_content() {
        let html = r#"<body><p>Visible.</p><script>hidden();</script></body>"#;
        let document = Html::parse_document(html);

        assert_eq!(extract_text(&document), "Visible.");
    }

    #[test]
    fn extract_text_counts_nested_list_text_once() {
        let html = "<body><ul><li>Item one <ul><li>Nested</li></ul></li></ul></body>";
        let document = Html::parse_document(html);

        assert_eq!(
            extract_text(&document),
            "Item one Nested",
            "A nested list item's text should come through its outer item only"
        );
    }

    #[test]
    fn extract_text_reads_wrapped_paragraph_once() {
        let html = "<body><ul><li><p>Point</p></li></ul></body>";
        let document = Html::parse_document(html);

        assert_eq!(extract_text(&document), "Point");
    }

    #[test]
    fn extract_text_falls_back_to_body_text() {
        let html = "<html><body>Bare text without markup</body></html>";
        let document = Html::parse_document(html);

        assert_eq!(extract_text(&document), "Bare text without markup");
    }

    #[test]
    fn extract_text_fallback_skips_script_content() {
        let html = r#"<body><div>Wrapped in divs</div><script>var x = 1;</script></body>"#;
        let document = Html::parse_document(html);

        assert_eq!(extract_text(&document), "Wrapped in divs");
    }

    #[test]
    fn extract_title_reads_the_title_element() {
        let html = "<html><head><title> The Headline </title></head><body></body></html>";
        let document = Html::parse_document(html);

        assert_eq!(extract_title(&document).as_deref(), Some("The Headline"));
    }

    #[test]
    fn extract_title_is_absent_without_one() {
        let document = Html::parse_document("<html><body><p>No title.</p></body></html>");

        assert_eq!(extract_title(&document), None);
    }

    #[test]
    fn extract_links_resolves_and_filters() {
        let page_url = Url::parse("https://example.com/articles/one").unwrap();
        let html = r##"
            <a href="/articles/two">Next</a>
            <a href="https://example.com/articles/three">Third</a>
            <a href="https://other.com/elsewhere">Offsite</a>
            <a href="mailto:hi@example.com">Mail</a>
            <a href="#section">Anchor</a>
        "##;
        let document = Html::parse_document(html);

        let links = extract_links(&document, &page_url);
        let links: Vec<String> = links.into_iter().map(|u| u.to_string()).collect();

        assert!(links.contains(&"https://example.com/articles/two".to_string()));
        assert!(links.contains(&"https://example.com/articles/three".to_string()));
        assert!(!links.iter().any(|l| l.contains("other.com")));
        assert!(!links.iter().any(|l| l.starts_with("mailto:")));
        assert!(!links.iter().any(|l| l.contains('#')));
    }

    #[test]
    fn extract_links_deduplicates_candidates() {
        let page_url = Url::parse("https://example.com/").unwrap();
        let html = r##"
            <a href="/page">One</a>
            <a href="/page">Again</a>
            <a href="/page#part">Anchored</a>
        "##;
        let document = Html::parse_document(html);

        let links = extract_links(&document, &page_url);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].as_str(), "https://example.com/page");
    }
}
