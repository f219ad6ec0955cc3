use std::sync::{Arc, Mutex};

use article_cast::crawl::{CrawlRequest, CrawlResult, Crawler, PageRecord};

#[derive(Clone)]
pub struct MockCrawler {
    pub result: CrawlResult,
    pub calls: Arc<Mutex<Vec<CrawlRequest>>>,
    pub fail_with: Option<String>,
}

impl MockCrawler {
    /// One entry per crawled page, in visit order. `None` stands for a page
    /// that yielded no usable text.
    pub fn with_pages(page_texts: Vec<Option<&str>>) -> Self {
        let mut result = CrawlResult::default();
        for (n, text) in page_texts.into_iter().enumerate() {
            result.pages.insert(
                format!("https://example.com/page-{n}"),
                PageRecord {
                    text_content: text.map(str::to_string),
                    title: None,
                },
            );
        }
        Self {
            result,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: CrawlResult::default(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Crawler for MockCrawler {
    type Error = anyhow::Error;

    async fn crawl(&self, request: CrawlRequest) -> Result<CrawlResult, Self::Error> {
        self.calls.lock().unwrap().push(request);
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.result.clone())
    }
}
