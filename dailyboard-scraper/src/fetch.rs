use crate::common::error::{Result, ScrapeError};
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Seam between the pipeline and the page-fetching collaborator. Returns the
/// page body as text so documents are parsed at the call site; a parsed page
/// never crosses an await point.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// One HTTP session reused across every fetch of a run. The underlying
/// session must not be cycled per category; the pipeline driver owns it and
/// closes it once after all categories.
pub struct PageSession {
    client: reqwest::Client,
}

impl PageSession {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn close(self) {
        debug!("page session closed");
    }
}

#[async_trait]
impl PageFetcher for PageSession {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("HTTP GET {}", url);
        let resp = self
            .client
            .get(url)
            .header("User-Agent", "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36")
            .send()
            .await?;
        Ok(resp.text().await?)
    }
}

/// A fetched page with named-region text access.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Text of the first element matching `selector`.
    pub fn region_text(&self, selector: &str) -> Result<String> {
        let sel = Selector::parse(selector).unwrap();
        let element = self
            .html
            .select(&sel)
            .next()
            .ok_or_else(|| ScrapeError::RegionNotFound(selector.to_string()))?;
        Ok(element_text(&element))
    }

    /// Texts of every element matching `selector`, in document order.
    pub fn region_texts(&self, selector: &str) -> Vec<String> {
        let sel = Selector::parse(selector).unwrap();
        self.html.select(&sel).map(|el| element_text(&el)).collect()
    }

    /// Texts of `inner` matches scoped to the first `outer` match.
    pub fn nested_texts(&self, outer: &str, inner: &str) -> Result<Vec<String>> {
        let outer_sel = Selector::parse(outer).unwrap();
        let inner_sel = Selector::parse(inner).unwrap();
        let scope = self
            .html
            .select(&outer_sel)
            .next()
            .ok_or_else(|| ScrapeError::RegionNotFound(outer.to_string()))?;
        Ok(scope.select(&inner_sel).map(|el| element_text(&el)).collect())
    }
}

// Rendered-text approximation: non-empty text nodes joined with line breaks.
fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
