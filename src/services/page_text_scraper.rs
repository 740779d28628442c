use std::sync::Arc;
use scraper::{Html, Selector};
use crate::errors::{HarvestError, HarvestResult};
use crate::services::dataset_store::DatasetStore;
use crate::structs::web_page::WebPage;
use crate::traits::api_transport::ApiTransport;

/// Pulls paragraph text out of knowledge-base pages.
pub struct PageTextScraper {
    transport: Arc<dyn ApiTransport>,
    store: DatasetStore,
}

impl PageTextScraper {
    pub fn new(transport: Arc<dyn ApiTransport>, store: DatasetStore) -> Self {
        Self { transport, store }
    }

    /// Text of every `<p>` element, one per line, in document order.
    pub fn extract_paragraph_text(html: &str) -> HarvestResult<String> {
        let selector = Selector::parse("p")
            .map_err(|e| HarvestError::parse_error("CSS selector", None, &format!("{:?}", e)))?;
        let document = Html::parse_document(html);

        let paragraphs: Vec<String> = document
            .select(&selector)
            .map(|p| p.text().collect::<String>())
            .collect();

        Ok(paragraphs.join("\n"))
    }

    pub async fn scrape_text_from_url(&self, url: &str) -> HarvestResult<String> {
        let response = self.transport.get(url, &[]).await?.require_success("page fetch")?;
        Self::extract_paragraph_text(&response.body)
    }

    /// Fetches every URL, skipping failures, and persists what was extracted.
    pub async fn scrape_and_save(&self, urls: &[String]) -> HarvestResult<Vec<WebPage>> {
        let mut pages = Vec::new();

        for url in urls {
            match self.scrape_text_from_url(url).await {
                Ok(text) if !text.trim().is_empty() => pages.push(WebPage {
                    url: url.clone(),
                    text,
                }),
                Ok(_) => log::warn!("⚠️ No paragraph text found at {}", url),
                Err(e) => log::warn!("⚠️ Skipping {}: {}", url, e),
            }
        }

        if !urls.is_empty() {
            let path = self.store.save_web_pages(&pages)?;
            log::info!("💾 Saved {} web pages to {}", pages.len(), path.display());
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_only_paragraphs() {
        let html = r#"<html><head><title>Ignored</title></head>
            <body><h1>Heading</h1><p>First <b>bold</b> line.</p><div>noise</div><p>Second.</p></body></html>"#;

        let text = PageTextScraper::extract_paragraph_text(html).unwrap();

        assert_eq!(text, "First bold line.\nSecond.");
    }

    #[test]
    fn test_page_without_paragraphs_is_empty() {
        let text = PageTextScraper::extract_paragraph_text("<div>only divs</div>").unwrap();

        assert!(text.is_empty());
    }
}
