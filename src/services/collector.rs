use std::sync::Arc;
use std::time::Instant;
use chrono::Utc;
use crate::errors::HarvestResult;
use crate::logger::progress_spinner::ProgressSpinner;
use crate::services::dataset_store::DatasetStore;
use crate::services::github_scraper::GitHubScraper;
use crate::services::http_transport::HttpTransport;
use crate::services::page_text_scraper::PageTextScraper;
use crate::services::stackoverflow_scraper::StackOverflowScraper;
use crate::structs::collection_summary::{CollectionSummary, LanguageSummary};
use crate::structs::config::collection_config::CollectionConfig;
use crate::structs::config::config::Config;

/// Runs every harvester for every configured language.
pub struct DataCollector {
    github: GitHubScraper,
    stackoverflow: StackOverflowScraper,
    pages: PageTextScraper,
    store: DatasetStore,
    collection: CollectionConfig,
}

impl DataCollector {
    pub fn new(
        github: GitHubScraper,
        stackoverflow: StackOverflowScraper,
        pages: PageTextScraper,
        store: DatasetStore,
        collection: CollectionConfig,
    ) -> Self {
        Self {
            github,
            stackoverflow,
            pages,
            store,
            collection,
        }
    }

    pub fn from_config(config: &Config) -> HarvestResult<Self> {
        let store = DatasetStore::new(&config.collection.data_dir);

        let github = GitHubScraper::new(
            Arc::new(HttpTransport::github(config)?),
            config.github.clone(),
            store.clone(),
        );
        let stackoverflow = StackOverflowScraper::new(
            Arc::new(HttpTransport::stackexchange(config)?),
            config.stackexchange.clone(),
            store.clone(),
        );
        let pages = PageTextScraper::new(Arc::new(HttpTransport::web(config)?), store.clone());

        Ok(Self::new(github, stackoverflow, pages, store, config.collection.clone()))
    }

    /// A failing source is recorded in the summary and the run moves on.
    pub async fn collect_language(&self, language: &str) -> LanguageSummary {
        let mut summary = LanguageSummary {
            language: language.to_string(),
            ..Default::default()
        };

        log::info!("\n🌍 Collecting data for {}...", language);

        let mut spinner = ProgressSpinner::new(format!("Scraping GitHub repositories for {}", language));
        spinner.start();
        match self.github.scrape_and_save(language, self.collection.max_repos).await {
            Ok(samples) => {
                summary.code_samples = samples.len();
                spinner.stop(&format!("Collected {} code samples from GitHub", samples.len())).await;
            }
            Err(e) => {
                spinner.error(&format!("GitHub collection failed for {}: {}", language, e)).await;
                summary.errors.push(format!("github: {}", e));
            }
        }

        let mut spinner = ProgressSpinner::new(format!("Scraping StackOverflow for {}", language));
        spinner.start();
        match self.stackoverflow.scrape_qa_pairs(language, self.collection.max_questions).await {
            Ok(pairs) => {
                summary.qa_pairs = pairs.len();
                spinner.stop(&format!("Collected {} Q&A pairs from StackOverflow", pairs.len())).await;
            }
            Err(e) => {
                spinner.error(&format!("StackOverflow collection failed for {}: {}", language, e)).await;
                summary.errors.push(format!("stackoverflow: {}", e));
            }
        }

        summary
    }

    pub async fn collect_all(&self) -> HarvestResult<CollectionSummary> {
        let started = Instant::now();
        let mut summary = CollectionSummary::new(Utc::now());

        log::info!("🚀 Starting data collection...");

        for language in &self.collection.languages {
            let language_summary = self.collect_language(language).await;
            summary.languages.push(language_summary);
        }

        if !self.collection.web_urls.is_empty() {
            log::info!("\n🌐 Updating knowledge base from {} pages...", self.collection.web_urls.len());
            match self.pages.scrape_and_save(&self.collection.web_urls).await {
                Ok(pages) => summary.web_pages = pages.len(),
                Err(e) => log::error!("❌ Knowledge base update failed: {}", e),
            }
        }

        summary.elapsed_secs = started.elapsed().as_secs_f64();
        self.store.save_summary(&summary)?;

        log::info!("\n✅ Data collection completed!");
        Ok(summary)
    }
}
