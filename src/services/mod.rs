pub mod collector;
pub mod dataset_store;
pub mod github_scraper;
pub mod http_transport;
pub mod page_text_scraper;
pub mod rate_limiter;
pub mod stackoverflow_scraper;
pub mod training_dataset;
