pub mod cli;
pub mod code_sample;
pub mod collection_summary;
pub mod config;
pub mod dataset_stats;
pub mod github;
pub mod qa_pair;
pub mod stackexchange;
pub mod training_example;
pub mod training_manifest;
pub mod web_page;
