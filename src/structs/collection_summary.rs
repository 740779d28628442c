use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub language: String,
    pub code_samples: usize,
    pub qa_pairs: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub started_at: DateTime<Utc>,
    pub elapsed_secs: f64,
    pub languages: Vec<LanguageSummary>,
    pub web_pages: usize,
}

impl CollectionSummary {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            elapsed_secs: 0.0,
            languages: Vec::new(),
            web_pages: 0,
        }
    }

    pub fn total_code_samples(&self) -> usize {
        self.languages.iter().map(|l| l.code_samples).sum()
    }

    pub fn total_qa_pairs(&self) -> usize {
        self.languages.iter().map(|l| l.qa_pairs).sum()
    }

    pub fn print_summary(&self) {
        log::info!("\n📊 Collection Summary");
        log::info!("{}", "=".repeat(50));
        for language in &self.languages {
            log::info!(
                "  {:<12} 💾 {:>6} code samples   💬 {:>6} Q&A pairs",
                language.language, language.code_samples, language.qa_pairs
            );
            for error in &language.errors {
                log::warn!("     ⚠️ {}", error);
            }
        }
        if self.web_pages > 0 {
            log::info!("  🌐 {} web pages", self.web_pages);
        }
        log::info!("{}", "=".repeat(50));
        log::info!(
            "  Total: {} code samples, {} Q&A pairs in {:.1}s",
            self.total_code_samples(),
            self.total_qa_pairs(),
            self.elapsed_secs
        );
    }
}
