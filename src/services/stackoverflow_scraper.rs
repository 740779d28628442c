use std::sync::Arc;
use crate::config::constants::sleep_duration_secs;
use crate::errors::HarvestResult;
use crate::helpers::pagination::{collect_pages, Page};
use crate::services::dataset_store::DatasetStore;
use crate::structs::config::stackexchange_config::StackExchangeConfig;
use crate::structs::qa_pair::QaPair;
use crate::structs::stackexchange::answer::Answer;
use crate::structs::stackexchange::api_page::ApiPage;
use crate::structs::stackexchange::question::Question;
use crate::traits::api_transport::ApiTransport;

pub struct StackOverflowScraper {
    transport: Arc<dyn ApiTransport>,
    config: StackExchangeConfig,
    key: Option<String>,
    store: DatasetStore,
}

impl StackOverflowScraper {
    pub fn new(transport: Arc<dyn ApiTransport>, config: StackExchangeConfig, store: DatasetStore) -> Self {
        let key = config.key();
        if key.is_none() {
            log::warn!("⚠️ {} is not set, StackExchange quota is limited to 300 requests a day", config.key_env);
        }

        Self {
            transport,
            config,
            key,
            store,
        }
    }

    fn base_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("order".to_string(), "desc".to_string()),
            ("sort".to_string(), "votes".to_string()),
            ("site".to_string(), self.config.site.clone()),
            ("filter".to_string(), "withbody".to_string()),
        ];
        if let Some(key) = &self.key {
            query.push(("key".to_string(), key.clone()));
        }
        query
    }

    /// Highest-voted questions tagged `tag`, at most `max_questions`.
    pub async fn get_questions_by_tag(&self, tag: &str, max_questions: usize) -> Vec<Question> {
        collect_pages(max_questions, move |page| self.fetch_question_page(tag, page)).await
    }

    async fn fetch_question_page(&self, tag: &str, page: u32) -> HarvestResult<Page<Question>> {
        let url = format!("{}/questions", self.config.api_url);
        let mut query = self.base_query();
        query.push(("tagged".to_string(), tag.to_string()));
        query.push(("pagesize".to_string(), self.config.page_size.to_string()));
        query.push(("page".to_string(), page.to_string()));

        let response = self
            .transport
            .get(&url, &query)
            .await?
            .require_success("question listing")?;
        let listing: ApiPage<Question> = response.json()?;

        self.respect_backoff(&listing).await;

        // Only an explicit `has_more: false` ends the walk.
        let has_more = listing.has_more != Some(false);
        Ok(Page::new(listing.items, has_more))
    }

    pub async fn get_answers_for_question(&self, question_id: u64) -> Vec<Answer> {
        let url = format!("{}/questions/{}/answers", self.config.api_url, question_id);
        let query = self.base_query();

        let result = match self.transport.get(&url, &query).await {
            Ok(response) => response
                .require_success("answer listing")
                .and_then(|r| r.json::<ApiPage<Answer>>()),
            Err(e) => Err(e),
        };

        match result {
            Ok(listing) => {
                self.respect_backoff(&listing).await;
                listing.items
            }
            Err(e) => {
                log::warn!("⚠️ Answers for question {} unavailable: {}", question_id, e);
                Vec::new()
            }
        }
    }

    async fn respect_backoff<T>(&self, listing: &ApiPage<T>) {
        if let Some(remaining) = listing.quota_remaining {
            log::debug!("StackExchange quota remaining: {}", remaining);
        }
        if let Some(seconds) = listing.backoff {
            log::info!("⏳ StackExchange asked for a {}s backoff", seconds);
            tokio::time::sleep(sleep_duration_secs(seconds)).await;
        }
    }

    /// Pairs `question` with its accepted answer if that answer was fetched
    /// and has a body.
    pub fn accepted_pair(question: &Question, answers: &[Answer], language_tag: &str) -> Option<QaPair> {
        let accepted_id = question.accepted_answer_id?;
        let accepted = answers.iter().find(|a| a.answer_id == accepted_id)?;

        if accepted.body.trim().is_empty() {
            return None;
        }

        Some(QaPair {
            question_title: question.title.clone(),
            question_body: question.body.clone(),
            answer_body: accepted.body.clone(),
            question_score: question.score,
            answer_score: accepted.score,
            tags: question.tags.clone(),
            language: language_tag.to_string(),
        })
    }

    pub async fn scrape_qa_pairs(&self, language_tag: &str, max_questions: usize) -> HarvestResult<Vec<QaPair>> {
        DatasetStore::validate_name(language_tag)?;
        let questions = self.get_questions_by_tag(language_tag, max_questions).await;
        log::debug!("❓ Fetched {} {} questions", questions.len(), language_tag);

        let mut qa_pairs = Vec::new();

        for question in questions.iter().filter(|q| q.accepted_answer_id.is_some()) {
            let answers = self.get_answers_for_question(question.question_id).await;
            if let Some(pair) = Self::accepted_pair(question, &answers, language_tag) {
                qa_pairs.push(pair);
            }
        }

        let path = self.store.save_qa_pairs(language_tag, &qa_pairs)?;
        log::debug!("💾 Saved {} Q&A pairs to {}", qa_pairs.len(), path.display());

        Ok(qa_pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(accepted: Option<u64>) -> Question {
        Question {
            question_id: 1,
            title: "How do I reverse a list?".to_string(),
            body: "<p>title says it all</p>".to_string(),
            score: 120,
            tags: vec!["python".to_string(), "list".to_string()],
            accepted_answer_id: accepted,
        }
    }

    fn answer(id: u64, body: &str) -> Answer {
        Answer {
            answer_id: id,
            body: body.to_string(),
            score: 80,
        }
    }

    #[test]
    fn test_pairs_with_listed_accepted_answer() {
        let answers = vec![answer(9, "<p>other</p>"), answer(7, "<p>use reversed()</p>")];

        let pair = StackOverflowScraper::accepted_pair(&question(Some(7)), &answers, "python").unwrap();

        assert_eq!(pair.answer_body, "<p>use reversed()</p>");
        assert_eq!(pair.question_score, 120);
        assert_eq!(pair.answer_score, 80);
        assert_eq!(pair.language, "python");
        assert_eq!(pair.tags, vec!["python".to_string(), "list".to_string()]);
    }

    #[test]
    fn test_no_pair_without_accepted_answer() {
        let answers = vec![answer(7, "<p>x</p>")];

        assert!(StackOverflowScraper::accepted_pair(&question(None), &answers, "python").is_none());
    }

    #[test]
    fn test_no_pair_when_accepted_answer_not_fetched() {
        let answers = vec![answer(9, "<p>x</p>")];

        assert!(StackOverflowScraper::accepted_pair(&question(Some(7)), &answers, "python").is_none());
    }

    #[test]
    fn test_no_pair_for_blank_accepted_body() {
        let answers = vec![answer(7, "  ")];

        assert!(StackOverflowScraper::accepted_pair(&question(Some(7)), &answers, "python").is_none());
    }
}
