use serde::{Deserialize, Serialize};

/// A question together with its accepted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question_title: String,
    pub question_body: String,
    pub answer_body: String,
    pub question_score: i64,
    pub answer_score: i64,
    pub tags: Vec<String>,
    pub language: String,
}

impl QaPair {
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.question_title.to_lowercase().contains(&term) || self.question_body.to_lowercase().contains(&term)
    }
}
