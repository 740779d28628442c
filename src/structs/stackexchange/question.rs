use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub question_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub accepted_answer_id: Option<u64>,
}
