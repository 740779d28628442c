use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub answer_id: u64,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub score: i64,
}
