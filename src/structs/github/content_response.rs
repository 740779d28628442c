use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: Option<String>,
}
