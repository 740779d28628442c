use serde::Deserialize;

/// The common wrapper StackExchange puts around every list response.
#[derive(Debug, Deserialize)]
pub struct ApiPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub has_more: Option<bool>,
    #[serde(default)]
    pub quota_remaining: Option<u32>,
    /// Seconds the client must wait before hitting the same method again.
    #[serde(default)]
    pub backoff: Option<u64>,
}
