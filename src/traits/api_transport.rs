use async_trait::async_trait;
use serde::de::DeserializeOwned;
use crate::errors::{HarvestError, HarvestResult};

/// Status and raw body of a single GET.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> HarvestResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Turns a non-success status into a network error for `operation`.
    pub fn require_success(self, operation: &str) -> HarvestResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(HarvestError::network_error(
                operation,
                Some(&self.url),
                Some(self.status),
                "non-success status",
            ))
        }
    }
}

#[async_trait]
pub trait ApiTransport: Send + Sync {

    async fn get(&self, url: &str, query: &[(String, String)]) -> HarvestResult<ApiResponse>;
}
