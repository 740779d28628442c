use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use crate::config::constants::{timeout_duration, GITHUB_ACCEPT_HEADER};
use crate::errors::{HarvestError, HarvestResult};
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::config::config::Config;
use crate::traits::api_transport::{ApiResponse, ApiTransport};

/// reqwest-backed transport; every request waits on the limiter first.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    limiter: ApiRateLimiter,
}

impl HttpTransport {
    pub fn new(headers: HeaderMap, config: &Config, limiter: ApiRateLimiter) -> HarvestResult<Self> {
        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.http.user_agent.clone())
            .timeout(timeout_duration(config.http.timeout_secs))
            .build()
            .map_err(|e| HarvestError::system_error("building HTTP client", &e.to_string()))?;

        Ok(Self { client, limiter })
    }

    pub fn github(config: &Config) -> HarvestResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT_HEADER));
        headers.insert(USER_AGENT, Self::header_value(&config.http.user_agent)?);

        match config.github.token() {
            Some(token) => {
                let mut value = Self::header_value(&format!("Bearer {}", token))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            None => log::warn!(
                "⚠️ {} is not set, GitHub requests will be unauthenticated and heavily rate limited",
                config.github.token_env
            ),
        }

        Self::new(headers, config, ApiRateLimiter::github())
    }

    pub fn stackexchange(config: &Config) -> HarvestResult<Self> {
        Self::new(HeaderMap::new(), config, ApiRateLimiter::stackexchange())
    }

    pub fn web(config: &Config) -> HarvestResult<Self> {
        Self::new(HeaderMap::new(), config, ApiRateLimiter::per_second(2))
    }

    fn header_value(value: &str) -> HarvestResult<HeaderValue> {
        HeaderValue::from_str(value)
            .map_err(|e| HarvestError::config_error(&format!("invalid header value: {}", e), None, None))
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {

    async fn get(&self, url: &str, query: &[(String, String)]) -> HarvestResult<ApiResponse> {
        self.limiter.acquire().await;
        log::debug!("GET {}", url);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse {
            url: url.to_string(),
            status,
            body,
        })
    }
}
