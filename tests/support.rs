use std::sync::Mutex;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use codeharvest::errors::HarvestResult;
use codeharvest::traits::api_transport::{ApiResponse, ApiTransport};

struct Route {
    url: String,
    required_query: Vec<(String, String)>,
    status: u16,
    body: String,
}

/// In-memory transport answering from a fixed route table. Unmatched
/// requests get a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.respond_with_query(url, &[], status, body)
    }

    pub fn respond_with_query(self, url: &str, query: &[(&str, &str)], status: u16, body: impl Into<String>) -> Self {
        self.routes.lock().unwrap().push(Route {
            url: url.to_string(),
            required_query: query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            status,
            body: body.into(),
        });
        self
    }

    pub fn requests_to(&self, url: &str) -> Vec<Vec<(String, String)>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| u == url)
            .map(|(_, q)| q.clone())
            .collect()
    }

    pub fn query_value(query: &[(String, String)], key: &str) -> Option<String> {
        query.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> HarvestResult<ApiResponse> {
        self.requests.lock().unwrap().push((url.to_string(), query.to_vec()));

        let routes = self.routes.lock().unwrap();
        let matched = routes.iter().find(|route| {
            route.url == url && route.required_query.iter().all(|required| query.contains(required))
        });

        Ok(match matched {
            Some(route) => ApiResponse {
                url: url.to_string(),
                status: route.status,
                body: route.body.clone(),
            },
            None => ApiResponse {
                url: url.to_string(),
                status: 404,
                body: r#"{"message":"Not Found"}"#.to_string(),
            },
        })
    }
}

pub fn encoded_content(source: &str) -> String {
    serde_json::json!({ "content": STANDARD.encode(source), "encoding": "base64" }).to_string()
}
