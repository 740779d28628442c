use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::Deserialize;
use serde_json::json;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{DEFAULT_LISTING_LIMIT, MAX_LISTING_LIMIT};
use crate::errors::{HarvestError, HarvestResult};
use crate::services::dataset_store::DatasetStore;

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub limit: Option<usize>,
    pub q: Option<String>,
}

impl ListingQuery {
    fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LISTING_LIMIT).min(MAX_LISTING_LIMIT)
    }
}

/// Read-only HTTP view over the harvested data directory.
pub struct DatasetServer {
    store: Arc<DatasetStore>,
    port: u16,
}

impl DatasetServer {
    pub fn new(store: DatasetStore, port: u16) -> Self {
        Self {
            store: Arc::new(store),
            port,
        }
    }

    pub fn routes(&self) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
        let store = Arc::clone(&self.store);
        let store_filter = warp::any().map(move || Arc::clone(&store));

        let health = warp::path!("health")
            .and(warp::get())
            .map(|| warp::reply::json(&json!({ "status": "ok" })));

        let stats = warp::path!("api" / "stats")
            .and(warp::get())
            .and(store_filter.clone())
            .and_then(stats_handler);

        let samples = warp::path!("api" / "samples" / String)
            .and(warp::get())
            .and(warp::query::<ListingQuery>())
            .and(store_filter.clone())
            .and_then(samples_handler);

        let qa = warp::path!("api" / "qa" / String)
            .and(warp::get())
            .and(warp::query::<ListingQuery>())
            .and(store_filter)
            .and_then(qa_handler);

        health
            .or(stats)
            .or(samples)
            .or(qa)
            .recover(handle_rejection)
            .with(warp::log("codeharvest::server"))
    }

    /// Serves until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> HarvestResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = ([127, 0, 0, 1], self.port).into();
        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, shutdown)
            .map_err(|e| HarvestError::network_error("binding dataset server", Some(&addr.to_string()), None, &e.to_string()))?;

        log::info!("🌐 Dataset server listening on http://{}", bound);
        log::info!("⏹️ Press Ctrl+C to stop the server");

        server.await;
        log::info!("✅ Dataset server shutdown complete");
        Ok(())
    }
}

fn error_reply(status: StatusCode, message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}

fn store_error_reply(error: &HarvestError) -> warp::reply::WithStatus<warp::reply::Json> {
    match error {
        HarvestError::Validation { .. } => error_reply(StatusCode::BAD_REQUEST, &error.to_string()),
        _ => {
            log::error!("❌ Dataset read failed: {}", error);
            error_reply(StatusCode::INTERNAL_SERVER_ERROR, "failed to read dataset")
        }
    }
}

async fn stats_handler(store: Arc<DatasetStore>) -> Result<impl warp::Reply, Infallible> {
    match store.stats() {
        Ok(stats) => Ok(warp::reply::with_status(warp::reply::json(&stats), StatusCode::OK)),
        Err(e) => Ok(store_error_reply(&e)),
    }
}

async fn samples_handler(
    language: String,
    query: ListingQuery,
    store: Arc<DatasetStore>,
) -> Result<impl warp::Reply, Infallible> {
    match store.load_code_samples(&language) {
        Ok(Some(samples)) => {
            let total = samples.len();
            let items: Vec<_> = samples.into_iter().take(query.effective_limit()).collect();
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "language": language, "total": total, "items": items })),
                StatusCode::OK,
            ))
        }
        Ok(None) => Ok(error_reply(
            StatusCode::NOT_FOUND,
            &format!("no code samples collected for '{}'", language),
        )),
        Err(e) => Ok(store_error_reply(&e)),
    }
}

async fn qa_handler(
    tag: String,
    query: ListingQuery,
    store: Arc<DatasetStore>,
) -> Result<impl warp::Reply, Infallible> {
    match store.load_qa_pairs(&tag) {
        Ok(Some(pairs)) => {
            let matching: Vec<_> = match query.q.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                Some(term) => pairs.into_iter().filter(|p| p.matches(term)).collect(),
                None => pairs,
            };
            let total = matching.len();
            let items: Vec<_> = matching.into_iter().take(query.effective_limit()).collect();
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "tag": tag, "total": total, "items": items })),
                StatusCode::OK,
            ))
        }
        Ok(None) => Ok(error_reply(
            StatusCode::NOT_FOUND,
            &format!("no Q&A pairs collected for '{}'", tag),
        )),
        Err(e) => Ok(store_error_reply(&e)),
    }
}

async fn handle_rejection(rejection: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let reply = if rejection.is_not_found() {
        error_reply(StatusCode::NOT_FOUND, "not found")
    } else if rejection.find::<warp::reject::InvalidQuery>().is_some() {
        error_reply(StatusCode::BAD_REQUEST, "invalid query string")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        error_reply(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        error_reply(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
    };

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::code_sample::CodeSample;
    use crate::structs::qa_pair::QaPair;
    use tempfile::TempDir;

    fn seeded_server() -> (TempDir, DatasetServer) {
        let dir = TempDir::new().unwrap();
        let store = DatasetStore::new(dir.path());

        let samples: Vec<CodeSample> = (0..3)
            .map(|i| CodeSample {
                repo: "octo/repo".to_string(),
                file_path: format!("src/{}.rs", i),
                content: "fn main() {}".to_string(),
                language: "rust".to_string(),
                stars: 5,
            })
            .collect();
        store.save_code_samples("rust", &samples).unwrap();

        let pairs = vec![
            QaPair {
                question_title: "Borrow checker error".to_string(),
                question_body: "<p>E0502</p>".to_string(),
                answer_body: "<p>clone it</p>".to_string(),
                question_score: 3,
                answer_score: 2,
                tags: vec!["rust".to_string()],
                language: "rust".to_string(),
            },
            QaPair {
                question_title: "Lifetimes".to_string(),
                question_body: "<p>'a</p>".to_string(),
                answer_body: "<p>elision</p>".to_string(),
                question_score: 1,
                answer_score: 1,
                tags: vec!["rust".to_string()],
                language: "rust".to_string(),
            },
        ];
        store.save_qa_pairs("rust", &pairs).unwrap();

        (dir, DatasetServer::new(store, 0))
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, server) = seeded_server();

        let response = warp::test::request().path("/health").reply(&server.routes()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_samples_respect_limit() {
        let (_dir, server) = seeded_server();

        let response = warp::test::request()
            .path("/api/samples/rust?limit=2")
            .reply(&server.routes())
            .await;
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_qa_filter_is_case_insensitive() {
        let (_dir, server) = seeded_server();

        let response = warp::test::request()
            .path("/api/qa/rust?q=BORROW")
            .reply(&server.routes())
            .await;
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();

        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0]["question_title"], "Borrow checker error");
    }

    #[tokio::test]
    async fn test_unknown_language_is_404() {
        let (_dir, server) = seeded_server();

        let response = warp::test::request().path("/api/samples/cobol").reply(&server.routes()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats_lists_languages() {
        let (_dir, server) = seeded_server();

        let response = warp::test::request().path("/api/stats").reply(&server.routes()).await;
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();

        assert_eq!(body["languages"][0]["language"], "rust");
        assert_eq!(body["languages"][0]["code_samples"], 3);
        assert_eq!(body["languages"][0]["qa_pairs"], 2);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (_dir, server) = seeded_server();

        let response = warp::test::request().path("/nope").reply(&server.routes()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(String::from_utf8_lossy(response.body()).contains("not found"));
    }
}
