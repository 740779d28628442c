use std::path::Path;
use std::sync::Arc;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::config::constants::{extensions_for, MAX_PAGE_SIZE};
use crate::errors::HarvestResult;
use crate::helpers::pagination::{collect_pages, Page};
use crate::services::dataset_store::DatasetStore;
use crate::structs::code_sample::CodeSample;
use crate::structs::config::github_config::GitHubConfig;
use crate::structs::github::content_response::ContentResponse;
use crate::structs::github::repository::Repository;
use crate::structs::github::search_response::SearchResponse;
use crate::structs::github::tree_response::{TreeEntry, TreeResponse};
use crate::traits::api_transport::ApiTransport;

pub struct GitHubScraper {
    transport: Arc<dyn ApiTransport>,
    config: GitHubConfig,
    store: DatasetStore,
}

impl GitHubScraper {
    pub fn new(transport: Arc<dyn ApiTransport>, config: GitHubConfig, store: DatasetStore) -> Self {
        Self {
            transport,
            config,
            store,
        }
    }

    /// Most-starred repositories for `language`, at most `max_repos` of them.
    pub async fn search_repositories(&self, language: &str, min_stars: u32, max_repos: usize) -> Vec<Repository> {
        let per_page = max_repos.clamp(1, MAX_PAGE_SIZE);

        collect_pages(max_repos, move |page| self.fetch_search_page(language, min_stars, per_page, page)).await
    }

    async fn fetch_search_page(
        &self,
        language: &str,
        min_stars: u32,
        per_page: usize,
        page: u32,
    ) -> HarvestResult<Page<Repository>> {
        let url = format!("{}/search/repositories", self.config.api_url);
        let query = vec![
            ("q".to_string(), format!("language:{} stars:>{}", language, min_stars)),
            ("sort".to_string(), "stars".to_string()),
            ("order".to_string(), "desc".to_string()),
            ("per_page".to_string(), per_page.to_string()),
            ("page".to_string(), page.to_string()),
        ];

        let response = self
            .transport
            .get(&url, &query)
            .await?
            .require_success("repository search")?;
        let search: SearchResponse = response.json()?;

        if search.incomplete_results {
            log::debug!("GitHub reported incomplete search results for {}", language);
        }

        let seen = (page as u64 - 1) * per_page as u64 + search.items.len() as u64;
        let has_more = search.items.len() == per_page && seen < search.total_count;
        Ok(Page::new(search.items, has_more))
    }

    /// Blob entries of the configured tree whose extension belongs to `language`.
    pub async fn get_repository_files(&self, repo_full_name: &str, language: &str) -> Vec<TreeEntry> {
        let url = format!(
            "{}/repos/{}/git/trees/{}",
            self.config.api_url, repo_full_name, self.config.tree_ref
        );
        let query = vec![("recursive".to_string(), "1".to_string())];

        let tree: TreeResponse = match self.fetch_json(&url, &query, "tree listing").await {
            Some(tree) => tree,
            None => return Vec::new(),
        };

        if tree.truncated {
            log::debug!("Tree for {} was truncated by GitHub", repo_full_name);
        }

        tree.tree
            .into_iter()
            .filter(|entry| entry.is_blob() && Self::is_code_file(&entry.path, language))
            .collect()
    }

    pub async fn download_file_content(&self, repo_full_name: &str, file_path: &str) -> Option<String> {
        let encoded_path = file_path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let url = format!("{}/repos/{}/contents/{}", self.config.api_url, repo_full_name, encoded_path);

        let content: ContentResponse = self.fetch_json(&url, &[], "file download").await?;

        if let Some(encoding) = &content.encoding {
            if encoding != "base64" {
                log::debug!("Skipping {}:{} with encoding {}", repo_full_name, file_path, encoding);
                return None;
            }
        }

        Self::decode_content(&content.content)
    }

    pub fn is_code_file(file_path: &str, language: &str) -> bool {
        let extension = match Path::new(file_path).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!(".{}", ext.to_lowercase()),
            None => return false,
        };

        extensions_for(language).contains(&extension.as_str())
    }

    /// GitHub wraps base64 payloads at 60 columns; invalid UTF-8 is replaced.
    pub fn decode_content(content: &str) -> Option<String> {
        let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();

        match STANDARD.decode(compact.as_bytes()) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                log::debug!("Invalid base64 content: {}", e);
                None
            }
        }
    }

    pub fn accepts_size(&self, content: &str) -> bool {
        content.chars().count() < self.config.max_file_chars
    }

    /// Harvests up to `max_files_per_repo` candidate files from each matching
    /// repository and persists the result for `language`.
    pub async fn scrape_and_save(&self, language: &str, max_repos: usize) -> HarvestResult<Vec<CodeSample>> {
        DatasetStore::validate_name(language)?;
        let repos = self.search_repositories(language, self.config.min_stars, max_repos).await;
        log::debug!("🔎 Found {} {} repositories", repos.len(), language);

        let mut code_samples = Vec::new();

        for repo in &repos {
            log::debug!("📦 Processing {}...", repo.full_name);
            let files = self.get_repository_files(&repo.full_name, language).await;

            for file_info in files.iter().take(self.config.max_files_per_repo) {
                let content = match self.download_file_content(&repo.full_name, &file_info.path).await {
                    Some(content) => content,
                    None => continue,
                };

                if content.is_empty() || !self.accepts_size(&content) {
                    log::debug!("Skipping {}:{} ({} chars)", repo.full_name, file_info.path, content.chars().count());
                    continue;
                }

                code_samples.push(CodeSample {
                    repo: repo.full_name.clone(),
                    file_path: file_info.path.clone(),
                    content,
                    language: language.to_string(),
                    stars: repo.stargazers_count,
                });
            }
        }

        let path = self.store.save_code_samples(language, &code_samples)?;
        log::debug!("💾 Saved {} code samples to {}", code_samples.len(), path.display());

        Ok(code_samples)
    }

    /// Any failure here means "skip this item".
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(String, String)],
        operation: &str,
    ) -> Option<T> {
        let result = match self.transport.get(url, query).await {
            Ok(response) => response.require_success(operation).and_then(|r| r.json::<T>()),
            Err(e) => Err(e),
        };

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("⚠️ {} failed for {}: {}", operation, url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_table() {
        assert!(GitHubScraper::is_code_file("src/main.rs", "rust"));
        assert!(GitHubScraper::is_code_file("lib/App.TSX", "javascript"));
        assert!(GitHubScraper::is_code_file("include/vec.hpp", "cpp"));
        assert!(!GitHubScraper::is_code_file("setup.py", "rust"));
        assert!(!GitHubScraper::is_code_file("Makefile", "cpp"));
        assert!(!GitHubScraper::is_code_file("main.rs", "haskell"));
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert!(!GitHubScraper::is_code_file(".py", "python"));
    }

    #[test]
    fn test_decode_wrapped_base64() {
        // "print('hello')\n" split the way the contents API wraps lines
        let decoded = GitHubScraper::decode_content("cHJpbnQoJ2hl\nbGxvJykK\n").unwrap();

        assert_eq!(decoded, "print('hello')\n");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(GitHubScraper::decode_content("not*base64!").is_none());
    }
}
