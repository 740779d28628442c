use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitHubConfig {
    #[serde(default = "ConfigHelper::default_github_api_url")]
    pub api_url: String,

    /// Name of the environment variable holding the API token.
    #[serde(default = "ConfigHelper::default_github_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_min_stars")]
    pub min_stars: u32,

    #[serde(default = "ConfigHelper::default_tree_ref")]
    pub tree_ref: String,

    #[serde(default = "ConfigHelper::default_max_files_per_repo")]
    pub max_files_per_repo: usize,

    #[serde(default = "ConfigHelper::default_max_file_chars")]
    pub max_file_chars: usize,
}

impl GitHubConfig {
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env).ok().filter(|t| !t.trim().is_empty())
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_github_api_url(),
            token_env: ConfigHelper::default_github_token_env(),
            min_stars: ConfigHelper::default_min_stars(),
            tree_ref: ConfigHelper::default_tree_ref(),
            max_files_per_repo: ConfigHelper::default_max_files_per_repo(),
            max_file_chars: ConfigHelper::default_max_file_chars(),
        }
    }
}
