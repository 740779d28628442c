use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub default_branch: Option<String>,
}
