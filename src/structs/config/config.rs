use serde::{Deserialize, Serialize};
use crate::structs::config::collection_config::CollectionConfig;
use crate::structs::config::github_config::GitHubConfig;
use crate::structs::config::http_config::HttpConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::stackexchange_config::StackExchangeConfig;
use crate::structs::config::training_config::TrainingConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub collection: CollectionConfig,

    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub stackexchange: StackExchangeConfig,

    #[serde(default)]
    pub training: TrainingConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub http: HttpConfig,
}
