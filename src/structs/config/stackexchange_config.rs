use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StackExchangeConfig {
    #[serde(default = "ConfigHelper::default_stackexchange_api_url")]
    pub api_url: String,

    #[serde(default = "ConfigHelper::default_stackexchange_key_env")]
    pub key_env: String,

    #[serde(default = "ConfigHelper::default_site")]
    pub site: String,

    #[serde(default = "ConfigHelper::default_page_size")]
    pub page_size: usize,
}

impl StackExchangeConfig {
    pub fn key(&self) -> Option<String> {
        std::env::var(&self.key_env).ok().filter(|k| !k.trim().is_empty())
    }
}

impl Default for StackExchangeConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_stackexchange_api_url(),
            key_env: ConfigHelper::default_stackexchange_key_env(),
            site: ConfigHelper::default_site(),
            page_size: ConfigHelper::default_page_size(),
        }
    }
}
