use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: ConfigHelper::default_timeout_secs(),
            user_agent: ConfigHelper::default_user_agent(),
        }
    }
}
