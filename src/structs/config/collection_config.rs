use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CollectionConfig {
    #[serde(default = "ConfigHelper::default_languages")]
    pub languages: Vec<String>,

    #[serde(default = "ConfigHelper::default_max_repos")]
    pub max_repos: usize,

    #[serde(default = "ConfigHelper::default_max_questions")]
    pub max_questions: usize,

    #[serde(default = "ConfigHelper::default_data_dir")]
    pub data_dir: String,

    /// Pages whose paragraph text is added to the knowledge base on collect.
    #[serde(default)]
    pub web_urls: Vec<String>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            languages: ConfigHelper::default_languages(),
            max_repos: ConfigHelper::default_max_repos(),
            max_questions: ConfigHelper::default_max_questions(),
            data_dir: ConfigHelper::default_data_dir(),
            web_urls: Vec::new(),
        }
    }
}
