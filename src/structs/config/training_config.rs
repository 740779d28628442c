use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TrainingConfig {
    #[serde(default = "ConfigHelper::default_base_model")]
    pub base_model: String,

    #[serde(default = "ConfigHelper::default_training_output_dir")]
    pub output_dir: String,

    /// Examples are cut to this many characters.
    #[serde(default = "ConfigHelper::default_max_code_length")]
    pub max_code_length: usize,

    #[serde(default = "ConfigHelper::default_batch_size")]
    pub batch_size: usize,

    #[serde(default = "ConfigHelper::default_learning_rate")]
    pub learning_rate: f64,

    #[serde(default = "ConfigHelper::default_epochs")]
    pub epochs: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            base_model: ConfigHelper::default_base_model(),
            output_dir: ConfigHelper::default_training_output_dir(),
            max_code_length: ConfigHelper::default_max_code_length(),
            batch_size: ConfigHelper::default_batch_size(),
            learning_rate: ConfigHelper::default_learning_rate(),
            epochs: ConfigHelper::default_epochs(),
        }
    }
}
