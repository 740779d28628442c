use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hyperparameters and corpus layout handed to an external trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingManifest {
    pub created_at: DateTime<Utc>,
    pub base_model: String,
    pub train_file: String,
    pub validation_file: String,
    pub train_examples: usize,
    pub validation_examples: usize,
    pub source_files: Vec<String>,
    pub max_length: usize,
    pub epochs: u32,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub warmup_steps: u32,
    pub logging_steps: u32,
    pub save_steps: u32,
    pub eval_steps: u32,
    pub save_total_limit: u32,
}
