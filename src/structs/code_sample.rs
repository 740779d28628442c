use serde::{Deserialize, Serialize};

/// One harvested source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub repo: String,
    pub file_path: String,
    pub content: String,
    pub language: String,
    pub stars: u64,
}
