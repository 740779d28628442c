use serde::{Deserialize, Serialize};
use crate::enums::example_source::ExampleSource;

/// One line of a JSONL training corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub source: ExampleSource,
}
