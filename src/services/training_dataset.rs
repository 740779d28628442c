use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use chrono::Utc;
use serde_json::Value;
use crate::config::constants::{GITHUB_DIR, STACKOVERFLOW_DIR, TRAIN_SPLIT_RATIO};
use crate::enums::example_source::ExampleSource;
use crate::errors::{HarvestError, HarvestResult};
use crate::structs::config::training_config::TrainingConfig;
use crate::structs::training_example::TrainingExample;
use crate::structs::training_manifest::TrainingManifest;

const TRAIN_FILE: &str = "train.jsonl";
const VALIDATION_FILE: &str = "validation.jsonl";
const MANIFEST_FILE: &str = "training_manifest.json";

const WARMUP_STEPS: u32 = 500;
const LOGGING_STEPS: u32 = 100;
const SAVE_STEPS: u32 = 1000;
const EVAL_STEPS: u32 = 500;
const SAVE_TOTAL_LIMIT: u32 = 2;

/// Turns harvested JSON files into train/validation JSONL corpora.
pub struct TrainingDatasetBuilder {
    data_dir: PathBuf,
    config: TrainingConfig,
}

impl TrainingDatasetBuilder {
    pub fn new(data_dir: impl Into<PathBuf>, config: TrainingConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
        }
    }

    /// All `*.json` under the GitHub tree, then all under the StackOverflow tree.
    pub fn discover_files(&self) -> HarvestResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for source_dir in [GITHUB_DIR, STACKOVERFLOW_DIR] {
            let mut found = Vec::new();
            Self::collect_json_files(&self.data_dir.join(source_dir), &mut found)?;
            found.sort();
            files.extend(found);
        }

        Ok(files)
    }

    fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> HarvestResult<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        let entries = fs::read_dir(dir)
            .map_err(|e| HarvestError::file_error(&dir.display().to_string(), "read_dir", &e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                Self::collect_json_files(&path, files)?;
            } else if path.extension().and_then(|e| e.to_str()) == Some("json") {
                files.push(path);
            }
        }

        Ok(())
    }

    /// The first 80% of files train, the rest validate.
    pub fn split_files(files: &[PathBuf]) -> (&[PathBuf], &[PathBuf]) {
        let split_idx = (TRAIN_SPLIT_RATIO * files.len() as f64).floor() as usize;
        files.split_at(split_idx.min(files.len()))
    }

    pub fn truncate_chars(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => text[..byte_idx].to_string(),
            None => text.to_string(),
        }
    }

    /// Code records contribute their source; Q&A records a question/answer
    /// transcript. Anything else is ignored.
    pub fn examples_from_value(value: &Value, max_chars: usize) -> Vec<TrainingExample> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return Vec::new(),
        };

        items
            .iter()
            .filter_map(|item| {
                let field = |name: &str| item.get(name).and_then(Value::as_str).unwrap_or("");

                if let Some(content) = item.get("content").and_then(Value::as_str) {
                    Some((content.to_string(), ExampleSource::Code))
                } else if item.get("question_body").is_some() {
                    let text = format!(
                        "Question: {}\n{}\nAnswer: {}",
                        field("question_title"),
                        field("question_body"),
                        field("answer_body")
                    );
                    Some((text, ExampleSource::QuestionAnswer))
                } else {
                    None
                }
            })
            .map(|(text, source)| TrainingExample {
                text: Self::truncate_chars(&text, max_chars),
                source,
            })
            .collect()
    }

    /// Unreadable or malformed files are skipped with a warning.
    pub fn load_examples(&self, files: &[PathBuf]) -> Vec<TrainingExample> {
        let mut examples = Vec::new();

        for path in files {
            let parsed = fs::read_to_string(path)
                .map_err(HarvestError::from)
                .and_then(|content| serde_json::from_str::<Value>(&content).map_err(HarvestError::from));

            match parsed {
                Ok(value) => examples.extend(Self::examples_from_value(&value, self.config.max_code_length)),
                Err(e) => log::warn!("⚠️ Skipping {}: {}", path.display(), e),
            }
        }

        examples
    }

    fn write_jsonl(path: &Path, examples: &[TrainingExample]) -> HarvestResult<()> {
        let file = File::create(path)
            .map_err(|e| HarvestError::file_error(&path.display().to_string(), "create", &e.to_string()))?;
        let mut writer = BufWriter::new(file);

        for example in examples {
            serde_json::to_writer(&mut writer, example)?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn build(&self, output_dir: &Path) -> HarvestResult<TrainingManifest> {
        let files = self.discover_files()?;
        if files.is_empty() {
            return Err(HarvestError::config_error(
                &format!("no harvested JSON files under {}", self.data_dir.display()),
                Some("collection.data_dir"),
                Some("run with --mode collect first"),
            ));
        }

        let (train_files, validation_files) = Self::split_files(&files);
        log::info!(
            "📚 {} data files: {} for training, {} for validation",
            files.len(),
            train_files.len(),
            validation_files.len()
        );

        let train_examples = self.load_examples(train_files);
        let validation_examples = self.load_examples(validation_files);

        fs::create_dir_all(output_dir)
            .map_err(|e| HarvestError::file_error(&output_dir.display().to_string(), "create_dir", &e.to_string()))?;

        let train_path = output_dir.join(TRAIN_FILE);
        let validation_path = output_dir.join(VALIDATION_FILE);
        Self::write_jsonl(&train_path, &train_examples)?;
        Self::write_jsonl(&validation_path, &validation_examples)?;

        let manifest = TrainingManifest {
            created_at: Utc::now(),
            base_model: self.config.base_model.clone(),
            train_file: train_path.display().to_string(),
            validation_file: validation_path.display().to_string(),
            train_examples: train_examples.len(),
            validation_examples: validation_examples.len(),
            source_files: files.iter().map(|f| f.display().to_string()).collect(),
            max_length: self.config.max_code_length,
            epochs: self.config.epochs,
            batch_size: self.config.batch_size,
            learning_rate: self.config.learning_rate,
            warmup_steps: WARMUP_STEPS,
            logging_steps: LOGGING_STEPS,
            save_steps: SAVE_STEPS,
            eval_steps: EVAL_STEPS,
            save_total_limit: SAVE_TOTAL_LIMIT,
        };

        let manifest_path = output_dir.join(MANIFEST_FILE);
        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
            .map_err(|e| HarvestError::file_error(&manifest_path.display().to_string(), "write", &e.to_string()))?;

        log::info!(
            "✅ Wrote {} training and {} validation examples to {}",
            manifest.train_examples,
            manifest.validation_examples,
            output_dir.display()
        );

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_is_floor_of_eighty_percent() {
        let files: Vec<PathBuf> = (0..7).map(|i| PathBuf::from(format!("{}.json", i))).collect();

        let (train, validation) = TrainingDatasetBuilder::split_files(&files);

        assert_eq!(train.len(), 5);
        assert_eq!(validation.len(), 2);
    }

    #[test]
    fn test_single_file_goes_to_validation() {
        let files = vec![PathBuf::from("only.json")];

        let (train, validation) = TrainingDatasetBuilder::split_files(&files);

        assert!(train.is_empty());
        assert_eq!(validation.len(), 1);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(TrainingDatasetBuilder::truncate_chars("héllo", 2), "hé");
        assert_eq!(TrainingDatasetBuilder::truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_examples_from_mixed_records() {
        let value = json!([
            {"repo": "a/b", "file_path": "x.py", "content": "print(1)", "language": "python", "stars": 3},
            {"question_title": "T", "question_body": "B", "answer_body": "A", "tags": []},
            {"unrelated": true}
        ]);

        let examples = TrainingDatasetBuilder::examples_from_value(&value, 2048);

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].text, "print(1)");
        assert_eq!(examples[0].source, ExampleSource::Code);
        assert_eq!(examples[1].text, "Question: T\nB\nAnswer: A");
        assert_eq!(examples[1].source, ExampleSource::QuestionAnswer);
    }

    #[test]
    fn test_non_array_json_yields_nothing() {
        assert!(TrainingDatasetBuilder::examples_from_value(&json!({"content": "x"}), 10).is_empty());
    }
}
