use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::constants::{COLLECTION_SUMMARY_FILE, GITHUB_DIR, STACKOVERFLOW_DIR, WEB_DIR, WEB_PAGES_FILE};
use crate::errors::{HarvestError, HarvestResult};
use crate::structs::code_sample::CodeSample;
use crate::structs::collection_summary::CollectionSummary;
use crate::structs::dataset_stats::{DatasetStats, LanguageStats};
use crate::structs::qa_pair::QaPair;
use crate::structs::web_page::WebPage;

const QA_SUFFIX: &str = "_qa.json";

/// On-disk layout of harvested records, one JSON array per language or tag.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    root: PathBuf,
}

impl DatasetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Language and tag names end up in file paths, so only a plain
    /// identifier alphabet is accepted.
    pub fn validate_name(name: &str) -> HarvestResult<()> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.' | '-' | '_'));

        if valid {
            Ok(())
        } else {
            Err(HarvestError::validation_error("name", name, "letters, digits and + # . - _ only"))
        }
    }

    pub fn github_dir(&self) -> PathBuf {
        self.root.join(GITHUB_DIR)
    }

    pub fn stackoverflow_dir(&self) -> PathBuf {
        self.root.join(STACKOVERFLOW_DIR)
    }

    pub fn code_samples_path(&self, language: &str) -> PathBuf {
        self.github_dir().join(language).join(format!("{}_samples.json", language))
    }

    pub fn qa_pairs_path(&self, tag: &str) -> PathBuf {
        self.stackoverflow_dir().join(format!("{}{}", tag, QA_SUFFIX))
    }

    pub fn web_pages_path(&self) -> PathBuf {
        self.root.join(WEB_DIR).join(WEB_PAGES_FILE)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.root.join(COLLECTION_SUMMARY_FILE)
    }

    pub fn save_code_samples(&self, language: &str, samples: &[CodeSample]) -> HarvestResult<PathBuf> {
        Self::validate_name(language)?;
        let path = self.code_samples_path(language);
        Self::write_json(&path, &samples)?;
        Ok(path)
    }

    pub fn save_qa_pairs(&self, tag: &str, pairs: &[QaPair]) -> HarvestResult<PathBuf> {
        Self::validate_name(tag)?;
        let path = self.qa_pairs_path(tag);
        Self::write_json(&path, &pairs)?;
        Ok(path)
    }

    pub fn save_web_pages(&self, pages: &[WebPage]) -> HarvestResult<PathBuf> {
        let path = self.web_pages_path();
        Self::write_json(&path, &pages)?;
        Ok(path)
    }

    pub fn save_summary(&self, summary: &CollectionSummary) -> HarvestResult<PathBuf> {
        let path = self.summary_path();
        Self::write_json(&path, summary)?;
        Ok(path)
    }

    /// `None` when nothing was ever collected for the language.
    pub fn load_code_samples(&self, language: &str) -> HarvestResult<Option<Vec<CodeSample>>> {
        Self::validate_name(language)?;
        Self::read_json(&self.code_samples_path(language))
    }

    pub fn load_qa_pairs(&self, tag: &str) -> HarvestResult<Option<Vec<QaPair>>> {
        Self::validate_name(tag)?;
        Self::read_json(&self.qa_pairs_path(tag))
    }

    pub fn load_web_pages(&self) -> HarvestResult<Option<Vec<WebPage>>> {
        Self::read_json(&self.web_pages_path())
    }

    /// Every language or tag with at least one file on disk, sorted.
    pub fn list_languages(&self) -> HarvestResult<Vec<String>> {
        let mut names = BTreeSet::new();

        for entry in Self::read_dir_if_exists(&self.github_dir())? {
            if entry.is_dir() {
                if let Some(name) = entry.file_name().and_then(|n| n.to_str()) {
                    names.insert(name.to_string());
                }
            }
        }

        for entry in Self::read_dir_if_exists(&self.stackoverflow_dir())? {
            if let Some(tag) = entry
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(QA_SUFFIX))
            {
                names.insert(tag.to_string());
            }
        }

        Ok(names.into_iter().collect())
    }

    pub fn stats(&self) -> HarvestResult<DatasetStats> {
        let mut languages = Vec::new();

        for language in self.list_languages()? {
            if Self::validate_name(&language).is_err() {
                continue;
            }
            let code_samples = self.load_code_samples(&language)?.map_or(0, |s| s.len());
            let qa_pairs = self.load_qa_pairs(&language)?.map_or(0, |p| p.len());
            languages.push(LanguageStats {
                language,
                code_samples,
                qa_pairs,
            });
        }

        Ok(DatasetStats {
            data_dir: self.root.display().to_string(),
            languages,
            web_pages: self.load_web_pages()?.map_or(0, |p| p.len()),
        })
    }

    fn read_dir_if_exists(dir: &Path) -> HarvestResult<Vec<PathBuf>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(dir)
            .map_err(|e| HarvestError::file_error(&dir.display().to_string(), "read_dir", &e.to_string()))?;
        Ok(entries.flatten().map(|e| e.path()).collect())
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> HarvestResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .map_err(|e| HarvestError::file_error(&path.display().to_string(), "read", &e.to_string()))?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Pretty-printed UTF-8, written to a sibling temp file and renamed into place.
    fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> HarvestResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| HarvestError::file_error(&parent.display().to_string(), "create_dir", &e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(value)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .map_err(|e| HarvestError::file_error(&tmp_path.display().to_string(), "write", &e.to_string()))?;
        fs::rename(&tmp_path, path)
            .map_err(|e| HarvestError::file_error(&path.display().to_string(), "rename", &e.to_string()))?;
        Ok(())
    }
}
