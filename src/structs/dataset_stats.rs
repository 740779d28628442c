use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: String,
    pub code_samples: usize,
    pub qa_pairs: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetStats {
    pub data_dir: String,
    pub languages: Vec<LanguageStats>,
    pub web_pages: usize,
}
