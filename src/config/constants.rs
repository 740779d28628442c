use std::time::Duration;

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const STACKEXCHANGE_API_URL: &str = "https://api.stackexchange.com/2.3";
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const STACKEXCHANGE_KEY_ENV: &str = "STACKEXCHANGE_KEY";

pub const DEFAULT_DATA_DIR: &str = "training_data/";
pub const DEFAULT_MAX_REPOS: usize = 1000;
pub const DEFAULT_MAX_QUESTIONS: usize = 5000;
pub const DEFAULT_MIN_STARS: u32 = 10;
pub const DEFAULT_TREE_REF: &str = "main";

/// Files at or above this many characters are dropped.
pub const MAX_FILE_CHARS: usize = 10_000;
pub const MAX_FILES_PER_REPO: usize = 10;

/// Hard ceiling both APIs put on a single page.
pub const MAX_PAGE_SIZE: usize = 100;

pub const GITHUB_REQUESTS_PER_MINUTE: u32 = 30;
pub const GITHUB_BURST_PER_SECOND: u32 = 5;
pub const STACKEXCHANGE_REQUESTS_PER_SECOND: u32 = 25;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_LISTING_LIMIT: usize = 50;
pub const MAX_LISTING_LIMIT: usize = 1000;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("codeharvest/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_BASE_MODEL: &str = "Salesforce/codegen-350M-mono";
pub const DEFAULT_TRAINING_OUTPUT_DIR: &str = "code_model_finetuned/";
pub const DEFAULT_MAX_CODE_LENGTH: usize = 2048;
pub const DEFAULT_BATCH_SIZE: usize = 16;
pub const DEFAULT_LEARNING_RATE: f64 = 5e-5;
pub const DEFAULT_EPOCHS: u32 = 3;
pub const TRAIN_SPLIT_RATIO: f64 = 0.8;

pub const GITHUB_DIR: &str = "github";
pub const STACKOVERFLOW_DIR: &str = "stackoverflow";
pub const WEB_DIR: &str = "web";
pub const WEB_PAGES_FILE: &str = "pages.json";
pub const COLLECTION_SUMMARY_FILE: &str = "collection_summary.json";

pub const SUPPORTED_LANGUAGES: &[&str] = &["python", "javascript", "java", "cpp", "go", "rust"];

pub const LANGUAGE_EXTENSIONS: &[(&str, &[&str])] = &[
    ("python", &[".py"]),
    ("javascript", &[".js", ".jsx", ".ts", ".tsx"]),
    ("java", &[".java"]),
    ("cpp", &[".cpp", ".cc", ".cxx", ".h", ".hpp"]),
    ("go", &[".go"]),
    ("rust", &[".rs"]),
];

pub fn extensions_for(language: &str) -> &'static [&'static str] {
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, exts)| *exts)
        .unwrap_or(&[])
}

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
