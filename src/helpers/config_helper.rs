use crate::config::constants::{
    DEFAULT_BASE_MODEL, DEFAULT_BATCH_SIZE, DEFAULT_DATA_DIR, DEFAULT_EPOCHS, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_LEARNING_RATE, DEFAULT_MAX_CODE_LENGTH, DEFAULT_MAX_QUESTIONS, DEFAULT_MAX_REPOS, DEFAULT_MIN_STARS,
    DEFAULT_SERVER_PORT, DEFAULT_TRAINING_OUTPUT_DIR, DEFAULT_TREE_REF, DEFAULT_USER_AGENT, GITHUB_API_URL,
    GITHUB_TOKEN_ENV, MAX_FILES_PER_REPO, MAX_FILE_CHARS, MAX_PAGE_SIZE, STACKEXCHANGE_API_URL,
    STACKEXCHANGE_KEY_ENV, SUPPORTED_LANGUAGES,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_languages() -> Vec<String> {
        SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_max_repos() -> usize {
        DEFAULT_MAX_REPOS
    }

    pub fn default_max_questions() -> usize {
        DEFAULT_MAX_QUESTIONS
    }

    pub fn default_data_dir() -> String {
        DEFAULT_DATA_DIR.to_string()
    }

    pub fn default_github_api_url() -> String {
        GITHUB_API_URL.to_string()
    }

    pub fn default_github_token_env() -> String {
        GITHUB_TOKEN_ENV.to_string()
    }

    pub fn default_min_stars() -> u32 {
        DEFAULT_MIN_STARS
    }

    pub fn default_tree_ref() -> String {
        DEFAULT_TREE_REF.to_string()
    }

    pub fn default_max_files_per_repo() -> usize {
        MAX_FILES_PER_REPO
    }

    pub fn default_max_file_chars() -> usize {
        MAX_FILE_CHARS
    }

    pub fn default_stackexchange_api_url() -> String {
        STACKEXCHANGE_API_URL.to_string()
    }

    pub fn default_stackexchange_key_env() -> String {
        STACKEXCHANGE_KEY_ENV.to_string()
    }

    pub fn default_site() -> String {
        "stackoverflow".to_string()
    }

    pub fn default_page_size() -> usize {
        MAX_PAGE_SIZE
    }

    pub fn default_base_model() -> String {
        DEFAULT_BASE_MODEL.to_string()
    }

    pub fn default_training_output_dir() -> String {
        DEFAULT_TRAINING_OUTPUT_DIR.to_string()
    }

    pub fn default_max_code_length() -> usize {
        DEFAULT_MAX_CODE_LENGTH
    }

    pub fn default_batch_size() -> usize {
        DEFAULT_BATCH_SIZE
    }

    pub fn default_learning_rate() -> f64 {
        DEFAULT_LEARNING_RATE
    }

    pub fn default_epochs() -> u32 {
        DEFAULT_EPOCHS
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_HTTP_TIMEOUT_SECS
    }

    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }
}
