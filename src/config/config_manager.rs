use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{MAX_FILES_PER_REPO, MAX_FILE_CHARS, MAX_PAGE_SIZE};
use crate::errors::{HarvestError, HarvestResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join("codeharvest/config.toml"))
    }

    /// Loads the explicit path if given, else the per-user config, else defaults.
    pub fn load(explicit: Option<&Path>) -> HarvestResult<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(HarvestError::ConfigurationFile {
                    path: path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No config file found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> HarvestResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| HarvestError::ConfigurationFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> HarvestResult<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: &Path) -> HarvestResult<()> {
        if path.exists() {
            return Err(HarvestError::ConfigurationFile {
                path: path.display().to_string(),
                reason: "file already exists, refusing to overwrite it".to_string(),
            });
        }

        let sample_config = r#"# codeharvest configuration

[collection]
languages = ["python", "javascript", "java", "cpp", "go", "rust"]
max_repos = 1000
max_questions = 5000
data_dir = "training_data/"
# Pages whose <p> text is saved under data_dir/web/ on collect
web_urls = []

[github]
api_url = "https://api.github.com"
# Environment variable holding a personal access token
token_env = "GITHUB_TOKEN"
min_stars = 10
tree_ref = "main"
max_files_per_repo = 10
max_file_chars = 10000

[stackexchange]
api_url = "https://api.stackexchange.com/2.3"
key_env = "STACKEXCHANGE_KEY"
site = "stackoverflow"
page_size = 100

[training]
base_model = "Salesforce/codegen-350M-mono"
output_dir = "code_model_finetuned/"
max_code_length = 2048
batch_size = 16
learning_rate = 5e-5
epochs = 3

[server]
port = 3000

[http]
timeout_secs = 30
"#;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)
            .map_err(|e| HarvestError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let collection = &config.collection;

        if collection.languages.is_empty() {
            errors.push("collection.languages must name at least one language".to_string());
        }

        let mut names = std::collections::HashSet::new();
        for language in &collection.languages {
            if language.trim().is_empty() {
                errors.push("collection.languages contains an empty entry".to_string());
            } else if !names.insert(language) {
                errors.push(format!("Duplicate language: {}", language));
            }
        }

        if collection.max_repos == 0 {
            errors.push("collection.max_repos must be greater than 0".to_string());
        }
        if collection.max_questions == 0 {
            errors.push("collection.max_questions must be greater than 0".to_string());
        }
        if config.github.max_files_per_repo == 0 || config.github.max_files_per_repo > MAX_FILES_PER_REPO {
            errors.push(format!(
                "github.max_files_per_repo must be between 1 and {}, got {}",
                MAX_FILES_PER_REPO, config.github.max_files_per_repo
            ));
        }
        if config.github.max_file_chars == 0 || config.github.max_file_chars > MAX_FILE_CHARS {
            errors.push(format!(
                "github.max_file_chars must be between 1 and {}, got {}",
                MAX_FILE_CHARS, config.github.max_file_chars
            ));
        }
        if config.stackexchange.page_size == 0 || config.stackexchange.page_size > MAX_PAGE_SIZE {
            errors.push(format!(
                "stackexchange.page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, config.stackexchange.page_size
            ));
        }
        if config.training.learning_rate <= 0.0 || !config.training.learning_rate.is_finite() {
            errors.push(format!("training.learning_rate must be positive, got {}", config.training.learning_rate));
        }
        if config.training.batch_size == 0 {
            errors.push("training.batch_size must be greater than 0".to_string());
        }
        if config.server.port == 0 {
            errors.push("server.port must be greater than 0".to_string());
        }

        for url in &collection.web_urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.push(format!("collection.web_urls entry is not an http(s) URL: {}", url));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = ConfigManager::parse("").unwrap();

        assert_eq!(config.collection.languages.len(), 6);
        assert_eq!(config.collection.max_repos, 1000);
        assert_eq!(config.collection.max_questions, 5000);
        assert_eq!(config.github.max_file_chars, 10_000);
        assert_eq!(config.github.max_files_per_repo, 10);
        assert_eq!(config.stackexchange.page_size, 100);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = ConfigManager::parse("[collection]\nlanguages = [\"rust\"]\nmax_repos = 5\n").unwrap();

        assert_eq!(config.collection.languages, vec!["rust".to_string()]);
        assert_eq!(config.collection.max_repos, 5);
        assert_eq!(config.collection.max_questions, 5000);
        assert_eq!(config.training.batch_size, 16);
    }

    #[test]
    fn test_sample_config_round_trips_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");

        ConfigManager::create_sample_config(&path).unwrap();
        let config = ConfigManager::load(Some(&path)).unwrap();

        assert!(ConfigManager::validate_config(&config).is_ok());
        assert!((config.training.learning_rate - 5e-5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = ConfigManager::load(Some(&dir.path().join("absent.toml")));

        assert!(matches!(result, Err(HarvestError::ConfigurationFile { .. })));
    }

    #[test]
    fn test_sample_config_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let result = ConfigManager::create_sample_config(&path);

        assert!(matches!(result, Err(HarvestError::ConfigurationFile { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[server]\nport = 8080\n");
    }

    #[test]
    fn test_file_size_ceiling_can_only_tighten() {
        let mut config = ConfigManager::parse("[github]\nmax_file_chars = 50000\n").unwrap();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("github.max_file_chars"));

        config.github.max_file_chars = 4000;
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn test_files_per_repo_cap_can_only_tighten() {
        let mut config = ConfigManager::parse("[github]\nmax_files_per_repo = 50\n").unwrap();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("github.max_files_per_repo"));

        config.github.max_files_per_repo = 3;
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let mut config = Config::default();
        config.collection.languages = vec!["go".to_string(), "go".to_string()];
        config.collection.max_repos = 0;
        config.stackexchange.page_size = 250;
        config.server.port = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("Duplicate language: go")));
    }
}
