use std::path::PathBuf;
use clap::{ArgAction, Parser};
use crate::enums::mode::Mode;
use crate::structs::config::config::Config;

#[derive(Parser, Debug)]
#[clap(name = "codeharvest")]
#[clap(about = "Collects GitHub code and StackOverflow Q&A as training data for code models", long_about = None)]
#[clap(version)]
pub struct Cli {
    /// Workflow to run
    #[clap(long, value_enum, default_value_t = Mode::Serve)]
    pub mode: Mode,

    /// Path to a TOML config file (default: ~/codeharvest/config.toml)
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Language to harvest; repeat to give several (overrides the config)
    #[clap(short, long = "language")]
    pub languages: Vec<String>,

    #[clap(long)]
    pub max_repos: Option<usize>,

    #[clap(long)]
    pub max_questions: Option<usize>,

    /// Directory holding harvested JSON
    #[clap(long)]
    pub data_dir: Option<String>,

    /// Where train mode writes its corpora
    #[clap(long)]
    pub output_dir: Option<String>,

    #[clap(short, long)]
    pub port: Option<u16>,

    /// Write a sample config to the config path and exit
    #[clap(long)]
    pub init_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Command-line values win over the file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if !self.languages.is_empty() {
            config.collection.languages = self.languages.clone();
        }
        if let Some(max_repos) = self.max_repos {
            config.collection.max_repos = max_repos;
        }
        if let Some(max_questions) = self.max_questions {
            config.collection.max_questions = max_questions;
        }
        if let Some(data_dir) = &self.data_dir {
            config.collection.data_dir = data_dir.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.training.output_dir = output_dir.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["codeharvest"]).unwrap();

        assert_eq!(cli.mode, Mode::Serve);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["codeharvest", "--mode", "deploy"]).is_err());
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "codeharvest", "--mode", "collect", "-l", "go", "-l", "rust", "--max-repos", "3", "-p", "8080", "-vv",
        ])
        .unwrap();
        let mut config = Config::default();

        cli.apply_overrides(&mut config);

        assert_eq!(cli.mode, Mode::Collect);
        assert_eq!(config.collection.languages, vec!["go".to_string(), "rust".to_string()]);
        assert_eq!(config.collection.max_repos, 3);
        assert_eq!(config.collection.max_questions, 5000);
        assert_eq!(config.server.port, 8080);
        assert_eq!(cli.log_level(), "trace");
    }
}
