use std::process::ExitCode;
use clap::Parser;
use codeharvest::config::config_manager::ConfigManager;
use codeharvest::errors::{ErrorHandler, HarvestError};
use codeharvest::structs::cli::Cli;
use codeharvest::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp_secs()
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), HarvestError> {
    if cli.init_config {
        let path = match cli.config.clone().or_else(ConfigManager::default_config_path) {
            Some(path) => path,
            None => return Err(HarvestError::config_error("no home directory to place the config in", None, Some("pass --config PATH"))),
        };
        return ConfigManager::create_sample_config(&path);
    }

    let mut config = ConfigManager::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    if let Err(errors) = ConfigManager::validate_config(&config) {
        for error in &errors {
            log::error!("❌ {}", error);
        }
        return Err(HarvestError::config_error(
            &format!("{} configuration problem(s)", errors.len()),
            None,
            Some("fix the values above or run with --init-config to start from a sample"),
        ));
    }

    CommandRunner::new(config).run_command(cli.mode).await
}
