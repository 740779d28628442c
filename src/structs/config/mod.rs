pub mod collection_config;
pub mod config;
pub mod github_config;
pub mod http_config;
pub mod server_config;
pub mod stackexchange_config;
pub mod training_config;
