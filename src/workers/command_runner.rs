use std::path::Path;
use std::time::Instant;
use crate::enums::mode::Mode;
use crate::errors::HarvestResult;
use crate::services::collector::DataCollector;
use crate::services::dataset_store::DatasetStore;
use crate::services::training_dataset::TrainingDatasetBuilder;
use crate::structs::config::config::Config;
use crate::ui::dataset_server::DatasetServer;

pub struct CommandRunner {
    config: Config,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, mode: Mode) -> HarvestResult<()> {
        self.start_time = Some(Instant::now());

        let result = match mode {
            Mode::Collect => self.collect_command().await,
            Mode::Train => self.train_command().await,
            Mode::Serve => self.serve_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  {} completed in {:.2}s", mode.name(), duration.as_secs_f64());
        }

        result
    }

    async fn collect_command(&self) -> HarvestResult<()> {
        log::info!("📥 Collecting training data...");

        let collector = DataCollector::from_config(&self.config).map_err(|e| e.with_context("building API clients"))?;
        let summary = collector.collect_all().await?;
        summary.print_summary();

        Ok(())
    }

    async fn train_command(&self) -> HarvestResult<()> {
        log::info!("🏋️ Preparing training corpus...");

        let builder = TrainingDatasetBuilder::new(&self.config.collection.data_dir, self.config.training.clone());
        let manifest = builder.build(Path::new(&self.config.training.output_dir))?;

        log::info!("📝 Base model: {}", manifest.base_model);
        log::info!(
            "📝 {} epochs, batch size {}, learning rate {}",
            manifest.epochs, manifest.batch_size, manifest.learning_rate
        );
        log::info!("💡 Hand training_manifest.json to your fine-tuning job.");

        Ok(())
    }

    async fn serve_command(&self) -> HarvestResult<()> {
        log::info!("🌐 Starting dataset server...");

        let store = DatasetStore::new(&self.config.collection.data_dir);
        let server = DatasetServer::new(store, self.config.server.port);

        server
            .run(async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutting down dataset server...");
            })
            .await
    }
}
