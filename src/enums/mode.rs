use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Harvest GitHub code and StackOverflow Q&A into the data directory
    Collect,
    /// Turn harvested records into train/validation corpora
    Train,
    /// Serve the harvested records over HTTP
    #[default]
    Serve,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Collect => "collect",
            Self::Train => "train",
            Self::Serve => "serve",
        }
    }
}
