use std::io::{IsTerminal, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stderr spinner shown while a harvest step runs. Does nothing when stderr
/// is not a terminal, so log output stays clean in pipes and CI.
pub struct ProgressSpinner {
    message: String,
    enabled: bool,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl ProgressSpinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            enabled: std::io::stderr().is_terminal(),
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        if !self.enabled {
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(150));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, FRAMES[frame]);
                        std::io::stderr().flush().ok();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        if self.enabled {
            eprint!("\r\x1b[K");
            std::io::stderr().flush().ok();
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        log::info!("✅ {}", final_message);
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        log::error!("❌ {}", error_message);
    }
}
