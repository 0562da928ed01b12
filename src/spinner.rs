//! Terminal spinner shown while waiting on the hosted flow.

use std::future::Future;
use std::io::{IsTerminal, Write};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// A spinner drawn on stderr by a background task.
pub struct Spinner {
    handle: Option<JoinHandle<()>>,
    cancel: watch::Sender<bool>,
}

impl Spinner {
    /// Start drawing `message`. Draws nothing when stderr is not a terminal.
    pub fn start(message: &str) -> Self {
        let (cancel, mut cancel_rx) = watch::channel(false);
        if !std::io::stderr().is_terminal() {
            return Self {
                handle: None,
                cancel,
            };
        }

        let message = message.to_string();
        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                // clear line, return to column 0
                eprint!("\x1b[2K\r{frame} {message}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle: Some(handle),
            cancel,
        }
    }

    /// Stop and clear the spinner line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        if let Some(handle) = self.handle {
            let _ = handle.await;
        }
    }
}

/// Await `fut` with a spinner running.
pub async fn with_spinner<F: Future>(message: &str, fut: F) -> F::Output {
    let spinner = Spinner::start(message);
    let out = fut.await;
    spinner.stop().await;
    out
}
