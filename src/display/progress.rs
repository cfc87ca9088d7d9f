//! Spinner for CLI commands waiting on the review service

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

const SPINNER_UPDATE_INTERVAL_MS: u64 = 100;
const CLEAR_LINE_WIDTH: usize = 100;
const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner drawn on stderr so stdout stays clean for tables and JSON.
///
/// When stderr is not a terminal the spinner stays silent.
pub struct ProgressSpinner {
    message: String,
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
    enabled: bool,
}

impl ProgressSpinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
            enabled: atty::is(atty::Stream::Stderr),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn start(&mut self) {
        if !self.enabled || self.handle.is_some() {
            return;
        }

        self.running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.running);
        let message = self.message.clone();

        self.handle = Some(thread::spawn(move || {
            let mut index = 0;
            let mut stderr = io::stderr();

            while running.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", SPINNER_CHARS[index], message);
                let _ = stderr.flush();
                index = (index + 1) % SPINNER_CHARS.len();
                thread::sleep(Duration::from_millis(SPINNER_UPDATE_INTERVAL_MS));
            }

            let _ = write!(stderr, "\r{:<width$}\r", "", width = CLEAR_LINE_WIDTH);
            let _ = stderr.flush();
        }));
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ProgressSpinner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_without_start() {
        let mut spinner = ProgressSpinner::new("Loading");
        spinner.stop();
        assert!(!spinner.is_running());
    }

    #[test]
    fn test_start_stop() {
        let mut spinner = ProgressSpinner::new("Loading");
        spinner.start();
        spinner.stop();
        assert!(!spinner.is_running());
    }
}
