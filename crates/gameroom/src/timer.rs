use flippy_core::*;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Timing for a live table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// How long both cards of a round stay visible.
    pub reveal: Duration,
    /// Period of the game clock.
    pub tick: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            reveal: REVEAL_DELAY,
            tick: TICK_INTERVAL,
        }
    }
}

/// Periodic clock for one session.
///
/// Sends `tag(epoch)` every period until stopped or dropped.
#[derive(Debug, Default)]
pub struct Ticker {
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn start<T, F>(&mut self, period: Duration, tx: UnboundedSender<T>, tag: F)
    where
        T: Send + 'static,
        F: Fn() -> T + Send + 'static,
    {
        self.stop();
        self.task = Some(tokio::spawn(async move {
            let mut clock = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                clock.tick().await;
                if tx.send(tag()).is_err() {
                    break;
                }
            }
        }));
    }
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
