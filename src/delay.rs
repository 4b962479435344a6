//! Pause between result page requests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

/// Waits between consecutive page fetches.
#[async_trait]
pub trait Pause: Send + Sync {
    /// Suspends the run for `duration`.
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPause;

#[async_trait]
impl Pause for TokioPause {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately and remembers every requested duration.
#[derive(Debug, Default)]
pub struct RecordingPause {
    calls: Mutex<Vec<Duration>>,
}

impl RecordingPause {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in call order.
    pub fn calls(&self) -> Vec<Duration> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Pause for RecordingPause {
    async fn pause(&self, duration: Duration) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_pause() {
        let pause = RecordingPause::new();
        pause.pause(Duration::from_secs(3)).await;
        pause.pause(Duration::from_secs(5)).await;
        assert_eq!(
            pause.calls(),
            vec![Duration::from_secs(3), Duration::from_secs(5)]
        );
    }

    #[tokio::test]
    async fn test_tokio_pause_waits() {
        let start = tokio::time::Instant::now();
        TokioPause.pause(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
