//! Countdown timer: one background task per presented question.
//!
//! The task calls `on_tick` once per interval until the callback returns
//! `false`. Dropping the `CountdownTimer` aborts the task, so replacing or
//! clearing the owner's slot cancels it on every exit path.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct CountdownTimer {
    epoch: u64,
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Spawns the countdown for the question presented at `epoch`.
    pub fn spawn<F, Fut>(epoch: u64, interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                if !on_tick().await {
                    break;
                }
            }
            debug!("Countdown for epoch {epoch} finished");
        });
        Self { epoch, handle }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn counting_timer(limit: u32, counter: Arc<AtomicU32>) -> CountdownTimer {
        CountdownTimer::spawn(1, Duration::from_secs(1), move || {
            let counter = counter.clone();
            async move { counter.fetch_add(1, Ordering::SeqCst) + 1 < limit }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_interval_until_callback_stops() {
        let counter = Arc::new(AtomicU32::new(0));
        let timer = counting_timer(3, counter.clone());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_ticks() {
        let counter = Arc::new(AtomicU32::new(0));
        let timer = counting_timer(100, counter.clone());

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);

        drop(timer);
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
