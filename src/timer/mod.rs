//! One-shot timers keyed by overlay.
//!
//! A scheduled timer does not call back into anything; when it expires the
//! service reports a [`TimerFired`] and the owner decides what it means.
//! Cancellation is explicit through the returned [`TimerHandle`].

use crate::app::events::Event;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFired {
    pub key: String,
    pub handle: TimerHandle,
}

pub trait TimerService {
    /// Schedule a single expiry for `key` after `after`.
    fn schedule(&mut self, key: &str, after: Duration) -> TimerHandle;

    /// Cancel a scheduled expiry. Unknown or already-expired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Timer backed by the tokio runtime. Expiries are posted to the app event loop.
#[derive(Debug)]
pub struct TokioTimer {
    tx: mpsc::Sender<Event>,
    next_id: u64,
    tasks: HashMap<TimerHandle, AbortHandle>,
}

impl TokioTimer {
    pub fn new(tx: mpsc::Sender<Event>) -> Self {
        Self {
            tx,
            next_id: 1,
            tasks: HashMap::new(),
        }
    }
}

impl TimerService for TokioTimer {
    fn schedule(&mut self, key: &str, after: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let fired = TimerFired {
            key: key.to_string(),
            handle,
        };
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(Event::Timer(fired)).await;
        });
        self.tasks.insert(handle, task.abort_handle());
        tracing::trace!(?handle, key, ms = after.as_millis() as u64, "timer scheduled");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
            tracing::trace!(?handle, "timer cancelled");
        }
    }
}

/// Simulated clock for tests: nothing expires until [`ManualTimer::advance`] is called.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_id: u64,
    pending: Vec<(TimerHandle, Duration, String)>,
}

#[cfg(test)]
impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move simulated time forward and return every timer that expired, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerFired> {
        self.now += by;
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(_, deadline, _)| *deadline <= now);
        self.pending = rest;
        due.sort_by_key(|(handle, deadline, _)| (*deadline, *handle));
        due.into_iter()
            .map(|(handle, _, key)| TimerFired { key, handle })
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
impl TimerService for ManualTimer {
    fn schedule(&mut self, key: &str, after: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push((handle, self.now + after, key.to_string()));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_fires_once_in_order() {
        let mut timer = ManualTimer::new();
        let late = timer.schedule("b", Duration::from_secs(3));
        let early = timer.schedule("a", Duration::from_secs(1));

        assert!(timer.advance(Duration::from_millis(999)).is_empty());
        let fired = timer.advance(Duration::from_secs(5));
        assert_eq!(
            fired,
            vec![
                TimerFired { key: "a".into(), handle: early },
                TimerFired { key: "b".into(), handle: late },
            ]
        );
        assert!(timer.advance(Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn test_manual_timer_cancel() {
        let mut timer = ManualTimer::new();
        let h = timer.schedule("a", Duration::from_secs(1));
        timer.cancel(h);
        assert_eq!(timer.pending(), 0);
        assert!(timer.advance(Duration::from_secs(2)).is_empty());
    }

    #[tokio::test]
    async fn test_tokio_timer_posts_event() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = TokioTimer::new(tx);
        let handle = timer.schedule("clipboard", Duration::from_millis(5));

        match rx.recv().await {
            Some(Event::Timer(fired)) => {
                assert_eq!(fired.key, "clipboard");
                assert_eq!(fired.handle, handle);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_tokio_timer_cancel_suppresses_event() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = TokioTimer::new(tx);
        let handle = timer.schedule("clipboard", Duration::from_millis(20));
        timer.cancel(handle);

        let got = tokio::time::timeout(Duration::from_millis(80), rx.recv()).await;
        assert!(got.is_err(), "cancelled timer still fired");
    }
}
