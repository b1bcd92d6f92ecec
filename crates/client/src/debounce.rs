//! Trailing-edge debouncer.
//!
//! Holds at most one timer task. Scheduling aborts the outstanding timer and
//! starts a new one, so a burst of calls runs the job once, `delay` after the
//! last call. The job itself is spawned detached when the timer fires and is
//! never aborted.
//!
//! A fired timer and [`Debouncer::cancel`] settle under the same lock: a
//! timer claims its job only if it is still the current generation, so each
//! scheduled job is either run by the timer or reported as cancelled, never
//! both.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Default)]
struct Slot {
    /// Bumped by every schedule and cancel; a timer holding an older value is stale.
    generation: u64,
    /// The unclaimed timer, if any.
    timer: Option<JoinHandle<()>>,
}

pub struct Debouncer {
    delay: Duration,
    slot: Arc<Mutex<Slot>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the timer with `job` as the work to run when it fires.
    pub async fn schedule<F, Fut>(&self, job: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        // Measured from the call, not from when the timer task is first polled.
        let deadline = tokio::time::Instant::now() + self.delay;

        let mut slot = self.slot.lock().await;
        slot.generation += 1;
        let generation = slot.generation;

        let shared = Arc::clone(&self.slot);
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let mut slot = shared.lock().await;
            if slot.generation != generation {
                return;
            }
            slot.timer = None;
            tokio::spawn(job());
        });

        if let Some(previous) = slot.timer.replace(handle) {
            previous.abort();
        }
    }

    /// Drop the outstanding timer. Returns `true` if it had not claimed its
    /// job yet, in which case the job will never run.
    pub async fn cancel(&self) -> bool {
        let mut slot = self.slot.lock().await;
        slot.generation += 1;
        match slot.timer.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub async fn is_pending(&self) -> bool {
        self.slot.lock().await.timer.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.try_lock() {
            slot.generation += 1;
            if let Some(handle) = slot.timer.take() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn counting_job(count: &Arc<AtomicUsize>) -> impl FnOnce() -> std::future::Ready<()> {
        let count = Arc::clone(count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    /// Let spawned tasks observe the current (paused) clock.
    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn burst_runs_job_once_after_last_call() {
        let count = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_secs(8));

        for _ in 0..3 {
            debouncer.schedule(counting_job(&count)).await;
            tokio::time::advance(Duration::from_secs(5)).await;
            settle().await;
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(debouncer.is_pending().await);

        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending().await);
    }

    #[tokio::test(start_paused = true)]
    async fn calls_separated_by_silence_run_twice() {
        let count = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_secs(8));

        debouncer.schedule(counting_job(&count)).await;
        tokio::time::advance(Duration::from_secs(9)).await;
        settle().await;

        debouncer.schedule(counting_job(&count)).await;
        tokio::time::advance(Duration::from_secs(9)).await;
        settle().await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_the_job() {
        let count = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_secs(8));

        debouncer.schedule(counting_job(&count)).await;
        assert!(debouncer.cancel().await);
        assert!(!debouncer.cancel().await);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn cancel_and_fire_never_both_win() {
        const ROUNDS: usize = 500;
        let count = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::ZERO);

        let mut cancelled = 0;
        for _ in 0..ROUNDS {
            debouncer.schedule(counting_job(&count)).await;
            tokio::task::yield_now().await;
            if debouncer.cancel().await {
                cancelled += 1;
            }
        }

        // Let detached jobs from timers that won the race finish.
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while count.load(Ordering::SeqCst) + cancelled < ROUNDS
            && tokio::time::Instant::now() < deadline
        {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(count.load(Ordering::SeqCst) + cancelled, ROUNDS);
    }
}
