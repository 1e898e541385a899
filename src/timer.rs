//! Recurring clock timer.
//!
//! A background thread posts [`TimerEvent::Tick`] onto a channel once per
//! interval and wakes the UI. The thread never touches window state: the
//! controller drains the channel on the UI thread, so ticks are serialized
//! with user actions.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Callback asking the UI to process its event queue (e.g. `egui::Context::request_repaint`).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// A waker that does nothing, for headless use.
pub fn noop_waker() -> Waker {
    Arc::new(|| {})
}

/// Messages posted by the timer thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
}

/// Handle to a running recurring timer.
pub struct RecurringTimer {
    interval: Duration,
    stop_flag: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RecurringTimer {
    /// Starts posting ticks every `interval`.
    ///
    /// # Arguments
    /// * `interval` - Time between ticks
    /// * `sender` - Event queue the ticks are posted to
    /// * `waker` - Called after each tick is posted
    ///
    /// Fails only if the timer thread cannot be spawned.
    pub fn start(interval: Duration, sender: Sender<TimerEvent>, waker: Waker) -> io::Result<Self> {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let thread_flag = Arc::clone(&stop_flag);

        let handle = thread::Builder::new()
            .name("clock-timer".to_string())
            .spawn(move || run_timer(interval, &thread_flag, &sender, &waker))?;

        Ok(Self {
            interval,
            stop_flag,
            handle: Some(handle),
        })
    }

    /// A timer that never ticks.
    pub fn idle(interval: Duration) -> Self {
        Self {
            interval,
            stop_flag: Arc::new(AtomicBool::new(true)),
            handle: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True from a successful start until [`stop`](Self::stop) has been called.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stops the timer and waits for its thread to exit.
    ///
    /// Returns true the first time; later calls do nothing and return false.
    /// No tick is posted once this returns.
    pub fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        self.stop_flag.store(true, Ordering::SeqCst);
        handle.thread().unpark();
        let _ = handle.join();
        true
    }
}

impl Drop for RecurringTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_timer(interval: Duration, stop_flag: &AtomicBool, sender: &Sender<TimerEvent>, waker: &Waker) {
    let mut deadline = Instant::now() + interval;
    loop {
        // park_timeout may wake spuriously, so wait out the full deadline.
        loop {
            if stop_flag.load(Ordering::SeqCst) {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::park_timeout(deadline - now);
        }

        if sender.send(TimerEvent::Tick).is_err() {
            return;
        }
        waker();
        deadline += interval;
    }
}
