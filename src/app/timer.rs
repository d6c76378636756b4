#![allow(dead_code)]
//! Round countdown running on its own thread
//!
//! The run generation, the running flag and the remaining seconds are packed
//! into one atomic word. Every foreground command and every tick of the loop
//! is a single compare-and-swap on that word, so a reset, stop or start can
//! never interleave with a tick halfway through. A loop exits on the first
//! tick after its generation is no longer current, so no loop outlives a stop
//! or restart by more than one tick.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default countdown granularity
pub const TICK: Duration = Duration::from_secs(1);

/// Longest countdown that fits the packed state
pub const MAX_SECONDS: u32 = 0x7fff_ffff;

const REMAINING_MASK: u64 = MAX_SECONDS as u64;
const RUNNING_BIT: u64 = 1 << 31;

/// Callback run when a countdown run reaches zero, given that run's id
pub type ZeroListener = Arc<dyn Fn(u32) + Send + Sync>;

/// Snapshot of the packed countdown word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    generation: u32,
    running: bool,
    remaining: u32,
}

impl State {
    fn pack(self) -> u64 {
        let running = if self.running { RUNNING_BIT } else { 0 };
        (u64::from(self.generation) << 32) | running | (u64::from(self.remaining) & REMAINING_MASK)
    }

    fn unpack(bits: u64) -> Self {
        Self {
            generation: (bits >> 32) as u32,
            running: bits & RUNNING_BIT != 0,
            remaining: (bits & REMAINING_MASK) as u32,
        }
    }
}

/// State shared between the foreground and the countdown thread
struct Shared {
    duration: AtomicU32,
    state: AtomicU64,
    listeners: Mutex<Vec<ZeroListener>>,
}

impl Shared {
    fn load(&self) -> State {
        State::unpack(self.state.load(Ordering::SeqCst))
    }

    /// Atomically replace the state with `f(state)`.
    ///
    /// Returns the new state, or `None` if `f` declined the transition.
    fn update(&self, mut f: impl FnMut(State) -> Option<State>) -> Option<State> {
        let mut current = self.state.load(Ordering::SeqCst);
        loop {
            let next = f(State::unpack(current))?;
            match self.state.compare_exchange_weak(
                current,
                next.pack(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return Some(next),
                Err(actual) => current = actual,
            }
        }
    }
}

/// A countdown that ticks once per [`TICK`] on a background thread.
pub struct Countdown {
    shared: Arc<Shared>,
    tick: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Countdown {
    /// Create a stopped countdown of `seconds`
    pub fn new(seconds: u32) -> Self {
        Self::with_tick(seconds, TICK)
    }

    /// Create a stopped countdown with a custom tick length (for testing).
    pub fn with_tick(seconds: u32, tick: Duration) -> Self {
        let seconds = seconds.min(MAX_SECONDS);
        let state = State {
            generation: 0,
            running: false,
            remaining: seconds,
        };
        Self {
            shared: Arc::new(Shared {
                duration: AtomicU32::new(seconds),
                state: AtomicU64::new(state.pack()),
                listeners: Mutex::new(Vec::new()),
            }),
            tick,
            handle: None,
        }
    }

    /// Set a new duration and restore the remaining time to it.
    pub fn configure(&self, seconds: u32) {
        let seconds = seconds.min(MAX_SECONDS);
        self.shared.duration.store(seconds, Ordering::SeqCst);
        self.shared.update(|s| {
            Some(State {
                remaining: seconds,
                ..s
            })
        });
    }

    /// Add a callback to run once each time a run reaches zero.
    pub fn add_zero_listener(&self, listener: ZeroListener) {
        if let Ok(mut listeners) = self.shared.listeners.lock() {
            listeners.push(listener);
        }
    }

    /// Start counting down from the configured duration.
    ///
    /// Starting while already running re-arms the running loop instead of
    /// spawning a second one.
    pub fn start(&mut self) {
        let duration = self.duration_seconds();
        let mut spawn = false;
        let Some(state) = self.shared.update(|s| {
            spawn = !s.running;
            Some(if s.running {
                State {
                    remaining: duration,
                    ..s
                }
            } else {
                State {
                    generation: s.generation.wrapping_add(1),
                    running: true,
                    remaining: duration,
                }
            })
        }) else {
            return;
        };

        if spawn {
            let shared = Arc::clone(&self.shared);
            let tick = self.tick;
            // A stopped loop exits on its own within a tick; the handle is not joined.
            self.handle = Some(thread::spawn(move || run(shared, state.generation, tick)));
        }
    }

    /// Stop the countdown and force the remaining time to zero.
    ///
    /// Zero listeners are not called.
    pub fn stop(&self) {
        self.shared.update(|s| {
            Some(State {
                generation: s.generation.wrapping_add(1),
                running: false,
                remaining: 0,
            })
        });
    }

    /// Restore the remaining time to the configured duration without
    /// changing whether the countdown is running.
    ///
    /// A running loop decrements from the restored value on its next tick.
    pub fn reset(&self) {
        let duration = self.duration_seconds();
        self.shared.update(|s| {
            Some(State {
                remaining: duration,
                ..s
            })
        });
    }

    /// Id of the current run. Changes on every fresh start and on stop.
    pub fn run_id(&self) -> u32 {
        self.shared.load().generation
    }

    /// Whole seconds left
    pub fn remaining_seconds(&self) -> u32 {
        self.shared.load().remaining
    }

    /// Configured duration in seconds
    pub fn duration_seconds(&self) -> u32 {
        self.shared.duration.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.shared.load().running
    }

    /// Remaining time as `M:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds())
    }

    /// Run the zero listeners as if run `run` had just expired (for testing).
    #[cfg(test)]
    pub(crate) fn fire_zero_listeners(&self, run: u32) {
        notify_zero(&self.shared, run);
    }

    /// Wait for the most recent loop to finish (for testing).
    #[cfg(test)]
    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Format seconds as minutes and zero-padded seconds, e.g. `3:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// The countdown loop for one generation.
fn run(shared: Arc<Shared>, generation: u32, tick: Duration) {
    loop {
        thread::sleep(tick);

        let next = shared.update(|s| {
            if s.generation != generation || !s.running {
                return None;
            }
            let remaining = s.remaining.saturating_sub(1);
            Some(State {
                remaining,
                running: remaining > 0,
                ..s
            })
        });

        match next {
            // Stopped or superseded by a newer run
            None => return,
            Some(state) if !state.running => {
                notify_zero(&shared, generation);
                return;
            }
            Some(_) => {}
        }
    }
}

/// Call every zero listener. A panicking listener does not stop the rest.
fn notify_zero(shared: &Shared, run: u32) {
    let listeners: Vec<ZeroListener> = match shared.listeners.lock() {
        Ok(listeners) => listeners.clone(),
        Err(_) => return,
    };

    for listener in listeners {
        if catch_unwind(AssertUnwindSafe(|| listener(run))).is_err() {
            log::warn!("countdown listener panicked");
        }
    }
}
