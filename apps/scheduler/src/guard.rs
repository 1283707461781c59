use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Allows at most one pipeline run at a time.
///
/// A trigger that finds a run in flight is skipped, never queued. The flag
/// is cleared when the [`FlightPermit`] is released or dropped, so a run
/// that errors or panics still frees the guard.
#[derive(Debug, Default, Clone)]
pub struct SingleFlightGuard {
    running: Arc<AtomicBool>,
}

impl SingleFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the guard, or returns `None` if a run is already in flight.
    pub fn try_acquire(&self) -> Option<FlightPermit> {
        self.running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| FlightPermit {
                running: Arc::clone(&self.running),
            })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Proof of holding the [`SingleFlightGuard`].
#[derive(Debug)]
#[must_use = "the guard is released as soon as the permit is dropped"]
pub struct FlightPermit {
    running: Arc<AtomicBool>,
}

impl FlightPermit {
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for FlightPermit {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
