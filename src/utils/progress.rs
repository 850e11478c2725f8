//! Progress reporting hooks for long encode/decode runs.
//!
//! Observers are purely informational: the codec produces identical output
//! whether or not anyone is listening.

/// Receives periodic progress updates.
pub trait ProgressObserver {
    /// Called every configured interval with units done so far and the
    /// expected total (0 when the total is unknown).
    fn on_progress(&mut self, done: u64, total: u64);

    /// Called once when the run completes successfully.
    fn on_finish(&mut self, _total: u64) {}
}

/// Observer that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _done: u64, _total: u64) {}
}

impl<F: FnMut(u64, u64)> ProgressObserver for F {
    fn on_progress(&mut self, done: u64, total: u64) {
        self(done, total)
    }
}

/// Counts units of work and decides when an update is due.
///
/// The first unit always reports, then every `interval` units after that.
/// An interval of 0 disables periodic reports.
#[derive(Debug, Clone)]
pub struct ProgressTicker {
    interval: u64,
    countdown: u64,
}

impl ProgressTicker {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            countdown: 1,
        }
    }

    /// Advances by one unit; returns true when an update should be sent.
    pub fn tick(&mut self) -> bool {
        if self.interval == 0 {
            return false;
        }
        self.countdown -= 1;
        if self.countdown == 0 {
            self.countdown = self.interval;
            return true;
        }
        false
    }
}
