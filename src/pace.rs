use std::{
    thread,
    time::{Duration, Instant},
};

/// Caps the frame rate by sleeping away what is left of each frame's budget
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    budget: Option<Duration>,
}
impl FramePacer {
    /// `fps == 0` disables pacing
    pub fn new(fps: u32) -> Self {
        Self {
            budget: (fps > 0).then(|| Duration::from_secs(1) / fps),
        }
    }

    #[inline]
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time left in the frame after `elapsed`, if any
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget?
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }

    /// Blocks until the frame that began at `started` has used its budget
    pub fn wait(&self, started: Instant) {
        if let Some(left) = self.remaining(started.elapsed()) {
            thread::sleep(left);
        }
    }
}
