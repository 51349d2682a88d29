//! Frame-driven progress clock for one carousel cycle.

use log::debug;

/// Outcome of running one scheduled frame of the clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockTick {
    /// No frame was pending (paused, completed, or never scheduled).
    Idle,
    /// Cycle still running; 0..=99.
    Progress(u8),
    /// Elapsed reached the cycle duration. Reported once per cycle.
    CycleComplete,
}

/// Tracks elapsed time toward a fixed cycle duration.
///
/// The clock never reads time on its own; every call receives the host's
/// monotonic `now_ms`. At most one frame is pending at a time, represented
/// by `frame_pending`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressClock {
    cycle_ms: u32,
    start_ms: u64,
    remaining_ms: u32,
    paused: bool,
    frame_pending: bool,
}

impl ProgressClock {
    pub const fn new(cycle_ms: u32, now_ms: u64) -> Self {
        let cycle_ms = if cycle_ms == 0 { 1 } else { cycle_ms };
        Self {
            cycle_ms,
            start_ms: now_ms,
            remaining_ms: cycle_ms,
            paused: false,
            frame_pending: false,
        }
    }

    pub const fn cycle_ms(&self) -> u32 {
        self.cycle_ms
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub const fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Restart the cycle from zero. Cancels any pending frame; the paused
    /// flag is left untouched.
    pub fn reset(&mut self, now_ms: u64) {
        self.frame_pending = false;
        self.remaining_ms = self.cycle_ms;
        self.start_ms = now_ms;
    }

    /// Request the next animation frame. Idempotent while a frame is pending.
    pub fn schedule(&mut self) {
        if !self.paused {
            self.frame_pending = true;
        }
    }

    /// Elapsed time in the current cycle, excluding paused intervals.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        if self.paused {
            return self.cycle_ms.saturating_sub(self.remaining_ms) as u64;
        }
        now_ms.saturating_sub(self.start_ms)
    }

    /// Progress clamped to 0..=100.
    pub fn progress_pct(&self, now_ms: u64) -> u8 {
        let elapsed = self.elapsed_ms(now_ms);
        ((elapsed.saturating_mul(100)) / self.cycle_ms as u64).min(100) as u8
    }

    /// Run the pending frame, if any.
    pub fn tick(&mut self, now_ms: u64) -> ClockTick {
        if !self.frame_pending {
            return ClockTick::Idle;
        }

        let pct = self.progress_pct(now_ms);
        if pct >= 100 {
            self.frame_pending = false;
            debug!(
                "carousel-clock: cycle complete cycle_ms={} elapsed_ms={}",
                self.cycle_ms,
                self.elapsed_ms(now_ms)
            );
            return ClockTick::CycleComplete;
        }

        ClockTick::Progress(pct)
    }

    /// Freeze elapsed time. Returns `false` when already paused.
    pub fn pause(&mut self, now_ms: u64) -> bool {
        if self.paused {
            return false;
        }

        let elapsed = now_ms.saturating_sub(self.start_ms);
        self.remaining_ms = (self.cycle_ms as u64).saturating_sub(elapsed) as u32;
        self.paused = true;
        self.frame_pending = false;
        debug!(
            "carousel-clock: pause elapsed_ms={} remaining_ms={}",
            elapsed, self.remaining_ms
        );
        true
    }

    /// Continue from the frozen elapsed time. Returns `false` when not paused.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if !self.paused {
            return false;
        }

        self.paused = false;
        let consumed = self.cycle_ms.saturating_sub(self.remaining_ms) as u64;
        self.start_ms = now_ms.saturating_sub(consumed);
        self.frame_pending = true;
        debug!(
            "carousel-clock: resume remaining_ms={} start_ms={}",
            self.remaining_ms, self.start_ms
        );
        true
    }

    /// Leave the paused state if needed and make sure a frame is pending.
    pub fn force_run(&mut self, now_ms: u64) {
        if !self.resume(now_ms) {
            self.schedule();
        }
    }
}
