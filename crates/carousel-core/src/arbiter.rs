//! Running/paused arbitration over hover, explicit control, navigation, and mode.

use log::{debug, info};

use crate::{clock::ProgressClock, layout::ViewportMode};

/// Why the clock is currently paused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PauseReason {
    /// Pointer over the active item (desktop).
    Hover,
    /// Mobile play/pause control.
    Explicit,
}

/// How a manual selection affects the clock after it is reset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockPolicy {
    /// Desktop click: the pointer now rests on the new active item.
    HoldPaused,
    /// Run unless the desktop pointer already rests on the new active item.
    Restart,
    /// Run regardless of any prior pause.
    ForceRun,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InteractionArbiter {
    mode: ViewportMode,
    hovered_item: Option<u16>,
    pause_reason: Option<PauseReason>,
}

impl InteractionArbiter {
    pub const fn new(mode: ViewportMode) -> Self {
        Self {
            mode,
            hovered_item: None,
            pause_reason: None,
        }
    }

    pub const fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub const fn pause_reason(&self) -> Option<PauseReason> {
        self.pause_reason
    }

    pub const fn hovered_item(&self) -> Option<u16> {
        self.hovered_item
    }

    /// Desktop pointer rests on the active item.
    pub fn hovering_active(&self, active: u16) -> bool {
        !self.mode.is_mobile() && self.hovered_item == Some(active)
    }

    /// Returns `true` when the clock state changed.
    pub fn hover_enter(
        &mut self,
        index: u16,
        active: u16,
        clock: &mut ProgressClock,
        now_ms: u64,
    ) -> bool {
        if self.mode.is_mobile() {
            return false;
        }

        self.hovered_item = Some(index);
        if index != active {
            return false;
        }

        self.pause_with(PauseReason::Hover, clock, now_ms)
    }

    /// Returns `true` when the clock state changed.
    pub fn hover_leave(
        &mut self,
        index: u16,
        active: u16,
        clock: &mut ProgressClock,
        now_ms: u64,
    ) -> bool {
        if self.mode.is_mobile() {
            return false;
        }

        if self.hovered_item == Some(index) {
            self.hovered_item = None;
        }
        if index != active {
            return false;
        }

        self.resume(clock, now_ms)
    }

    /// Mobile play/pause control. Returns `true` when the clock state changed.
    pub fn toggle_play_pause(&mut self, clock: &mut ProgressClock, now_ms: u64) -> bool {
        if !self.mode.is_mobile() {
            return false;
        }

        if clock.is_paused() {
            self.resume(clock, now_ms)
        } else {
            self.pause_with(PauseReason::Explicit, clock, now_ms)
        }
    }

    /// Decide the clock state after an automatic advance reset it.
    pub fn after_auto_advance(&mut self, active: u16, clock: &mut ProgressClock, now_ms: u64) {
        if self.hovering_active(active) {
            self.pause_with(PauseReason::Hover, clock, now_ms);
        } else {
            clock.schedule();
        }
    }

    /// Decide the clock state after a manual selection reset it.
    pub fn after_manual_select(
        &mut self,
        policy: ClockPolicy,
        active: u16,
        clock: &mut ProgressClock,
        now_ms: u64,
    ) {
        match policy {
            ClockPolicy::HoldPaused if !self.mode.is_mobile() => {
                self.hovered_item = Some(active);
                self.pause_with(PauseReason::Hover, clock, now_ms);
                // The pointer now owns the pause, even one carried over from mobile.
                self.pause_reason = Some(PauseReason::Hover);
            }
            ClockPolicy::Restart | ClockPolicy::HoldPaused if self.hovering_active(active) => {
                self.pause_with(PauseReason::Hover, clock, now_ms);
                self.pause_reason = Some(PauseReason::Hover);
            }
            ClockPolicy::HoldPaused | ClockPolicy::Restart | ClockPolicy::ForceRun => {
                self.pause_reason = None;
                clock.force_run(now_ms);
            }
        }
    }

    /// Apply a viewport mode change. Returns `false` when the mode is unchanged.
    pub fn switch_mode(&mut self, mode: ViewportMode, clock: &mut ProgressClock, now_ms: u64) -> bool {
        if mode == self.mode {
            return false;
        }

        info!("carousel-mode: switch from={:?} to={:?}", self.mode, mode);
        self.mode = mode;

        if mode.is_mobile() {
            self.hovered_item = None;
            if self.pause_reason != Some(PauseReason::Explicit) {
                self.resume(clock, now_ms);
            }
        }
        true
    }

    fn pause_with(&mut self, reason: PauseReason, clock: &mut ProgressClock, now_ms: u64) -> bool {
        if !clock.pause(now_ms) {
            return false;
        }
        debug!("carousel-clock: paused reason={:?}", reason);
        self.pause_reason = Some(reason);
        true
    }

    fn resume(&mut self, clock: &mut ProgressClock, now_ms: u64) -> bool {
        self.pause_reason = None;
        clock.resume(now_ms)
    }
}
