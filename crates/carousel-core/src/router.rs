//! Maps discrete navigation inputs to a target item and clock policy.

use crate::{
    arbiter::ClockPolicy,
    layout::{ViewportMode, next_index, prev_index},
};

/// Navigation affordances that are wired up for a carousel instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Affordances {
    pub dots: bool,
    pub arrows: bool,
    pub swipe: bool,
    pub play_pause: bool,
}

impl Affordances {
    pub const ALL: Self = Self {
        dots: true,
        arrows: true,
        swipe: true,
        play_pause: true,
    };

    /// Item clicks and hover only.
    pub const BASIC: Self = Self {
        dots: false,
        arrows: false,
        swipe: false,
        play_pause: false,
    };
}

impl Default for Affordances {
    fn default() -> Self {
        Self::ALL
    }
}

/// How dot clicks behave while in mobile mode.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MobileDotPolicy {
    Ignore,
    #[default]
    Navigate,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavInput {
    ItemClick(u16),
    DotClick(u16),
    Prev,
    Next,
    /// `start_x - end_x`; positive when the finger moved left.
    Swipe { displacement_px: i32 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavAction {
    Select { target: u16, policy: ClockPolicy },
    TogglePlayPause,
    Ignore,
}

/// Carousel state a routing decision depends on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RouteContext {
    pub active: u16,
    pub count: u16,
    pub mode: ViewportMode,
    pub transitioning: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigationRouter {
    affordances: Affordances,
    mobile_dot_policy: MobileDotPolicy,
    swipe_threshold_px: u16,
}

impl NavigationRouter {
    pub const fn new(
        affordances: Affordances,
        mobile_dot_policy: MobileDotPolicy,
        swipe_threshold_px: u16,
    ) -> Self {
        Self {
            affordances,
            mobile_dot_policy,
            swipe_threshold_px,
        }
    }

    pub const fn affordances(&self) -> Affordances {
        self.affordances
    }

    pub fn route(&self, input: NavInput, ctx: RouteContext) -> NavAction {
        if ctx.transitioning {
            return NavAction::Ignore;
        }

        let count = ctx.count.max(1);
        let mobile = ctx.mode.is_mobile();
        let prev = NavAction::Select {
            target: prev_index(ctx.active, count),
            policy: ClockPolicy::ForceRun,
        };
        let next = NavAction::Select {
            target: next_index(ctx.active, count),
            policy: ClockPolicy::ForceRun,
        };

        match input {
            NavInput::ItemClick(index) if index >= count => NavAction::Ignore,
            NavInput::ItemClick(index) if index == ctx.active => {
                if mobile && self.affordances.play_pause {
                    NavAction::TogglePlayPause
                } else {
                    NavAction::Ignore
                }
            }
            NavInput::ItemClick(index) if mobile => {
                if index == prev_index(ctx.active, count) {
                    prev
                } else if index == next_index(ctx.active, count) {
                    next
                } else {
                    NavAction::Select {
                        target: index,
                        policy: ClockPolicy::Restart,
                    }
                }
            }
            NavInput::ItemClick(index) => NavAction::Select {
                target: index,
                policy: ClockPolicy::HoldPaused,
            },
            NavInput::DotClick(index) => {
                let ignored = !self.affordances.dots
                    || index >= count
                    || index == ctx.active
                    || (mobile && self.mobile_dot_policy == MobileDotPolicy::Ignore);
                if ignored {
                    NavAction::Ignore
                } else {
                    NavAction::Select {
                        target: index,
                        policy: ClockPolicy::Restart,
                    }
                }
            }
            NavInput::Prev if self.affordances.arrows => prev,
            NavInput::Next if self.affordances.arrows => next,
            NavInput::Prev | NavInput::Next => NavAction::Ignore,
            NavInput::Swipe { displacement_px } => {
                if !mobile
                    || !self.affordances.swipe
                    || displacement_px.unsigned_abs() <= self.swipe_threshold_px as u32
                {
                    NavAction::Ignore
                } else if displacement_px > 0 {
                    next
                } else {
                    prev
                }
            }
        }
    }
}

/// Records a touch start so the matching touch end yields a displacement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<i32>,
}

impl SwipeTracker {
    pub const fn new() -> Self {
        Self { start_x: None }
    }

    pub fn begin(&mut self, x: i32) {
        self.start_x = Some(x);
    }

    /// `start_x - end_x`, or `None` without a recorded start.
    pub fn end(&mut self, x: i32) -> Option<i32> {
        self.start_x.take().map(|start| start.saturating_sub(x))
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
