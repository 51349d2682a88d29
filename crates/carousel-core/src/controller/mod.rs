//! Carousel controller composing clock, selector, arbiter, and router.

use log::{debug, info, warn};

use crate::{
    arbiter::InteractionArbiter,
    clock::{ClockTick, ProgressClock},
    input::{InputEvent, InputProvider},
    layout::{ViewportMode, next_index},
    render::{CarouselView, EntranceAnimator, PlayPauseIcon},
    router::{
        Affordances, MobileDotPolicy, NavAction, NavInput, NavigationRouter, RouteContext,
        SwipeTracker,
    },
    selector::{ActiveSelector, SelectOutcome},
    settings::{PersistedSettings, Theme},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CarouselConfig {
    pub item_count: u16,
    pub cycle_ms: u32,
    pub mobile_breakpoint_px: u16,
    pub swipe_threshold_px: u16,
    pub card_transition_ms: u16,
    pub affordances: Affordances,
    pub mobile_dot_policy: MobileDotPolicy,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_count: 4,
            cycle_ms: 3_000,
            mobile_breakpoint_px: 1_024,
            swipe_threshold_px: 50,
            card_transition_ms: 600,
            affordances: Affordances::ALL,
            mobile_dot_policy: MobileDotPolicy::Navigate,
        }
    }
}

pub struct CarouselController<V, A, IN>
where
    V: CarouselView,
    A: EntranceAnimator,
    IN: InputProvider,
{
    view: V,
    animator: A,
    input: IN,
    config: CarouselConfig,
    clock: ProgressClock,
    selector: ActiveSelector<A::Handle>,
    arbiter: InteractionArbiter,
    router: NavigationRouter,
    swipe: SwipeTracker,
    theme: Theme,
    pending_redraw: bool,
    last_progress_pct: Option<u8>,
    last_icon: Option<PlayPauseIcon>,
    cycles_since_drain: u32,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");

#[cfg(test)]
mod tests;
