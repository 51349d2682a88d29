//! Active-item selection with a transition lock.

use log::debug;

use crate::{
    layout::{ViewportMode, card_placement},
    render::{CarouselView, EntranceAnimator},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectOutcome {
    Switched,
    /// A card transition is still settling; nothing changed.
    Rejected,
}

/// Holds the active index among a fixed, non-empty set of items.
pub struct ActiveSelector<H> {
    count: u16,
    active: u16,
    transition_ms: u16,
    transition_until_ms: Option<u64>,
    entrance: Option<H>,
}

impl<H> ActiveSelector<H> {
    pub fn new(count: u16, transition_ms: u16) -> Self {
        Self {
            count: count.max(1),
            active: 0,
            transition_ms,
            transition_until_ms: None,
            entrance: None,
        }
    }

    pub const fn count(&self) -> u16 {
        self.count
    }

    pub const fn active(&self) -> u16 {
        self.active
    }

    pub fn contains(&self, index: u16) -> bool {
        index < self.count
    }

    pub fn is_transitioning(&self, now_ms: u64) -> bool {
        self.transition_until_ms
            .is_some_and(|until_ms| now_ms < until_ms)
    }

    /// Make `index` the active item and replay its entrance animation.
    ///
    /// On mobile the card layout is re-applied; an animated layout holds the
    /// transition lock for the configured settle time.
    pub fn set_active<V, A>(
        &mut self,
        index: u16,
        animate: bool,
        mode: ViewportMode,
        now_ms: u64,
        view: &mut V,
        animator: &mut A,
    ) -> SelectOutcome
    where
        V: CarouselView,
        A: EntranceAnimator<Handle = H>,
    {
        if self.is_transitioning(now_ms) {
            debug!(
                "carousel-nav: select rejected target={} active={} reason=transitioning",
                index, self.active
            );
            return SelectOutcome::Rejected;
        }

        let index = index.min(self.count - 1);
        for item in 0..self.count {
            view.set_item_active(item, false);
            view.set_indicator_active(item, false);
        }

        if let Some(handle) = self.entrance.take() {
            animator.revert(handle);
        }

        view.set_item_active(index, true);
        view.set_indicator_active(index, true);
        debug!(
            "carousel-nav: select previous={} active={} animate={} mode={:?}",
            self.active, index, animate, mode
        );
        self.active = index;

        if mode.is_mobile() {
            self.apply_card_layout(animate, now_ms, view);
        }

        self.entrance = animator.play(index);
        SelectOutcome::Switched
    }

    /// Position every card around the active one.
    pub fn apply_card_layout<V: CarouselView>(&mut self, animate: bool, now_ms: u64, view: &mut V) {
        for item in 0..self.count {
            view.set_card_placement(item, card_placement(item, self.active, self.count), animate);
        }

        self.transition_until_ms =
            animate.then(|| now_ms.saturating_add(self.transition_ms as u64));
    }

    /// Drop every mobile placement and release the transition lock.
    pub fn clear_card_layout<V: CarouselView>(&mut self, view: &mut V) {
        for item in 0..self.count {
            view.clear_card_placement(item);
        }
        self.transition_until_ms = None;
    }
}
