//! Entrance animator that records instances in the log.

use carousel_core::render::EntranceAnimator;
use log::debug;

/// Identifies one started entrance animation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntranceHandle {
    pub id: u32,
    pub index: u16,
}

/// Stand-in for a line-split reveal effect; it only tracks which instance
/// is live so reverts can be observed.
#[derive(Debug, Default)]
pub struct LogAnimator {
    next_id: u32,
    live: Option<EntranceHandle>,
}

impl LogAnimator {
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            live: None,
        }
    }

    pub fn live(&self) -> Option<EntranceHandle> {
        self.live
    }
}

impl EntranceAnimator for LogAnimator {
    type Handle = EntranceHandle;

    fn play(&mut self, index: u16) -> Option<EntranceHandle> {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = EntranceHandle {
            id: self.next_id,
            index,
        };
        debug!("entrance: play item={} instance={}", index, handle.id);
        self.live = Some(handle);
        Some(handle)
    }

    fn revert(&mut self, handle: EntranceHandle) {
        debug!(
            "entrance: revert item={} instance={}",
            handle.index, handle.id
        );
        if self.live == Some(handle) {
            self.live = None;
        }
    }
}
