//! Viewport modes, wrap-around index arithmetic, and the mobile card layout.

use crate::render::CardPlacement;

/// Interaction rules in effect, derived from the viewport width.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    /// Widths at or below `breakpoint_px` are mobile.
    pub const fn for_width(width_px: u16, breakpoint_px: u16) -> Self {
        if width_px <= breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

pub fn next_index(current: u16, total: u16) -> u16 {
    if total == 0 { 0 } else { (current + 1) % total }
}

pub fn prev_index(current: u16, total: u16) -> u16 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

const ACTIVE_CARD: CardPlacement = CardPlacement {
    translate_x_pct: -50,
    scale_pct: 100,
    opacity_pct: 100,
    z_index: 10,
};
const PREV_CARD: CardPlacement = CardPlacement {
    translate_x_pct: -150,
    scale_pct: 85,
    opacity_pct: 80,
    z_index: 5,
};
const NEXT_CARD: CardPlacement = CardPlacement {
    translate_x_pct: 50,
    scale_pct: 85,
    opacity_pct: 80,
    z_index: 5,
};
const HIDDEN_SCALE_PCT: u8 = 75;

/// Placement of `index` when `active` is centred among `total` cards.
pub fn card_placement(index: u16, active: u16, total: u16) -> CardPlacement {
    let prev = prev_index(active, total);
    let next = next_index(active, total);

    if index == active {
        return ACTIVE_CARD;
    }
    if index == prev {
        return PREV_CARD;
    }
    if index == next {
        return NEXT_CARD;
    }

    let translate_x_pct = if index < active {
        if index < prev { -150 } else { -120 }
    } else if index > next {
        150
    } else {
        120
    };

    CardPlacement {
        translate_x_pct,
        scale_pct: HIDDEN_SCALE_PCT,
        opacity_pct: 0,
        z_index: 1,
    }
}
