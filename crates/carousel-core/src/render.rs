//! View handles and presentation values.

use crate::settings::Theme;

/// Icon shown by the mobile play/pause control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayPauseIcon {
    /// Shown while paused.
    Play,
    /// Shown while running.
    Pause,
}

/// Placement of one card in the mobile card layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CardPlacement {
    /// Horizontal translation as a percentage of the card width.
    pub translate_x_pct: i16,
    /// 0..=100
    pub scale_pct: u8,
    /// 0..=100
    pub opacity_pct: u8,
    pub z_index: u8,
}

/// Presentation layer consumed by the controller.
///
/// Items and indicator dots are addressed by index; implementations map
/// indices to whatever handles they render.
pub trait CarouselView {
    fn set_item_active(&mut self, index: u16, active: bool);
    fn set_indicator_active(&mut self, index: u16, active: bool);
    /// 0..=100
    fn set_progress(&mut self, pct: u8);
    fn set_play_pause(&mut self, icon: PlayPauseIcon);
    fn set_card_placement(&mut self, index: u16, placement: CardPlacement, animate: bool);
    fn clear_card_placement(&mut self, index: u16);
    fn set_theme(&mut self, theme: Theme);
}

/// Decorative entrance effect played when an item becomes active.
///
/// `play` is fire-and-forget; the returned handle is only used to revert
/// the instance before the next one starts.
pub trait EntranceAnimator {
    type Handle;

    fn play(&mut self, index: u16) -> Option<Self::Handle>;
    fn revert(&mut self, handle: Self::Handle);
}
