//! Single-line terminal rendering of the carousel view state.

use core::fmt::Write as _;
use std::io::{self, Write};

use carousel_core::{
    render::{CardPlacement, CarouselView, PlayPauseIcon},
    settings::Theme,
};

const PROGRESS_CELLS: usize = 20;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct ItemState {
    active: bool,
    indicator: bool,
    placement: Option<CardPlacement>,
}

/// Keeps the last state pushed by the controller and prints it on flush.
///
/// Progress-only changes rewrite the current line; anything else starts a
/// new line so the history of switches stays visible.
#[derive(Debug)]
pub struct TerminalView {
    items: Vec<ItemState>,
    progress_pct: u8,
    icon: PlayPauseIcon,
    theme: Theme,
    structural_dirty: bool,
    progress_dirty: bool,
}

impl TerminalView {
    pub fn new(item_count: u16) -> Self {
        Self {
            items: vec![ItemState::default(); item_count.max(1) as usize],
            progress_pct: 0,
            icon: PlayPauseIcon::Pause,
            theme: Theme::default(),
            structural_dirty: true,
            progress_dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.structural_dirty || self.progress_dirty
    }

    pub fn status_line(&self) -> String {
        let mut line = String::with_capacity(96);
        let _ = write!(line, "[{}] ", self.theme.as_str());

        for (index, item) in self.items.iter().enumerate() {
            let marker = if item.active { '*' } else { ' ' };
            match item.placement {
                Some(placement) if placement.opacity_pct == 0 => {
                    let _ = write!(line, "({marker}{index}) ");
                }
                _ => {
                    let _ = write!(line, "[{marker}{index}] ");
                }
            }
        }

        for item in &self.items {
            line.push(if item.indicator { '●' } else { '○' });
        }

        let filled = self.progress_pct as usize * PROGRESS_CELLS / 100;
        line.push_str(" |");
        for cell in 0..PROGRESS_CELLS {
            line.push(if cell < filled { '#' } else { '-' });
        }
        let icon = match self.icon {
            PlayPauseIcon::Play => "paused",
            PlayPauseIcon::Pause => "playing",
        };
        let _ = write!(line, "| {:>3}% {}", self.progress_pct, icon);
        line
    }

    pub fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.is_dirty() {
            return Ok(());
        }

        let line = self.status_line();
        if self.structural_dirty {
            write!(out, "\n{line}")?;
        } else {
            write!(out, "\r{line}")?;
        }
        out.flush()?;

        self.structural_dirty = false;
        self.progress_dirty = false;
        Ok(())
    }

    fn item_mut(&mut self, index: u16) -> Option<&mut ItemState> {
        self.items.get_mut(index as usize)
    }
}

impl CarouselView for TerminalView {
    fn set_item_active(&mut self, index: u16, active: bool) {
        if let Some(item) = self.item_mut(index) {
            item.active = active;
            self.structural_dirty = true;
        }
    }

    fn set_indicator_active(&mut self, index: u16, active: bool) {
        if let Some(item) = self.item_mut(index) {
            item.indicator = active;
            self.structural_dirty = true;
        }
    }

    fn set_progress(&mut self, pct: u8) {
        self.progress_pct = pct.min(100);
        self.progress_dirty = true;
    }

    fn set_play_pause(&mut self, icon: PlayPauseIcon) {
        self.icon = icon;
        self.structural_dirty = true;
    }

    fn set_card_placement(&mut self, index: u16, placement: CardPlacement, _animate: bool) {
        if let Some(item) = self.item_mut(index) {
            item.placement = Some(placement);
            self.structural_dirty = true;
        }
    }

    fn clear_card_placement(&mut self, index: u16) {
        if let Some(item) = self.item_mut(index) {
            item.placement = None;
            self.structural_dirty = true;
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.structural_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_active_item_dots_and_progress() {
        let mut view = TerminalView::new(3);
        view.set_item_active(1, true);
        view.set_indicator_active(1, true);
        view.set_progress(50);

        assert_eq!(
            view.status_line(),
            "[dark] [ 0] [*1] [ 2] ○●○ |##########----------|  50% playing"
        );
    }

    #[test]
    fn progress_only_updates_rewrite_the_line() {
        let mut view = TerminalView::new(2);
        let mut out = Vec::new();
        view.flush(&mut out).unwrap();
        assert!(out.starts_with(b"\n"));

        out.clear();
        view.set_progress(10);
        view.flush(&mut out).unwrap();
        assert!(out.starts_with(b"\r"));

        out.clear();
        view.flush(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn hidden_cards_are_bracketed_differently() {
        let mut view = TerminalView::new(2);
        view.set_theme(Theme::Light);
        view.set_play_pause(PlayPauseIcon::Play);
        view.set_card_placement(
            1,
            CardPlacement {
                translate_x_pct: 150,
                scale_pct: 75,
                opacity_pct: 0,
                z_index: 1,
            },
            false,
        );

        let line = view.status_line();
        assert!(line.starts_with("[light] [ 0] ( 1) "));
        assert!(line.ends_with("paused"));
    }
}
