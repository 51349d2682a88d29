//! Input abstraction layer.

pub mod mock;

/// Discrete UI events consumed by the carousel controller.
///
/// Item and dot indices are zero-based; out-of-range indices are ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    ItemClick(u16),
    DotClick(u16),
    Prev,
    Next,
    /// Explicit play/pause control (mobile only).
    PlayPause,
    HoverEnter(u16),
    HoverLeave(u16),
    TouchStart { x: i32 },
    TouchEnd { x: i32 },
    Resize { width: u16 },
    ThemeToggle,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
