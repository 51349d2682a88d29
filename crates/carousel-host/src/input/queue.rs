//! Event queue shared between the command reader thread and the frame loop.

use core::{
    cell::RefCell,
    sync::atomic::{AtomicBool, AtomicU32, Ordering},
};

use carousel_core::input::{InputEvent, InputProvider};
use critical_section::Mutex;
use heapless::Deque;

pub const INPUT_QUEUE_DEPTH: usize = 32;

pub struct InputQueue {
    events: Mutex<RefCell<Deque<InputEvent, INPUT_QUEUE_DEPTH>>>,
    dropped: AtomicU32,
    quit: AtomicBool,
}

impl InputQueue {
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(RefCell::new(Deque::new())),
            dropped: AtomicU32::new(0),
            quit: AtomicBool::new(false),
        }
    }

    /// Returns `false` and counts a drop when the queue is full.
    pub fn push(&self, event: InputEvent) -> bool {
        let accepted = critical_section::with(|cs| {
            self.events.borrow_ref_mut(cs).push_back(event).is_ok()
        });
        if !accepted {
            self.dropped.fetch_add(1, Ordering::AcqRel);
        }
        accepted
    }

    pub fn pop(&self) -> Option<InputEvent> {
        critical_section::with(|cs| self.events.borrow_ref_mut(cs).pop_front())
    }

    /// Events rejected since the previous call.
    pub fn take_dropped(&self) -> u32 {
        self.dropped.swap(0, Ordering::AcqRel)
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Release);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// [`InputProvider`] draining a shared [`InputQueue`].
#[derive(Clone, Copy)]
pub struct QueuedInput<'a> {
    queue: &'a InputQueue,
}

impl<'a> QueuedInput<'a> {
    pub const fn new(queue: &'a InputQueue) -> Self {
        Self { queue }
    }
}

impl InputProvider for QueuedInput<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.queue.pop())
    }
}
