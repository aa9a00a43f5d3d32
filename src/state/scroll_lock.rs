//! Scroll suppression while a drag is in progress.
//!
//! A drag on the phone should not also scroll whatever is underneath it.
//! Instead of flipping some global flag, the machine is handed a `ScrollLock`
//! and acquires it for exactly the lifetime of a gesture session.

/// Capability to suppress background scrolling.
pub trait ScrollLock {
    /// Called when a gesture session starts.
    fn acquire(&mut self);

    /// Called when a gesture session ends, whether or not it fired a transition.
    fn release(&mut self);
}

/// A lock that does nothing, for hosts with nothing to scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoScrollLock;

impl ScrollLock for NoScrollLock {
    fn acquire(&mut self) {}

    fn release(&mut self) {}
}

/// A lock that remembers whether it is held.
///
/// The TUI checks `is_held` before scrolling app content with the mouse wheel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLatch {
    held: bool,
    acquisitions: u32,
}

impl ScrollLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Number of times the latch has been acquired.
    pub fn acquisitions(&self) -> u32 {
        self.acquisitions
    }
}

impl ScrollLock for ScrollLatch {
    fn acquire(&mut self) {
        self.held = true;
        self.acquisitions += 1;
    }

    fn release(&mut self) {
        self.held = false;
    }
}
