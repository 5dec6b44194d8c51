//! Modal lifecycle phase machine
//!
//! A two-step delayed-transition sequencer: the modal mounts invisible,
//! becomes visible on the next tick, and on close plays an exit phase before
//! the parent is allowed to unmount it. Purely cosmetic timing, independent
//! of form and submission state; a tick that never comes leaves the modal
//! open rather than crashing anything.

use std::time::{Duration, Instant};

/// Enter delay: effectively "next tick"
pub const ENTER_DELAY: Duration = Duration::from_millis(1);

/// Exit animation duration before the parent may unmount
pub const CLOSE_DELAY: Duration = Duration::from_millis(500);

/// Lifecycle phase of one modal instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Entering,
    Visible,
    Closing,
    Closed,
}

/// Time-driven phase machine, advanced by the application tick
#[derive(Debug)]
pub struct ModalLifecycle {
    phase: ModalPhase,
    deadline: Option<Instant>,
    close_delay: Duration,
}

impl ModalLifecycle {
    /// Start a new lifecycle in the Entering phase
    pub fn new(now: Instant) -> Self {
        Self::with_delays(now, ENTER_DELAY, CLOSE_DELAY)
    }

    /// Lifecycle with injectable delays, for tests
    pub fn with_delays(now: Instant, enter_delay: Duration, close_delay: Duration) -> Self {
        Self {
            phase: ModalPhase::Entering,
            deadline: Some(now + enter_delay),
            close_delay,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Fully opaque and interactive
    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Visible
    }

    /// Whether the exit sequence has begun
    pub fn is_closing(&self) -> bool {
        matches!(self.phase, ModalPhase::Closing | ModalPhase::Closed)
    }

    /// Whether input and async results may still mutate this instance
    pub fn accepts_updates(&self) -> bool {
        matches!(self.phase, ModalPhase::Entering | ModalPhase::Visible)
    }

    /// Begin the exit sequence
    ///
    /// Idempotent: a second request never extends or replaces the pending
    /// deadline, and a close after Closed is a no-op.
    pub fn request_close(&mut self, now: Instant) {
        if self.is_closing() {
            return;
        }
        self.phase = ModalPhase::Closing;
        self.deadline = Some(now + self.close_delay);
    }

    /// Advance past any due deadline
    ///
    /// Returns true exactly once, on the tick where the phase reaches
    /// Closed; the parent then unmounts the instance.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match self.deadline {
            Some(deadline) => now >= deadline,
            None => return false,
        };
        if !due {
            return false;
        }

        self.deadline = None;
        match self.phase {
            ModalPhase::Entering => {
                self.phase = ModalPhase::Visible;
                false
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Closed;
                true
            }
            ModalPhase::Visible | ModalPhase::Closed => false,
        }
    }
}
